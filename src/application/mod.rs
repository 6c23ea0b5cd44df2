// Application layer - Use cases and the transformation pipeline
pub mod aggregation;
pub mod dashboard_service;
pub mod record_filter;
pub mod sales_source;
