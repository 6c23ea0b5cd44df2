// Domain layer - Core business models
pub mod aggregates;
pub mod dashboard;
pub mod format;
pub mod record;
