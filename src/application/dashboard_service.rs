// Dashboard service - Use case for one render cycle
use crate::application::aggregation;
use crate::application::record_filter;
use crate::application::sales_source::SalesSource;
use crate::domain::dashboard::{
    Dashboard, Metrics, RevenueTab, SalesCountTab, SalespeopleTab,
};
use crate::domain::format::format_magnitude;
use crate::domain::record::FilterCriteria;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Bounds for the user-selected "how many top sellers" chart size.
pub const MIN_TOP_SELLERS: usize = 2;
pub const MAX_TOP_SELLERS: usize = 10;
pub const DEFAULT_TOP_SELLERS: usize = 5;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn SalesSource>,
    currency_prefix: String,
}

impl DashboardService {
    pub fn new(source: Arc<dyn SalesSource>, currency_prefix: String) -> Self {
        Self {
            source,
            currency_prefix,
        }
    }

    /// Fetch, filter and aggregate one dashboard. Acquisition failures are
    /// fatal; an empty filtered set renders zero metrics and empty tables.
    pub async fn render(
        &self,
        criteria: &FilterCriteria,
        top_sellers: usize,
    ) -> anyhow::Result<Dashboard> {
        // The source pre-filters by region and year; the remote API's query
        // contract expects lowercase region names.
        let region_param = criteria
            .region
            .as_deref()
            .map(|r| r.to_lowercase())
            .unwrap_or_default();
        let year_param = criteria.year.map(|y| y.to_string()).unwrap_or_default();

        let records = self.source.fetch_records(&region_param, &year_param).await?;
        let records = record_filter::apply(&records, criteria);
        tracing::debug!("Rendering dashboard over {} filtered records", records.len());

        let total_revenue: Decimal = records.iter().map(|r| r.price).sum();
        let metrics = Metrics {
            total_revenue: format_magnitude(
                total_revenue.to_f64().unwrap_or(0.0),
                &self.currency_prefix,
            ),
            total_sales: format_magnitude(records.len() as f64, ""),
        };

        let by_state = aggregation::revenue_by_state(&records);
        let top_revenue_states = by_state.iter().take(aggregation::TOP_STATES).cloned().collect();
        let revenue = RevenueTab {
            monthly: aggregation::revenue_by_month(&records),
            by_category: aggregation::revenue_by_category(&records),
            top_states: top_revenue_states,
            by_state,
        };

        let sales_count = SalesCountTab {
            by_state: aggregation::count_by_state(&records),
            monthly: aggregation::count_by_month(&records),
            by_category: aggregation::count_by_category(&records),
            top_states: aggregation::top_states_by_count(&records),
        };

        let top_n = top_sellers.clamp(MIN_TOP_SELLERS, MAX_TOP_SELLERS);
        let sellers = aggregation::per_salesperson(&records);
        let salespeople = SalespeopleTab {
            top_n,
            by_revenue: aggregation::top_sellers_by_revenue(&sellers, top_n),
            by_count: aggregation::top_sellers_by_count(&sellers, top_n),
        };

        let title = Self::title(criteria);
        Ok(Dashboard::new(title, metrics, revenue, sales_count, salespeople))
    }

    fn title(criteria: &FilterCriteria) -> String {
        let region = criteria.region.as_deref().unwrap_or("all regions");
        match criteria.year {
            Some(year) => format!("Sales Dashboard ({}, {})", region, year),
            None => format!("Sales Dashboard ({}, all years)", region),
        }
    }
}
