// Dashboard payload model - what one render cycle hands to the front-end
use super::aggregates::{
    CategoryCount, CategoryRevenue, MonthlyCount, MonthlyRevenue, RankedStateCount, SellerStats,
    StateCount, StateRevenue,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub metrics: Metrics,
    pub revenue: RevenueTab,
    pub sales_count: SalesCountTab,
    pub salespeople: SalespeopleTab,
}

/// Headline callouts, pre-formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub total_revenue: String,
    pub total_sales: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueTab {
    /// Bubble-map rows, size-encoded by revenue.
    pub by_state: Vec<StateRevenue>,
    /// Line-chart rows, one line per year with month on the x-axis.
    pub monthly: Vec<MonthlyRevenue>,
    pub by_category: Vec<CategoryRevenue>,
    /// Bar-chart rows: the five highest-revenue states.
    pub top_states: Vec<StateRevenue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalesCountTab {
    pub by_state: Vec<StateCount>,
    pub monthly: Vec<MonthlyCount>,
    pub by_category: Vec<CategoryCount>,
    pub top_states: Vec<RankedStateCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalespeopleTab {
    /// How many top sellers the charts show (user-selected, 2..=10).
    pub top_n: usize,
    pub by_revenue: Vec<SellerStats>,
    pub by_count: Vec<SellerStats>,
}

impl Dashboard {
    pub fn new(
        title: String,
        metrics: Metrics,
        revenue: RevenueTab,
        sales_count: SalesCountTab,
        salespeople: SalespeopleTab,
    ) -> Self {
        Self {
            title,
            metrics,
            revenue,
            sales_count,
            salespeople,
        }
    }
}
