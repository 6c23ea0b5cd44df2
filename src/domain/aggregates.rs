// Aggregate row models - one struct per summary view
use rust_decimal::Decimal;
use serde::Serialize;

/// Revenue summed per state, with one representative map coordinate
/// (first occurrence of the state in the input).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRevenue {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub revenue: Decimal,
}

/// Revenue summed per calendar-month bucket, chronological.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    /// Three-letter month abbreviation for chart axes ("Jan", "Feb", ...).
    pub month_label: &'static str,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub month_label: &'static str,
    pub count: u64,
}

/// A `StateCount` row with a fresh 1-based position, used by the top-5 view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStateCount {
    pub position: usize,
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Revenue and sales count per salesperson, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerStats {
    pub name: String,
    pub revenue: Decimal,
    pub count: u64,
}
