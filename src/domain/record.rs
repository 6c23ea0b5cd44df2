// Sales record domain models
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub purchase_date: NaiveDate,
    pub price: Decimal,
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub category: String,
    pub salesperson: String,
}

impl SalesRecord {
    pub fn new(
        purchase_date: NaiveDate,
        price: Decimal,
        state: String,
        lat: f64,
        lon: f64,
        category: String,
        salesperson: String,
    ) -> Self {
        Self {
            purchase_date,
            price,
            state,
            lat,
            lon,
            category,
            salesperson,
        }
    }

    pub fn year(&self) -> i32 {
        self.purchase_date.year()
    }

    pub fn month(&self) -> u32 {
        self.purchase_date.month()
    }
}

/// Filter selection for one render cycle. Built once from request input,
/// never mutated afterwards. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub region: Option<String>,
    pub year: Option<i32>,
    pub salespeople: HashSet<String>,
}

impl FilterCriteria {
    pub fn new(region: Option<String>, year: Option<i32>, salespeople: HashSet<String>) -> Self {
        Self {
            region,
            year,
            salespeople,
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        if let Some(region) = &self.region {
            if !record.state.eq_ignore_ascii_case(region) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if record.year() != year {
                return false;
            }
        }
        if !self.salespeople.is_empty() && !self.salespeople.contains(&record.salesperson) {
            return false;
        }
        true
    }
}
