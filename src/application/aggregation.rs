// Aggregation engine - pure summary views over a filtered record set
//
// Every function takes the same immutable slice and returns a fresh ordered
// sequence. Grouping preserves key encounter order, and all sorts are stable,
// so ties keep that order. Revenue accumulates in Decimal.
use crate::domain::aggregates::{
    CategoryCount, CategoryRevenue, MonthlyCount, MonthlyRevenue, RankedStateCount, SellerStats,
    StateCount, StateRevenue,
};
use crate::domain::record::SalesRecord;
use rust_decimal::Decimal;
use std::collections::HashMap;

pub const TOP_STATES: usize = 5;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_label(month: u32) -> &'static str {
    MONTH_LABELS[(month as usize - 1) % 12]
}

/// Group by state, summing price. Each state carries the coordinates of its
/// first occurrence. Descending by revenue.
pub fn revenue_by_state(records: &[SalesRecord]) -> Vec<StateRevenue> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<StateRevenue> = Vec::new();

    for record in records {
        match index.get(record.state.as_str()) {
            Some(&i) => rows[i].revenue += record.price,
            None => {
                index.insert(&record.state, rows.len());
                rows.push(StateRevenue {
                    state: record.state.clone(),
                    lat: record.lat,
                    lon: record.lon,
                    revenue: record.price,
                });
            }
        }
    }

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows
}

/// Bucket by calendar month (date truncated to its containing month),
/// summing price. Chronological by bucket start, not by value.
pub fn revenue_by_month(records: &[SalesRecord]) -> Vec<MonthlyRevenue> {
    let mut buckets: HashMap<(i32, u32), Decimal> = HashMap::new();
    for record in records {
        *buckets
            .entry((record.year(), record.month()))
            .or_insert(Decimal::ZERO) += record.price;
    }

    let mut rows: Vec<MonthlyRevenue> = buckets
        .into_iter()
        .map(|((year, month), revenue)| MonthlyRevenue {
            year,
            month,
            month_label: month_label(month),
            revenue,
        })
        .collect();
    rows.sort_by_key(|row| (row.year, row.month));
    rows
}

/// Group by product category, summing price. Descending by revenue.
pub fn revenue_by_category(records: &[SalesRecord]) -> Vec<CategoryRevenue> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CategoryRevenue> = Vec::new();

    for record in records {
        match index.get(record.category.as_str()) {
            Some(&i) => rows[i].revenue += record.price,
            None => {
                index.insert(&record.category, rows.len());
                rows.push(CategoryRevenue {
                    category: record.category.clone(),
                    revenue: record.price,
                });
            }
        }
    }

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows
}

/// Group by state, counting records, with the same representative
/// coordinates as `revenue_by_state`. Descending by count.
pub fn count_by_state(records: &[SalesRecord]) -> Vec<StateCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<StateCount> = Vec::new();

    for record in records {
        match index.get(record.state.as_str()) {
            Some(&i) => rows[i].count += 1,
            None => {
                index.insert(&record.state, rows.len());
                rows.push(StateCount {
                    state: record.state.clone(),
                    lat: record.lat,
                    lon: record.lon,
                    count: 1,
                });
            }
        }
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Same bucketing as `revenue_by_month`, counting records. Chronological.
pub fn count_by_month(records: &[SalesRecord]) -> Vec<MonthlyCount> {
    let mut buckets: HashMap<(i32, u32), u64> = HashMap::new();
    for record in records {
        *buckets.entry((record.year(), record.month())).or_insert(0) += 1;
    }

    let mut rows: Vec<MonthlyCount> = buckets
        .into_iter()
        .map(|((year, month), count)| MonthlyCount {
            year,
            month,
            month_label: month_label(month),
            count,
        })
        .collect();
    rows.sort_by_key(|row| (row.year, row.month));
    rows
}

/// The five highest-count states, re-ranked with a fresh 1-based position.
pub fn top_states_by_count(records: &[SalesRecord]) -> Vec<RankedStateCount> {
    let mut rows = count_by_state(records);
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(TOP_STATES);
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| RankedStateCount {
            position: i + 1,
            state: row.state,
            lat: row.lat,
            lon: row.lon,
            count: row.count,
        })
        .collect()
}

/// Group by product category, counting records. Descending by count.
pub fn count_by_category(records: &[SalesRecord]) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CategoryCount> = Vec::new();

    for record in records {
        match index.get(record.category.as_str()) {
            Some(&i) => rows[i].count += 1,
            None => {
                index.insert(&record.category, rows.len());
                rows.push(CategoryCount {
                    category: record.category.clone(),
                    count: 1,
                });
            }
        }
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Revenue sum and sales count per salesperson in a single pass, emitted in
/// encounter order. Callers rank with `top_sellers_by_revenue`/`_by_count`.
pub fn per_salesperson(records: &[SalesRecord]) -> Vec<SellerStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<SellerStats> = Vec::new();

    for record in records {
        match index.get(record.salesperson.as_str()) {
            Some(&i) => {
                rows[i].revenue += record.price;
                rows[i].count += 1;
            }
            None => {
                index.insert(&record.salesperson, rows.len());
                rows.push(SellerStats {
                    name: record.salesperson.clone(),
                    revenue: record.price,
                    count: 1,
                });
            }
        }
    }

    rows
}

/// The `n` highest-revenue sellers, descending. `n` is the chart's
/// user-selected size, already clamped to 2..=10 by the caller.
pub fn top_sellers_by_revenue(sellers: &[SellerStats], n: usize) -> Vec<SellerStats> {
    let mut ranked = sellers.to_vec();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranked.truncate(n);
    ranked
}

/// The `n` highest-count sellers, descending.
pub fn top_sellers_by_count(sellers: &[SellerStats], n: usize) -> Vec<SellerStats> {
    let mut ranked = sellers.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(price: Decimal, state: &str, ymd: (i32, u32, u32)) -> SalesRecord {
        SalesRecord::new(
            NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            price,
            state.to_string(),
            -23.5,
            -46.6,
            "electronics".to_string(),
            "Ana".to_string(),
        )
    }

    fn scenario() -> Vec<SalesRecord> {
        vec![
            record(dec!(100), "SP", (2023, 1, 5)),
            record(dec!(200), "SP", (2023, 1, 20)),
            record(dec!(50), "RJ", (2023, 2, 3)),
        ]
    }

    #[test]
    fn revenue_by_state_sums_and_sorts_descending() {
        let rows = revenue_by_state(&scenario());
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].state.as_str(), rows[0].revenue), ("SP", dec!(300)));
        assert_eq!((rows[1].state.as_str(), rows[1].revenue), ("RJ", dec!(50)));
    }

    #[test]
    fn revenue_by_state_conserves_total() {
        let records = scenario();
        let total: Decimal = records.iter().map(|r| r.price).sum();
        let aggregated: Decimal = revenue_by_state(&records).iter().map(|r| r.revenue).sum();
        assert_eq!(aggregated, total);
    }

    #[test]
    fn state_rows_keep_first_occurrence_coordinates() {
        let mut records = scenario();
        records[1].lat = 99.0; // later SP row with different coords
        let rows = revenue_by_state(&records);
        assert_eq!(rows[0].lat, -23.5);
    }

    #[test]
    fn revenue_by_month_is_chronological_with_labels() {
        let rows = revenue_by_month(&scenario());
        assert_eq!(rows.len(), 2);
        assert_eq!(
            (rows[0].month_label, rows[0].year, rows[0].revenue),
            ("Jan", 2023, dec!(300))
        );
        assert_eq!(
            (rows[1].month_label, rows[1].year, rows[1].revenue),
            ("Feb", 2023, dec!(50))
        );
    }

    #[test]
    fn month_buckets_order_across_years() {
        let records = vec![
            record(dec!(10), "SP", (2023, 1, 1)),
            record(dec!(20), "SP", (2022, 12, 31)),
        ];
        let rows = revenue_by_month(&records);
        assert_eq!((rows[0].year, rows[0].month), (2022, 12));
        assert_eq!((rows[1].year, rows[1].month), (2023, 1));
    }

    #[test]
    fn count_by_state_counts_and_sorts() {
        let rows = count_by_state(&scenario());
        assert_eq!((rows[0].state.as_str(), rows[0].count), ("SP", 2));
        assert_eq!((rows[1].state.as_str(), rows[1].count), ("RJ", 1));
    }

    #[test]
    fn equal_counts_keep_encounter_order() {
        let records = vec![
            record(dec!(1), "MG", (2023, 1, 1)),
            record(dec!(1), "BA", (2023, 1, 2)),
            record(dec!(1), "AM", (2023, 1, 3)),
        ];
        let rows = count_by_state(&records);
        let order: Vec<&str> = rows.iter().map(|r| r.state.as_str()).collect();
        assert_eq!(order, vec!["MG", "BA", "AM"]);
    }

    #[test]
    fn top_states_is_a_reindexed_prefix_of_count_by_state() {
        let records: Vec<SalesRecord> = (0..7)
            .flat_map(|i| {
                let state = format!("S{}", i);
                // state S0 gets 1 record, S1 gets 2, ...
                (0..=i)
                    .map(move |_| record(dec!(1), &state, (2023, 1, 1)))
                    .collect::<Vec<_>>()
            })
            .collect();

        let all = count_by_state(&records);
        let top = top_states_by_count(&records);
        assert_eq!(top.len(), TOP_STATES);
        for (i, row) in top.iter().enumerate() {
            assert_eq!(row.position, i + 1);
            assert_eq!(row.state, all[i].state);
            assert_eq!(row.count, all[i].count);
        }
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn count_by_category_one_row_per_distinct_category() {
        let mut records = scenario();
        records[2].category = "books".to_string();
        let rows = count_by_category(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].category.as_str(), rows[0].count), ("electronics", 2));
        assert_eq!((rows[1].category.as_str(), rows[1].count), ("books", 1));
    }

    #[test]
    fn per_salesperson_sums_and_counts_in_one_pass() {
        let mut records = scenario();
        records[2].salesperson = "Bruno".to_string();
        let rows = per_salesperson(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Ana");
        assert_eq!((rows[0].revenue, rows[0].count), (dec!(300), 2));
        assert_eq!((rows[1].revenue, rows[1].count), (dec!(50), 1));
    }

    #[test]
    fn top_sellers_rank_by_the_requested_metric() {
        let sellers = vec![
            SellerStats {
                name: "Ana".to_string(),
                revenue: dec!(50),
                count: 9,
            },
            SellerStats {
                name: "Bruno".to_string(),
                revenue: dec!(500),
                count: 1,
            },
            SellerStats {
                name: "Carla".to_string(),
                revenue: dec!(100),
                count: 4,
            },
        ];
        let by_revenue = top_sellers_by_revenue(&sellers, 2);
        assert_eq!(by_revenue[0].name, "Bruno");
        assert_eq!(by_revenue[1].name, "Carla");

        let by_count = top_sellers_by_count(&sellers, 2);
        assert_eq!(by_count[0].name, "Ana");
        assert_eq!(by_count[1].name, "Carla");
    }

    #[test]
    fn empty_input_yields_empty_views_everywhere() {
        let records: Vec<SalesRecord> = Vec::new();
        assert!(revenue_by_state(&records).is_empty());
        assert!(revenue_by_month(&records).is_empty());
        assert!(revenue_by_category(&records).is_empty());
        assert!(count_by_state(&records).is_empty());
        assert!(count_by_month(&records).is_empty());
        assert!(top_states_by_count(&records).is_empty());
        assert!(count_by_category(&records).is_empty());
        assert!(per_salesperson(&records).is_empty());
    }

    #[test]
    fn decimal_sums_do_not_drift() {
        // 0.1 added 1000 times must be exactly 100
        let records: Vec<SalesRecord> = (0..1000)
            .map(|_| record(dec!(0.1), "SP", (2023, 1, 1)))
            .collect();
        let rows = revenue_by_state(&records);
        assert_eq!(rows[0].revenue, dec!(100.0));
    }
}
