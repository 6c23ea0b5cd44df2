// HTTP implementation of the sales source
use crate::application::sales_source::{SalesSource, SourceError};
use crate::domain::record::SalesRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone)]
pub struct HttpSalesSource {
    base_url: String,
    client: reqwest::Client,
}

/// Raw record as the remote API serves it. Validated into a `SalesRecord`
/// at load time; the first invalid record fails the whole batch.
#[derive(Debug, Deserialize)]
struct RawRecord {
    purchase_date: String,
    price: f64,
    location: String,
    lat: f64,
    lon: f64,
    category: String,
    salesperson: String,
}

impl RawRecord {
    fn into_record(self) -> Result<SalesRecord, SourceError> {
        let purchase_date = NaiveDate::parse_from_str(&self.purchase_date, DATE_FORMAT)
            .map_err(|e| {
                SourceError::MalformedRecord(format!(
                    "bad purchase date '{}': {}",
                    self.purchase_date, e
                ))
            })?;

        let price = Decimal::try_from(self.price).map_err(|e| {
            SourceError::MalformedRecord(format!("bad price {}: {}", self.price, e))
        })?;
        if price.is_sign_negative() {
            return Err(SourceError::MalformedRecord(format!(
                "negative price {}",
                self.price
            )));
        }

        Ok(SalesRecord::new(
            purchase_date,
            price,
            self.location,
            self.lat,
            self.lon,
            self.category,
            self.salesperson,
        ))
    }
}

impl HttpSalesSource {
    pub fn new(base_url: String, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl SalesSource for HttpSalesSource {
    async fn fetch_records(
        &self,
        region: &str,
        year: &str,
    ) -> Result<Vec<SalesRecord>, SourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("region", region), ("year", year)])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Unavailable(format!(
                "sales API returned {}: {}",
                status, body
            )));
        }

        let raw = response
            .json::<Vec<RawRecord>>()
            .await
            .map_err(|e| SourceError::MalformedRecord(e.to_string()))?;

        tracing::debug!("Fetched {} raw records from sales API", raw.len());
        raw.into_iter().map(RawRecord::into_record).collect()
    }
}
