// Repository trait for sales record access
use crate::domain::record::SalesRecord;
use async_trait::async_trait;

/// Failures while acquiring records. Both variants are fatal for the
/// current render cycle; no retry and no partial dashboard.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("sales source unavailable: {0}")]
    Unavailable(String),
    #[error("malformed record from source: {0}")]
    MalformedRecord(String),
}

#[async_trait]
pub trait SalesSource: Send + Sync {
    /// Fetch raw records, pre-filtered by the source. Empty `region` or
    /// `year` means no restriction on that axis.
    async fn fetch_records(&self, region: &str, year: &str)
        -> Result<Vec<SalesRecord>, SourceError>;
}
