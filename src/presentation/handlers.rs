// HTTP request handlers
use crate::application::dashboard_service::DEFAULT_TOP_SELLERS;
use crate::domain::record::FilterCriteria;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub region: Option<String>,
    pub year: Option<i32>,
    /// Comma-separated salesperson names; absent or empty means all.
    pub sellers: Option<String>,
    pub top_sellers: Option<usize>,
}

impl DashboardQuery {
    fn criteria(&self) -> FilterCriteria {
        let region = self
            .region
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        let salespeople: HashSet<String> = self
            .sellers
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        FilterCriteria::new(region, self.year, salespeople)
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the sales dashboard for the requested filter selection
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let criteria = query.criteria();
    let top_sellers = query.top_sellers.unwrap_or(DEFAULT_TOP_SELLERS);

    match state
        .dashboard_service
        .render(&criteria, top_sellers)
        .await
    {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => {
            tracing::error!("Dashboard render failed: {:#}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
