//! JSON surface over the pipeline: the filtered table, the cascading
//! filter options, and the summary row the dashboards rendered as KPI
//! tiles. Any rendering layer can sit on top of these plain-data
//! responses.

use crate::config::Listener as ListenerConfig;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use healthdata::HealthStats;
use healthdata::errors::FetchError;
use healthdata::filter::{Dimension, FilterState, apply, options};
use healthdata::summary::{Summary, summarize};
use healthdata::types::CountryRow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub async fn serve(listener: ListenerConfig, stats: Arc<HealthStats>) -> Result<(), ApiError> {
    let app = router(stats);
    let addr = format!("{}:{}", listener.host, listener.port);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn router(stats: Arc<HealthStats>) -> Router {
    Router::new()
        .route("/rows", get(rows_handler))
        .route("/options", get(options_handler))
        .route("/summary", get(summary_handler))
        .route("/health", get(health_handler))
        .with_state(stats)
}

#[derive(Serialize, Debug)]
struct ApiErrorResponse {
    error_message: String,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(self)).into_response()
    }
}

impl From<Arc<FetchError>> for ApiErrorResponse {
    fn from(err: Arc<FetchError>) -> Self {
        tracing::warn!(error = %err, "no dataset available for request");
        ApiErrorResponse {
            error_message: err.to_string(),
        }
    }
}

/// Filter selections from query params. An empty string means the
/// filter widget was cleared and is treated as no constraint.
fn clean(mut state: FilterState) -> FilterState {
    if state.continent.as_deref() == Some("") {
        state.continent = None;
    }
    if state.country.as_deref() == Some("") {
        state.country = None;
    }
    state
}

async fn rows_handler(
    State(stats): State<Arc<HealthStats>>,
    Query(params): Query<FilterState>,
) -> Result<Json<Vec<CountryRow>>, ApiErrorResponse> {
    let dataset = stats.dataset().await?;

    // Drop selections a concurrent upstream change invalidated rather
    // than serving an inconsistent zero-row table.
    let mut state = clean(params);
    state.reconcile(&dataset);

    let rows = apply(&dataset, &state).into_iter().cloned().collect();
    Ok(Json(rows))
}

#[derive(Deserialize, Debug)]
struct OptionsParams {
    dimension: Dimension,
    #[serde(flatten)]
    state: FilterState,
}

async fn options_handler(
    State(stats): State<Arc<HealthStats>>,
    Query(params): Query<OptionsParams>,
) -> Result<Json<BTreeSet<String>>, ApiErrorResponse> {
    let dataset = stats.dataset().await?;

    let mut state = clean(params.state);
    state.reconcile(&dataset);

    Ok(Json(options(&dataset, params.dimension, &state)))
}

async fn summary_handler(
    State(stats): State<Arc<HealthStats>>,
    Query(params): Query<FilterState>,
) -> Result<Json<Summary>, ApiErrorResponse> {
    let dataset = stats.dataset().await?;

    let mut state = clean(params);
    state.reconcile(&dataset);

    Ok(Json(summarize(apply(&dataset, &state))))
}

async fn health_handler() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STUB_BODY: &str = r#"[
        {"country": "A", "continent": "X", "cases": 10, "deaths": 1, "recovered": 5,
         "active": 4, "tests": 100, "population": 1000},
        {"country": "B", "continent": "X", "cases": 20, "deaths": 2, "recovered": 10,
         "active": 8, "tests": 200, "population": 2000},
        {"country": "C", "continent": "Y", "cases": 5, "deaths": 0, "recovered": 5,
         "active": 0, "tests": 50, "population": 500}
    ]"#;

    async fn stub_stats(server: &MockServer) -> Arc<HealthStats> {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(STUB_BODY))
            .mount(server)
            .await;
        Arc::new(HealthStats::new(server.uri(), Duration::from_secs(10)))
    }

    #[tokio::test]
    async fn summary_reflects_filter_params() {
        let server = MockServer::start().await;
        let stats = stub_stats(&server).await;

        let Json(all) = summary_handler(State(stats.clone()), Query(FilterState::default()))
            .await
            .unwrap();
        assert_eq!(all.count, 3);
        assert_eq!(all.cases, 35);

        let state = FilterState {
            continent: Some("X".into()),
            country: None,
        };
        let Json(x_only) = summary_handler(State(stats), Query(state)).await.unwrap();
        assert_eq!(x_only.count, 2);
        assert_eq!(x_only.cases, 30);
        assert_eq!(x_only.population, 3000);
    }

    #[tokio::test]
    async fn rows_drops_stale_country_selection() {
        let server = MockServer::start().await;
        let stats = stub_stats(&server).await;

        // A selection that matches nothing reconciles back to "no
        // filter" instead of returning an empty table.
        let state = FilterState {
            continent: None,
            country: Some("Z".into()),
        };
        let Json(rows) = rows_handler(State(stats), Query(state)).await.unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn empty_params_mean_no_filter() {
        let server = MockServer::start().await;
        let stats = stub_stats(&server).await;

        let state = FilterState {
            continent: Some(String::new()),
            country: Some(String::new()),
        };
        let Json(rows) = rows_handler(State(stats), Query(state)).await.unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn options_cascade_by_continent() {
        let server = MockServer::start().await;
        let stats = stub_stats(&server).await;

        let params = OptionsParams {
            dimension: Dimension::Country,
            state: FilterState {
                continent: Some("X".into()),
                country: None,
            },
        };
        let Json(countries) = options_handler(State(stats), Query(params)).await.unwrap();
        let countries: Vec<_> = countries.into_iter().collect();
        assert_eq!(countries, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn options_drop_stale_selection_from_other_dimension() {
        let server = MockServer::start().await;
        let stats = stub_stats(&server).await;

        // A country selection that matches nothing would otherwise
        // constrain the continent options down to an empty set.
        let params = OptionsParams {
            dimension: Dimension::Continent,
            state: FilterState {
                continent: None,
                country: Some("Z".into()),
            },
        };
        let Json(continents) = options_handler(State(stats), Query(params)).await.unwrap();
        let continents: Vec<_> = continents.into_iter().collect();
        assert_eq!(continents, vec!["X", "Y"]);
    }

    #[tokio::test]
    async fn upstream_failure_surfaces_as_error_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let stats = Arc::new(HealthStats::new(server.uri(), Duration::from_secs(10)));

        let err = summary_handler(State(stats), Query(FilterState::default()))
            .await
            .unwrap_err();
        assert!(err.error_message.contains("500"));
    }
}
