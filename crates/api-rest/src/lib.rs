//! # API REST
//!
//! REST API implementation for MedQuery.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `medquery-core` for every lookup and `api-shared` for the wire types.

#![warn(rust_2018_idioms)]

pub mod error;

use api_shared::{
    ErrorRes, HealthRes, HealthService, MedicineQuery, MedicineRes, SimilarMedicineRes,
    SimilarQuery, SuggestionRes, SuggestionsQuery,
};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use medquery_core::MedicineService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
///
/// Holds the lookup service, which in turn owns the one store handle created at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    medicines: MedicineService,
}

impl AppState {
    pub fn new(medicines: MedicineService) -> Self {
        Self { medicines }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, suggestions, medicine, similar),
    components(schemas(HealthRes, SuggestionRes, MedicineRes, SimilarMedicineRes, ErrorRes))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI, permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/suggestions", get(suggestions))
        .route("/medicine", get(medicine))
        .route("/similar", get(similar))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the REST API on an already-bound listener until the server stops.
///
/// # Errors
/// Returns an error if the HTTP server fails while running.
pub async fn serve_on(
    listener: tokio::net::TcpListener,
    medicines: MedicineService,
) -> anyhow::Result<()> {
    tracing::info!("-- MedQuery REST listening on {}", listener.local_addr()?);
    axum::serve(listener, router(AppState::new(medicines))).await?;
    Ok(())
}

/// Bind `addr` and serve the REST API.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(addr: &str, medicines: MedicineService) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_on(listener, medicines).await
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Reports liveness and the number of documents in the collection. A failing count is
/// logged and reported as zero rather than failing the health check.
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    let medicines = state.medicines.count().unwrap_or_else(|e| {
        tracing::warn!("Health count failed: {:?}", e);
        0
    });
    Json(HealthService::check_health(medicines))
}

#[utoipa::path(
    get,
    path = "/suggestions",
    params(SuggestionsQuery),
    responses(
        (status = 200, description = "Up to six names starting with q", body = [SuggestionRes]),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Autocomplete medicine names
///
/// Blank or missing `q` returns an empty array without touching the store.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store query fails.
#[axum::debug_handler]
async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Result<Json<Vec<SuggestionRes>>, ApiError> {
    let names = state.medicines.suggestions(query.q.as_deref())?;
    Ok(Json(names))
}

#[utoipa::path(
    get,
    path = "/medicine",
    params(MedicineQuery),
    responses(
        (status = 200, description = "Medicine details", body = MedicineRes),
        (status = 400, description = "Medicine name required", body = ErrorRes),
        (status = 404, description = "Medicine not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Full details for one medicine
///
/// The name is compared case-insensitively against the whole stored name.
///
/// # Errors
/// - `400 Bad Request` if `name` is missing or blank
/// - `404 Not Found` if no medicine has that name
/// - `500 Internal Server Error` if the store query fails
#[axum::debug_handler]
async fn medicine(
    State(state): State<AppState>,
    Query(query): Query<MedicineQuery>,
) -> Result<Json<MedicineRes>, ApiError> {
    let found = state.medicines.medicine(query.name.as_deref())?;
    Ok(Json(found))
}

#[utoipa::path(
    get,
    path = "/similar",
    params(SimilarQuery),
    responses(
        (status = 200, description = "Medicines with the same composition", body = [SimilarMedicineRes]),
        (status = 400, description = "Composition required", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Medicines sharing a composition
///
/// The result includes the medicine the compositions came from; clients drop it by name.
///
/// # Errors
/// - `400 Bad Request` if `comp1` is missing or blank
/// - `500 Internal Server Error` if the store query fails
#[axum::debug_handler]
async fn similar(
    State(state): State<AppState>,
    Query(query): Query<SimilarQuery>,
) -> Result<Json<Vec<SimilarMedicineRes>>, ApiError> {
    let found = state
        .medicines
        .similar(query.comp1.as_deref(), query.comp2.as_deref())?;
    Ok(Json(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use medquery_core::constants::STORED_PRICE_FIELD;
    use medquery_core::{
        JsonCollection, MedicineError, MedicineFilter, MedicineResult, MedicineStore,
        StoredMedicine,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    const AMOX_CLAV: &str = "Amoxycillin (500mg) + Clavulanic Acid (125mg)";

    fn fixture() -> Value {
        json!([
            {
                "name": "Augmentin 625 Duo Tablet",
                "manufacturer_name": "Glaxo SmithKline Pharmaceuticals Ltd",
                "price(₹)": 223.42,
                "type": "allopathy",
                "pack_size_label": "strip of 10 tablets",
                "short_composition1": AMOX_CLAV,
                "short_composition2": "",
                "use0": "Treatment of Bacterial infections",
                "substitute0": "Moxikind-CV 625 Tablet",
                "substitute1": "Clavam 625 Tablet",
                "Consolidated_Side_Effects": "Vomiting, Nausea, Diarrhea",
                "Habit Forming": "No",
                "Therapeutic Class": "ANTI INFECTIVES"
            },
            {
                "name": "Azithral 500 Tablet",
                "manufacturer_name": "Alembic Pharmaceuticals Ltd",
                "price(₹)": 132.36,
                "short_composition1": "Azithromycin (500mg)"
            },
            {
                "name": "Moxikind-CV 625 Tablet",
                "price(₹)": "188.50",
                "short_composition1": AMOX_CLAV,
                "short_composition2": ""
            },
            {
                "name": "Clavam 625 Tablet",
                "price(₹)": 201.0,
                "short_composition1": AMOX_CLAV
            },
            {
                "name": "Advent 625 Tablet",
                "price(₹)": 190.0,
                "short_composition1": "Amoxycillin(500mg)+Clavulanic Acid(125mg)"
            }
        ])
    }

    fn app() -> Router {
        let collection = JsonCollection::from_json_str(&fixture().to_string()).unwrap();
        router(AppState::new(MedicineService::new(Arc::new(collection))))
    }

    struct BrokenStore;

    impl MedicineStore for BrokenStore {
        fn find(
            &self,
            _filter: &MedicineFilter,
            _limit: Option<usize>,
        ) -> MedicineResult<Vec<StoredMedicine>> {
            Err(MedicineError::Store("server selection timeout".into()))
        }

        fn count(&self) -> MedicineResult<u64> {
            Err(MedicineError::Store("server selection timeout".into()))
        }
    }

    fn broken_app() -> Router {
        router(AppState::new(MedicineService::new(Arc::new(BrokenStore))))
    }

    /// Percent-encodes everything but ASCII alphanumerics, so `+` survives form decoding.
    fn encode(value: &str) -> String {
        value
            .bytes()
            .map(|b| {
                if b.is_ascii_alphanumeric() {
                    (b as char).to_string()
                } else {
                    format!("%{b:02X}")
                }
            })
            .collect()
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_document_count() {
        let (status, body) = fetch(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["medicines"], 5);
    }

    #[tokio::test]
    async fn health_survives_store_failure() {
        let (status, body) = fetch(broken_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["medicines"], 0);
    }

    #[tokio::test]
    async fn suggestions_return_names_only() {
        let (status, body) = fetch(app(), "/suggestions?q=Augmentin").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "name": "Augmentin 625 Duo Tablet" }]));
    }

    #[tokio::test]
    async fn blank_suggestions_are_empty_even_when_store_is_down() {
        for uri in ["/suggestions", "/suggestions?q=", "/suggestions?q=%20%20"] {
            let (status, body) = fetch(broken_app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, json!([]));
        }
    }

    #[tokio::test]
    async fn suggestions_store_failure_is_500() {
        let (status, body) = fetch(broken_app(), "/suggestions?q=Aug").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn medicine_lookup_is_case_insensitive_and_renames_price() {
        let (status, exact) = fetch(
            app(),
            &format!("/medicine?name={}", encode("Augmentin 625 Duo Tablet")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, lower) = fetch(
            app(),
            &format!("/medicine?name={}", encode("augmentin 625 duo tablet")),
        )
        .await;
        assert_eq!(exact, lower);

        assert_eq!(exact["price"], 223.42);
        assert!(exact.get(STORED_PRICE_FIELD).is_none());
        assert_eq!(exact["habit_forming"], "No");
        assert_eq!(
            exact["substitutes"],
            json!(["Moxikind-CV 625 Tablet", "Clavam 625 Tablet"])
        );
        assert_eq!(exact["uses"], json!(["Treatment of Bacterial infections"]));
    }

    #[tokio::test]
    async fn medicine_requires_name() {
        for uri in ["/medicine", "/medicine?name=", "/medicine?name=%20"] {
            let (status, body) = fetch(app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, json!({ "error": "Medicine name required" }));
        }
    }

    #[tokio::test]
    async fn unknown_medicine_is_404() {
        let (status, body) = fetch(app(), "/medicine?name=Augmentin").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Medicine not found" }));
    }

    #[tokio::test]
    async fn medicine_store_failure_is_500() {
        let (status, _) = fetch(broken_app(), "/medicine?name=Augmentin").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn similar_matches_exact_composition() {
        let (status, body) = fetch(app(), &format!("/similar?comp1={}", encode(AMOX_CLAV))).await;
        assert_eq!(status, StatusCode::OK);

        let items = body.as_array().unwrap();
        let names: Vec<_> = items.iter().map(|m| m["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "Augmentin 625 Duo Tablet",
                "Moxikind-CV 625 Tablet",
                "Clavam 625 Tablet"
            ]
        );
        for item in items {
            assert_eq!(item["short_composition1"], AMOX_CLAV);
            assert!(item.get(STORED_PRICE_FIELD).is_none());
            assert!(item["price"].is_number());
        }
    }

    #[tokio::test]
    async fn similar_ands_second_composition() {
        let uri = format!(
            "/similar?comp1={}&comp2={}",
            encode(AMOX_CLAV),
            encode("Lactobacillus (60Million spores)")
        );
        let (status, body) = fetch(app(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn similar_requires_first_composition() {
        let (status, body) = fetch(app(), "/similar?comp2=x").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Composition required" }));
    }

    #[tokio::test]
    async fn similar_store_failure_is_500() {
        let (status, _) = fetch(broken_app(), "/similar?comp1=x").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn openapi_document_lists_lookup_paths() {
        let (status, body) = fetch(app(), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        for path in ["/suggestions", "/medicine", "/similar", "/health"] {
            assert!(body["paths"].get(path).is_some(), "{path}");
        }
    }
}
