use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::filter::FilterOptions;
use super::gateway::{BookingGateway, GatewayError};
use super::onboarding::ApplicationDraft;
use super::submission::{ApplicationPayload, SubmissionId, SubmissionStatus};

/// Router builder exposing the marketplace over HTTP, generic over the gateway
/// so tests can swap in deterministic fakes.
pub fn marketplace_router<G>(gateway: Arc<G>) -> Router
where
    G: BookingGateway + 'static,
{
    Router::new()
        .route("/api/v1/artists", get(list_artists_handler::<G>))
        .route("/api/v1/submissions", get(list_submissions_handler::<G>))
        .route(
            "/api/v1/submissions/:submission_id/status",
            post(set_status_handler::<G>),
        )
        .route("/api/v1/applications", post(submit_application_handler::<G>))
        .with_state(gateway)
}

/// Query-style parameters seeding the catalog filters; each defaults to "all".
#[derive(Debug, Deserialize)]
pub(crate) struct ArtistListQuery {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, rename = "priceRange")]
    price_range: Option<String>,
}

impl ArtistListQuery {
    fn into_filters(self) -> FilterOptions {
        FilterOptions::from_params(
            self.category.as_deref(),
            self.location.as_deref(),
            self.price_range.as_deref(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdateRequest {
    status: SubmissionStatus,
}

fn gateway_error_response(error: GatewayError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
}

pub(crate) async fn list_artists_handler<G>(
    State(gateway): State<Arc<G>>,
    Query(query): Query<ArtistListQuery>,
) -> Response
where
    G: BookingGateway + 'static,
{
    match gateway.list_artists(&query.into_filters()).await {
        Ok(artists) => (StatusCode::OK, axum::Json(artists)).into_response(),
        Err(error) => gateway_error_response(error),
    }
}

pub(crate) async fn list_submissions_handler<G>(State(gateway): State<Arc<G>>) -> Response
where
    G: BookingGateway + 'static,
{
    match gateway.list_submissions().await {
        Ok(submissions) => (StatusCode::OK, axum::Json(submissions)).into_response(),
        Err(error) => gateway_error_response(error),
    }
}

pub(crate) async fn set_status_handler<G>(
    State(gateway): State<Arc<G>>,
    Path(submission_id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    G: BookingGateway + 'static,
{
    let id = SubmissionId(submission_id);
    match gateway.set_submission_status(&id, request.status).await {
        Ok(()) => {
            let payload = json!({
                "id": id.0,
                "status": request.status.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => gateway_error_response(error),
    }
}

pub(crate) async fn submit_application_handler<G>(
    State(gateway): State<Arc<G>>,
    axum::Json(payload): axum::Json<ApplicationPayload>,
) -> Response
where
    G: BookingGateway + 'static,
{
    // Validation is caller-side; the gateway accepts anything.
    let draft = ApplicationDraft::from(payload);
    let errors = draft.validate();
    if !errors.is_empty() {
        let payload = json!({
            "errors": errors
                .iter()
                .map(|err| json!({
                    "field": err.field.name(),
                    "message": err.message,
                }))
                .collect::<Vec<_>>(),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    match gateway.submit_application(draft.to_payload()).await {
        Ok(ack) => (StatusCode::ACCEPTED, axum::Json(ack)).into_response(),
        Err(error) => gateway_error_response(error),
    }
}
