use crate::domain::variant::SchemaVariant;
use crate::transport::http::types::{error_response, AppState, ErrorResponse, MessageResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

/// Whether an insert endpoint demands every variant field in the body.
///
/// The motore family has always accepted any subset of fields; the mobina
/// family has always failed fast on a missing field. Both contracts are
/// load-bearing for existing clients, so they are kept distinct instead of
/// being unified.
#[derive(Clone, Copy, PartialEq, Eq)]
enum InsertContract {
    Lenient,
    Strict,
}

#[utoipa::path(
    post,
    path = "/add_New_Motore/",
    request_body = Object,
    responses(
        (status = 200, description = "Insert outcome", body = MessageResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn add_new_motore_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    handle_insert(state, SchemaVariant::Motore, InsertContract::Lenient, body).await
}

#[utoipa::path(
    post,
    path = "/add_New_Mobina/",
    request_body = Object,
    responses(
        (status = 200, description = "Insert outcome", body = MessageResponse),
        (status = 400, description = "Invalid request body or missing required field", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn add_new_mobina_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    handle_insert(state, SchemaVariant::Mobina, InsertContract::Strict, body).await
}

async fn handle_insert(
    state: AppState,
    variant: SchemaVariant,
    contract: InsertContract,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON body: {}", e),
            )
            .into_response();
        }
    };
    if !body.is_object() {
        return error_response(StatusCode::BAD_REQUEST, "Request body must be a JSON object")
            .into_response();
    }

    if contract == InsertContract::Strict {
        if let Some(field) = variant.first_missing_field(&body) {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {}", field),
            )
            .into_response();
        }
    }

    match state.motor_service.insert_motor(variant, &body).await {
        Ok(inserted) => {
            let message = if inserted {
                "Insertion successful"
            } else {
                "Insertion failed"
            };
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: message.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            eprintln!("> An error occurred during insert: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
