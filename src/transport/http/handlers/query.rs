use crate::domain::query::SearchFilter;
use crate::transport::http::types::{
    error_response, AppState, DetailsParams, ErrorResponse, SearchParams,
};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/get_all/",
    responses(
        (status = 200, description = "All records, normalized", body = Object),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_all_handler(State(state): State<AppState>) -> Response {
    match state.motor_service.get_all().await {
        Ok(motors) => (StatusCode::OK, Json(JsonValue::Array(motors))).into_response(),
        Err(e) => {
            eprintln!("> An error occurred during get_all: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/search_motore/",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching records, normalized", body = Object),
        (status = 400, description = "Malformed query parameters", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn search_motore_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameters: {}", e),
            )
            .into_response();
        }
    };

    let filter = SearchFilter {
        number_of_turns: params.numer_of_turns,
        diameter: params.diameter,
        number_of_sewers: params.number_of_sewers,
    };

    match state.motor_service.search(&filter).await {
        Ok(motors) => (StatusCode::OK, Json(JsonValue::Array(motors))).into_response(),
        Err(e) => {
            eprintln!("> An error occurred during search: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/get_details/",
    params(DetailsParams),
    responses(
        (status = 200, description = "The matching record, normalized", body = Object),
        (status = 400, description = "Missing required parameter", body = ErrorResponse),
        (status = 404, description = "No matching record", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_details_handler(
    State(state): State<AppState>,
    Query(params): Query<DetailsParams>,
) -> Response {
    // Empty strings are treated as missing, like the original service did.
    let owner_name = params.owner_name.filter(|s| !s.is_empty());
    let motor_type = params.motor_type.filter(|s| !s.is_empty());
    let (Some(owner_name), Some(motor_type)) = (owner_name, motor_type) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "ownerName and type are required parameters",
        )
        .into_response();
    };

    match state.motor_service.get_details(&owner_name, &motor_type).await {
        Ok(Some(motor)) => (StatusCode::OK, Json(motor)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Motor not found").into_response(),
        Err(e) => {
            eprintln!("> An error occurred during get_details: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
