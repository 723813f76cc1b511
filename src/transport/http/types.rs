use crate::app::motor_service::MotorService;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub motor_service: Arc<MotorService>,
}

/// Insert outcome envelope (`Insertion successful` / `Insertion failed`).
///
/// A failed-but-not-raised insert still answers 200 with this envelope; only
/// raised store errors become HTTP errors.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope. `detail` carries the human-readable description, matching
/// the wire format clients already parse.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Query parameters for the search endpoints.
///
/// `numerOfTurns` is the historical spelling; the corrected `numberOfTurns`
/// is accepted as an alias. All parameters are optional and combine with AND.
#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct SearchParams {
    #[serde(default, rename = "numerOfTurns", alias = "numberOfTurns")]
    pub numer_of_turns: Option<f64>,
    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default, rename = "numberOfSewers")]
    pub number_of_sewers: Option<f64>,
}

/// Query parameters for `/get_details/`. Both are required, but they are
/// modeled as options so the handler can answer the documented 400 instead
/// of the extractor's generic rejection.
#[derive(Deserialize, Debug, IntoParams)]
pub struct DetailsParams {
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default, rename = "type")]
    pub motor_type: Option<String>,
}

pub fn error_response(
    status: StatusCode,
    detail: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}
