use axum::response::IntoResponse;

/// Liveness placeholder, kept byte-compatible with the original service.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn hello_handler() -> impl IntoResponse {
    "Hello, World!"
}
