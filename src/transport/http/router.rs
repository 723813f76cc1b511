use crate::transport::http::handlers::{insert, query, root};
use crate::transport::http::types::{AppState, ErrorResponse, MessageResponse};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::hello_handler,
        insert::add_new_motore_handler,
        insert::add_new_mobina_handler,
        query::get_all_handler,
        query::search_motore_handler,
        query::get_details_handler
    ),
    components(schemas(MessageResponse, ErrorResponse))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root::hello_handler))
        .route("/add_New_Motore/", post(insert::add_new_motore_handler))
        .route("/add_New_Mobina/", post(insert::add_new_mobina_handler))
        .route("/get_all/", get(query::get_all_handler))
        // Both spellings of the search path have shipped; keep serving both.
        .route("/search_motore/", get(query::search_motore_handler))
        .route("/search_motor/", get(query::search_motore_handler))
        .route("/get_details/", get(query::get_details_handler))
        .with_state(app_state)
}
