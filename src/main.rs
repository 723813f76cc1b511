use motor_records::infra::config;
use motor_records::transport;
use motor_records::{AppState, MotorService, PgMotorStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Store Initialization ---
    println!("> Initializing motor store...");
    let store = Arc::new(PgMotorStore::new().await?);
    let motor_service = Arc::new(MotorService::new(store));
    println!("> Motor store initialized successfully.");

    let app_state = AppState { motor_service };

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("> API server listening on http://{}", addr);
    println!("> Swagger UI available at /swagger-ui");
    axum::serve(listener, app).await?;

    Ok(())
}
