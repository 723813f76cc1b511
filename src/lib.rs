pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::motor_service::MotorService;
pub use domain::normalize::normalize;
pub use domain::query::{RangeClause, SearchFilter};
pub use domain::variant::{FieldKind, SchemaVariant};
pub use storage::motors::{MemoryMotorStore, MotorStore, PgMotorStore, StoredMotor};
pub use transport::http::AppState;
