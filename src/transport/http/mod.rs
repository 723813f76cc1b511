pub mod router;
pub mod types;
pub mod handlers {
    pub mod insert;
    pub mod query;
    pub mod root;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
