//! Document storage for motor records.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryMotorStore;
pub use postgres::PgMotorStore;
pub use store::{MotorStore, StoredMotor};
