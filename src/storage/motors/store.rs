use crate::domain::query::SearchFilter;
use anyhow::Result;
use serde_json::Value as JsonValue;

/// A stored document together with its store-assigned identity.
#[derive(Debug, Clone)]
pub struct StoredMotor {
    pub id: String,
    pub doc: JsonValue,
}

/// The three primitives the service needs from its document store.
///
/// The store is injected into the service rather than held as process-global
/// state, so the normalization/query layer stays testable without a running
/// database ([`MemoryMotorStore`](super::MemoryMotorStore) backs the tests).
#[async_trait::async_trait]
pub trait MotorStore: Send + Sync {
    /// Inserts one document exactly as given (raw, unvalidated caller values;
    /// normalization happens on read).
    ///
    /// Returns the assigned id, or `None` when the store reports a failed
    /// insert without raising. The two failure paths are surfaced differently
    /// by callers and must stay distinct.
    async fn insert(&self, doc: JsonValue) -> Result<Option<String>>;

    /// All documents satisfying `filter`, every document when it is empty.
    async fn find(&self, filter: &SearchFilter) -> Result<Vec<StoredMotor>>;

    /// First document whose stored `ownerName` and `type` equal the arguments.
    async fn find_one(&self, owner_name: &str, motor_type: &str)
        -> Result<Option<StoredMotor>>;
}
