//! In-memory document store.
//!
//! Backs the integration tests (no database required) and doubles as a way
//! to run the service locally. Failure injection mirrors the two distinct
//! store failure paths: inserts that report failure without raising, and
//! calls that raise outright.

use crate::domain::query::SearchFilter;
use crate::storage::motors::store::{MotorStore, StoredMotor};
use anyhow::Result;
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryMotorStore {
    docs: Mutex<Vec<JsonValue>>,
    fail_inserts: AtomicBool,
    raise_errors: AtomicBool,
}

impl MemoryMotorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, inserts report failure without raising (`Ok(None)`).
    pub fn simulate_insert_failure(&self, on: bool) {
        self.fail_inserts.store(on, Ordering::Relaxed);
    }

    /// When enabled, every store call raises.
    pub fn simulate_store_error(&self, on: bool) {
        self.raise_errors.store(on, Ordering::Relaxed);
    }

    fn check_raise(&self) -> Result<()> {
        if self.raise_errors.load(Ordering::Relaxed) {
            anyhow::bail!("simulated store failure");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MotorStore for MemoryMotorStore {
    async fn insert(&self, doc: JsonValue) -> Result<Option<String>> {
        self.check_raise()?;
        if self.fail_inserts.load(Ordering::Relaxed) {
            return Ok(None);
        }
        let mut docs = self.docs.lock().await;
        docs.push(doc);
        Ok(Some(docs.len().to_string()))
    }

    async fn find(&self, filter: &SearchFilter) -> Result<Vec<StoredMotor>> {
        self.check_raise()?;
        let docs = self.docs.lock().await;
        let mut matches = Vec::new();
        for (i, doc) in docs.iter().enumerate() {
            if filter.matches(doc) {
                matches.push(StoredMotor {
                    id: (i + 1).to_string(),
                    doc: doc.clone(),
                });
            }
        }
        Ok(matches)
    }

    async fn find_one(
        &self,
        owner_name: &str,
        motor_type: &str,
    ) -> Result<Option<StoredMotor>> {
        self.check_raise()?;
        let docs = self.docs.lock().await;
        for (i, doc) in docs.iter().enumerate() {
            if doc.get("ownerName").and_then(JsonValue::as_str) == Some(owner_name)
                && doc.get("type").and_then(JsonValue::as_str) == Some(motor_type)
            {
                return Ok(Some(StoredMotor {
                    id: (i + 1).to_string(),
                    doc: doc.clone(),
                }));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_and_find_round_trip() {
        let store = MemoryMotorStore::new();
        let id = store
            .insert(json!({"ownerName": "a", "type": "x", "numberOfSewers": 3}))
            .await
            .unwrap();
        assert_eq!(id, Some("1".to_string()));

        let all = store.find(&SearchFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "1");

        let filtered = store
            .find(&SearchFilter {
                number_of_sewers: Some(3.0),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);

        let none = store
            .find(&SearchFilter {
                number_of_sewers: Some(4.0),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn find_one_matches_owner_and_type() {
        let store = MemoryMotorStore::new();
        store
            .insert(json!({"ownerName": "a", "type": "x"}))
            .await
            .unwrap();
        store
            .insert(json!({"ownerName": "a", "type": "y"}))
            .await
            .unwrap();

        let m = store.find_one("a", "y").await.unwrap().unwrap();
        assert_eq!(m.id, "2");
        assert!(store.find_one("b", "x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failure_injection_keeps_both_paths_distinct() {
        let store = MemoryMotorStore::new();

        store.simulate_insert_failure(true);
        assert_eq!(store.insert(json!({})).await.unwrap(), None);

        store.simulate_insert_failure(false);
        store.simulate_store_error(true);
        assert!(store.insert(json!({})).await.is_err());
        assert!(store.find(&SearchFilter::default()).await.is_err());
    }
}
