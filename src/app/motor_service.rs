//! The motor records service.
//!
//! This module sits between the HTTP handlers and the document store. Writes
//! pass the caller's raw values straight through (tagged with their schema
//! variant); every read runs the stored documents through the normalizer, so
//! malformed historical data can never fail a request.

use crate::domain::normalize::normalize;
use crate::domain::query::SearchFilter;
use crate::domain::variant::SchemaVariant;
use crate::storage::motors::MotorStore;
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;

pub struct MotorService {
    store: Arc<dyn MotorStore>,
}

impl MotorService {
    pub fn new(store: Arc<dyn MotorStore>) -> Self {
        Self { store }
    }

    /// Inserts one document for `variant`, taking the variant's fields from
    /// `body` and storing `null` for any that are missing. Extra body fields
    /// are not persisted. Values are stored as given, unvalidated.
    ///
    /// Returns whether the store assigned an id (the non-raising failure
    /// path comes back as `Ok(false)`).
    pub async fn insert_motor(
        &self,
        variant: SchemaVariant,
        body: &JsonValue,
    ) -> anyhow::Result<bool> {
        let mut doc = Map::new();
        doc.insert(
            SchemaVariant::CATEGORY_FIELD.to_string(),
            JsonValue::from(variant.category()),
        );
        for (name, _) in variant.fields() {
            doc.insert(
                (*name).to_string(),
                body.get(name).cloned().unwrap_or(JsonValue::Null),
            );
        }
        let inserted = self.store.insert(JsonValue::Object(doc)).await?;
        Ok(inserted.is_some())
    }

    /// All records, normalized.
    pub async fn get_all(&self) -> anyhow::Result<Vec<JsonValue>> {
        self.search(&SearchFilter::default()).await
    }

    /// Records matching `filter`, normalized.
    pub async fn search(&self, filter: &SearchFilter) -> anyhow::Result<Vec<JsonValue>> {
        let motors = self.store.find(filter).await?;
        Ok(motors.iter().map(|m| normalize(&m.id, &m.doc)).collect())
    }

    /// The first record stored with exactly this `ownerName` and `type`,
    /// normalized, if any.
    pub async fn get_details(
        &self,
        owner_name: &str,
        motor_type: &str,
    ) -> anyhow::Result<Option<JsonValue>> {
        let motor = self.store.find_one(owner_name, motor_type).await?;
        Ok(motor.map(|m| normalize(&m.id, &m.doc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::motors::MemoryMotorStore;
    use serde_json::json;

    fn service() -> (Arc<MemoryMotorStore>, MotorService) {
        let store = Arc::new(MemoryMotorStore::new());
        (store.clone(), MotorService::new(store))
    }

    #[tokio::test]
    async fn insert_stores_null_for_missing_fields_and_drops_extras() {
        let (store, service) = service();
        let ok = service
            .insert_motor(
                SchemaVariant::Motore,
                &json!({"ownerName": "Alice", "velocity1": 10, "bogus": 1}),
            )
            .await
            .unwrap();
        assert!(ok);

        let stored = &store.find(&SearchFilter::default()).await.unwrap()[0].doc;
        assert_eq!(stored["category"], json!("motore"));
        assert_eq!(stored["ownerName"], json!("Alice"));
        assert_eq!(stored["velocity1"], json!(10));
        assert_eq!(stored["notes"], JsonValue::Null);
        assert!(stored.get("bogus").is_none());
    }

    #[tokio::test]
    async fn reads_come_back_normalized() {
        let (_, service) = service();
        service
            .insert_motor(
                SchemaVariant::Motore,
                &json!({"ownerName": "Alice", "velocity1": 10, "type": "x"}),
            )
            .await
            .unwrap();

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["velocity1"], json!(10.0));
        // nulls stored for missing numeric fields normalize to 0.0
        assert_eq!(all[0]["weight"], json!(0.0));

        let details = service.get_details("Alice", "x").await.unwrap().unwrap();
        assert_eq!(details["_id"], json!("1"));
        assert_eq!(details["ownerName"], json!("Alice"));

        assert!(service.get_details("Alice", "y").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn non_raising_insert_failure_reports_false() {
        let (store, service) = service();
        store.simulate_insert_failure(true);
        let ok = service
            .insert_motor(SchemaVariant::Motore, &json!({}))
            .await
            .unwrap();
        assert!(!ok);
    }
}
