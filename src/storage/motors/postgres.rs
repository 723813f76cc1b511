//! PostgreSQL-backed document store.
//!
//! Documents live in a single `motors` table as JSONB rows keyed by a
//! store-assigned serial id, keeping the collection loosely schematized:
//! inserts take whatever fields the caller supplied, reads filter with
//! JSONB operators.

use crate::domain::query::SearchFilter;
use crate::infra::config;
use crate::storage::motors::store::{MotorStore, StoredMotor};
use anyhow::Result;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

pub struct PgMotorStore {
    pool: PgPool,
}

impl PgMotorStore {
    /// Connects using `DATABASE_URL` and creates the `motors` table if needed.
    pub async fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        let database_url = config::database_url();

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;

        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: PgPool) -> Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS motors (
                id BIGSERIAL PRIMARY KEY,
                doc JSONB NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl MotorStore for PgMotorStore {
    async fn insert(&self, doc: JsonValue) -> Result<Option<String>> {
        let row = sqlx::query("INSERT INTO motors (doc) VALUES ($1) RETURNING id")
            .bind(&doc)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => {
                let id: i64 = r.try_get("id")?;
                Ok(Some(id.to_string()))
            }
            None => Ok(None),
        }
    }

    async fn find(&self, filter: &SearchFilter) -> Result<Vec<StoredMotor>> {
        let mut sql = String::from("SELECT id, doc FROM motors");
        let clauses = filter.clauses();
        let mut binds: Vec<f64> = Vec::new();

        // Field names come from the static clause table, never from user
        // input. The `jsonb_typeof` guard gives Mongo-style range semantics:
        // only numeric stored values can match, and a non-numeric value must
        // not error the query.
        for (i, clause) in clauses.iter().enumerate() {
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            sql.push_str(&format!(
                "(jsonb_typeof(doc->'{field}') = 'number' \
                 AND (doc->>'{field}')::float8 >= ${lo} \
                 AND (doc->>'{field}')::float8 < ${hi})",
                field = clause.field,
                lo = binds.len() + 1,
                hi = binds.len() + 2,
            ));
            binds.push(clause.lo);
            binds.push(clause.hi());
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query(&sql);
        for b in &binds {
            query = query.bind(*b);
        }
        let rows = query.fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|row| {
                let id: i64 = row.try_get("id")?;
                let doc: JsonValue = row.try_get("doc")?;
                Ok(StoredMotor {
                    id: id.to_string(),
                    doc,
                })
            })
            .collect()
    }

    async fn find_one(
        &self,
        owner_name: &str,
        motor_type: &str,
    ) -> Result<Option<StoredMotor>> {
        let row = sqlx::query(
            "SELECT id, doc FROM motors \
             WHERE doc->>'ownerName' = $1 AND doc->>'type' = $2 \
             ORDER BY id LIMIT 1",
        )
        .bind(owner_name)
        .bind(motor_type)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                let id: i64 = r.try_get("id")?;
                let doc: JsonValue = r.try_get("doc")?;
                Ok(Some(StoredMotor {
                    id: id.to_string(),
                    doc,
                }))
            }
            None => Ok(None),
        }
    }
}
