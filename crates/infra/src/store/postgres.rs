//! Postgres-backed entity store.
//!
//! Every entity kind shares one document table keyed by `(kind, id)`. The
//! body is the entity's JSON form and `seq` fixes the listing order; an
//! update rewrites the body and leaves `seq` alone, so a record keeps its
//! position.
//!
//! ## Blocking
//!
//! [`EntityStore`] is synchronous. Each call runs its query on the current
//! Tokio runtime through `block_in_place`, which needs a multi-threaded
//! runtime. Outside one, calls log an error and behave like an empty store.
//!
//! ## Errors
//!
//! The store trait has no error channel. SQLx and decode failures are logged
//! at `error` level with the entity kind and operation; reads then return
//! nothing and writes are dropped.

use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{error, instrument};

use burgerstream_core::Entity;
use burgerstream_menu::{MenuItem, SizeOption};
use burgerstream_orders::Order;

use super::EntityStore;

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS burgerstream_entities (
    kind TEXT NOT NULL,
    id TEXT NOT NULL,
    seq BIGSERIAL NOT NULL,
    body JSONB NOT NULL,
    PRIMARY KEY (kind, id)
)
"#;

const UPSERT: &str = r#"
INSERT INTO burgerstream_entities (kind, id, body)
VALUES ($1, $2, $3)
ON CONFLICT (kind, id)
DO UPDATE SET body = EXCLUDED.body
"#;

/// Create the document table if it is missing.
#[instrument(skip(pool), err)]
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

/// An entity persisted as a JSON document under a fixed kind.
pub trait Document: Entity + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: &'static str;
}

impl Document for MenuItem {
    const KIND: &'static str = "menu_item";
}

impl Document for SizeOption {
    const KIND: &'static str = "size_option";
}

/// Orders are stored whole, items included, so deleting the row deletes
/// everything the order owns.
impl Document for Order {
    const KIND: &'static str = "order";
}

pub struct PostgresStore<V> {
    pool: PgPool,
    _value: PhantomData<fn() -> V>,
}

impl<V: Document> PostgresStore<V> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _value: PhantomData,
        }
    }

    fn run<T>(
        &self,
        operation: &'static str,
        query: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Option<T> {
        let handle = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => handle,
            _ => {
                error!(
                    kind = V::KIND,
                    operation, "postgres store needs a multi-threaded tokio runtime"
                );
                return None;
            }
        };

        match tokio::task::block_in_place(|| handle.block_on(query)) {
            Ok(value) => Some(value),
            Err(e) => {
                error!(kind = V::KIND, operation, error = %e, "postgres store operation failed");
                None
            }
        }
    }
}

impl<V> EntityStore<V> for PostgresStore<V>
where
    V: Document,
    V::Id: Display,
{
    fn get(&self, id: &V::Id) -> Option<V> {
        let key = id.to_string();
        self.run("get", async move {
            sqlx::query_scalar::<Postgres, Json<V>>(
                "SELECT body FROM burgerstream_entities WHERE kind = $1 AND id = $2",
            )
            .bind(V::KIND)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
        })
        .flatten()
        .map(|Json(value)| value)
    }

    fn get_many(&self, ids: &[V::Id]) -> Vec<V> {
        let keys: Vec<String> = ids.iter().map(ToString::to_string).collect();
        let rows = self
            .run("get_many", {
                let keys = keys.clone();
                async move {
                    sqlx::query_as::<Postgres, (String, Json<V>)>(
                        "SELECT id, body FROM burgerstream_entities WHERE kind = $1 AND id = ANY($2)",
                    )
                    .bind(V::KIND)
                    .bind(keys)
                    .fetch_all(&self.pool)
                    .await
                }
            })
            .unwrap_or_default();

        let mut by_key: HashMap<String, V> = rows
            .into_iter()
            .map(|(key, Json(value))| (key, value))
            .collect();
        keys.iter().filter_map(|key| by_key.remove(key)).collect()
    }

    fn list(&self) -> Vec<V> {
        self.run("list", async move {
            sqlx::query_scalar::<Postgres, Json<V>>(
                "SELECT body FROM burgerstream_entities WHERE kind = $1 ORDER BY seq",
            )
            .bind(V::KIND)
            .fetch_all(&self.pool)
            .await
        })
        .unwrap_or_default()
        .into_iter()
        .map(|Json(value)| value)
        .collect()
    }

    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> Vec<V> {
        self.list().into_iter().filter(|value| predicate(value)).collect()
    }

    fn upsert(&self, value: V) {
        let key = value.id().to_string();
        self.run("upsert", async move {
            sqlx::query(UPSERT)
                .bind(V::KIND)
                .bind(key)
                .bind(Json(value))
                .execute(&self.pool)
                .await
        });
    }

    fn upsert_many(&self, values: Vec<V>) {
        self.run("upsert_many", async move {
            let mut tx = self.pool.begin().await?;
            for value in values {
                let key = value.id().to_string();
                sqlx::query(UPSERT)
                    .bind(V::KIND)
                    .bind(key)
                    .bind(Json(value))
                    .execute(&mut *tx)
                    .await?;
            }
            tx.commit().await
        });
    }

    fn remove(&self, id: &V::Id) -> Option<V> {
        let key = id.to_string();
        self.run("remove", async move {
            sqlx::query_scalar::<Postgres, Json<V>>(
                "DELETE FROM burgerstream_entities WHERE kind = $1 AND id = $2 RETURNING body",
            )
            .bind(V::KIND)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
        })
        .flatten()
        .map(|Json(value)| value)
    }

    fn count(&self) -> usize {
        self.run("count", async move {
            sqlx::query_scalar::<Postgres, i64>(
                "SELECT COUNT(*) FROM burgerstream_entities WHERE kind = $1",
            )
            .bind(V::KIND)
            .fetch_one(&self.pool)
            .await
        })
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
    }
}
