//! In-process word table.
//!
//! Keeps entities in an ordered map so scans are deterministic. Used when no
//! database connection string is configured and by tests that exercise the
//! full request pipeline.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{self, BoxStream, StreamExt};
use mockable::{Clock, DefaultClock};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{WordEntity, WordTable, WordTableError};

type EntityKey = (String, String);

fn key(partition_key: &str, row_key: &str) -> EntityKey {
    (partition_key.to_owned(), row_key.to_owned())
}

/// Word table held in memory for the lifetime of the process.
#[derive(Clone)]
pub struct InMemoryWordTable {
    entities: Arc<RwLock<BTreeMap<EntityKey, WordEntity>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryWordTable {
    /// Create an empty table stamped by the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entities: Arc::new(RwLock::new(BTreeMap::new())),
            clock,
        }
    }

    /// Number of stored entities.
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    /// Whether the table holds no entities.
    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

impl Default for InMemoryWordTable {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

#[async_trait]
impl WordTable for InMemoryWordTable {
    async fn get_entity(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<WordEntity>, WordTableError> {
        let entities = self.entities.read().await;
        Ok(entities.get(&key(partition_key, row_key)).cloned())
    }

    fn query_entities(&self) -> BoxStream<'static, Result<WordEntity, WordTableError>> {
        let entities = Arc::clone(&self.entities);
        stream::once(async move {
            entities
                .read()
                .await
                .values()
                .cloned()
                .collect::<Vec<_>>()
        })
        .flat_map(|snapshot| stream::iter(snapshot.into_iter().map(Ok)))
        .boxed()
    }

    async fn upsert_entity(&self, entity: &WordEntity) -> Result<(), WordTableError> {
        let mut stored = entity.clone();
        stored.etag = Some(Uuid::new_v4().to_string());
        stored.timestamp = Some(self.clock.utc());
        self.entities
            .write()
            .await
            .insert(key(&entity.partition_key, &entity.row_key), stored);
        Ok(())
    }

    async fn delete_entity(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<(), WordTableError> {
        self.entities
            .write()
            .await
            .remove(&key(partition_key, row_key))
            .map(|_| ())
            .ok_or_else(|| WordTableError::not_found(partition_key, row_key))
    }
}
