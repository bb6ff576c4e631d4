//! [`WordTable`] adapter over the PostgreSQL `words` table.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use futures_util::stream::{self, BoxStream, StreamExt};
use mockable::Clock;
use tracing::debug;
use uuid::Uuid;

use super::models::{NewWordRow, WordRow};
use super::pool::{DbPool, PoolError};
use super::schema::words;
use crate::domain::ports::{WordEntity, WordTable, WordTableError};

/// Word table persisted in PostgreSQL.
#[derive(Clone)]
pub struct DieselWordTable {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselWordTable {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn map_pool_error(error: PoolError) -> WordTableError {
    WordTableError::connection(error.message())
}

fn map_diesel_error(error: DieselError) -> WordTableError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "word table connection closed");
            WordTableError::connection(info.message())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "word table query failed");
            WordTableError::query(info.message())
        }
        other => WordTableError::query(other.to_string()),
    }
}

async fn load_all(pool: DbPool) -> Result<Vec<WordRow>, WordTableError> {
    let mut conn = pool.get().await.map_err(map_pool_error)?;
    words::table
        .order((words::partition_key.asc(), words::row_key.asc()))
        .select(WordRow::as_select())
        .load(&mut conn)
        .await
        .map_err(map_diesel_error)
}

#[async_trait]
impl WordTable for DieselWordTable {
    async fn get_entity(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<WordEntity>, WordTableError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = words::table
            .find((partition_key, row_key))
            .select(WordRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(WordEntity::from))
    }

    fn query_entities(&self) -> BoxStream<'static, Result<WordEntity, WordTableError>> {
        let pool = self.pool.clone();
        stream::once(load_all(pool))
            .flat_map(|loaded| match loaded {
                Ok(rows) => stream::iter(rows.into_iter().map(|row| Ok(WordEntity::from(row)))).boxed(),
                Err(err) => stream::iter([Err(err)]).boxed(),
            })
            .boxed()
    }

    async fn upsert_entity(&self, entity: &WordEntity) -> Result<(), WordTableError> {
        let etag = Uuid::new_v4().to_string();
        let row = NewWordRow {
            partition_key: &entity.partition_key,
            row_key: &entity.row_key,
            etag: &etag,
            last_modified: self.clock.utc(),
            value: &entity.value,
            sounds_like: entity.sounds_like.as_deref(),
            meaning: &entity.meaning,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(words::table)
            .values(&row)
            .on_conflict((words::partition_key, words::row_key))
            .do_update()
            .set(row.changeset())
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete_entity(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<(), WordTableError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(words::table.find((partition_key, row_key)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if removed == 0 {
            return Err(WordTableError::not_found(partition_key, row_key));
        }
        Ok(())
    }
}
