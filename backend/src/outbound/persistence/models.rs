//! Row types mapping the `words` table to and from [`WordEntity`].

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::words;
use crate::domain::ports::WordEntity;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = words)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WordRow {
    pub partition_key: String,
    pub row_key: String,
    pub etag: String,
    pub last_modified: DateTime<Utc>,
    pub value: String,
    pub sounds_like: Option<String>,
    pub meaning: String,
}

impl From<WordRow> for WordEntity {
    fn from(row: WordRow) -> Self {
        Self {
            partition_key: row.partition_key,
            row_key: row.row_key,
            etag: Some(row.etag),
            timestamp: Some(row.last_modified),
            value: row.value,
            sounds_like: row.sounds_like,
            meaning: row.meaning,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = words)]
pub(crate) struct NewWordRow<'a> {
    pub partition_key: &'a str,
    pub row_key: &'a str,
    pub etag: &'a str,
    pub last_modified: DateTime<Utc>,
    pub value: &'a str,
    pub sounds_like: Option<&'a str>,
    pub meaning: &'a str,
}

/// Full replacement of the non-key columns.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = words)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct WordRowUpdate<'a> {
    pub etag: &'a str,
    pub last_modified: DateTime<Utc>,
    pub value: &'a str,
    pub sounds_like: Option<&'a str>,
    pub meaning: &'a str,
}

impl<'a> NewWordRow<'a> {
    pub(crate) fn changeset(&self) -> WordRowUpdate<'a> {
        WordRowUpdate {
            etag: self.etag,
            last_modified: self.last_modified,
            value: self.value,
            sounds_like: self.sounds_like,
            meaning: self.meaning,
        }
    }
}
