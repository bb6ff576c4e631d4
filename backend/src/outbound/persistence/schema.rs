//! Diesel schema for the word table.

diesel::table! {
    words (partition_key, row_key) {
        partition_key -> Varchar,
        row_key -> Varchar,
        etag -> Varchar,
        last_modified -> Timestamptz,
        value -> Text,
        sounds_like -> Nullable<Text>,
        meaning -> Text,
    }
}
