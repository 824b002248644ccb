//! Insert and read operations on the `queries` table.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension as _, params};
use travel_qa_core::{NewQuery, Page, QueryRecord};

use crate::StorageError;
use crate::storage::{Storage, get_conn};

const SELECT_COLUMNS: &str = "SELECT id, query, response, user_id, created_at, response_time, success FROM queries";

fn to_sql_int(value: u64, name: &str) -> Result<i64, StorageError> {
    i64::try_from(value).map_err(|_| StorageError::InvalidArgument(format!("{name} out of range: {value}")))
}

impl Storage {
    /// Appends a record and returns its id. `created_at` is taken from the
    /// store's clock at insertion time.
    ///
    /// # Errors
    /// Returns error if the insert fails.
    pub fn insert(&self, new: &NewQuery) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        conn.execute(
            "INSERT INTO queries (query, response, user_id, created_at, response_time)
               VALUES (?1, ?2, ?3, ?4, ?5)",
            params![new.query, new.response, new.user_id, created_at, new.response_time],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, user_id = ?new.user_id, "Saved query record");
        Ok(id)
    }

    /// Records newest first, optionally restricted to one user, sliced by
    /// `offset`/`limit`. `total` counts every matching record.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidArgument`] when `limit` is zero, or a
    /// database error if either query fails.
    pub fn list(
        &self,
        user_id: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Page<QueryRecord>, StorageError> {
        if limit == 0 {
            return Err(StorageError::InvalidArgument("limit must be at least 1".to_owned()));
        }
        let sql_limit = to_sql_int(limit, "limit")?;
        let sql_offset = to_sql_int(offset, "offset")?;

        let conn = get_conn(&self.pool)?;

        let total: i64 = if let Some(u) = user_id {
            conn.query_row("SELECT COUNT(*) FROM queries WHERE user_id = ?1", params![u], |row| {
                row.get(0)
            })?
        } else {
            conn.query_row("SELECT COUNT(*) FROM queries", [], |row| row.get(0))?
        };

        let items = if let Some(u) = user_id {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_COLUMNS} WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3"
            ))?;
            stmt.query_map(params![u, sql_limit, sql_offset], row_to_record)?
                .collect::<Result<Vec<_>, _>>()?
        } else {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2"
            ))?;
            stmt.query_map(params![sql_limit, sql_offset], row_to_record)?
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Page::new(items, total.max(0).unsigned_abs(), offset, limit))
    }

    /// Single record by id; `Ok(None)` when no such id exists.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn get_by_id(&self, id: i64) -> Result<Option<QueryRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let record = conn
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], row_to_record)
            .optional()?;
        Ok(record)
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<QueryRecord> {
    let created_at_str: String = row.get(4)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(QueryRecord {
        id: row.get(0)?,
        query: row.get(1)?,
        response: row.get(2)?,
        user_id: row.get(3)?,
        created_at,
        response_time: row.get(5)?,
        success: row.get(6)?,
    })
}
