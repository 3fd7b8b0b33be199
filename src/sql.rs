//! Binding and reading week dates as SQLite `TEXT` columns.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Type, ValueRef};

use crate::{DecodeError, ValidationError, WeekDate, decode, encode};

/// Error type for moving week dates in and out of SQLite.
///
/// Carried as the boxed source of rusqlite's conversion errors, so it can be
/// recovered with `downcast_ref::<SqlError>()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlError {
    /// Encoding the value for a parameter failed.
    #[error("unable to bind value: {0}")]
    Bind(#[source] ValidationError),

    /// A text or blob column did not hold a valid week date.
    #[error("unable to scan value: {0}")]
    Scan(#[source] DecodeError),

    /// The column held neither text nor a blob.
    #[error("unable to scan value: incompatible type {0}")]
    IncompatibleSource(Type),
}

impl ToSql for WeekDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let (year, week) = self.into_parts();
        let text = encode(year, week)
            .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(SqlError::Bind(err))))?;
        Ok(ToSqlOutput::from(text))
    }
}

impl FromSql for WeekDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let decoded = match value {
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => decode(bytes).map_err(SqlError::Scan),
            other => Err(SqlError::IncompatibleSource(other.data_type())),
        };
        decoded.map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}
