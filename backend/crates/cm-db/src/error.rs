use cm_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Callers above the store only learn that storage failed, not how
impl From<DbError> for StoreError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        log::error!("Database error: {}", error);

        match error {
            DbError::CorruptRow { message, .. } => StoreError::corrupt(message),
            other => StoreError::unavailable(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
