use crate::{Customer, NewCustomer};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// The backing store could not complete an operation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Customer store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored customer is corrupt: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        StoreError::Corrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Keyed persistence for customers.
///
/// Implementations must make each operation atomic for a given id and must
/// never hand out an id twice, including ids of deleted customers. A deleted
/// customer is indistinguishable from one that never existed.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Store a new customer under a freshly assigned id
    async fn create(&self, customer: NewCustomer) -> StoreResult<Customer>;

    async fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>>;

    /// All live customers, oldest first
    async fn list_all(&self) -> StoreResult<Vec<Customer>>;

    /// Overwrite every field of a live customer. `None` if there is none.
    async fn replace(&self, id: Uuid, customer: NewCustomer) -> StoreResult<Option<Customer>>;

    /// `false` if there was no live customer to delete
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}
