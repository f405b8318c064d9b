//! Customer operations: validation in front of persistence.
//!
//! | Operation | Steps                                   | Failures                                  |
//! |-----------|-----------------------------------------|-------------------------------------------|
//! | create    | validate, store                         | ValidationFailed, ExternalCheckUnavailable |
//! | get       | load                                    | NotFound                                  |
//! | list      | load all                                | -                                         |
//! | update    | existence check, validate, replace      | NotFound, ValidationFailed, ExternalCheckUnavailable |
//! | delete    | existence check, delete                 | NotFound                                  |
//!
//! Any operation can also end in `CoreError::Storage`.

use crate::{
    CoreError, Customer, CustomerRequest, CustomerStore, CustomerValidator, Result as CoreResult,
};

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

pub struct CustomerService {
    validator: CustomerValidator,
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(validator: CustomerValidator, store: Arc<dyn CustomerStore>) -> Self {
        Self { validator, store }
    }

    pub async fn create(&self, request: &CustomerRequest) -> CoreResult<Customer> {
        debug!("Creating customer");

        let new_customer = self.validator.validate(request).await?;
        let customer = self.store.create(new_customer).await?;

        info!("Created customer {}", customer.id);
        Ok(customer)
    }

    pub async fn get(&self, id: Uuid) -> CoreResult<Customer> {
        debug!("Fetching customer {}", id);

        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(id))
    }

    pub async fn list(&self) -> CoreResult<Vec<Customer>> {
        let customers = self.store.list_all().await?;
        debug!("Listed {} customers", customers.len());
        Ok(customers)
    }

    /// Replace every field of an existing customer.
    ///
    /// Existence is checked before validation so an unknown id is reported as
    /// not found even when the request is also invalid.
    pub async fn update(&self, id: Uuid, request: &CustomerRequest) -> CoreResult<Customer> {
        debug!("Updating customer {}", id);

        if self.store.get_by_id(id).await?.is_none() {
            return Err(CoreError::not_found(id));
        }

        let new_customer = self.validator.validate(request).await?;

        // Deleted between the check and the write
        let customer = self
            .store
            .replace(id, new_customer)
            .await?
            .ok_or_else(|| CoreError::not_found(id))?;

        info!("Updated customer {}", id);
        Ok(customer)
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        debug!("Deleting customer {}", id);

        if self.store.get_by_id(id).await?.is_none() {
            return Err(CoreError::not_found(id));
        }

        if !self.store.delete(id).await? {
            return Err(CoreError::not_found(id));
        }

        info!("Deleted customer {}", id);
        Ok(())
    }
}
