//! Test doubles for the identity provider and the customer store.

use crate::{
    Customer, CustomerRequest, CustomerStore, CustomerValidator, IdentityError, IdentityVerifier,
    NewCustomer, StoreError, StoreResult,
};

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub(crate) const VALID_GITHUB_USER: &str = "validuser";
pub(crate) const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Knows a fixed set of usernames and counts how often it was asked
pub(crate) struct FakeIdentityVerifier {
    known: HashSet<String>,
    calls: AtomicUsize,
}

impl FakeIdentityVerifier {
    pub(crate) fn with_users(users: &[&str]) -> Self {
        Self {
            known: users.iter().map(|u| u.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityVerifier for FakeIdentityVerifier {
    async fn exists(&self, username: &str) -> Result<bool, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.known.contains(username))
    }
}

/// Every check fails as if the provider were down
pub(crate) struct UnreachableIdentityVerifier;

#[async_trait]
impl IdentityVerifier for UnreachableIdentityVerifier {
    async fn exists(&self, _username: &str) -> Result<bool, IdentityError> {
        Err(IdentityError::transport("connection refused"))
    }
}

/// Never answers
pub(crate) struct HangingIdentityVerifier;

#[async_trait]
impl IdentityVerifier for HangingIdentityVerifier {
    async fn exists(&self, _username: &str) -> Result<bool, IdentityError> {
        std::future::pending::<()>().await;
        Ok(true)
    }
}

#[derive(Default)]
pub(crate) struct InMemoryCustomerStore {
    customers: RwLock<Vec<Customer>>,
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn create(&self, customer: NewCustomer) -> StoreResult<Customer> {
        let customer = Customer::new(customer);
        self.customers.write().await.push(customer.clone());
        Ok(customer)
    }

    async fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        Ok(self.customers.read().await.clone())
    }

    async fn replace(&self, id: Uuid, customer: NewCustomer) -> StoreResult<Option<Customer>> {
        let mut customers = self.customers.write().await;
        Ok(customers.iter_mut().find(|c| c.id == id).map(|existing| {
            existing.full_name = customer.full_name;
            existing.email = customer.email;
            existing.github_username = customer.github_username;
            existing.date_of_birth = customer.date_of_birth;
            existing.updated_at = Utc::now();
            existing.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut customers = self.customers.write().await;
        let before = customers.len();
        customers.retain(|c| c.id != id);
        Ok(customers.len() < before)
    }
}

/// Store whose backing storage is gone
pub(crate) struct BrokenCustomerStore;

#[async_trait]
impl CustomerStore for BrokenCustomerStore {
    async fn create(&self, _customer: NewCustomer) -> StoreResult<Customer> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn get_by_id(&self, _id: Uuid) -> StoreResult<Option<Customer>> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn replace(&self, _id: Uuid, _customer: NewCustomer) -> StoreResult<Option<Customer>> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn delete(&self, _id: Uuid) -> StoreResult<bool> {
        Err(StoreError::unavailable("disk I/O error"))
    }
}

pub(crate) fn validator_with(verifier: Arc<dyn IdentityVerifier>) -> CustomerValidator {
    CustomerValidator::new(verifier, CHECK_TIMEOUT)
}

pub(crate) fn valid_request() -> CustomerRequest {
    CustomerRequest {
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        github_username: VALID_GITHUB_USER.to_string(),
        date_of_birth: "1990-01-01".to_string(),
    }
}
