use crate::IdentityError;

use async_trait::async_trait;

/// Answers whether an account exists at the external identity provider.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// `Ok(false)` when the provider reports the account as missing.
    /// Any failure to get an answer is an `Err`.
    async fn exists(&self, username: &str) -> Result<bool, IdentityError>;
}
