use crate::domain::model::Address;
use async_trait::async_trait;

#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Resolves a postal code, `None` when unknown or unreachable.
    async fn lookup(&self, cep: &str) -> Option<Address>;
}
