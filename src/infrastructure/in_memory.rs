use crate::domain::ports::StaticCodeProvider;
use crate::error::{QrisError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory static code provider.
///
/// Maps credentials to the static payload of the merchant they belong to.
/// Stands in for the merchant dashboard in tests and local runs.
#[derive(Default, Clone)]
pub struct InMemoryStaticCodeProvider {
    payloads: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStaticCodeProvider {
    /// Creates a new, empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `credential` with a merchant's static payload.
    pub async fn register(&self, credential: impl Into<String>, payload: impl Into<String>) {
        let mut payloads = self.payloads.write().await;
        payloads.insert(credential.into(), payload.into());
    }
}

#[async_trait]
impl StaticCodeProvider for InMemoryStaticCodeProvider {
    async fn static_payload(&self, credential: &str) -> Result<String> {
        let payloads = self.payloads.read().await;
        payloads
            .get(credential)
            .cloned()
            .ok_or_else(|| QrisError::Unauthorized("Unknown credential".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_provider() {
        let provider = InMemoryStaticCodeProvider::new();
        provider.register("token-a", "000201010211").await;

        let payload = provider.static_payload("token-a").await.unwrap();
        assert_eq!(payload, "000201010211");

        assert!(matches!(
            provider.static_payload("token-b").await,
            Err(QrisError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_register_replaces_payload() {
        let provider = InMemoryStaticCodeProvider::new();
        provider.register("token-a", "000201010211").await;
        provider.register("token-a", "0002015802ID").await;

        let payload = provider.static_payload("token-a").await.unwrap();
        assert_eq!(payload, "0002015802ID");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let provider = InMemoryStaticCodeProvider::new();
        let clone = provider.clone();
        clone.register("token-a", "000201010211").await;

        assert!(provider.static_payload("token-a").await.is_ok());
    }
}
