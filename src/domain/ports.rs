use crate::error::Result;
use async_trait::async_trait;

/// Source of a merchant's static QRIS payload.
///
/// Implementations authenticate `credential` against the merchant dashboard
/// and return the payload as issued, checksum included. A failure means no
/// input is available; callers do not retry.
#[async_trait]
pub trait StaticCodeProvider: Send + Sync {
    async fn static_payload(&self, credential: &str) -> Result<String>;
}

pub type StaticCodeProviderBox = Box<dyn StaticCodeProvider>;
