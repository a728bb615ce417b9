use crate::application::transform::transform;
use crate::domain::amount::Amount;
use crate::domain::ports::StaticCodeProviderBox;
use crate::error::{QrisError, Result};
use serde::Serialize;
use tracing::debug;

/// A dynamic payment code together with the amount it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentCode {
    pub amount: Amount,
    pub qris: String,
}

/// Produces amount-bound payment codes for authenticated merchants.
///
/// `PaymentCodeGenerator` fetches the merchant's static payload through its
/// `StaticCodeProvider` and rewrites it with `transform`. It holds no state of
/// its own, so a single instance can serve concurrent requests.
pub struct PaymentCodeGenerator {
    provider: StaticCodeProviderBox,
}

impl PaymentCodeGenerator {
    /// Creates a new `PaymentCodeGenerator` backed by `provider`.
    pub fn new(provider: StaticCodeProviderBox) -> Self {
        Self { provider }
    }

    /// Generates a dynamic code for `amount` on behalf of `credential`.
    ///
    /// An empty credential is rejected before the provider is called.
    pub async fn generate(&self, credential: &str, amount: &Amount) -> Result<PaymentCode> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(QrisError::Unauthorized(
                "A bearer credential is required".to_string(),
            ));
        }

        let static_payload = self.provider.static_payload(credential).await?;
        let qris = transform(&static_payload, amount.as_str())?;
        debug!(%amount, "generated payment code");

        Ok(PaymentCode {
            amount: amount.clone(),
            qris,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::transform::{ChecksumStatus, verify_checksum};
    use crate::infrastructure::in_memory::InMemoryStaticCodeProvider;

    const STATIC_PAYLOAD: &str = "0002010102115802ID6304FFFF";

    async fn generator() -> PaymentCodeGenerator {
        let provider = InMemoryStaticCodeProvider::new();
        provider.register("merchant-token", STATIC_PAYLOAD).await;
        PaymentCodeGenerator::new(Box::new(provider))
    }

    #[tokio::test]
    async fn test_generate_payment_code() {
        let generator = generator().await;
        let amount = Amount::new("100").unwrap();

        let code = generator.generate("merchant-token", &amount).await.unwrap();
        assert_eq!(code.amount, amount);
        assert_eq!(code.qris, "00020101021254031005802ID6304AC24");
        assert_eq!(verify_checksum(&code.qris).unwrap(), ChecksumStatus::Valid);
    }

    #[tokio::test]
    async fn test_generate_requires_credential() {
        let generator = generator().await;
        let amount = Amount::new("100").unwrap();

        let result = generator.generate("  ", &amount).await;
        assert!(matches!(result, Err(QrisError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_generate_unknown_credential() {
        let generator = generator().await;
        let amount = Amount::new("100").unwrap();

        let result = generator.generate("someone-else", &amount).await;
        assert!(matches!(result, Err(QrisError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_static_payload() {
        let provider = InMemoryStaticCodeProvider::new();
        provider.register("merchant-token", "0002010").await;
        let generator = PaymentCodeGenerator::new(Box::new(provider));
        let amount = Amount::new("100").unwrap();

        let result = generator.generate("merchant-token", &amount).await;
        assert!(matches!(result, Err(QrisError::FormatError(_))));
    }

    #[tokio::test]
    async fn test_payment_code_serialization() {
        let generator = generator().await;
        let amount = Amount::new("100").unwrap();
        let code = generator.generate("merchant-token", &amount).await.unwrap();

        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["amount"], "100");
        assert_eq!(json["qris"], "00020101021254031005802ID6304AC24");
    }

    #[tokio::test]
    async fn test_concurrent_generation() {
        let generator = std::sync::Arc::new(generator().await);

        let mut handles = Vec::new();
        for i in 1..=20u32 {
            let generator = generator.clone();
            handles.push(tokio::spawn(async move {
                let amount = Amount::new(&(i * 1000).to_string()).unwrap();
                generator.generate("merchant-token", &amount).await
            }));
        }

        for (i, handle) in (1..=20u32).zip(handles) {
            let code = handle.await.unwrap().unwrap();
            assert_eq!(code.amount.as_str(), (i * 1000).to_string());
            assert_eq!(verify_checksum(&code.qris).unwrap(), ChecksumStatus::Valid);
        }
    }
}
