use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// Opaque generative-text call: prompt in, text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiProviderError>;
}
