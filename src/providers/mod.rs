mod factory;
mod ollama;
mod open_ai;
mod prompt;

pub use factory::ProviderFactory;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{ingredients_message, RECIPE_GENERATOR_PROMPT};

use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;

/// Request timeout used when no configuration is in play.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client with the given request timeout applied.
pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

/// Unified trait for all LLM providers.
///
/// A provider turns an ingredient list into raw completion text. It does
/// not parse: the text goes through [`crate::parse_recipes`], which
/// tolerates whatever formatting the model actually produced.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "ollama")
    fn provider_name(&self) -> &str;

    /// Request recipe suggestions for the given ingredients, returning the
    /// raw response text
    async fn generate_recipes(
        &self,
        ingredients: &[String],
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}
