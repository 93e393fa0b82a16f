use crate::config::{AppConfig, ProviderConfig};
use crate::error::RecipeError;
use crate::filter::DietaryFilter;
use crate::model::Recipe;
use crate::parse_recipes;
use crate::providers::{ProviderFactory, DEFAULT_TIMEOUT};
use std::time::Duration;

/// Represents the input source for a recipe request
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Ask the configured LLM provider for suggestions from an ingredient list
    Ingredients(Vec<String>),
    /// Parse an already-received response body (no network)
    RawResponse(String),
}

/// Named LLM provider selection
#[derive(Debug, Clone, Copy)]
pub enum ProviderKind {
    OpenAI,
    Ollama,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Ollama => "ollama",
        }
    }
}

/// Builder for configuring and executing a recipe request
#[derive(Debug, Default)]
pub struct RecipeRequestBuilder {
    source: Option<InputSource>,
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
    filter: Option<DietaryFilter>,
}

impl RecipeRequestBuilder {
    /// Set the input source to an ingredient list
    ///
    /// # Example
    /// ```
    /// use hungry_core::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder()
    ///     .ingredients(["Eggs", "Flour"]);
    /// ```
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = Some(InputSource::Ingredients(
            ingredients.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Set the input source to a response body already in hand
    ///
    /// Use this when the completion call happened elsewhere and only the
    /// resilient parse is needed. No network request is made.
    ///
    /// # Example
    /// ```
    /// use hungry_core::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder()
    ///     .raw_response("[{\"name\": \"Toast\"}]");
    /// ```
    pub fn raw_response(mut self, response: impl Into<String>) -> Self {
        self.source = Some(InputSource::RawResponse(response.into()));
        self
    }

    /// Set a specific LLM provider instead of the configured default
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the LLM provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the LLM provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Apply a dietary filter to the parsed recipes before returning them
    pub fn filter(mut self, filter: DietaryFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Build and execute the recipe request
    ///
    /// # Returns
    /// The parsed (and optionally filtered) recipes
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - No input source was specified
    /// - The ingredient list is empty
    /// - The provider cannot be constructed or its request fails
    ///
    /// Parse failures are never errors: malformed response text degrades to
    /// fallback extraction, not to an `Err`.
    pub async fn build(mut self) -> Result<Vec<Recipe>, RecipeError> {
        let source = self.source.take().ok_or_else(|| {
            RecipeError::BuilderError(
                "No input source specified. Use .ingredients() or .raw_response()".to_string(),
            )
        })?;

        let recipes = match source {
            InputSource::RawResponse(response) => parse_recipes(&response),

            InputSource::Ingredients(ingredients) => {
                if ingredients.is_empty() {
                    return Err(RecipeError::BuilderError(
                        "Ingredient list cannot be empty".to_string(),
                    ));
                }

                let provider = self.resolve_provider()?;
                let response = provider
                    .generate_recipes(&ingredients)
                    .await
                    .map_err(|e| RecipeError::ProviderError(e.to_string()))?;
                parse_recipes(&response)
            }
        };

        Ok(match self.filter {
            Some(filter) => filter.apply(&recipes),
            None => recipes,
        })
    }

    fn resolve_provider(
        &self,
    ) -> Result<Box<dyn crate::providers::LlmProvider>, RecipeError> {
        // Direct overrides skip the config file entirely
        if self.api_key.is_some() || self.model.is_some() {
            let name = self.provider.unwrap_or(ProviderKind::OpenAI);
            let config = ProviderConfig {
                enabled: true,
                model: self.model.clone().unwrap_or_else(|| "gpt-4o".to_string()),
                temperature: 0.7,
                max_tokens: 2000,
                api_key: self.api_key.clone(),
                base_url: None,
            };
            return ProviderFactory::create(name.as_str(), &config, DEFAULT_TIMEOUT)
                .map_err(|e| RecipeError::ProviderError(e.to_string()));
        }

        let config = AppConfig::load()?;
        match self.provider {
            Some(kind) => {
                let provider_config = config.providers.get(kind.as_str()).ok_or_else(|| {
                    RecipeError::BuilderError(format!(
                        "Provider '{}' not found in configuration",
                        kind.as_str()
                    ))
                })?;
                ProviderFactory::create(
                    kind.as_str(),
                    provider_config,
                    Duration::from_secs(config.timeout),
                )
                .map_err(|e| RecipeError::ProviderError(e.to_string()))
            }
            None => ProviderFactory::get_default_provider(&config)
                .map_err(|e| RecipeError::ProviderError(e.to_string())),
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeRequest;

impl RecipeRequest {
    /// Creates a new builder for requesting recipes
    ///
    /// # Example
    /// ```
    /// use hungry_core::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder();
    /// ```
    pub fn builder() -> RecipeRequestBuilder {
        RecipeRequestBuilder::default()
    }
}
