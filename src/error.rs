use thiserror::Error;

/// Errors from the boundaries around the parser. The parse path itself is
/// total and never produces one of these.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The provider could not be reached or its completion could not be used
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Request builder misuse
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Reading or writing the recipe store failed
    #[error("Store I/O error: {0}")]
    StoreIo(#[from] std::io::Error),

    /// Recipe data could not be serialized or deserialized
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
