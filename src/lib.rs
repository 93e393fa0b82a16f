//! Turns LLM completion text into typed recipes, whatever shape the text
//! actually arrived in.
//!
//! The top-level entry point is [`parse_recipes`]: normalize the response
//! body, try a strict JSON decode, and when that fails fall back to
//! per-fragment line extraction with documented defaults. The parse path is
//! total; the caller always gets a recipe list, never an error.

pub mod builder;
pub mod config;
pub mod decode;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod providers;
pub mod store;

pub use builder::{InputSource, ProviderKind, RecipeRequest, RecipeRequestBuilder};
pub use error::RecipeError;
pub use filter::DietaryFilter;
pub use model::Recipe;
pub use store::{JsonFileStore, RecipeStore};

use log::debug;

/// Parses one complete chat-completion response body into recipes.
///
/// Never fails. A strict decode of well-formed JSON wins; anything else is
/// handed to the fallback extractor, which produces one best-effort record
/// per `},{`-delimited fragment (so even an empty response yields a single
/// all-default record).
pub fn parse_recipes(raw_response: &str) -> Vec<Recipe> {
    let normalized = normalize::normalize_response(raw_response);

    match decode::decode_recipes(&normalized) {
        Ok(recipes) => recipes,
        Err(err) => {
            debug!("Strict decode failed ({err}), falling back to line extraction");
            fallback::extract_recipes(&normalized)
        }
    }
}
