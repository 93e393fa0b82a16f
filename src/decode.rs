//! Strict decoding of normalized response text as a JSON recipe array.

use crate::model::Recipe;

/// Attempts to decode the text as a JSON array of recipes.
///
/// All-or-nothing: malformed JSON, a non-array top level, or a type
/// mismatch on any field fails the whole decode, and the caller falls back
/// to line-based extraction. Records without an `id` get a generated one
/// during deserialization.
pub fn decode_recipes(text: &str) -> Result<Vec<Recipe>, serde_json::Error> {
    serde_json::from_str(text)
}
