/// The system prompt used for generating recipe suggestions.
///
/// This prompt pins the model to the exact JSON array shape the strict
/// decoder expects, including the camelCase field names and the four
/// independent dietary flags.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_GENERATOR_PROMPT: &str = include_str!("prompt.txt");

/// Formats an ingredient list as the user message for the generation call.
pub fn ingredients_message(ingredients: &[String]) -> String {
    format!("Available ingredients: {}", ingredients.join(", "))
}
