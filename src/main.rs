use std::env;

use hungry_core::providers::ProviderFactory;
use hungry_core::{RecipeError, RecipeRequest};

#[tokio::main]
async fn main() -> Result<(), RecipeError> {
    env_logger::init();

    // Ingredient names come from the command line
    let ingredients: Vec<String> = env::args().skip(1).collect();
    if ingredients.is_empty() {
        return Err(RecipeError::BuilderError(format!(
            "Usage: hungry <ingredient> [<ingredient> ...] (providers: {})",
            ProviderFactory::available_providers().join(", ")
        )));
    }

    let recipes = RecipeRequest::builder()
        .ingredients(ingredients)
        .build()
        .await?;

    println!("{}", serde_json::to_string_pretty(&recipes)?);

    Ok(())
}
