//! Best-effort field extraction for responses that fail strict decoding.
//!
//! The dominant failure mode of model-generated "JSON" is breakage at the
//! array level (a stray trailing comma, a chatty preamble) while the
//! individual object bodies stay line-oriented and recognizable. So instead
//! of repairing the JSON, the text is split into per-record fragments at the
//! `},{` boundary between sibling objects, and each fragment is scanned line
//! by line for known field markers. Anything that cannot be recovered takes
//! its documented default. This is a heuristic, not a parser: it does not
//! handle nested objects or arrays-within-arrays, and a degraded but
//! complete recipe is preferred over no recipe.

use crate::model::Recipe;

/// Boundary between sibling objects, the one piece of array syntax the
/// splitter relies on.
const RECORD_DELIMITER: &str = "},{";

/// Extracts one recipe per `},{`-delimited fragment.
///
/// Every fragment yields exactly one record, even a fragment with no
/// recognizable fields (which yields an all-default recipe). Each record
/// gets a freshly generated id.
pub fn extract_recipes(text: &str) -> Vec<Recipe> {
    text.split(RECORD_DELIMITER).map(extract_recipe).collect()
}

/// Scans a fragment's lines for field markers. A line feeds at most one
/// field; markers are tried in a fixed priority order and the first match
/// wins.
fn extract_recipe(fragment: &str) -> Recipe {
    let mut recipe = Recipe::default();

    for line in fragment.lines() {
        if line.contains("\"name\":") {
            recipe.name = scalar_value(line);
        } else if line.contains("\"ingredients\":") {
            recipe.ingredients = sequence_value(line);
        } else if line.contains("\"instructions\":") {
            recipe.instructions = sequence_value(line);
        } else if line.contains("\"prepTime\":") {
            recipe.prep_time = scalar_value(line).parse().unwrap_or(0);
        } else if line.contains("\"requiredAppliances\":") {
            recipe.required_appliances = sequence_value(line);
        } else if line.contains("\"isVegetarian\":") {
            recipe.is_vegetarian = bool_value(line);
        } else if line.contains("\"isVegan\":") {
            recipe.is_vegan = bool_value(line);
        } else if line.contains("\"isGlutenFree\":") {
            recipe.is_gluten_free = bool_value(line);
        } else if line.contains("\"isDairyFree\":") {
            recipe.is_dairy_free = bool_value(line);
        }
    }

    recipe
}

/// Everything after the first colon, cleaned up. Joining after the first
/// colon keeps colons inside the value intact.
fn scalar_value(line: &str) -> String {
    let value = line.splitn(2, ':').nth(1).unwrap_or("");
    value
        .trim()
        .replace('"', "")
        .trim_end_matches(',')
        .trim()
        .to_string()
}

fn bool_value(line: &str) -> bool {
    scalar_value(line).to_lowercase() == "true"
}

/// Same colon split as [`scalar_value`], then the bracketed list is split
/// on commas with empty elements dropped.
fn sequence_value(line: &str) -> Vec<String> {
    let value = line.splitn(2, ':').nth(1).unwrap_or("");
    value
        .replace(['[', ']', '"'], "")
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = r#"{
        "name": "Vegetable Stir-Fry",
        "ingredients": ["Mixed vegetables", "Tofu", "Soy sauce"],
        "instructions": ["Chop vegetables", "Fry tofu", "Add sauce"],
        "prepTime": 25,
        "requiredAppliances": ["Wok", "Stove"],
        "isVegetarian": true,
        "isVegan": true,
        "isGlutenFree": true,
        "isDairyFree": true
    }"#;

    #[test]
    fn test_extracts_all_fields_from_fragment() {
        let recipes = extract_recipes(FRAGMENT);
        assert_eq!(recipes.len(), 1);

        let recipe = &recipes[0];
        assert_eq!(recipe.name, "Vegetable Stir-Fry");
        assert_eq!(
            recipe.ingredients,
            vec!["Mixed vegetables", "Tofu", "Soy sauce"]
        );
        assert_eq!(
            recipe.instructions,
            vec!["Chop vegetables", "Fry tofu", "Add sauce"]
        );
        assert_eq!(recipe.prep_time, 25);
        assert_eq!(recipe.required_appliances, vec!["Wok", "Stove"]);
        assert!(recipe.is_vegetarian && recipe.is_vegan);
        assert!(recipe.is_gluten_free && recipe.is_dairy_free);
    }

    #[test]
    fn test_one_record_per_delimiter_fragment() {
        let text = "\"name\": \"A\"\n},{\n\"name\": \"B\"\n},{\n\"name\": \"C\"";
        let recipes = extract_recipes(text);
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[0].name, "A");
        assert_eq!(recipes[1].name, "B");
        assert_eq!(recipes[2].name, "C");
    }

    #[test]
    fn test_unrecognizable_fragment_yields_default_record() {
        let recipes = extract_recipes("the model apologizes for the confusion");
        assert_eq!(recipes.len(), 1);

        let recipe = &recipes[0];
        assert_eq!(recipe.name, "");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.prep_time, 0);
        assert!(recipe.required_appliances.is_empty());
        assert!(!recipe.is_vegetarian && !recipe.is_vegan);
        assert!(!recipe.is_gluten_free && !recipe.is_dairy_free);
    }

    #[test]
    fn test_empty_input_yields_one_default_record() {
        let recipes = extract_recipes("");
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0], Recipe { id: recipes[0].id, ..Recipe::default() });
    }

    #[test]
    fn test_non_numeric_prep_time_defaults_to_zero() {
        let recipes = extract_recipes("\"prepTime\": \"fast\",\n\"name\": \"Smoothie\"");
        assert_eq!(recipes[0].prep_time, 0);
        assert_eq!(recipes[0].name, "Smoothie");
    }

    #[test]
    fn test_value_with_interior_colon_survives() {
        let recipes = extract_recipes("\"name\": \"Breakfast: the easy way\",");
        assert_eq!(recipes[0].name, "Breakfast: the easy way");
    }

    #[test]
    fn test_boolean_parsing_is_strict() {
        let recipes = extract_recipes("\"isVegan\": True,\n\"isVegetarian\": yes,");
        // "True" lowercases to "true"; "yes" does not
        assert!(recipes[0].is_vegan);
        assert!(!recipes[0].is_vegetarian);
    }

    #[test]
    fn test_sequence_drops_empty_elements() {
        let recipes = extract_recipes("\"ingredients\": [\"Eggs\", , \"Flour\", \"\"],");
        assert_eq!(recipes[0].ingredients, vec!["Eggs", "Flour"]);
    }

    #[test]
    fn test_first_marker_wins_per_line() {
        // Priority order says "name" is tried before "ingredients"
        let recipes = extract_recipes("\"name\": \"Salad\" \"ingredients\": [\"Lettuce\"]");
        assert_eq!(recipes[0].name, "Salad ingredients: [Lettuce]");
        assert!(recipes[0].ingredients.is_empty());
    }

    #[test]
    fn test_fresh_ids_per_extraction() {
        let recipes = extract_recipes("\"name\": \"A\"\n},{\n\"name\": \"A\"");
        assert_ne!(recipes[0].id, recipes[1].id);
    }
}
