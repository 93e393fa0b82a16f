use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recipe as produced by the parser.
///
/// Field names on the wire are the camelCase keys the model is prompted to
/// emit. Every field is always populated: parsing substitutes the documented
/// default for anything it cannot recover, so consumers never see a missing
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Stable identity used for persistence and display lists. Generated
    /// when the payload does not carry one.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Sequential steps, in order.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub required_appliances: Vec<String>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub is_dairy_free: bool,
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            id: Uuid::new_v4(),
            name: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            prep_time: 0,
            required_appliances: Vec::new(),
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            is_dairy_free: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "name": "Pasta Carbonara",
            "ingredients": ["Spaghetti", "Eggs"],
            "instructions": ["Cook pasta", "Mix"],
            "prepTime": 30,
            "requiredAppliances": ["Stove"],
            "isVegetarian": false,
            "isVegan": false,
            "isGlutenFree": false,
            "isDairyFree": false
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.name, "Pasta Carbonara");
        assert_eq!(recipe.prep_time, 30);
        assert_eq!(recipe.required_appliances, vec!["Stove"]);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let recipe: Recipe = serde_json::from_str(r#"{"name": "Toast"}"#).unwrap();
        assert_eq!(recipe.name, "Toast");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.prep_time, 0);
        assert!(!recipe.is_vegan);
    }

    #[test]
    fn test_id_is_preserved_when_present() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id": "{id}", "name": "Soup"}}"#);
        let recipe: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe.id, id);
    }
}
