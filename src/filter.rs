use crate::model::Recipe;
use serde::{Deserialize, Serialize};

/// User-selected dietary restriction used to narrow the displayed recipe
/// list. The serialized form is the display string persisted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DietaryFilter {
    #[default]
    All,
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Dairy-Free")]
    DairyFree,
}

impl DietaryFilter {
    pub const ALL_FILTERS: [DietaryFilter; 5] = [
        DietaryFilter::All,
        DietaryFilter::Vegetarian,
        DietaryFilter::Vegan,
        DietaryFilter::GlutenFree,
        DietaryFilter::DairyFree,
    ];

    /// The persisted/display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryFilter::All => "All",
            DietaryFilter::Vegetarian => "Vegetarian",
            DietaryFilter::Vegan => "Vegan",
            DietaryFilter::GlutenFree => "Gluten-Free",
            DietaryFilter::DairyFree => "Dairy-Free",
        }
    }

    /// Parses a persisted filter string, falling back to `All` for anything
    /// unrecognized (including values written by older app versions).
    pub fn from_saved(value: &str) -> Self {
        Self::ALL_FILTERS
            .into_iter()
            .find(|filter| filter.as_str() == value)
            .unwrap_or_default()
    }

    /// Keeps the recipes matching this filter, preserving order. `All` is
    /// the identity. Pure: the input slice is untouched.
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        recipes
            .iter()
            .filter(|recipe| self.matches(recipe))
            .cloned()
            .collect()
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            DietaryFilter::All => true,
            DietaryFilter::Vegetarian => recipe.is_vegetarian,
            DietaryFilter::Vegan => recipe.is_vegan,
            DietaryFilter::GlutenFree => recipe.is_gluten_free,
            DietaryFilter::DairyFree => recipe.is_dairy_free,
        }
    }
}
