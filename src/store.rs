//! Persistence boundary for recipes and the dietary-filter preference.
//!
//! The parser only produces recipes; whoever owns a store decides what to
//! keep. The store is injected where needed rather than reached through a
//! process-wide singleton.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RecipeError;
use crate::filter::DietaryFilter;
use crate::model::Recipe;

/// Storage for saved recipes and the active dietary-filter selection.
///
/// The filter is stored in its serialized string form; loading an absent or
/// unrecognized value yields [`DietaryFilter::All`].
pub trait RecipeStore {
    fn save(&mut self, recipe: &Recipe) -> Result<(), RecipeError>;
    fn fetch_all(&self) -> Result<Vec<Recipe>, RecipeError>;
    fn delete(&mut self, recipe_id: Uuid) -> Result<(), RecipeError>;
    fn save_filter_preference(&mut self, filter: DietaryFilter) -> Result<(), RecipeError>;
    fn load_filter_preference(&self) -> Result<DietaryFilter, RecipeError>;
}

/// On-disk snapshot format of [`JsonFileStore`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreSnapshot {
    recipes: Vec<Recipe>,
    #[serde(default)]
    dietary_filter: Option<String>,
}

/// A single-file JSON store, sized for a one-user app.
///
/// Every mutation rewrites the whole file. A missing file reads as an empty
/// store; a corrupt file is an error on load, not a panic.
pub struct JsonFileStore {
    path: PathBuf,
    snapshot: StoreSnapshot,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating an empty one if the file does
    /// not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RecipeError> {
        let path = path.into();
        let snapshot = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            StoreSnapshot::default()
        };

        Ok(JsonFileStore { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), RecipeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.snapshot)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl RecipeStore for JsonFileStore {
    /// Saves a recipe, replacing any existing record with the same id.
    fn save(&mut self, recipe: &Recipe) -> Result<(), RecipeError> {
        match self.snapshot.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe.clone(),
            None => self.snapshot.recipes.push(recipe.clone()),
        }
        self.persist()
    }

    fn fetch_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.snapshot.recipes.clone())
    }

    /// Deleting an id that is not present is a no-op.
    fn delete(&mut self, recipe_id: Uuid) -> Result<(), RecipeError> {
        let before = self.snapshot.recipes.len();
        self.snapshot.recipes.retain(|recipe| recipe.id != recipe_id);
        if self.snapshot.recipes.len() == before {
            warn!("Delete requested for unknown recipe id {recipe_id}");
            return Ok(());
        }
        self.persist()
    }

    fn save_filter_preference(&mut self, filter: DietaryFilter) -> Result<(), RecipeError> {
        self.snapshot.dietary_filter = Some(filter.as_str().to_string());
        self.persist()
    }

    fn load_filter_preference(&self) -> Result<DietaryFilter, RecipeError> {
        Ok(self
            .snapshot
            .dietary_filter
            .as_deref()
            .map(DietaryFilter::from_saved)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(name: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients: vec!["Bread".to_string()],
            instructions: vec!["Toast it".to_string()],
            prep_time: 2,
            ..Recipe::default()
        }
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.path(), path);
        assert!(store.fetch_all().unwrap().is_empty());
        assert_eq!(store.load_filter_preference().unwrap(), DietaryFilter::All);
    }

    #[test]
    fn test_save_and_fetch_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recipes.json");

        let recipe = sample("Toast");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.save(&recipe).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.fetch_all().unwrap(), vec![recipe]);
    }

    #[test]
    fn test_save_same_id_replaces() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("recipes.json")).unwrap();

        let mut recipe = sample("Toast");
        store.save(&recipe).unwrap();
        recipe.prep_time = 5;
        store.save(&recipe).unwrap();

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].prep_time, 5);
    }

    #[test]
    fn test_delete_removes_by_id() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("recipes.json")).unwrap();

        let keep = sample("Keep");
        let remove = sample("Remove");
        store.save(&keep).unwrap();
        store.save(&remove).unwrap();

        store.delete(remove.id).unwrap();
        assert_eq!(store.fetch_all().unwrap(), vec![keep]);

        // Unknown id is a no-op
        store.delete(Uuid::new_v4()).unwrap();
        assert_eq!(store.fetch_all().unwrap().len(), 1);
    }

    #[test]
    fn test_filter_preference_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recipes.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.save_filter_preference(DietaryFilter::GlutenFree).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.load_filter_preference().unwrap(),
            DietaryFilter::GlutenFree
        );
    }

    #[test]
    fn test_unrecognized_stored_filter_defaults_to_all() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, r#"{"recipes": [], "dietary_filter": "Paleo"}"#).unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.load_filter_preference().unwrap(), DietaryFilter::All);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(JsonFileStore::open(&path).is_err());
    }
}
