//! WP-004: Recipe catalog — CSV load, save (atomic), in-memory mutations.
//!
//! The catalog file has the fixed header
//! `Gericht,Kategorie,Zutaten,Zubereitungszeit,Quelle`. A missing file is an
//! empty catalog. Mutations happen on a [`Catalog`] value; nothing touches
//! disk until [`RecipeStore::save`] is called with it.

use super::error::{Error, Result};
use super::types::{MealSlot, NewRecipe, Recipe};
use std::path::{Path, PathBuf};

/// Column header of the catalog file, in order.
pub const COLUMNS: [&str; 5] = ["Gericht", "Kategorie", "Zutaten", "Zubereitungszeit", "Quelle"];

/// Handle on the backing catalog file.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog. Returns an empty catalog if the file doesn't exist.
    pub fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "catalog file absent, starting empty");
            return Ok(Catalog::default());
        }
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&self.path)
            .map_err(|e| Error::csv(&self.path, e))?;

        let mut recipes = Vec::new();
        for row in reader.deserialize::<Recipe>() {
            recipes.push(row.map_err(|e| Error::csv(&self.path, e))?);
        }
        tracing::info!(path = %self.path.display(), recipes = recipes.len(), "catalog loaded");
        Ok(Catalog { recipes })
    }

    /// Save the catalog atomically (write to temp, then rename). The header
    /// row is always written, so an empty catalog still carries every column.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let tmp_path = self.path.with_extension("csv.tmp");
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp_path)
            .map_err(|e| Error::csv(&tmp_path, e))?;
        writer
            .write_record(COLUMNS)
            .map_err(|e| Error::csv(&tmp_path, e))?;
        for recipe in &catalog.recipes {
            writer
                .serialize(recipe)
                .map_err(|e| Error::csv(&tmp_path, e))?;
        }
        writer.flush().map_err(|e| Error::io(&tmp_path, e))?;
        drop(writer);

        std::fs::rename(&tmp_path, &self.path).map_err(|e| Error::io(&self.path, e))?;
        tracing::info!(path = %self.path.display(), recipes = catalog.len(), "catalog saved");
        Ok(())
    }

    /// Materialize an empty catalog file if none exists yet.
    pub fn init(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&Catalog::default())?;
        Ok(true)
    }
}

/// In-memory recipe catalog, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// First recipe with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Validate and append a recipe. Text fields are trimmed. On error the
    /// catalog is unchanged.
    pub fn add(&mut self, new: NewRecipe) -> Result<&Recipe> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(Error::MissingField("Gericht"));
        }
        let category = new.category.ok_or(Error::MissingField("Kategorie"))?;
        let ingredients = new.ingredients.trim();
        if ingredients.is_empty() {
            return Err(Error::MissingField("Zutaten"));
        }
        if self.contains(name) {
            return Err(Error::DuplicateRecipe(name.to_string()));
        }

        self.recipes.push(Recipe {
            name: name.to_string(),
            category,
            ingredients: ingredients.to_string(),
            prep_time: new.prep_time.trim().to_string(),
            source: new.source.trim().to_string(),
        });
        let idx = self.recipes.len() - 1;
        Ok(&self.recipes[idx])
    }

    /// Remove every recipe with this name, returning the first removed.
    pub fn remove(&mut self, name: &str) -> Result<Recipe> {
        let idx = self
            .recipes
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| Error::RecipeNotFound(name.to_string()))?;
        let removed = self.recipes.remove(idx);
        self.recipes.retain(|r| r.name != name);
        Ok(removed)
    }

    /// Recipes in a category, or all recipes for `None`.
    pub fn filter(&self, category: Option<MealSlot>) -> impl Iterator<Item = &Recipe> {
        self.recipes
            .iter()
            .filter(move |r| category.is_none_or(|c| r.category == c))
    }

    /// Distinct categories present, in slot order.
    pub fn categories(&self) -> Vec<MealSlot> {
        let mut cats: Vec<_> = self.recipes.iter().map(|r| r.category).collect();
        cats.sort();
        cats.dedup();
        cats
    }

    /// Recipe names selectable for a slot, in catalog order.
    pub fn options_for_slot(&self, slot: MealSlot) -> Vec<&str> {
        self.filter(Some(slot)).map(|r| r.name.as_str()).collect()
    }
}
