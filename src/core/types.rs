//! WP-001: Domain types — recipes, meal slots, week plans, shopping lists, config.
//!
//! Defines the catalog row schema, the fixed week/slot grid, derived shopping
//! list types, and the `wochenplaner.yaml` schema. Catalog rows and config
//! derive Serialize/Deserialize for CSV and YAML roundtripping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Separator between ingredients inside the `Zutaten` column.
pub const INGREDIENT_DELIMITER: char = ';';

/// Marker a plan uses for "no recipe selected".
pub const NO_SELECTION: &str = "-";

// ============================================================================
// Meal slots and days
// ============================================================================

/// One of the five fixed daily meal slots. Doubles as a recipe's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    #[serde(rename = "Frühstück")]
    Breakfast,
    #[serde(rename = "Mittagessen")]
    Lunch,
    #[serde(rename = "Snack")]
    Snack,
    #[serde(rename = "Abendessen")]
    Dinner,
    #[serde(rename = "To-Go")]
    ToGo,
}

impl MealSlot {
    pub const COUNT: usize = 5;

    /// Canonical row order of the plan table.
    pub const ALL: [MealSlot; Self::COUNT] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Snack,
        Self::Dinner,
        Self::ToGo,
    ];

    /// Label as stored in the catalog and shown in the document.
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Frühstück",
            Self::Lunch => "Mittagessen",
            Self::Snack => "Snack",
            Self::Dinner => "Abendessen",
            Self::ToGo => "To-Go",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Breakfast => "🥣",
            Self::Lunch => "🍝",
            Self::Snack => "🍎",
            Self::Dinner => "🍽️",
            Self::ToGo => "🎒",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    /// Accepts the German label (any case) or the English slot name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        for slot in Self::ALL {
            if slot.label().to_lowercase() == needle {
                return Ok(slot);
            }
        }
        match needle.as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "togo" | "to_go" => Ok(Self::ToGo),
            _ => Err(format!("unknown meal slot '{}'", s.trim())),
        }
    }
}

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Montag,
    Dienstag,
    Mittwoch,
    Donnerstag,
    Freitag,
    Samstag,
    Sonntag,
}

impl Day {
    pub const COUNT: usize = 7;

    /// Canonical column order of the plan table.
    pub const ALL: [Day; Self::COUNT] = [
        Self::Montag,
        Self::Dienstag,
        Self::Mittwoch,
        Self::Donnerstag,
        Self::Freitag,
        Self::Samstag,
        Self::Sonntag,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Montag => "Montag",
            Self::Dienstag => "Dienstag",
            Self::Mittwoch => "Mittwoch",
            Self::Donnerstag => "Donnerstag",
            Self::Freitag => "Freitag",
            Self::Samstag => "Samstag",
            Self::Sonntag => "Sonntag",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Recipes
// ============================================================================

/// One catalog row. Column names match the on-disk header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Dish name — the lookup key
    #[serde(rename = "Gericht")]
    pub name: String,

    /// Meal slot this dish is offered for
    #[serde(rename = "Kategorie")]
    pub category: MealSlot,

    /// Raw ingredient field, `;`-separated
    #[serde(rename = "Zutaten")]
    pub ingredients: String,

    /// Free-text preparation time (e.g. "15 Minuten")
    #[serde(rename = "Zubereitungszeit", default)]
    pub prep_time: String,

    /// Where the recipe comes from (optional)
    #[serde(rename = "Quelle", default)]
    pub source: String,
}

impl Recipe {
    /// Trimmed, non-empty ingredient names in declaration order.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .split(INGREDIENT_DELIMITER)
            .map(str::trim)
            .filter(|z| !z.is_empty())
    }
}

/// Unvalidated input for adding a recipe.
#[derive(Debug, Clone, Default)]
pub struct NewRecipe {
    pub name: String,
    pub category: Option<MealSlot>,
    pub ingredients: String,
    pub prep_time: String,
    pub source: String,
}

// ============================================================================
// Week plan
// ============================================================================

/// On-disk plan shape: day → slot → recipe name. A null value is unset.
pub type PlanFile = IndexMap<Day, IndexMap<MealSlot, Option<String>>>;

/// The user's selections for one week: every (day, slot) pair, each holding
/// at most one recipe name. `-` and blank values are stored as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PlanFile", into = "PlanFile")]
pub struct WeekPlan {
    selections: [[Option<String>; MealSlot::COUNT]; Day::COUNT],
}

impl WeekPlan {
    /// An all-empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a recipe for a pair. `-` or blank clears the pair.
    pub fn set(&mut self, day: Day, slot: MealSlot, recipe: impl Into<String>) {
        let recipe = recipe.into();
        let trimmed = recipe.trim();
        self.selections[day.index()][slot.index()] =
            if trimmed.is_empty() || trimmed == NO_SELECTION {
                None
            } else {
                Some(trimmed.to_string())
            };
    }

    pub fn clear(&mut self, day: Day, slot: MealSlot) {
        self.selections[day.index()][slot.index()] = None;
    }

    /// The selected recipe name, if any.
    pub fn get(&self, day: Day, slot: MealSlot) -> Option<&str> {
        self.selections[day.index()][slot.index()].as_deref()
    }

    /// Selected pairs in canonical order: days, then slots.
    pub fn selections(&self) -> impl Iterator<Item = (Day, MealSlot, &str)> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            MealSlot::ALL
                .into_iter()
                .filter_map(move |slot| self.get(day, slot).map(|name| (day, slot, name)))
        })
    }

    pub fn filled(&self) -> usize {
        self.selections().count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }
}

impl From<PlanFile> for WeekPlan {
    fn from(file: PlanFile) -> Self {
        let mut plan = WeekPlan::new();
        for (day, slots) in file {
            for (slot, recipe) in slots {
                plan.set(day, slot, recipe.unwrap_or_default());
            }
        }
        plan
    }
}

impl From<WeekPlan> for PlanFile {
    /// Every pair is written; unset pairs become `-`.
    fn from(plan: WeekPlan) -> Self {
        Day::ALL
            .into_iter()
            .map(|day| {
                let slots = MealSlot::ALL
                    .into_iter()
                    .map(|slot| {
                        let name = plan.get(day, slot).unwrap_or(NO_SELECTION);
                        (slot, Some(name.to_string()))
                    })
                    .collect();
                (day, slots)
            })
            .collect()
    }
}

// ============================================================================
// Shopping list
// ============================================================================

/// An ingredient and how often it occurs across the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    pub ingredient: String,
    pub count: usize,
}

/// Shopping list grouped by category label. Categories iterate in
/// lexicographic order; items keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShoppingList {
    pub groups: BTreeMap<String, Vec<ShoppingItem>>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct ingredients.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Items of one category (empty slice if absent).
    pub fn category(&self, label: &str) -> &[ShoppingItem] {
        self.groups.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ShoppingItem])> {
        self.groups
            .iter()
            .map(|(label, items)| (label.as_str(), items.as_slice()))
    }
}

// ============================================================================
// wochenplaner.yaml
// ============================================================================

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Schema version (must be "1.0")
    #[serde(default = "default_version")]
    pub version: String,

    /// Document heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Recipe catalog CSV, relative to the config file
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Rendered document, relative to the config file
    #[serde(default = "default_output")]
    pub output: String,

    /// Category for ingredients no keyword matches
    #[serde(default = "default_fallback")]
    pub fallback_category: String,

    /// Ingredient keyword table (ordered — first match wins)
    #[serde(default = "default_categories")]
    pub categories: Vec<KeywordRule>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            title: default_title(),
            catalog: default_catalog(),
            output: default_output(),
            fallback_category: default_fallback(),
            categories: default_categories(),
        }
    }
}

/// Maps an ingredient keyword to a display category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub category: String,
}

impl KeywordRule {
    pub fn new(keyword: &str, category: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            category: category.to_string(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_title() -> String {
    "🍽️ Knuppis Wochenplan".to_string()
}

fn default_catalog() -> String {
    "rezepte.csv".to_string()
}

fn default_output() -> String {
    "Wochenplan_A4.html".to_string()
}

fn default_fallback() -> String {
    "📦 Sonstiges".to_string()
}

fn default_categories() -> Vec<KeywordRule> {
    const FRUIT: &str = "🥝 Obst";
    const VEGETABLE: &str = "🥕 Gemüse";
    const DAIRY: &str = "🥛 Milchprodukte";
    const MEAT: &str = "🥩 Fleisch";
    const EGGS: &str = "🥚 Eier";
    const GRAIN: &str = "🌾 Getreide";
    vec![
        KeywordRule::new("Banane", FRUIT),
        KeywordRule::new("Apfel", FRUIT),
        KeywordRule::new("Karotte", VEGETABLE),
        KeywordRule::new("Zucchini", VEGETABLE),
        KeywordRule::new("Milch", DAIRY),
        KeywordRule::new("Joghurt", DAIRY),
        KeywordRule::new("Hähnchen", MEAT),
        KeywordRule::new("Rindfleisch", MEAT),
        KeywordRule::new("Eier", EGGS),
        KeywordRule::new("Haferflocken", GRAIN),
        KeywordRule::new("Nudeln", GRAIN),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        Recipe {
            name: "Pancakes".to_string(),
            category: MealSlot::Breakfast,
            ingredients: "Milch; Eier; Haferflocken".to_string(),
            prep_time: "10 Minuten".to_string(),
            source: "Book A".to_string(),
        }
    }

    #[test]
    fn test_wp001_ingredients_split_and_trim() {
        let r = pancakes();
        let z: Vec<_> = r.ingredients().collect();
        assert_eq!(z, vec!["Milch", "Eier", "Haferflocken"]);
    }

    #[test]
    fn test_wp001_ingredients_drop_empty_pieces() {
        let mut r = pancakes();
        r.ingredients = " ; Milch;;  ; Eier ;".to_string();
        let z: Vec<_> = r.ingredients().collect();
        assert_eq!(z, vec!["Milch", "Eier"]);
    }

    #[test]
    fn test_wp001_slot_labels_and_order() {
        let labels: Vec<_> = MealSlot::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Frühstück", "Mittagessen", "Snack", "Abendessen", "To-Go"]
        );
        assert_eq!(Day::ALL[0], Day::Montag);
        assert_eq!(Day::ALL[6], Day::Sonntag);
    }

    #[test]
    fn test_wp001_slot_from_str() {
        assert_eq!("Frühstück".parse::<MealSlot>().unwrap(), MealSlot::Breakfast);
        assert_eq!("abendessen".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
        assert_eq!("to-go".parse::<MealSlot>().unwrap(), MealSlot::ToGo);
        assert_eq!("lunch".parse::<MealSlot>().unwrap(), MealSlot::Lunch);
        assert!("Brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn test_wp001_plan_placeholder_is_unset() {
        let mut plan = WeekPlan::new();
        plan.set(Day::Montag, MealSlot::Breakfast, "-");
        plan.set(Day::Dienstag, MealSlot::Lunch, "   ");
        plan.set(Day::Mittwoch, MealSlot::Snack, "");
        assert!(plan.is_empty());

        plan.set(Day::Montag, MealSlot::Breakfast, " Pancakes ");
        assert_eq!(plan.get(Day::Montag, MealSlot::Breakfast), Some("Pancakes"));
        plan.clear(Day::Montag, MealSlot::Breakfast);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_wp001_plan_selections_canonical_order() {
        let mut plan = WeekPlan::new();
        plan.set(Day::Sonntag, MealSlot::Breakfast, "C");
        plan.set(Day::Montag, MealSlot::ToGo, "B");
        plan.set(Day::Montag, MealSlot::Breakfast, "A");
        let order: Vec<_> = plan.selections().map(|(_, _, n)| n).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
        assert_eq!(plan.filled(), 3);
    }

    #[test]
    fn test_wp001_plan_yaml_parse() {
        let yaml = r#"
Montag:
  Frühstück: Pancakes
  Mittagessen: "-"
  Snack:
Freitag:
  To-Go: Wrap
"#;
        let plan: WeekPlan = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(plan.get(Day::Montag, MealSlot::Breakfast), Some("Pancakes"));
        assert_eq!(plan.get(Day::Montag, MealSlot::Lunch), None);
        assert_eq!(plan.get(Day::Freitag, MealSlot::ToGo), Some("Wrap"));
        assert_eq!(plan.filled(), 2);
    }

    #[test]
    fn test_wp001_plan_serializes_every_pair() {
        let mut plan = WeekPlan::new();
        plan.set(Day::Montag, MealSlot::Breakfast, "Pancakes");
        let file: PlanFile = plan.clone().into();
        assert_eq!(file.len(), Day::COUNT);
        assert!(file.values().all(|slots| slots.len() == MealSlot::COUNT));
        assert_eq!(file[&Day::Dienstag][&MealSlot::Snack].as_deref(), Some("-"));

        let yaml = serde_yaml_ng::to_string(&plan).unwrap();
        let back: WeekPlan = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_wp001_plan_unknown_day_rejected() {
        let yaml = "Funday:\n  Snack: Keks\n";
        assert!(serde_yaml_ng::from_str::<WeekPlan>(yaml).is_err());
    }

    #[test]
    fn test_wp001_default_keyword_table_order() {
        let config = PlannerConfig::default();
        let keywords: Vec<_> = config.categories.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(
            keywords,
            vec![
                "Banane",
                "Apfel",
                "Karotte",
                "Zucchini",
                "Milch",
                "Joghurt",
                "Hähnchen",
                "Rindfleisch",
                "Eier",
                "Haferflocken",
                "Nudeln",
            ]
        );
        assert_eq!(config.fallback_category, "📦 Sonstiges");
    }

    #[test]
    fn test_wp001_shopping_list_accessors() {
        let mut list = ShoppingList::default();
        assert!(list.is_empty());
        list.groups.insert(
            "🥚 Eier".to_string(),
            vec![ShoppingItem {
                ingredient: "Eier".to_string(),
                count: 2,
            }],
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list.category("🥚 Eier")[0].count, 2);
        assert!(list.category("🥩 Fleisch").is_empty());
    }
}
