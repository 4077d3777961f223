//! WP-005: Shopping list derivation — count ingredients across the week.

use super::classifier::Classifier;
use super::store::Catalog;
use super::types::{ShoppingItem, ShoppingList, WeekPlan};
use indexmap::IndexMap;

/// Build the categorized shopping list for a plan.
///
/// Walks every selected (day, slot) pair in canonical order, looks the
/// recipe up by exact name, and counts each ingredient occurrence. Stale
/// references (names not in the catalog) are skipped.
pub fn shopping_list(plan: &WeekPlan, catalog: &Catalog, classifier: &Classifier) -> ShoppingList {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();

    for (day, slot, name) in plan.selections() {
        let recipe = match catalog.find(name) {
            Some(r) => r,
            None => {
                tracing::debug!(%day, %slot, recipe = name, "skipping unknown recipe");
                continue;
            }
        };
        for ingredient in recipe.ingredients() {
            *counts.entry(ingredient).or_insert(0) += 1;
        }
    }

    let mut list = ShoppingList::default();
    for (ingredient, count) in counts {
        list.groups
            .entry(classifier.classify(ingredient).to_string())
            .or_default()
            .push(ShoppingItem {
                ingredient: ingredient.to_string(),
                count,
            });
    }
    list
}
