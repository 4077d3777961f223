//! WP-003: Ingredient classification by ordered keyword lookup.
//!
//! Each rule is tested in declaration order with a case-insensitive
//! substring match; the first rule whose keyword occurs anywhere in the
//! ingredient wins. No match falls back to the catch-all category.

use super::types::{KeywordRule, PlannerConfig};

/// Ordered keyword table plus fallback category.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// (lowercased keyword, category) in declaration order
    rules: Vec<(String, String)>,
    fallback: String,
}

impl Classifier {
    pub fn new(rules: &[KeywordRule], fallback: impl Into<String>) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|r| (r.keyword.to_lowercase(), r.category.clone()))
                .collect(),
            fallback: fallback.into(),
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(&config.categories, config.fallback_category.clone())
    }

    /// Category label for an ingredient. Total: never fails.
    pub fn classify(&self, ingredient: &str) -> &str {
        let haystack = ingredient.to_lowercase();
        self.rules
            .iter()
            .find(|(keyword, _)| haystack.contains(keyword.as_str()))
            .map(|(_, category)| category.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}
