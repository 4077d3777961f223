//! WP-002: YAML parsing and validation for config and plan files.
//!
//! Parses wochenplaner.yaml and validates structural constraints:
//! - Version must be "1.0"
//! - Title and fallback category must not be empty
//! - Keywords and category labels must not be empty
//!
//! Week plans are YAML mappings of day → slot → recipe name.

use super::error::{Error, Result};
use super::types::*;
use std::path::{Path, PathBuf};

/// Validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse a wochenplaner.yaml file from disk.
pub fn parse_config_file(path: &Path) -> Result<PlannerConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_config(&content)
}

/// Parse a wochenplaner.yaml from a string.
pub fn parse_config(yaml: &str) -> Result<PlannerConfig> {
    Ok(serde_yaml_ng::from_str(yaml)?)
}

/// Load the config if present, otherwise fall back to defaults.
pub fn load_config_or_default(path: &Path) -> Result<PlannerConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PlannerConfig::default());
    }
    let config = parse_config_file(path)?;
    tracing::info!(path = %path.display(), rules = config.categories.len(), "config loaded");
    Ok(config)
}

/// Validate a parsed config. Returns a list of errors (empty = valid).
pub fn validate_config(config: &PlannerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.version != "1.0" {
        errors.push(ValidationError {
            message: format!("version must be \"1.0\", got \"{}\"", config.version),
        });
    }

    if config.title.trim().is_empty() {
        errors.push(ValidationError {
            message: "title must not be empty".to_string(),
        });
    }

    if config.catalog.trim().is_empty() {
        errors.push(ValidationError {
            message: "catalog path must not be empty".to_string(),
        });
    }

    if config.fallback_category.trim().is_empty() {
        errors.push(ValidationError {
            message: "fallback_category must not be empty".to_string(),
        });
    }

    for (i, rule) in config.categories.iter().enumerate() {
        // An empty keyword is a substring of every ingredient
        if rule.keyword.trim().is_empty() {
            errors.push(ValidationError {
                message: format!("categories[{}] has an empty keyword", i),
            });
        }
        if rule.category.trim().is_empty() {
            errors.push(ValidationError {
                message: format!(
                    "categories[{}] (keyword '{}') has an empty category",
                    i, rule.keyword
                ),
            });
        }
    }

    errors
}

/// Resolve a config-relative path against the config file's directory.
pub fn resolve_path(config_path: &Path, relative: &str) -> PathBuf {
    let p = Path::new(relative);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(p),
        _ => p.to_path_buf(),
    }
}

/// Parse a week plan file from disk.
pub fn parse_plan_file(path: &Path) -> Result<WeekPlan> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_plan(&content)
}

/// Parse a week plan from a string. An empty or null document is an empty plan.
pub fn parse_plan(yaml: &str) -> Result<WeekPlan> {
    if yaml.trim().is_empty() {
        return Ok(WeekPlan::new());
    }
    let file: Option<PlanFile> = serde_yaml_ng::from_str(yaml)?;
    Ok(file.map(WeekPlan::from).unwrap_or_default())
}

/// Serialize a plan with every (day, slot) pair spelled out.
pub fn plan_to_yaml(plan: &WeekPlan) -> Result<String> {
    Ok(serde_yaml_ng::to_string(plan)?)
}
