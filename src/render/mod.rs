//! WP-006: Plan document rendering — A4 HTML summary and download wrapper.
//!
//! The document has three parts: a generation-date header, the week table
//! (days as columns, meal slots as rows), and the categorized shopping list.
//! Cells do their own catalog lookup; a name the catalog doesn't know renders
//! like an empty pair, matching the shopping list which skips it.

pub mod style;

use crate::core::classifier::Classifier;
use crate::core::error::{Error, Result};
use crate::core::shopping;
use crate::core::store::Catalog;
use crate::core::types::{Day, MealSlot, PlannerConfig, Recipe, ShoppingList, WeekPlan};
use base64::Engine as _;
use chrono::{Datelike, NaiveDate};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::path::Path;

const MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Placeholder for an empty cell or field.
const DASH: &str = "-";

/// Per-render settings.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    /// Date shown in the header; fixed by the caller so output is reproducible
    pub generated_on: NaiveDate,
}

impl RenderOptions {
    pub fn from_config(config: &PlannerConfig, generated_on: NaiveDate) -> Self {
        Self {
            title: config.title.clone(),
            generated_on,
        }
    }
}

/// Today's local date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// German long date, e.g. "4. März 2026".
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Render the full plan document.
pub fn render_document(
    plan: &WeekPlan,
    catalog: &Catalog,
    classifier: &Classifier,
    opts: &RenderOptions,
) -> String {
    let list = shopping::shopping_list(plan, catalog, classifier);
    let doc = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (opts.title) }
                style { (PreEscaped(style::A4_STYLE)) }
            }
            body {
                header { "Stand: " (long_date(opts.generated_on)) }
                h1 { (opts.title) }
                (week_table(plan, catalog))
                (shopping_section(&list))
                footer { "Wochenplaner – Seite 1" }
            }
        }
    };
    doc.into_string()
}

fn week_table(plan: &WeekPlan, catalog: &Catalog) -> Markup {
    html! {
        table {
            tr {
                @for day in Day::ALL {
                    th { (day.label()) }
                }
            }
            @for slot in MealSlot::ALL {
                tr {
                    @for day in Day::ALL {
                        (cell(slot, plan.get(day, slot).and_then(|name| catalog.find(name))))
                    }
                }
            }
        }
    }
}

fn cell(slot: MealSlot, recipe: Option<&Recipe>) -> Markup {
    html! {
        @if let Some(recipe) = recipe {
            td {
                b { (slot.icon()) " " (recipe.name) }
                br;
                small {
                    "⏱️ " (or_dash(&recipe.prep_time))
                    br;
                    "📖 " (or_dash(&recipe.source))
                }
            }
        } @else {
            td { (DASH) }
        }
    }
}

fn shopping_section(list: &ShoppingList) -> Markup {
    html! {
        h2 { "🛒 Einkaufsliste" }
        @for (category, items) in list.iter() {
            h3 { (category) }
            ul {
                @for item in items {
                    li { "✅ " (item.ingredient) (count_suffix(item.count)) }
                }
            }
        }
    }
}

fn or_dash(field: &str) -> &str {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        DASH
    } else {
        trimmed
    }
}

/// " (×n)" for repeated ingredients, nothing for a single occurrence.
pub fn count_suffix(count: usize) -> String {
    if count > 1 {
        format!(" (×{})", count)
    } else {
        String::new()
    }
}

/// Wrap a document as a `data:` URI for download links.
pub fn to_data_uri(html: &str) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(html.as_bytes());
    format!("data:text/html;base64,{}", b64)
}

/// Write the document to disk, creating parent directories.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, html).map_err(|e| Error::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "document written");
    Ok(())
}
