//! Wochenplaner — household meal planning.
//!
//! Recipe catalog in a CSV sheet, a seven-day × five-slot week plan,
//! a keyword-categorized shopping list, and a printable A4 summary.

pub mod cli;
pub mod core;
pub mod render;
