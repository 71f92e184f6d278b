//! Domain table builders.
//!
//! Each builder is a pure function from read-only domain data to a
//! [`Table`](crate::Table). Builders encode presentation only; they never
//! talk to a renderer.
//!
//! # Overview
//!
//! - [`build_recipe_table`]: one recipe block of an item page
//! - [`build_recipes_for_item_table`]: recipes consuming an item to make items
//! - [`build_recipes_for_building_table`]: recipes consuming an item to make buildings
//! - [`build_milestones_table`] and [`build_researches_table`]: unlocks consuming an item
//! - [`build_comparison_chart_table`]: planner results side by side

mod compchart;
mod conditions;
mod recipe;
mod usage;

#[cfg(test)]
mod tests;

pub use compchart::build_comparison_chart_table;
pub use conditions::{build_milestones_table, build_researches_table};
pub use recipe::build_recipe_table;
pub use usage::{build_recipes_for_building_table, build_recipes_for_item_table};

use crate::model::{Align, Column, Row, Style};

/// Background of the header cells of the listing tables.
const HEADER_BG: &str = "Gold";

/// Formatting row fixing the alignment and width of every column.
fn widths_row(columns: &[(Align, u32)]) -> Row {
    Row::formatting(
        columns
            .iter()
            .map(|&(align, width)| Column::styled(Style::new().align(align).width(width)))
            .collect(),
    )
}

/// Header row with gold, centered captions.
fn header_row(captions: &[&str]) -> Row {
    Row::header(
        captions
            .iter()
            .map(|&caption| {
                Column::text(caption).with_style(Style::new().bg_color(HEADER_BG).align(Align::Center))
            })
            .collect(),
    )
}
