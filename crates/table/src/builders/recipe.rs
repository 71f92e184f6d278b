//! The recipe block shown on an item page.

use craftwiki_protocol::{Recipe, RecipeItem};

use crate::format;
use crate::model::{Align, Column, Row, Style, Table};
use crate::tag::{Tag, condition_link};

const INGREDIENT_BG: &str = "khaki";
const PRODUCT_BG: &str = "palegreen";

/// Builds the table describing one recipe, as shown on the page of
/// `item_id`.
///
/// The block opens with a title row spanning the ingredient and product
/// columns, followed by one row per input slot of the recipe's building.
/// Products sit on every `max_outputs`-th slot row and span the rows in
/// between with merge-up markers.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::dummy::recipe_screw;
/// use craftwiki_table::{build_recipe_table, serialize_table};
///
/// let table = build_recipe_table("Screw", &recipe_screw());
/// let wiki = serialize_table(&table);
/// assert!(wiki.starts_with("//\n//\t通常\n#aname(Recipe_N1)\n"));
/// assert!(wiki.ends_with("|6秒|\n#br"));
/// ```
#[must_use]
pub fn build_recipe_table(item_id: &str, recipe: &Recipe) -> Table {
    let has_building2 = recipe.building2.is_some();
    let bg = recipe.bg_color(item_id);

    let mut rows = Vec::new();

    let mut columns = merge_rights(5);
    columns.push(Column::styled(Style::new().bg_color(bg).align(Align::Left)));
    if has_building2 {
        columns.push(Column::merge_right());
    }
    columns.push(Column::styled(Style::new().bg_color(bg).align(Align::Center)));
    rows.push(Row::formatting(columns));

    let mut title = vec![Tag::plain(format!("''{}'' &br;", recipe.name))];
    title.extend(condition_link(recipe));
    let mut columns = merge_rights(5);
    columns.push(Column::new(title));
    columns.push(Column::tag(Tag::building_link(&recipe.building)));
    if let Some(building2) = &recipe.building2 {
        columns.push(Column::tag(Tag::building_link(building2)));
    }
    rows.push(Row::header(columns));

    let mut columns = vec![
        Column::styled(Style::new().align(Align::Left).width(240)),
        Column::styled(Style::new().align(Align::Right).width(40)),
        Column::styled(
            Style::new()
                .bg_color(INGREDIENT_BG)
                .align(Align::Right)
                .width(50),
        ),
        Column::styled(Style::new().align(Align::Left).width(240)),
        Column::styled(Style::new().align(Align::Right).width(40)),
        Column::styled(
            Style::new()
                .bg_color(PRODUCT_BG)
                .align(Align::Right)
                .width(50),
        ),
    ];
    if has_building2 {
        columns.push(Column::merge_right());
    }
    columns.push(Column::styled(Style::new().align(Align::Center).width(80)));
    rows.push(Row::formatting(columns));

    let max_inputs = recipe
        .building
        .max_inputs
        .map_or(recipe.ingredients.len(), |n| n as usize);
    let max_outputs = recipe
        .building
        .max_outputs
        .filter(|&n| n > 0)
        .map_or(1, |n| n as usize);

    for slot in 0..max_inputs {
        let ingredient = recipe.ingredient(slot);
        let product = if slot % max_outputs == 0 {
            recipe.product(slot / max_outputs)
        } else {
            None
        };

        let mut columns = vec![
            ingredient_link(ingredient),
            ingredient
                .map(|ing| Column::text(format::amount(ing.amount)))
                .unwrap_or_else(|| Column::text("-")),
            ingredient
                .map(|ing| Column::text(format::minute(ing.minute)))
                .unwrap_or_else(|| Column::text("-")),
            product_link(product),
            product
                .map(|prod| Column::text(format::amount(prod.amount)))
                .unwrap_or_else(Column::merge_up),
            product
                .map(|prod| Column::text(format::minute(prod.minute)))
                .unwrap_or_else(Column::merge_up),
        ];

        if slot == 0 {
            columns.push(Column::text(format!(
                "{}秒",
                format::amount(recipe.production_time)
            )));
            if has_building2 {
                let clicks = recipe.production_time2.map_or_else(
                    || "-".to_string(),
                    |time| format!("{}click", format::amount(time)),
                );
                columns.push(Column::text(clicks));
            }
        } else {
            columns.push(Column::merge_up());
            if has_building2 {
                columns.push(Column::merge_up());
            }
        }

        rows.push(Row::record(columns));
    }

    let kind = if recipe.alternate { "HD解析" } else { "通常" };
    let anchor = if recipe.is_byproduct(item_id) {
        "// #aname(Recipe_)".to_string()
    } else {
        format!("#aname(Recipe_{})", recipe.link_anchor)
    };

    Table::new(rows)
        .with_pre_lines(["//".to_string(), format!("//\t{kind}"), anchor])
        .with_post_lines(["#br"])
}

fn merge_rights(count: usize) -> Vec<Column> {
    (0..count).map(|_| Column::merge_right()).collect()
}

fn ingredient_link(slot: Option<&RecipeItem>) -> Column {
    match slot.and_then(|s| s.item.as_ref()) {
        Some(item) => Column::tag(Tag::entry_link(item)),
        None => Column::text("　-"),
    }
}

fn product_link(slot: Option<&RecipeItem>) -> Column {
    match slot.and_then(|s| s.item.as_ref()) {
        Some(item) => Column::tag(Tag::entry_link(item)),
        None => Column::merge_up(),
    }
}
