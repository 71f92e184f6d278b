//! Tables listing the recipes that consume an item.

use craftwiki_protocol::Recipe;
use tracing::debug;

use crate::format;
use crate::model::{Align, Column, Row, Table};
use crate::tag::Tag;

use super::{header_row, widths_row};

/// Builds the "used in other items" table for `item_id`.
///
/// One row per recipe: the product's kind, the recipe link, the product
/// link, the consumed amount and rate of `item_id`, and the produced amount.
/// Recipes made by hand leave the rate blank. Recipes whose main product is
/// not an item are skipped. `None` yields a placeholder table.
#[must_use]
pub fn build_recipes_for_item_table(item_id: &str, recipes: Option<&[Recipe]>) -> Table {
    let Some(recipes) = recipes else {
        return Table::placeholder();
    };

    let mut rows = vec![
        widths_row(&[
            (Align::Center, 60),
            (Align::Left, 200),
            (Align::Left, 240),
            (Align::Right, 30),
            (Align::Right, 40),
            (Align::Right, 30),
        ]),
        header_row(&[
            "種類",
            "レシピ名",
            "作成物",
            "消費&br;個数",
            "消費&br;速度",
            "作成&br;個数",
        ]),
    ];

    for recipe in recipes {
        let Some((product, item)) = recipe
            .products
            .first()
            .and_then(|product| product.item.as_ref().map(|item| (product, item)))
        else {
            debug!(recipe = %recipe.id, "skipping recipe without an item product");
            continue;
        };

        let ingredient = recipe.find_ingredient(item_id);
        let rate = if recipe.building.is_manual() {
            None
        } else {
            ingredient.map(|ing| format::minute(ing.minute))
        };

        rows.push(Row::record(vec![
            Column::text(item.kind.label()),
            Column::tag(Tag::link(recipe.name.as_str(), recipe.wiki_link.as_str())),
            Column::tag(Tag::entry_link(item)),
            Column::text(
                ingredient
                    .map(|ing| format::amount(ing.amount))
                    .unwrap_or_default(),
            ),
            Column::text(rate.unwrap_or_default()),
            Column::text(format::amount(product.amount)),
        ]));
    }

    Table::new(rows)
}

/// Builds the "used in buildings" table for `item_id`.
///
/// One row per recipe whose main product is a building: the building's
/// category and subcategory, its link, and the consumed amount of
/// `item_id`. Rows keep the order of `recipes`. `None` yields a placeholder
/// table.
#[must_use]
pub fn build_recipes_for_building_table(item_id: &str, recipes: Option<&[Recipe]>) -> Table {
    let Some(recipes) = recipes else {
        return Table::placeholder();
    };

    let mut rows = vec![
        widths_row(&[
            (Align::Center, 120),
            (Align::Center, 120),
            (Align::Left, 240),
            (Align::Right, 30),
        ]),
        header_row(&["大分類", "小分類", "作成物", "消費&br;個数"]),
    ];

    for recipe in recipes {
        let Some(building) = recipe.products.first().and_then(|p| p.building.as_ref()) else {
            debug!(recipe = %recipe.id, "skipping recipe without a building product");
            continue;
        };
        let amount = recipe
            .find_ingredient(item_id)
            .map(|ing| format::amount(ing.amount))
            .unwrap_or_default();

        rows.push(Row::record(vec![
            Column::text(building.category.as_str()),
            Column::text(building.subcategory.as_str()),
            Column::tag(Tag::entry_link(building)),
            Column::text(amount),
        ]));
    }

    Table::new(rows)
}
