//! The comparison chart of several recipe selections.

use craftwiki_protocol::{ChartResult, Item};
use tracing::warn;

use crate::error::Result;
use crate::format;
use crate::model::{Align, Column, Row, Style, Table};
use crate::tag::Tag;

const CAPTION_SIZE: u32 = 10;

/// Builds the comparison chart of planner results.
///
/// Only the candidate ingredients that at least one result consumes become
/// columns, in the order of `ingredient_ids`. Each result row shows the
/// consumption per ingredient (`-` when not consumed), the power draw and
/// the floor area in foundations. Power and area get one decimal when any
/// result's power is below 100 or any area is below 10.
///
/// No results, or no consumed ingredient, yields a table without rows.
///
/// # Errors
///
/// Returns [`TableError::Protocol`](crate::TableError::Protocol) if a result
/// uses a building whose footprint is unknown.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::ChartResult;
/// use craftwiki_protocol::dummy::iron_ore;
/// use craftwiki_table::{build_comparison_chart_table, serialize_table};
///
/// let results = [ChartResult::new("#1")
///     .with_net("Iron_Ore", -30.0)
///     .with_building("Smelter", 1.0)
///     .with_consume(4.0)];
/// let table = build_comparison_chart_table(&results, &["Iron_Ore".to_string()], &[iron_ore()])?;
/// assert!(serialize_table(&table).ends_with("|#1|30|4.0|0.8|"));
/// # Ok::<(), craftwiki_table::TableError>(())
/// ```
pub fn build_comparison_chart_table(
    results: &[ChartResult],
    ingredient_ids: &[String],
    items: &[Item],
) -> Result<Table> {
    if results.is_empty() {
        return Ok(Table::default());
    }

    let ingredients: Vec<&str> = ingredient_ids
        .iter()
        .map(String::as_str)
        .filter(|id| results.iter().any(|result| result.consumes(id)))
        .collect();
    if ingredients.is_empty() {
        return Ok(Table::default());
    }

    let areas = results
        .iter()
        .map(ChartResult::floor_area)
        .collect::<std::result::Result<Vec<f64>, _>>()?;
    let consumes: Vec<f64> = results.iter().map(|result| result.consume).collect();
    let digits = format::fixed_digits(&consumes, 2).max(format::fixed_digits(&areas, 1));

    let spans = || (1..ingredients.len()).map(|_| Column::merge_right());

    let mut rows = Vec::with_capacity(results.len() + 4);

    rows.push(Row::formatting(
        std::iter::once(Column::empty())
            .chain(spans())
            .chain([
                Column::styled(Style::new().align(Align::Center)),
                Column::merge_right(),
                Column::styled(Style::new().align(Align::Center)),
            ])
            .collect(),
    ));

    rows.push(Row::header(
        std::iter::once(Column::text("レシピ"))
            .chain(spans())
            .chain([
                Column::text("必要原料 (個/分)"),
                Column::text("消費電力&br;(MW)"),
                Column::new(vec![
                    Tag::plain("床面積&br;"),
                    Tag::sized("(土台換算)", CAPTION_SIZE),
                ]),
            ])
            .collect(),
    ));

    rows.push(Row::header(
        std::iter::once(Column::merge_up())
            .chain(
                ingredients
                    .iter()
                    .map(|id| Column::new(ingredient_label(id, items))),
            )
            .chain([Column::merge_up(), Column::merge_up()])
            .collect(),
    ));

    rows.push(Row::formatting(
        std::iter::once(Column::styled(Style::new().align(Align::Left).width(180)))
            .chain(spans())
            .chain([
                Column::styled(Style::new().align(Align::Right).width(60)),
                Column::merge_right(),
                Column::styled(Style::new().align(Align::Right)),
            ])
            .collect(),
    ));

    for (result, area) in results.iter().zip(&areas) {
        let mut columns = vec![Column::text(result.name.as_str())];
        columns.extend(ingredients.iter().map(|id| {
            Column::text(
                result
                    .consumption(id)
                    .map_or_else(|| "-".to_string(), |rate| format::fixed(rate, 0)),
            )
        }));
        columns.push(Column::text(format::fixed(result.consume, digits)));
        columns.push(Column::text(format::ceil(*area, digits)));
        rows.push(Row::record(columns));
    }

    Ok(Table::new(rows))
}

/// Returns the header label of an ingredient, breaking long names over two
/// lines.
fn ingredient_label(id: &str, items: &[Item]) -> Vec<Tag> {
    let Some(item) = items.iter().find(|item| item.id == id) else {
        warn!(item = id, "unknown ingredient in comparison chart");
        return vec![Tag::plain(id)];
    };
    abbreviate(&item.name)
}

fn abbreviate(name: &str) -> Vec<Tag> {
    match name {
        "未加工石英" => return vec![Tag::plain("未加工&br;石英")],
        "カテリウム鉱石" => return vec![Tag::sized("カテリウム&br;鉱石", CAPTION_SIZE)],
        "ボーキサイト" => return vec![Tag::plain("ボーキ&br;サイト")],
        _ => {}
    }

    match name.find("のインゴット") {
        Some(index) => vec![
            Tag::text(format!("{}の&br;", &name[..index])),
            Tag::sized("インゴット", CAPTION_SIZE),
        ],
        None => vec![Tag::plain(name)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations() {
        assert_eq!(abbreviate("未加工石英"), vec![Tag::plain("未加工&br;石英")]);
        assert_eq!(
            abbreviate("カテリウム鉱石"),
            vec![Tag::sized("カテリウム&br;鉱石", 10)]
        );
        assert_eq!(abbreviate("ボーキサイト"), vec![Tag::plain("ボーキ&br;サイト")]);
        assert_eq!(
            abbreviate("鉄のインゴット"),
            vec![Tag::text("鉄の&br;"), Tag::sized("インゴット", 10)]
        );
        assert_eq!(abbreviate("原油"), vec![Tag::plain("原油")]);
    }

    #[test]
    fn unknown_item_falls_back_to_id() {
        assert_eq!(ingredient_label("Water", &[]), vec![Tag::plain("Water")]);
    }
}
