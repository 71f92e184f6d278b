//! Tables listing the milestones and researches that consume an item.

use craftwiki_protocol::Condition;

use crate::format;
use crate::model::{Align, Column, Row, Table};
use crate::tag::Tag;

use super::{header_row, widths_row};

/// Builds the milestone table for `item_id`: tier, milestone link and the
/// required amount. `None` yields a placeholder table.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::dummy::milestone_logistics;
/// use craftwiki_table::{build_milestones_table, serialize_table};
///
/// let milestones = [milestone_logistics()];
/// let wiki = serialize_table(&build_milestones_table("Iron_Rod", Some(&milestones[..])));
/// assert!(wiki.ends_with("|ティア1|[[物流>プロジェクト/マイルストーン#M_1_1]]|50|"));
/// ```
#[must_use]
pub fn build_milestones_table(item_id: &str, milestones: Option<&[Condition]>) -> Table {
    build_conditions_table(item_id, milestones, ["ティア", "マイルストーン名", "個数"], |m| {
        format!("ティア{}", m.tier.map(|t| t.to_string()).unwrap_or_default())
    })
}

/// Builds the research table for `item_id`: category, research link and the
/// required amount. `None` yields a placeholder table.
#[must_use]
pub fn build_researches_table(item_id: &str, researches: Option<&[Condition]>) -> Table {
    build_conditions_table(item_id, researches, ["カテゴリ", "名称", "個数"], |r| {
        r.category.clone().unwrap_or_default()
    })
}

fn build_conditions_table(
    item_id: &str,
    conditions: Option<&[Condition]>,
    headers: [&str; 3],
    label: impl Fn(&Condition) -> String,
) -> Table {
    let Some(conditions) = conditions else {
        return Table::placeholder();
    };

    let mut rows = vec![
        widths_row(&[(Align::Center, 120), (Align::Left, 250), (Align::Right, 50)]),
        header_row(&headers),
    ];

    rows.extend(conditions.iter().map(|condition| {
        let amount = condition
            .find_item(item_id)
            .map(|entry| format::amount(entry.amount))
            .unwrap_or_default();
        Row::record(vec![
            Column::text(label(condition)),
            Column::tag(Tag::link(
                condition.name.as_str(),
                condition.wiki_link.as_str(),
            )),
            Column::text(amount),
        ])
    }));

    Table::new(rows)
}
