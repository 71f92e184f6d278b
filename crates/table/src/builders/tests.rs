//! Snapshot tests for the domain table builders.
//!
//! These tests use insta to capture the wiki text of each builder over the
//! sample catalog.

use craftwiki_protocol::dummy::{self, dummy_catalog};
use craftwiki_protocol::{ChartResult, ProtocolError};

use super::{
    build_comparison_chart_table, build_milestones_table, build_recipe_table,
    build_recipes_for_building_table, build_recipes_for_item_table, build_researches_table,
};
use crate::error::TableError;
use crate::html::HtmlRenderer;
use crate::layout::resolve_cell_span;
use crate::model::{MergeMarker, RowKind, Table};
use crate::tag::Tag;
use crate::wiki::serialize_table;

/// Candidate ingredients offered to the comparison chart.
fn chart_candidates() -> Vec<String> {
    ["Iron_Ore", "Copper_Ore", "Crude_Oil"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Two planner answers for iron ingots: smelting and the alloy recipe.
fn chart_results() -> Vec<ChartResult> {
    vec![
        ChartResult::new("通常")
            .with_net("Iron_Ore", -60.0)
            .with_net("Iron_Ingot", 60.0)
            .with_building("Smelter", 2.0)
            .with_consume(8.0),
        ChartResult::new("代替")
            .with_net("Iron_Ore", -24.0)
            .with_net("Copper_Ore", -24.0)
            .with_net("Iron_Ingot", 60.0)
            .with_building("Foundry", 1.0)
            .with_consume(16.0),
    ]
}

fn chart_table() -> Table {
    let catalog = dummy_catalog();
    build_comparison_chart_table(&chart_results(), &chart_candidates(), &catalog.items)
        .expect("known buildings")
}

#[test]
fn snapshot_recipe_standard() {
    let table = build_recipe_table("Screw", &dummy::recipe_screw());
    insta::assert_snapshot!(serialize_table(&table));
}

#[test]
fn snapshot_recipe_byproduct() {
    let table = build_recipe_table("Heavy_Oil_Residue", &dummy::recipe_plastic());
    insta::assert_snapshot!(serialize_table(&table));
}

#[test]
fn snapshot_recipe_with_secondary_building() {
    let table = build_recipe_table("Iron_Plate", &dummy::recipe_iron_plate());
    insta::assert_snapshot!(serialize_table(&table));
}

#[test]
fn snapshot_recipes_for_item() {
    let recipes = dummy_catalog().recipes_using_for_item("Iron_Plate");
    let table = build_recipes_for_item_table("Iron_Plate", Some(recipes.as_slice()));
    insta::assert_snapshot!(serialize_table(&table));
}

#[test]
fn snapshot_recipes_for_building() {
    let recipes = dummy_catalog().recipes_using_for_building("Iron_Plate");
    let table = build_recipes_for_building_table("Iron_Plate", Some(recipes.as_slice()));
    insta::assert_snapshot!(serialize_table(&table));
}

#[test]
fn snapshot_milestones() {
    let milestones = dummy_catalog().milestones("Iron_Plate");
    let table = build_milestones_table("Iron_Plate", Some(milestones.as_slice()));
    insta::assert_snapshot!(serialize_table(&table));
}

#[test]
fn snapshot_researches() {
    let researches = dummy_catalog().researches("Iron_Plate");
    let table = build_researches_table("Iron_Plate", Some(researches.as_slice()));
    insta::assert_snapshot!(serialize_table(&table));
}

#[test]
fn snapshot_comparison_chart() {
    insta::assert_snapshot!(serialize_table(&chart_table()));
}

#[test]
fn snapshot_comparison_chart_html() {
    insta::assert_snapshot!(HtmlRenderer::default().render(&chart_table()));
}

#[test]
fn recipe_rows_share_one_width() {
    for recipe in &dummy_catalog().recipes {
        let table = build_recipe_table("Iron_Plate", recipe);
        let width = table.rows[0].len();
        let expected = if recipe.building2.is_some() { 8 } else { 7 };
        assert_eq!(width, expected, "{}", recipe.id);
        assert!(table.rows.iter().all(|row| row.len() == width), "{}", recipe.id);
    }
}

#[test]
fn recipe_slots_follow_building_inputs() {
    let table = build_recipe_table("Xeno-Zapper", &dummy::recipe_xeno_zapper());
    // three header rows, then four input slots of the workshop
    assert_eq!(table.rows.len(), 3 + 4);
    let last = &table.rows[6];
    assert_eq!(last.columns[0].tags, vec![Tag::plain("　-")]);
    assert_eq!(last.columns[3].merge, Some(MergeMarker::Up));
}

#[test]
fn recipe_product_spans_intervening_slots() {
    let table = build_recipe_table("Reinforced_Iron_Plate", &dummy::recipe_reinforced_iron_plate());
    let span = resolve_cell_span(&table, 3, 3).expect("product cell");
    assert_eq!(span.rowspan, 2);
    let time = resolve_cell_span(&table, 3, 6).expect("time cell");
    assert_eq!(time.rowspan, 2);
}

#[test]
fn recipe_title_spans_label_columns() {
    let table = build_recipe_table("Screw", &dummy::recipe_screw());
    let span = resolve_cell_span(&table, 1, 5).expect("title cell");
    assert_eq!(span.colspan, 6);
    assert_eq!(table.rows[1].kind, RowKind::Header);
}

#[test]
fn recipe_without_ports_uses_ingredient_count() {
    let table = build_recipe_table("Storage_Container", &dummy::recipe_storage_container());
    assert_eq!(table.rows.len(), 3 + 2);
}

#[test]
fn alternate_recipe_pre_lines() {
    let table = build_recipe_table("Iron_Ingot", &dummy::recipe_iron_alloy_ingot());
    assert_eq!(table.pre_lines, ["//", "//\tHD解析", "#aname(Recipe_A1)"]);
    assert_eq!(table.post_lines, ["#br"]);
}

#[test]
fn missing_inputs_give_placeholders() {
    let placeholder = Table::placeholder();
    assert_eq!(build_recipes_for_item_table("Screw", None), placeholder);
    assert_eq!(build_recipes_for_building_table("Screw", None), placeholder);
    assert_eq!(build_milestones_table("Screw", None), placeholder);
    assert_eq!(build_researches_table("Screw", None), placeholder);
    assert_eq!(placeholder.rows.len(), 1);
}

#[test]
fn empty_inputs_give_heading_only() {
    assert_eq!(build_recipes_for_item_table("Screw", Some(&[][..])).rows.len(), 2);
    assert_eq!(build_milestones_table("Screw", Some(&[][..])).rows.len(), 2);
}

#[test]
fn recipes_for_item_skip_building_products() {
    let recipes = [dummy::recipe_storage_container(), dummy::recipe_screw()];
    let table = build_recipes_for_item_table("Iron_Rod", Some(recipes.as_slice()));
    assert_eq!(table.rows.len(), 3);
}

#[test]
fn comparison_chart_without_results_has_no_rows() {
    let table = build_comparison_chart_table(&[], &chart_candidates(), &[]).unwrap();
    assert!(table.rows.is_empty());
}

#[test]
fn comparison_chart_without_consumed_ingredients_has_no_rows() {
    let candidates = vec!["Crude_Oil".to_string()];
    let table = build_comparison_chart_table(&chart_results(), &candidates, &[]).unwrap();
    assert!(table.rows.is_empty());
}

#[test]
fn comparison_chart_keeps_candidate_order() {
    let candidates = vec!["Copper_Ore".to_string(), "Iron_Ore".to_string()];
    let catalog = dummy_catalog();
    let table = build_comparison_chart_table(&chart_results(), &candidates, &catalog.items).unwrap();
    assert_eq!(table.rows[2].columns[1].tags, vec![Tag::plain("銅鉱石")]);
    assert_eq!(table.rows[4].columns[1].tags, vec![Tag::plain("-")]);
}

#[test]
fn comparison_chart_integer_precision_for_large_values() {
    let results = [ChartResult::new("big")
        .with_net("Iron_Ore", -480.0)
        .with_building("Smelter", 16.0)
        .with_consume(120.0)];
    let candidates = vec!["Iron_Ore".to_string()];
    let table = build_comparison_chart_table(&results, &candidates, &[]).unwrap();
    let row = serialize_table(&Table::new(vec![table.rows[4].clone()]));
    assert_eq!(row, "|big|480|120|12|");
}

#[test]
fn comparison_chart_unknown_building_is_an_error() {
    let results = [ChartResult::new("x")
        .with_net("Iron_Ore", -1.0)
        .with_building("Space_Elevator", 1.0)];
    let err = build_comparison_chart_table(&results, &chart_candidates(), &[]).unwrap_err();
    assert!(matches!(
        err,
        TableError::Protocol(ProtocolError::UnknownBuilding(ref id)) if id == "Space_Elevator"
    ));
}

#[test]
fn refinery_with_four_slots_places_products_every_second_row() {
    let mut recipe = dummy::recipe_plastic();
    recipe.building.max_inputs = Some(4);
    let table = build_recipe_table("Plastic", &recipe);
    let product = |row: usize| &table.rows[row].columns[3];

    assert!(product(3).merge.is_none());
    assert_eq!(product(4).merge, Some(MergeMarker::Up));
    assert!(product(5).merge.is_none());
    assert_eq!(product(6).merge, Some(MergeMarker::Up));
    assert_eq!(resolve_cell_span(&table, 3, 3).unwrap().rowspan, 2);
    assert_eq!(resolve_cell_span(&table, 5, 3).unwrap().rowspan, 2);

    let wiki = serialize_table(&table);
    assert!(wiki.contains("[[&ref(Ref_img/Heavy_Oil_Residue.png,nolink,20x20);重油残渣>素材/Heavy_Oil_Residue]]|1|10.00|"));
}

#[test]
fn comparison_chart_keeps_ingredient_consumed_by_one_result() {
    let results = [
        ChartResult::new("#1")
            .with_net("Water", -30.0)
            .with_building("Refinery", 1.0)
            .with_consume(30.0),
        ChartResult::new("#2")
            .with_net("Water", 15.0)
            .with_building("Refinery", 1.0)
            .with_consume(30.0),
    ];
    let candidates = vec!["Water".to_string()];
    let table = build_comparison_chart_table(&results, &candidates, &[]).unwrap();
    let wiki = serialize_table(&table);

    assert!(wiki.contains("|~|Water|~|~|"));
    assert!(wiki.contains("|#1|30|30.0|3.2|"));
    assert!(wiki.ends_with("|#2|-|30.0|3.2|"));
}
