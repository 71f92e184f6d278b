//! Dummy data generation for testing and demonstration.
//!
//! This module provides a small, internally consistent slice of the game's
//! crafting data: a handful of items, the buildings that process them, the
//! recipes linking them and the milestones and researches that consume them.
//!
//! # Examples
//!
//! ```
//! use craftwiki_protocol::dummy::dummy_catalog;
//!
//! let catalog = dummy_catalog();
//! assert!(catalog.item("Iron_Plate").is_some());
//! assert!(!catalog.recipes_producing("Iron_Plate").is_empty());
//! ```

use crate::building::Building;
use crate::catalog::Catalog;
use crate::condition::{Condition, ConditionItem, ConditionKind};
use crate::item::{Item, ItemKind};
use crate::recipe::{Recipe, RecipeItem};

fn item(id: &str, name: &str, index: u32, kind: ItemKind, category: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        index,
        wiki_link: format!("素材/{id}"),
        wiki_id: id.to_string(),
        kind,
        category: category.to_string(),
        coupons: None,
    }
}

fn building(
    id: &str,
    name: &str,
    index: u32,
    category: &str,
    subcategory: &str,
    ports: Option<(u32, u32)>,
    power: Option<f64>,
) -> Building {
    Building {
        id: id.to_string(),
        name: name.to_string(),
        index,
        wiki_link: format!("建築物/{category}#{id}"),
        wiki_id: id.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        power,
        area: None,
        max_inputs: ports.map(|(inputs, _)| inputs),
        max_outputs: ports.map(|(_, outputs)| outputs),
    }
}

fn slot(recipe_id: &str, item: Item, index: u32, amount: f64, minute: f64) -> RecipeItem {
    RecipeItem {
        recipe_id: recipe_id.to_string(),
        item_id: item.id.clone(),
        item: Some(item),
        index,
        amount,
        minute,
        building: None,
    }
}

fn building_slot(recipe_id: &str, building: Building) -> RecipeItem {
    RecipeItem {
        recipe_id: recipe_id.to_string(),
        item_id: building.id.clone(),
        item: None,
        index: 0,
        amount: 1.0,
        minute: 0.0,
        building: Some(building),
    }
}

fn recipe(id: &str, name: &str, index: u32, building: Building) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        index,
        wiki_link: String::new(),
        wiki_id: id.to_string(),
        link_anchor: "N1".to_string(),
        alternate: false,
        condition_id: None,
        condition: None,
        production_time: 1.0,
        production_time2: None,
        power: None,
        building_id: building.id.clone(),
        building,
        building2_id: None,
        building2: None,
        ingredients: Vec::new(),
        products: Vec::new(),
    }
}

fn with_condition(mut recipe: Recipe, condition: Condition) -> Recipe {
    recipe.condition_id = Some(condition.id.clone());
    recipe.condition = Some(condition);
    recipe
}

/// Iron ore.
#[must_use]
pub fn iron_ore() -> Item {
    item("Iron_Ore", "鉄鉱石", 1, ItemKind::Material, "鉱石")
}

/// Copper ore.
#[must_use]
pub fn copper_ore() -> Item {
    item("Copper_Ore", "銅鉱石", 2, ItemKind::Material, "鉱石")
}

/// Iron ingot.
#[must_use]
pub fn iron_ingot() -> Item {
    item("Iron_Ingot", "鉄のインゴット", 3, ItemKind::Material, "インゴット")
}

/// Iron plate.
#[must_use]
pub fn iron_plate() -> Item {
    item("Iron_Plate", "鉄板", 4, ItemKind::Material, "標準部品")
}

/// Iron rod.
#[must_use]
pub fn iron_rod() -> Item {
    item("Iron_Rod", "鉄のロッド", 5, ItemKind::Material, "標準部品")
}

/// Screw.
#[must_use]
pub fn screw() -> Item {
    item("Screw", "ネジ", 6, ItemKind::Material, "標準部品")
}

/// Reinforced iron plate.
#[must_use]
pub fn reinforced_iron_plate() -> Item {
    item("Reinforced_Iron_Plate", "強化鉄板", 7, ItemKind::Material, "標準部品")
}

/// Crude oil.
#[must_use]
pub fn crude_oil() -> Item {
    item("Crude_Oil", "原油", 8, ItemKind::Material, "液体")
}

/// Plastic.
#[must_use]
pub fn plastic() -> Item {
    item("Plastic", "プラスチック", 9, ItemKind::Material, "石油製品")
}

/// Heavy oil residue.
#[must_use]
pub fn heavy_oil_residue() -> Item {
    item("Heavy_Oil_Residue", "重油残渣", 10, ItemKind::Material, "液体")
}

/// Xeno-Zapper, a piece of equipment.
#[must_use]
pub fn xeno_zapper() -> Item {
    item("Xeno-Zapper", "ゼノザッパー", 11, ItemKind::Equipment, "武器")
}

/// Smelter: one input, one output.
#[must_use]
pub fn smelter() -> Building {
    building("Smelter", "製錬炉", 1, "生産", "製錬", Some((1, 1)), Some(4.0))
}

/// Foundry: two inputs, one output.
#[must_use]
pub fn foundry() -> Building {
    building("Foundry", "鋳造炉", 2, "生産", "製錬", Some((2, 1)), Some(16.0))
}

/// Constructor: one input, one output.
#[must_use]
pub fn constructor() -> Building {
    building("Constructor", "製作機", 3, "生産", "製造", Some((1, 1)), Some(4.0))
}

/// Assembler: two inputs, one output.
#[must_use]
pub fn assembler() -> Building {
    building("Assembler", "組立機", 4, "生産", "製造", Some((2, 1)), Some(15.0))
}

/// Refinery: two inputs, two outputs.
#[must_use]
pub fn refinery() -> Building {
    building("Refinery", "精製機", 5, "生産", "製造", Some((2, 2)), Some(30.0))
}

/// Craft bench, the hand-crafting station.
#[must_use]
pub fn craft_bench() -> Building {
    building("Craft_Bench", "作業台", 6, "特殊", "作業台", Some((1, 1)), None)
}

/// Equipment workshop.
#[must_use]
pub fn equipment_workshop() -> Building {
    building("Equipment_Workshop", "装備品作業台", 7, "特殊", "作業台", Some((4, 1)), None)
}

/// Build gun, used for placing buildings.
#[must_use]
pub fn build_gun() -> Building {
    building("Build_Gun", "ビルドガン", 8, "特殊", "ツール", None, None)
}

/// Storage container, built with the build gun.
#[must_use]
pub fn storage_container() -> Building {
    building("Storage_Container", "ストレージコンテナ", 9, "物流", "ストレージ", None, None)
}

/// The onboarding step that unlocks the basic recipes.
#[must_use]
pub fn onboarding() -> Condition {
    Condition {
        id: "Onboarding".to_string(),
        kind: ConditionKind::Onboarding,
        name: "オンボーディング".to_string(),
        index: 0,
        wiki_link: String::new(),
        link_anchor: String::new(),
        time: 0.0,
        tier: None,
        category: None,
        items: Vec::new(),
    }
}

/// Tier 1 milestone consuming iron plates and rods.
#[must_use]
pub fn milestone_logistics() -> Condition {
    Condition {
        id: "Milestone_1_1".to_string(),
        kind: ConditionKind::Milestone,
        name: "物流".to_string(),
        index: 1,
        wiki_link: "プロジェクト/マイルストーン#M_1_1".to_string(),
        link_anchor: "M_1_1".to_string(),
        time: 120.0,
        tier: Some(1),
        category: None,
        items: vec![
            ConditionItem {
                condition_id: "Milestone_1_1".to_string(),
                item_id: "Iron_Plate".to_string(),
                item: None,
                index: 0,
                amount: 50.0,
            },
            ConditionItem {
                condition_id: "Milestone_1_1".to_string(),
                item_id: "Iron_Rod".to_string(),
                item: None,
                index: 1,
                amount: 50.0,
            },
        ],
    }
}

/// Tier 5 milestone unlocking the refinery.
#[must_use]
pub fn milestone_oil_processing() -> Condition {
    Condition {
        id: "Milestone_5_2".to_string(),
        kind: ConditionKind::Milestone,
        name: "石油加工".to_string(),
        index: 2,
        wiki_link: "プロジェクト/マイルストーン#M_5_2".to_string(),
        link_anchor: "M_5_2".to_string(),
        time: 720.0,
        tier: Some(5),
        category: None,
        items: vec![ConditionItem {
            condition_id: "Milestone_5_2".to_string(),
            item_id: "Reinforced_Iron_Plate".to_string(),
            item: None,
            index: 0,
            amount: 300.0,
        }],
    }
}

/// Research consuming iron plates.
#[must_use]
pub fn research_quartz() -> Condition {
    Condition {
        id: "Research_Quartz_0".to_string(),
        kind: ConditionKind::Research,
        name: "石英の研究".to_string(),
        index: 3,
        wiki_link: "プロジェクト/分析#Quartz_0".to_string(),
        link_anchor: "Quartz_0".to_string(),
        time: 60.0,
        tier: None,
        category: Some("石英".to_string()),
        items: vec![ConditionItem {
            condition_id: "Research_Quartz_0".to_string(),
            item_id: "Iron_Plate".to_string(),
            item: None,
            index: 0,
            amount: 100.0,
        }],
    }
}

/// Standard iron ingot recipe at the smelter.
#[must_use]
pub fn recipe_iron_ingot() -> Recipe {
    let id = "Recipe_Iron_Ingot";
    let mut recipe = recipe(id, "鉄のインゴット", 1, smelter());
    recipe.wiki_link = "素材/Iron_Ingot#Recipe_N1".to_string();
    recipe.production_time = 2.0;
    recipe.ingredients = vec![slot(id, iron_ore(), 0, 1.0, 30.0)];
    recipe.products = vec![slot(id, iron_ingot(), 0, 1.0, 30.0)];
    with_condition(recipe, onboarding())
}

/// Alternate iron ingot recipe at the foundry.
#[must_use]
pub fn recipe_iron_alloy_ingot() -> Recipe {
    let id = "Recipe_Alternate_IngotIron";
    let mut recipe = recipe(id, "代替: 鉄合金のインゴット", 2, foundry());
    recipe.wiki_link = "素材/Iron_Ingot#Recipe_A1".to_string();
    recipe.link_anchor = "A1".to_string();
    recipe.alternate = true;
    recipe.production_time = 6.0;
    recipe.ingredients = vec![
        slot(id, iron_ore(), 0, 2.0, 20.0),
        slot(id, copper_ore(), 1, 2.0, 20.0),
    ];
    recipe.products = vec![slot(id, iron_ingot(), 0, 5.0, 50.0)];
    recipe
}

/// Iron plate recipe at the constructor, also craftable by hand.
#[must_use]
pub fn recipe_iron_plate() -> Recipe {
    let id = "Recipe_Iron_Plate";
    let mut recipe = recipe(id, "鉄板", 3, constructor());
    recipe.wiki_link = "素材/Iron_Plate#Recipe_N1".to_string();
    recipe.production_time = 6.0;
    recipe.production_time2 = Some(3.0);
    recipe.building2_id = Some("Craft_Bench".to_string());
    recipe.building2 = Some(craft_bench());
    recipe.ingredients = vec![slot(id, iron_ingot(), 0, 3.0, 30.0)];
    recipe.products = vec![slot(id, iron_plate(), 0, 2.0, 20.0)];
    with_condition(recipe, onboarding())
}

/// Iron rod recipe at the constructor.
#[must_use]
pub fn recipe_iron_rod() -> Recipe {
    let id = "Recipe_Iron_Rod";
    let mut recipe = recipe(id, "鉄のロッド", 4, constructor());
    recipe.wiki_link = "素材/Iron_Rod#Recipe_N1".to_string();
    recipe.production_time = 4.0;
    recipe.ingredients = vec![slot(id, iron_ingot(), 0, 1.0, 15.0)];
    recipe.products = vec![slot(id, iron_rod(), 0, 1.0, 15.0)];
    with_condition(recipe, onboarding())
}

/// Screw recipe at the constructor.
#[must_use]
pub fn recipe_screw() -> Recipe {
    let id = "Recipe_Screw";
    let mut recipe = recipe(id, "ネジ", 5, constructor());
    recipe.wiki_link = "素材/Screw#Recipe_N1".to_string();
    recipe.production_time = 6.0;
    recipe.ingredients = vec![slot(id, iron_rod(), 0, 1.0, 10.0)];
    recipe.products = vec![slot(id, screw(), 0, 4.0, 40.0)];
    with_condition(recipe, onboarding())
}

/// Reinforced iron plate recipe at the assembler.
#[must_use]
pub fn recipe_reinforced_iron_plate() -> Recipe {
    let id = "Recipe_Reinforced_Iron_Plate";
    let mut recipe = recipe(id, "強化鉄板", 6, assembler());
    recipe.wiki_link = "素材/Reinforced_Iron_Plate#Recipe_N1".to_string();
    recipe.production_time = 12.0;
    recipe.ingredients = vec![
        slot(id, iron_plate(), 0, 6.0, 30.0),
        slot(id, screw(), 1, 12.0, 60.0),
    ];
    recipe.products = vec![slot(id, reinforced_iron_plate(), 0, 1.0, 5.0)];
    with_condition(recipe, milestone_logistics())
}

/// Plastic recipe at the refinery, with heavy oil residue as by-product.
#[must_use]
pub fn recipe_plastic() -> Recipe {
    let id = "Recipe_Plastic";
    let mut recipe = recipe(id, "プラスチック", 7, refinery());
    recipe.wiki_link = "素材/Plastic#Recipe_N1".to_string();
    recipe.production_time = 6.0;
    recipe.ingredients = vec![slot(id, crude_oil(), 0, 3.0, 30.0)];
    recipe.products = vec![
        slot(id, plastic(), 0, 2.0, 20.0),
        slot(id, heavy_oil_residue(), 1, 1.0, 10.0),
    ];
    with_condition(recipe, milestone_oil_processing())
}

/// Xeno-Zapper recipe at the equipment workshop.
#[must_use]
pub fn recipe_xeno_zapper() -> Recipe {
    let id = "Recipe_XenoZapper";
    let mut recipe = recipe(id, "ゼノザッパー", 8, equipment_workshop());
    recipe.wiki_link = "素材/Xeno-Zapper#Recipe_N1".to_string();
    recipe.production_time = 40.0;
    recipe.ingredients = vec![
        slot(id, iron_rod(), 0, 10.0, 15.0),
        slot(id, reinforced_iron_plate(), 1, 2.0, 3.0),
        slot(id, iron_plate(), 2, 5.0, 7.5),
    ];
    recipe.products = vec![slot(id, xeno_zapper(), 0, 1.0, 1.5)];
    with_condition(recipe, milestone_logistics())
}

/// Storage container, placed with the build gun.
#[must_use]
pub fn recipe_storage_container() -> Recipe {
    let id = "Recipe_StorageContainer";
    let mut recipe = recipe(id, "ストレージコンテナ", 9, build_gun());
    recipe.production_time = 0.0;
    recipe.ingredients = vec![
        slot(id, iron_plate(), 0, 10.0, 0.0),
        slot(id, iron_rod(), 1, 10.0, 0.0),
    ];
    recipe.products = vec![building_slot(id, storage_container())];
    with_condition(recipe, milestone_logistics())
}

/// Generates a catalog holding every fixture in this module.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::dummy::dummy_catalog;
///
/// let catalog = dummy_catalog();
/// assert_eq!(catalog.items.len(), 11);
/// assert_eq!(catalog.recipes.len(), 9);
/// ```
#[must_use]
pub fn dummy_catalog() -> Catalog {
    Catalog {
        items: vec![
            iron_ore(),
            copper_ore(),
            iron_ingot(),
            iron_plate(),
            iron_rod(),
            screw(),
            reinforced_iron_plate(),
            crude_oil(),
            plastic(),
            heavy_oil_residue(),
            xeno_zapper(),
        ],
        buildings: vec![
            smelter(),
            foundry(),
            constructor(),
            assembler(),
            refinery(),
            craft_bench(),
            equipment_workshop(),
            build_gun(),
            storage_container(),
        ],
        recipes: vec![
            recipe_iron_ingot(),
            recipe_iron_alloy_ingot(),
            recipe_iron_plate(),
            recipe_iron_rod(),
            recipe_screw(),
            recipe_reinforced_iron_plate(),
            recipe_plastic(),
            recipe_xeno_zapper(),
            recipe_storage_container(),
        ],
        conditions: vec![
            onboarding(),
            milestone_logistics(),
            milestone_oil_processing(),
            research_quartz(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_slots_reference_known_items() {
        let catalog = dummy_catalog();
        for recipe in &catalog.recipes {
            for ing in &recipe.ingredients {
                assert!(catalog.item(&ing.item_id).is_some(), "{}", ing.item_id);
            }
        }
    }

    #[test]
    fn recipe_ids_are_unique() {
        let catalog = dummy_catalog();
        let mut ids: Vec<_> = catalog.recipes.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.recipes.len());
    }
}
