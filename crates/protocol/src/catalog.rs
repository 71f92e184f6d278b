//! Offline catalog of crafting data.
//!
//! The catalog is a JSON dump of the backend's items, buildings, recipes
//! and unlock conditions. It answers the same questions the item page asks
//! the backend: which recipes produce an item, which recipes consume it and
//! which milestones and researches require it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::building::Building;
use crate::condition::{Condition, ConditionKind};
use crate::error::{ProtocolError, Result};
use crate::item::Item;
use crate::recipe::Recipe;

/// A complete, read-only dump of crafting data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// All items.
    #[serde(default)]
    pub items: Vec<Item>,
    /// All buildings.
    #[serde(default)]
    pub buildings: Vec<Building>,
    /// All recipes, with their slots and buildings resolved.
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// All unlock conditions.
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Catalog {
    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DeserializationFailed`] if the JSON does not
    /// describe a catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ProtocolError::ReadCatalog {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        debug!(
            items = catalog.items.len(),
            recipes = catalog.recipes.len(),
            conditions = catalog.conditions.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up a building by id.
    #[must_use]
    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|building| building.id == id)
    }

    /// Returns the recipes producing an item.
    ///
    /// Standard recipes come before alternates, each group in catalog order,
    /// and recipes yielding the item only as a by-product come last.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftwiki_protocol::dummy::dummy_catalog;
    ///
    /// let catalog = dummy_catalog();
    /// let ids: Vec<_> = catalog
    ///     .recipes_producing("Iron_Ingot")
    ///     .into_iter()
    ///     .map(|r| r.id)
    ///     .collect();
    /// assert_eq!(ids, ["Recipe_Iron_Ingot", "Recipe_Alternate_IngotIron"]);
    /// ```
    #[must_use]
    pub fn recipes_producing(&self, item_id: &str) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| recipe.find_product(item_id).is_some())
            .cloned()
            .collect();
        recipes.sort_by_key(|recipe| (recipe.alternate, recipe.index));
        recipes.sort_by_key(|recipe| recipe.is_byproduct(item_id));
        recipes
    }

    /// Returns the recipes consuming an item whose main product is an item,
    /// grouped by the product's kind label.
    #[must_use]
    pub fn recipes_using_for_item(&self, item_id: &str) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = self
            .recipes_using(item_id)
            .filter(|recipe| {
                recipe
                    .products
                    .first()
                    .is_some_and(|product| product.item.is_some())
            })
            .cloned()
            .collect();
        recipes.sort_by_cached_key(|recipe| {
            recipe
                .products
                .first()
                .and_then(|product| product.item.as_ref())
                .map(|item| item.kind.label())
                .unwrap_or_default()
        });
        recipes
    }

    /// Returns the recipes consuming an item whose main product is a
    /// building, in building order.
    #[must_use]
    pub fn recipes_using_for_building(&self, item_id: &str) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = self
            .recipes_using(item_id)
            .filter(|recipe| {
                recipe
                    .products
                    .first()
                    .is_some_and(|product| product.building.is_some())
            })
            .cloned()
            .collect();
        recipes.sort_by_key(|recipe| {
            recipe
                .products
                .first()
                .and_then(|product| product.building.as_ref())
                .map(|building| building.index)
        });
        recipes
    }

    /// Returns the milestones requiring an item, in catalog order.
    #[must_use]
    pub fn milestones(&self, item_id: &str) -> Vec<Condition> {
        self.conditions_requiring(ConditionKind::Milestone, item_id)
    }

    /// Returns the researches requiring an item, in catalog order.
    #[must_use]
    pub fn researches(&self, item_id: &str) -> Vec<Condition> {
        self.conditions_requiring(ConditionKind::Research, item_id)
    }

    fn recipes_using<'a>(&'a self, item_id: &'a str) -> impl Iterator<Item = &'a Recipe> {
        let mut recipes: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| recipe.find_ingredient(item_id).is_some())
            .collect();
        recipes.sort_by_key(|recipe| recipe.index);
        recipes.into_iter()
    }

    fn conditions_requiring(&self, kind: ConditionKind, item_id: &str) -> Vec<Condition> {
        let mut conditions: Vec<Condition> = self
            .conditions
            .iter()
            .filter(|condition| condition.kind == kind && condition.requires(item_id))
            .cloned()
            .collect();
        conditions.sort_by_key(|condition| condition.index);
        conditions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::dummy_catalog;
    use tempfile::TempDir;

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn byproduct_recipes_come_last() {
        let catalog = dummy_catalog();
        let recipes = catalog.recipes_producing("Heavy_Oil_Residue");
        assert_eq!(ids(&recipes), ["Recipe_Plastic"]);
        assert!(recipes[0].is_byproduct("Heavy_Oil_Residue"));
    }

    #[test]
    fn recipes_using_for_item_sorted_by_kind() {
        let catalog = dummy_catalog();
        let recipes = catalog.recipes_using_for_item("Iron_Plate");
        assert_eq!(
            ids(&recipes),
            ["Recipe_Reinforced_Iron_Plate", "Recipe_XenoZapper"]
        );
    }

    #[test]
    fn recipes_using_for_building_only_building_products() {
        let catalog = dummy_catalog();
        let recipes = catalog.recipes_using_for_building("Iron_Plate");
        assert_eq!(ids(&recipes), ["Recipe_StorageContainer"]);
        assert!(catalog.recipes_using_for_building("Screw").is_empty());
    }

    #[test]
    fn conditions_by_kind() {
        let catalog = dummy_catalog();
        let milestones = catalog.milestones("Iron_Plate");
        assert_eq!(milestones.len(), 1);
        assert_eq!(milestones[0].name, "物流");

        let researches = catalog.researches("Iron_Plate");
        assert_eq!(researches.len(), 1);
        assert_eq!(researches[0].category.as_deref(), Some("石英"));

        assert!(catalog.researches("Screw").is_empty());
    }

    #[test]
    fn lookups() {
        let catalog = dummy_catalog();
        assert_eq!(catalog.item("Screw").unwrap().name, "ネジ");
        assert!(catalog.item("Nobelisk").is_none());
        assert_eq!(catalog.building("Refinery").unwrap().max_outputs, Some(2));
    }

    #[test]
    fn load_from_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let original = dummy_catalog();
        std::fs::write(&path, serde_json::to_string(&original).unwrap()).unwrap();

        let loaded = Catalog::load_from(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_missing_file() {
        let err = Catalog::load_from("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, ProtocolError::ReadCatalog { .. }));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(ProtocolError::DeserializationFailed(_))
        ));
    }
}
