//! Recipe types.
//!
//! A recipe turns an ordered list of ingredients into an ordered list of
//! products at a building. Each slot carries both the per-cycle amount and
//! the per-minute rate.

use serde::{Deserialize, Serialize};

use crate::building::Building;
use crate::condition::Condition;
use crate::entry::{WikiEntry, to_display_id};
use crate::item::Item;

/// Background colour of a recipe whose first product is another item.
pub const BYPRODUCT_BG_COLOR: &str = "#eee";

/// Background colour of an alternate recipe.
pub const ALTERNATE_BG_COLOR: &str = "#fff6f6";

/// Background colour of a standard recipe.
pub const STANDARD_BG_COLOR: &str = "#f6fff6";

/// One ingredient or product slot of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    /// Owning recipe.
    #[serde(default)]
    pub recipe_id: String,
    /// Referenced item or building id.
    pub item_id: String,
    /// The item record, when the slot references an item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
    /// Position within the ingredient or product list.
    #[serde(default)]
    pub index: u32,
    /// Amount per production cycle.
    pub amount: f64,
    /// Rate per minute.
    pub minute: f64,
    /// The building record, when the slot produces a building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<Building>,
}

/// A crafting recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sort position within the catalog.
    #[serde(default)]
    pub index: u32,
    /// Wiki page (with anchor) of the recipe.
    #[serde(default)]
    pub wiki_link: String,
    /// Icon asset id.
    #[serde(default)]
    pub wiki_id: String,
    /// Anchor suffix used for `#aname(Recipe_…)`.
    #[serde(default)]
    pub link_anchor: String,
    /// Whether this is an alternate (hard drive) recipe.
    #[serde(default)]
    pub alternate: bool,
    /// Unlock condition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_id: Option<String>,
    /// Unlock condition record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    /// Seconds per cycle at the primary building.
    pub production_time: f64,
    /// Clicks per cycle at the secondary (manual) building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_time2: Option<f64>,
    /// Power override in MW.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    /// Primary building id.
    #[serde(default)]
    pub building_id: String,
    /// Primary building.
    pub building: Building,
    /// Secondary building id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building2_id: Option<String>,
    /// Secondary building, usually a hand-crafting station.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building2: Option<Building>,
    /// Ingredient slots in display order.
    #[serde(default)]
    pub ingredients: Vec<RecipeItem>,
    /// Product slots in display order.
    #[serde(default)]
    pub products: Vec<RecipeItem>,
}

impl Recipe {
    /// Returns the name followed by the display id.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} [{}]", self.name, to_display_id(&self.id))
    }

    /// Returns `true` if the given item is not this recipe's main product.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftwiki_protocol::dummy::recipe_iron_ingot;
    ///
    /// let recipe = recipe_iron_ingot();
    /// assert!(!recipe.is_byproduct("Iron_Ingot"));
    /// assert!(recipe.is_byproduct("Iron_Ore"));
    /// ```
    #[must_use]
    pub fn is_byproduct(&self, item_id: &str) -> bool {
        self.products.first().map(|p| p.item_id.as_str()) != Some(item_id)
    }

    /// Returns the background colour of the recipe's title block when shown
    /// on the page of `item_id`.
    #[must_use]
    pub fn bg_color(&self, item_id: &str) -> &'static str {
        if self.is_byproduct(item_id) {
            BYPRODUCT_BG_COLOR
        } else if self.alternate {
            ALTERNATE_BG_COLOR
        } else {
            STANDARD_BG_COLOR
        }
    }

    /// Returns the ingredient at slot `index`, if any.
    #[must_use]
    pub fn ingredient(&self, index: usize) -> Option<&RecipeItem> {
        self.ingredients.get(index)
    }

    /// Returns the product at slot `index`, if any.
    #[must_use]
    pub fn product(&self, index: usize) -> Option<&RecipeItem> {
        self.products.get(index)
    }

    /// Finds the ingredient slot consuming the given item.
    #[must_use]
    pub fn find_ingredient(&self, item_id: &str) -> Option<&RecipeItem> {
        self.ingredients.iter().find(|ing| ing.item_id == item_id)
    }

    /// Finds the product slot producing the given item.
    #[must_use]
    pub fn find_product(&self, item_id: &str) -> Option<&RecipeItem> {
        self.products.iter().find(|prod| prod.item_id == item_id)
    }

    /// Returns the effective power draw, falling back to the building's.
    #[must_use]
    pub fn effective_power(&self) -> Option<f64> {
        self.power.or(self.building.power)
    }
}

impl WikiEntry for Recipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn wiki_link(&self) -> &str {
        &self.wiki_link
    }

    fn wiki_id(&self) -> &str {
        &self.wiki_id
    }
}
