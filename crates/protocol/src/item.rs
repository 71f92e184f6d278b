//! Item types.
//!
//! Items are the parts and equipment that flow through recipes. They are
//! read-only records delivered by the backend.

use serde::{Deserialize, Serialize};

use crate::entry::{WikiEntry, to_display_id};

/// The kind of an item, which decides its label in usage tables.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::ItemKind;
///
/// assert_eq!(ItemKind::Material.label(), "パーツ");
/// assert_eq!(ItemKind::Equipment.label(), "装備品");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A part used as a crafting ingredient.
    #[default]
    Material,
    /// A piece of player equipment.
    Equipment,
    /// Any kind this crate does not know about.
    #[serde(other)]
    Other,
}

impl ItemKind {
    /// Returns the label printed in the "kind" column.
    ///
    /// Unknown kinds print as an empty label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Material => "パーツ",
            Self::Equipment => "装備品",
            Self::Other => "",
        }
    }
}

/// A part or piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier (e.g. `"Iron_Ingot"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sort position within the catalog.
    #[serde(default)]
    pub index: u32,
    /// Wiki page of the item.
    #[serde(default)]
    pub wiki_link: String,
    /// Icon asset id.
    #[serde(default)]
    pub wiki_id: String,
    /// Part or equipment.
    #[serde(default)]
    pub kind: ItemKind,
    /// Catalog category used for grouping in pickers.
    #[serde(default)]
    pub category: String,
    /// Coupon value when sunk, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupons: Option<u32>,
}

impl Item {
    /// Returns the name followed by the display id, e.g. `鉄のインゴット [Iron Ingot]`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} [{}]", self.name, to_display_id(&self.id))
    }
}

impl WikiEntry for Item {
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
