//! Building types and the static floor-area table.
//!
//! Buildings run recipes. Besides the backend record, this module owns the
//! footprint of every production and power building, expressed in
//! foundations (one foundation is 8m x 8m, i.e. 64 square metres).

use serde::{Deserialize, Serialize};

use crate::entry::WikiEntry;
use crate::error::{ProtocolError, Result};

/// Building ids whose recipes are crafted by hand.
const MANUAL_BUILDINGS: &[&str] = &["Build_Gun", "Craft_Bench", "Equipment_Workshop"];

/// Square metres covered by one foundation.
const FOUNDATION_AREA: f64 = 64.0;

/// A building that runs recipes or produces power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    /// Unique identifier (e.g. `"Constructor"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sort position within the catalog.
    #[serde(default)]
    pub index: u32,
    /// Wiki page (with anchor) of the building.
    #[serde(default)]
    pub wiki_link: String,
    /// Icon asset id.
    #[serde(default)]
    pub wiki_id: String,
    /// Top-level building category.
    #[serde(default)]
    pub category: String,
    /// Building subcategory.
    #[serde(default)]
    pub subcategory: String,
    /// Power draw in MW.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    /// Floor area as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Number of input ports, which is the number of ingredient slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_inputs: Option<u32>,
    /// Number of output ports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_outputs: Option<u32>,
}

impl Building {
    /// Returns `true` if recipes at this building are crafted by hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftwiki_protocol::dummy::{constructor, equipment_workshop};
    ///
    /// assert!(!constructor().is_manual());
    /// assert!(equipment_workshop().is_manual());
    /// ```
    #[must_use]
    pub fn is_manual(&self) -> bool {
        MANUAL_BUILDINGS.contains(&self.id.as_str())
    }
}

impl WikiEntry for Building {
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

/// Returns the floor area of a building in foundations.
///
/// Hand-crafting stations take no floor space.
///
/// # Errors
///
/// Returns [`ProtocolError::UnknownBuilding`] if the id is not in the table.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::floor_area;
///
/// assert_eq!(floor_area("Packager").unwrap(), 1.0);
/// assert_eq!(floor_area("Build_Gun").unwrap(), 0.0);
/// assert!(floor_area("Space_Elevator").is_err());
/// ```
pub fn floor_area(building_id: &str) -> Result<f64> {
    let square_metres = match building_id {
        "Build_Gun" | "Equipment_Workshop" | "Crafting_Bench" | "Craft_Bench" => 0.0,

        "Smelter" => 45.0,
        "Foundry" => 90.0,

        "Constructor" => 78.21,
        "Assembler" => 150.0,
        "Manufacturer" => 360.0,
        "Packager" => 64.0,
        "Refinery" => 200.0,
        "Blender" => 288.0,
        "Particle_Accelerator" => 912.0,
        "Quantum_Encoder" => 1056.0,
        "Converter" => 256.0,

        "Biomass_Burner" => 64.0,
        "Coal-Powered_Generator" => 260.0,
        "Fuel-Powered_Generator" => 400.0,
        "Nuclear_Power_Plant" => 1548.0,
        "Alien_Power_Augmenter" => 784.0,

        _ => return Err(ProtocolError::UnknownBuilding(building_id.to_string())),
    };

    Ok(square_metres / FOUNDATION_AREA)
}
