//! Planner results used by the comparison chart.
//!
//! The production-chain solver runs elsewhere. For every named recipe
//! selection it returns the net flow per item, the number of buildings per
//! building id and the power balance; this module only models that answer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::building::floor_area;
use crate::error::Result;

/// The planner's answer for one named recipe selection.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::ChartResult;
///
/// let result = ChartResult::new("#1")
///     .with_net("Iron_Ore", -30.0)
///     .with_net("Iron_Ingot", 30.0)
///     .with_building("Smelter", 1.0);
///
/// assert_eq!(result.consumption("Iron_Ore"), Some(30.0));
/// assert_eq!(result.consumption("Iron_Ingot"), None);
/// assert_eq!(result.floor_area().unwrap(), 45.0 / 64.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    /// Label of the recipe selection.
    #[serde(default)]
    pub name: String,
    /// Number of times each recipe runs, keyed by recipe id.
    #[serde(default)]
    pub recipes: BTreeMap<String, f64>,
    /// Candidate ingredient ids the planner was asked about.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Number of buildings, keyed by building id.
    #[serde(default)]
    pub buildings: BTreeMap<String, f64>,
    /// Net flow per item and minute; negative means consumed.
    #[serde(default)]
    pub net: BTreeMap<String, f64>,
    /// Total power consumption in MW.
    #[serde(default)]
    pub consume: f64,
    /// Total power generation in MW.
    #[serde(default)]
    pub power: f64,
}

impl ChartResult {
    /// Creates an empty result with the given selection name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the net flow of an item.
    #[must_use]
    pub fn with_net(mut self, item_id: impl Into<String>, flow: f64) -> Self {
        self.net.insert(item_id.into(), flow);
        self
    }

    /// Sets the number of buildings of a kind.
    #[must_use]
    pub fn with_building(mut self, building_id: impl Into<String>, count: f64) -> Self {
        self.buildings.insert(building_id.into(), count);
        self
    }

    /// Sets the total power consumption.
    #[must_use]
    pub fn with_consume(mut self, consume: f64) -> Self {
        self.consume = consume;
        self
    }

    /// Returns the consumption rate of an item when it is net-consumed.
    ///
    /// Items that are produced, balanced or absent yield `None`.
    #[must_use]
    pub fn consumption(&self, item_id: &str) -> Option<f64> {
        self.net
            .get(item_id)
            .copied()
            .filter(|flow| *flow < 0.0)
            .map(|flow| -flow)
    }

    /// Returns `true` if the item is net-consumed.
    #[must_use]
    pub fn consumes(&self, item_id: &str) -> bool {
        self.consumption(item_id).is_some()
    }

    /// Returns the total floor area of all buildings, in foundations.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownBuilding`](crate::ProtocolError::UnknownBuilding)
    /// if any building id is missing from the footprint table.
    pub fn floor_area(&self) -> Result<f64> {
        self.buildings
            .iter()
            .map(|(id, count)| floor_area(id).map(|area| area * count))
            .sum()
    }
}
