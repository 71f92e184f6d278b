//! Unlock conditions: onboarding, milestones and researches.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// How a recipe or building gets unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// Available from the start of the game.
    Onboarding,
    /// Unlocked by completing a HUB milestone.
    Milestone,
    /// Unlocked by an analysis in the molecular analyzer.
    Research,
    /// Any kind this crate does not know about.
    #[serde(other)]
    Other,
}

/// One item (and amount) required by a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionItem {
    /// Owning condition.
    #[serde(default)]
    pub condition_id: String,
    /// Required item.
    pub item_id: String,
    /// The resolved item record, when the backend embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
    /// Position within the condition's item list.
    #[serde(default)]
    pub index: u32,
    /// Required amount.
    pub amount: f64,
}

/// A milestone, research or onboarding step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Unique identifier.
    pub id: String,
    /// Onboarding, milestone or research.
    pub kind: ConditionKind,
    /// Display name.
    pub name: String,
    /// Sort position within the catalog.
    #[serde(default)]
    pub index: u32,
    /// Wiki page (with anchor) of the condition.
    #[serde(default)]
    pub wiki_link: String,
    /// Anchor on the wiki page.
    #[serde(default)]
    pub link_anchor: String,
    /// Time to complete, in seconds.
    #[serde(default)]
    pub time: f64,
    /// Milestone tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<u32>,
    /// Research category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Items the condition consumes, in display order.
    #[serde(default)]
    pub items: Vec<ConditionItem>,
}

impl Condition {
    /// Finds the requirement entry for the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftwiki_protocol::dummy::milestone_logistics;
    ///
    /// let milestone = milestone_logistics();
    /// assert_eq!(milestone.find_item("Iron_Plate").unwrap().amount, 50.0);
    /// assert!(milestone.find_item("Water").is_none());
    /// ```
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&ConditionItem> {
        self.items.iter().find(|entry| entry.item_id == item_id)
    }

    /// Returns `true` if the condition consumes the given item.
    #[must_use]
    pub fn requires(&self, item_id: &str) -> bool {
        self.find_item(item_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_milestone() {
        let json = r#"{
            "id": "M_2_1",
            "kind": "milestone",
            "name": "物流",
            "index": 4,
            "wikiLink": "プロジェクト/マイルストーン#M_2_1",
            "linkAnchor": "M_2_1",
            "time": 240,
            "tier": 2,
            "items": [
                {"conditionId": "M_2_1", "itemId": "Iron_Plate", "index": 0, "amount": 150}
            ]
        }"#;
        let condition: Condition = serde_json::from_str(json).unwrap();
        assert_eq!(condition.kind, ConditionKind::Milestone);
        assert_eq!(condition.tier, Some(2));
        assert_eq!(condition.category, None);
        assert!(condition.requires("Iron_Plate"));
    }

    #[test]
    fn unknown_kind_maps_to_other() {
        let json = r#"{"id": "X", "kind": "awesome_shop", "name": "X"}"#;
        let condition: Condition = serde_json::from_str(json).unwrap();
        assert_eq!(condition.kind, ConditionKind::Other);
        assert!(condition.items.is_empty());
    }
}
