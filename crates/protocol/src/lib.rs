//! Shared domain types for the craftwiki application.
//!
//! This crate defines the read-only crafting data the wiki tables are built
//! from. The records mirror what the backend serves (camelCase JSON) and are
//! never mutated by the table builders.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`item`]: Parts and equipment
//! - [`building`]: Buildings and the static floor-area table
//! - [`recipe`]: Recipes and their ingredient/product slots
//! - [`condition`]: Onboarding, milestone and research unlocks
//! - [`chart`]: Planner answers consumed by the comparison chart
//! - [`catalog`]: Offline catalog dump with the item-page queries
//! - [`dummy`]: Sample data for tests and demos
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Querying a catalog for the recipes that produce an item:
//!
//! ```
//! use craftwiki_protocol::{WikiEntry, dummy::dummy_catalog};
//!
//! let catalog = dummy_catalog();
//! for recipe in catalog.recipes_producing("Iron_Ingot") {
//!     println!("{} ({})", recipe.name(), recipe.building.name);
//! }
//! ```

pub mod building;
pub mod catalog;
pub mod chart;
pub mod condition;
pub mod dummy;
pub mod entry;
pub mod error;
pub mod item;
pub mod recipe;

// Re-export primary types at crate root for convenience
pub use building::{Building, floor_area};
pub use catalog::Catalog;
pub use chart::ChartResult;
pub use condition::{Condition, ConditionItem, ConditionKind};
pub use entry::{WikiEntry, to_display_id, to_id};
pub use error::{ProtocolError, Result};
pub use item::{Item, ItemKind};
pub use recipe::{Recipe, RecipeItem};
