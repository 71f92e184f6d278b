//! Table model and renderers for the craftwiki application.
//!
//! A [`Table`] is a grid of rows and columns in which a column may be a
//! merge marker folding it into its neighbour (`>` merges into the next
//! column, `~` into the cell above). Formatting rows carry column styles
//! and are never displayed. The same table can be written as wiki markup
//! or rendered as HTML with spans resolved.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`tag`]: Inline content of a cell (text, images, links)
//! - [`model`]: Table, row and column types
//! - [`layout`]: Span and style resolution of the visible grid
//! - [`wiki`]: Wiki markup serialization
//! - [`html`]: HTML rendering
//! - [`format`]: Number formatting shared by the builders
//! - [`builders`]: Domain table builders
//! - [`page`]: Item page assembly
//! - [`error`]: Error types for table operations
//!
//! # Examples
//!
//! Building a recipe table and writing it for the wiki:
//!
//! ```
//! use craftwiki_protocol::dummy::recipe_iron_ingot;
//! use craftwiki_table::{HtmlRenderer, build_recipe_table, serialize_table};
//!
//! let table = build_recipe_table("Iron_Ingot", &recipe_iron_ingot());
//! let wiki = serialize_table(&table);
//! assert!(wiki.contains("|2秒|"));
//!
//! let html = HtmlRenderer::default().render(&table);
//! assert!(html.starts_with("<table><thead>"));
//! ```

pub mod builders;
pub mod error;
pub mod format;
pub mod html;
pub mod layout;
pub mod model;
pub mod page;
pub mod tag;
pub mod wiki;

// Re-export primary types at crate root for convenience
pub use builders::{
    build_comparison_chart_table, build_milestones_table, build_recipe_table,
    build_recipes_for_building_table, build_recipes_for_item_table, build_researches_table,
};
pub use error::{Result, TableError};
pub use html::{HtmlOptions, HtmlRenderer};
pub use layout::{CellSpan, RenderedCell, RenderedRow, layout, resolve_cell_span};
pub use model::{Align, Column, MergeMarker, Row, RowKind, Style, Table};
pub use page::{ItemPage, ItemPageData, Section, SectionContent};
pub use tag::{Tag, condition_link};
pub use wiki::{WikiOptions, WikiWriter, serialize_tag, serialize_table};
