//! Wiki markup serialization.
//!
//! Produces the line-oriented table syntax of the wiki: one `|cell|cell|`
//! line per row, merge markers written as `>` and `~`, cell styles as
//! `BGCOLOR(...)`/`LEFT`/width prefixes, and inline directives for sized
//! text, images and links.

use serde::{Deserialize, Serialize};

use crate::model::{Column, MergeMarker, Row, Style, Table};
use crate::tag::Tag;

/// Default image directory on the wiki.
pub const DEFAULT_IMAGE_DIR: &str = "Ref_img";

/// Default image width and height in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 20;

/// Options controlling wiki output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiOptions {
    /// Directory images are referenced from.
    pub image_dir: String,
    /// Size used for images that do not carry their own.
    pub image_size: u32,
    /// Whether to append the row kind code (`c`, `h`, `f`) after each row.
    pub row_kind_suffix: bool,
}

impl Default for WikiOptions {
    fn default() -> Self {
        Self {
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            image_size: DEFAULT_IMAGE_SIZE,
            row_kind_suffix: false,
        }
    }
}

/// Serializes tables to wiki markup.
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Column, Row, Table, WikiOptions, WikiWriter};
///
/// let writer = WikiWriter::new(WikiOptions {
///     row_kind_suffix: true,
///     ..WikiOptions::default()
/// });
/// let table = Table::new(vec![Row::header(vec![Column::merge_right(), Column::text("名前")])]);
/// assert_eq!(writer.table(&table), "|>|名前|h");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WikiWriter {
    options: WikiOptions,
}

impl WikiWriter {
    /// Creates a writer with the given options.
    #[must_use]
    pub fn new(options: WikiOptions) -> Self {
        Self { options }
    }

    /// Returns the writer's options.
    #[must_use]
    pub fn options(&self) -> &WikiOptions {
        &self.options
    }

    /// Serializes a single tag.
    #[must_use]
    pub fn tag(&self, tag: &Tag) -> String {
        match tag {
            Tag::Plain(text) => text.clone(),
            Tag::Text {
                content,
                size: Some(size),
            } => format!("&size({size}){{{content}}};"),
            Tag::Text { content, size: None } => content.clone(),
            Tag::Image { refer, size } => {
                let size = size.unwrap_or(self.options.image_size);
                format!(
                    "&ref({}/{refer},nolink,{size}x{size});",
                    self.options.image_dir
                )
            }
            Tag::Link { target, label } => {
                format!("[[{}>{target}]]", self.tags(label))
            }
        }
    }

    /// Serializes a sequence of tags, concatenated.
    #[must_use]
    pub fn tags(&self, tags: &[Tag]) -> String {
        tags.iter().map(|tag| self.tag(tag)).collect()
    }

    /// Serializes a style as a cell prefix, without the trailing separator.
    #[must_use]
    pub fn style(&self, style: &Style) -> String {
        let bg = style.bg_color.as_ref().map(|c| format!("BGCOLOR({c})"));
        let align = style.align.map(|a| a.directive().to_string());
        let width = style.width.map(|w| w.to_string());
        [bg, align, width]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Serializes the content of one cell.
    ///
    /// Merge markers are written as the cell text, after any style prefix.
    #[must_use]
    pub fn column(&self, column: &Column) -> String {
        let marker = column.merge.map(MergeMarker::symbol).unwrap_or_default();
        let text = format!("{marker}{}", self.tags(&column.tags));
        let prefix = column
            .style
            .as_ref()
            .map(|style| self.style(style))
            .unwrap_or_default();
        let sep = if !prefix.is_empty() && !text.is_empty() {
            ":"
        } else {
            ""
        };
        format!("{prefix}{sep}{text}")
    }

    /// Serializes one row as a `|`-delimited line.
    #[must_use]
    pub fn row(&self, row: &Row) -> String {
        let cells: Vec<String> = row.columns.iter().map(|c| self.column(c)).collect();
        let suffix = if self.options.row_kind_suffix {
            row.kind.code()
        } else {
            ""
        };
        format!("|{}|{suffix}", cells.join("|"))
    }

    /// Serializes a table with its surrounding lines.
    #[must_use]
    pub fn table(&self, table: &Table) -> String {
        let mut out = table.pre_lines.join("\n");
        if !table.pre_lines.is_empty() {
            out.push('\n');
        }
        let rows: Vec<String> = table.rows.iter().map(|row| self.row(row)).collect();
        out.push_str(&rows.join("\n"));
        if !table.post_lines.is_empty() {
            out.push('\n');
            out.push_str(&table.post_lines.join("\n"));
        }
        out
    }
}

/// Serializes a tag with the default options.
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Tag, serialize_tag};
///
/// let tag = Tag::Image { refer: "Iron_Ingot.png".to_string(), size: Some(20) };
/// assert_eq!(serialize_tag(&tag), "&ref(Ref_img/Iron_Ingot.png,nolink,20x20);");
/// ```
#[must_use]
pub fn serialize_tag(tag: &Tag) -> String {
    WikiWriter::default().tag(tag)
}

/// Serializes a table with the default options.
#[must_use]
pub fn serialize_table(table: &Table) -> String {
    WikiWriter::default().table(table)
}
