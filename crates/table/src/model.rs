//! The grid model shared by the wiki serializer and the HTML renderer.
//!
//! A [`Table`] is an ordered list of [`Row`]s, each an ordered list of
//! [`Column`]s. Columns may be merge markers that fold into a neighbouring
//! cell, and [`RowKind::Formatting`] rows are never shown: they supply the
//! style that later rows inherit column by column.
//!
//! Rows are expected to have the same number of columns. Nothing enforces
//! this, but merge scanning is positional, so builders pad their rows.

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// Horizontal alignment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

impl Align {
    /// Returns the wiki directive for this alignment.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
        }
    }

    /// Returns the CSS `text-align` value for this alignment.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Style attributes of a cell. Any subset may be present.
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Align, Style};
///
/// let style = Style::new().bg_color("khaki").align(Align::Right).width(50);
/// assert_eq!(style.width, Some(50));
/// assert!(!style.is_empty());
/// assert!(Style::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Background colour, any CSS colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    /// Text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl Style {
    /// Creates an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background colour.
    #[must_use]
    pub fn bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    /// Sets the alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Sets the width in pixels.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bg_color.is_none() && self.align.is_none() && self.width.is_none()
    }

    /// Layers this style over `base`: attributes set here win, missing ones
    /// are taken from `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftwiki_table::{Align, Style};
    ///
    /// let inherited = Style::new().align(Align::Left).width(240);
    /// let own = Style::new().align(Align::Center);
    /// let merged = own.over(&inherited);
    /// assert_eq!(merged.align, Some(Align::Center));
    /// assert_eq!(merged.width, Some(240));
    /// ```
    #[must_use]
    pub fn over(&self, base: &Self) -> Self {
        Self {
            bg_color: self.bg_color.clone().or_else(|| base.bg_color.clone()),
            align: self.align.or(base.align),
            width: self.width.or(base.width),
        }
    }
}

/// Sentinel marking a column that is folded into a neighbouring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMarker {
    /// Folds into the next rendered cell of the same row (`>`).
    Right,
    /// Folds into the cell above (`~`).
    Up,
}

impl MergeMarker {
    /// Returns the wiki symbol of this marker.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Right => ">",
            Self::Up => "~",
        }
    }
}

/// One cell position within a row.
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Column, MergeMarker, Tag};
///
/// let cell = Column::text("鉄板");
/// assert_eq!(cell.tags, vec![Tag::plain("鉄板")]);
/// assert!(!cell.is_merge());
///
/// assert_eq!(Column::merge_up().merge, Some(MergeMarker::Up));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Cell content.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Merge marker, if this column folds into a neighbour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeMarker>,
    /// Explicit style of this cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl Column {
    /// Creates a cell from a sequence of tags.
    #[must_use]
    pub fn new(tags: Vec<Tag>) -> Self {
        Self {
            tags,
            merge: None,
            style: None,
        }
    }

    /// Creates a cell holding one tag.
    #[must_use]
    pub fn tag(tag: Tag) -> Self {
        Self::new(vec![tag])
    }

    /// Creates a cell holding plain text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::tag(Tag::plain(text))
    }

    /// Creates an empty cell.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a cell that folds into the next rendered cell of its row.
    #[must_use]
    pub fn merge_right() -> Self {
        Self {
            merge: Some(MergeMarker::Right),
            ..Self::default()
        }
    }

    /// Creates a cell that folds into the cell above.
    #[must_use]
    pub fn merge_up() -> Self {
        Self {
            merge: Some(MergeMarker::Up),
            ..Self::default()
        }
    }

    /// Creates an empty cell carrying only a style, as used in formatting
    /// rows.
    #[must_use]
    pub fn styled(style: Style) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    /// Attaches an explicit style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Returns `true` if this column is a merge marker.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.merge.is_some()
    }
}

impl From<Tag> for Column {
    fn from(tag: Tag) -> Self {
        Self::tag(tag)
    }
}

impl From<&str> for Column {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Column {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

/// The role of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Invisible row supplying inherited styles.
    Formatting,
    /// Header row.
    Header,
    /// Ordinary data row.
    #[default]
    Record,
    /// Footer row.
    Footer,
}

impl RowKind {
    /// Returns the wiki row suffix code.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftwiki_table::RowKind;
    ///
    /// assert_eq!(RowKind::Formatting.code(), "c");
    /// assert_eq!(RowKind::Record.code(), "");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Formatting => "c",
            Self::Header => "h",
            Self::Record => "",
            Self::Footer => "f",
        }
    }
}

/// One row of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Role of this row.
    #[serde(default)]
    pub kind: RowKind,
}

impl Row {
    /// Creates a row of the given kind.
    #[must_use]
    pub fn new(kind: RowKind, columns: Vec<Column>) -> Self {
        Self { columns, kind }
    }

    /// Creates a data row.
    #[must_use]
    pub fn record(columns: Vec<Column>) -> Self {
        Self::new(RowKind::Record, columns)
    }

    /// Creates a header row.
    #[must_use]
    pub fn header(columns: Vec<Column>) -> Self {
        Self::new(RowKind::Header, columns)
    }

    /// Creates a formatting row.
    #[must_use]
    pub fn formatting(columns: Vec<Column>) -> Self {
        Self::new(RowKind::Formatting, columns)
    }

    /// Creates a footer row.
    #[must_use]
    pub fn footer(columns: Vec<Column>) -> Self {
        Self::new(RowKind::Footer, columns)
    }

    /// Creates a data row without columns.
    #[must_use]
    pub fn empty() -> Self {
        Self::record(Vec::new())
    }

    /// Returns `true` for formatting rows.
    #[must_use]
    pub fn is_formatting(&self) -> bool {
        self.kind == RowKind::Formatting
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A complete table with the free-text lines around it.
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Column, Row, Table};
///
/// let table = Table::new(vec![Row::record(vec![Column::text("a")])])
///     .with_pre_lines(["#aname(Recipe_N1)"])
///     .with_post_lines(["#br"]);
/// assert_eq!(table.rows.len(), 1);
/// assert_eq!(table.post_lines, ["#br"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Rows in display order.
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Raw wiki lines emitted before the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pre_lines: Vec<String>,
    /// Raw wiki lines emitted after the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_lines: Vec<String>,
}

impl Table {
    /// Creates a table from rows.
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            pre_lines: Vec::new(),
            post_lines: Vec::new(),
        }
    }

    /// Creates the one-row table shown while data is not available.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(vec![Row::empty()])
    }

    /// Sets the lines emitted before the table.
    #[must_use]
    pub fn with_pre_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pre_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the lines emitted after the table.
    #[must_use]
    pub fn with_post_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the row at `index`, if any.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the number of rows that are not formatting rows.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_formatting()).count()
    }
}
