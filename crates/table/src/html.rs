//! HTML rendering of tables.
//!
//! Renders the visible rows produced by [`layout`] into a `<table>`, with
//! header, record and footer rows grouped into `<thead>`, `<tbody>` and
//! `<tfoot>`. The inline wiki markup used in plain text (`&br;` and
//! `''bold''`) is translated after the text has been escaped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::layout::{RenderedCell, RenderedRow, layout};
use crate::model::{RowKind, Style, Table};
use crate::tag::Tag;
use crate::wiki::DEFAULT_IMAGE_SIZE;

/// Default base URL of wiki pages.
pub const DEFAULT_PAGE_BASE_URL: &str = "https://wikiwiki.jp/sf-jp/";

/// Default base URL of wiki images.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://cdn.wikiwiki.jp/to/w/sf-jp/Ref_img/::ref/";

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"''(.*?)''").expect("valid bold pattern"));

/// Options controlling HTML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlOptions {
    /// Prefix of link targets.
    pub page_base_url: String,
    /// Prefix of image sources.
    pub image_base_url: String,
    /// Size used for images that do not carry their own.
    pub image_size: u32,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            page_base_url: DEFAULT_PAGE_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE,
        }
    }
}

/// Renders tables to HTML.
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Column, HtmlRenderer, Row, Table};
///
/// let table = Table::new(vec![
///     Row::header(vec![Column::merge_right(), Column::text("''名前''")]),
///     Row::record(vec![Column::text("a"), Column::text("b")]),
/// ]);
/// let html = HtmlRenderer::default().render(&table);
/// assert_eq!(
///     html,
///     "<table><thead><tr><td colspan=\"2\"><strong>名前</strong></td></tr></thead>\
///      <tbody><tr><td>a</td><td>b</td></tr></tbody></table>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    /// Creates a renderer with the given options.
    #[must_use]
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Renders a whole table. Pre and post lines are wiki-only and skipped.
    #[must_use]
    pub fn render(&self, table: &Table) -> String {
        let rows = layout(table);
        let mut out = String::from("<table>");
        for (kind, element) in [
            (RowKind::Header, "thead"),
            (RowKind::Record, "tbody"),
            (RowKind::Footer, "tfoot"),
        ] {
            let group: Vec<&RenderedRow<'_>> = rows.iter().filter(|r| r.kind == kind).collect();
            if group.is_empty() {
                continue;
            }
            out.push_str(&format!("<{element}>"));
            for row in group {
                self.write_row(&mut out, row);
            }
            out.push_str(&format!("</{element}>"));
        }
        out.push_str("</table>");
        out
    }

    /// Renders a single tag.
    #[must_use]
    pub fn tag(&self, tag: &Tag) -> String {
        match tag {
            Tag::Plain(text) => inline_markup(text),
            Tag::Text {
                content,
                size: Some(size),
            } => format!(
                "<span style=\"font-size:{size}px\">{}</span>",
                inline_markup(content)
            ),
            Tag::Text { content, size: None } => inline_markup(content),
            Tag::Image { refer, size } => {
                let size = size.unwrap_or(self.options.image_size);
                let refer = escape_html(refer);
                format!(
                    "<img src=\"{}{refer}\" class=\"inline-block\" alt=\"{refer}\" \
                     title=\"{refer}\" width=\"{size}\" height=\"{size}\" loading=\"lazy\" />",
                    self.options.image_base_url
                )
            }
            Tag::Link { target, label } => {
                let label: String = label.iter().map(|t| self.tag(t)).collect();
                format!(
                    "<a href=\"{}{}\">{label}</a>",
                    self.options.page_base_url,
                    escape_html(target)
                )
            }
        }
    }

    fn write_row(&self, out: &mut String, row: &RenderedRow<'_>) {
        out.push_str("<tr>");
        for cell in &row.cells {
            self.write_cell(out, cell);
        }
        out.push_str("</tr>");
    }

    fn write_cell(&self, out: &mut String, cell: &RenderedCell<'_>) {
        out.push_str("<td");
        if cell.span.colspan > 1 {
            out.push_str(&format!(" colspan=\"{}\"", cell.span.colspan));
        }
        if cell.span.rowspan > 1 {
            out.push_str(&format!(" rowspan=\"{}\"", cell.span.rowspan));
        }
        if let Some(css) = cell.span.style.as_ref().and_then(style_css) {
            out.push_str(&format!(" style=\"{}\"", escape_html(&css)));
        }
        out.push('>');
        for tag in &cell.content.tags {
            out.push_str(&self.tag(tag));
        }
        out.push_str("</td>");
    }
}

/// Converts a style to an inline CSS declaration list.
fn style_css(style: &Style) -> Option<String> {
    let parts: Vec<String> = [
        style.bg_color.as_ref().map(|c| format!("background:{c}")),
        style.align.map(|a| format!("text-align:{}", a.css())),
        style.width.map(|w| format!("width:{w}px")),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!parts.is_empty()).then(|| parts.join(";"))
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn inline_markup(text: &str) -> String {
    let escaped = escape_html(text).replace("&amp;br;", "<br class=\"spacer\" />");
    BOLD_RE.replace_all(&escaped, "<strong>$1</strong>").into_owned()
}
