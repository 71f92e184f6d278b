//! Item page assembly.
//!
//! An item page gathers five sections about one item: the recipes that
//! produce it, the recipes that consume it (for items and for buildings),
//! and the milestones and researches that require it. Each section is
//! either still loading, has nothing to show, or holds tables ready to be
//! written as wiki text or HTML.

use craftwiki_protocol::{Catalog, Condition, Item, Recipe, to_display_id};
use tracing::{debug, instrument};

use crate::builders::{
    build_milestones_table, build_recipe_table, build_recipes_for_building_table,
    build_recipes_for_item_table, build_researches_table,
};
use crate::html::{HtmlRenderer, escape_html};
use crate::model::Table;
use crate::wiki::WikiWriter;

/// Message shown while a section's data is not available.
pub const LOADING_MESSAGE: &str = "データ読み込み中...";

/// Message shown for a section without entries.
pub const EMPTY_MESSAGE: &str = "表示する項目はありません。";

/// Listing tables with this many rows or fewer hold only their heading.
const HEADING_ROWS: usize = 2;

/// What a section currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Data has not been provided.
    Loading,
    /// Data was provided but has no entries.
    Empty,
    /// Tables to show, in order.
    Tables(Vec<Table>),
}

/// A titled section of an item page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section heading.
    pub title: String,
    /// Section body.
    pub content: SectionContent,
}

impl Section {
    /// Creates a section holding one recipe table per recipe.
    #[must_use]
    pub fn recipes(title: impl Into<String>, item_id: &str, recipes: Option<&[Recipe]>) -> Self {
        let content = match recipes {
            None => SectionContent::Loading,
            Some([]) => SectionContent::Empty,
            Some(recipes) => SectionContent::Tables(
                recipes
                    .iter()
                    .map(|recipe| build_recipe_table(item_id, recipe))
                    .collect(),
            ),
        };
        Self {
            title: title.into(),
            content,
        }
    }

    /// Creates a section holding one listing table.
    ///
    /// A placeholder table means loading; a table with nothing below its
    /// heading means empty.
    #[must_use]
    pub fn listing(title: impl Into<String>, table: Table) -> Self {
        let content = if table == Table::placeholder() {
            SectionContent::Loading
        } else if table.rows.len() <= HEADING_ROWS {
            SectionContent::Empty
        } else {
            SectionContent::Tables(vec![table])
        };
        Self {
            title: title.into(),
            content,
        }
    }

    /// Returns the message shown instead of tables, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self.content {
            SectionContent::Loading => Some(LOADING_MESSAGE),
            SectionContent::Empty => Some(EMPTY_MESSAGE),
            SectionContent::Tables(_) => None,
        }
    }

    /// Returns the wiki text of the section's tables, newline-terminated,
    /// or `None` when there is nothing to write.
    #[must_use]
    pub fn wiki(&self, writer: &WikiWriter) -> Option<String> {
        let SectionContent::Tables(tables) = &self.content else {
            return None;
        };
        let text: Vec<String> = tables.iter().map(|table| writer.table(table)).collect();
        Some(format!("{}\n", text.join("\n")))
    }

    /// Renders the section as HTML.
    #[must_use]
    pub fn html(&self, renderer: &HtmlRenderer) -> String {
        let mut out = format!("<section><h2>{}</h2>", escape_html(&self.title));
        match &self.content {
            SectionContent::Tables(tables) => {
                for table in tables {
                    out.push_str(&renderer.render(table));
                }
            }
            _ => {
                out.push_str(&format!("<p>{}</p>", self.message().unwrap_or_default()));
            }
        }
        out.push_str("</section>");
        out
    }
}

/// The data an item page is built from. Any part may still be missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemPageData<'a> {
    /// Recipes producing the item.
    pub producing: Option<&'a [Recipe]>,
    /// Recipes consuming the item to make other items.
    pub for_item: Option<&'a [Recipe]>,
    /// Recipes consuming the item to make buildings.
    pub for_building: Option<&'a [Recipe]>,
    /// Milestones requiring the item.
    pub milestones: Option<&'a [Condition]>,
    /// Researches requiring the item.
    pub researches: Option<&'a [Condition]>,
}

/// All sections of the page of one item.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::dummy::dummy_catalog;
/// use craftwiki_table::{ItemPage, SectionContent};
///
/// let page = ItemPage::from_catalog(&dummy_catalog(), "Screw").unwrap();
/// assert_eq!(page.title, "ネジ (Screw)");
/// assert!(matches!(page.sections[0].content, SectionContent::Tables(_)));
/// assert_eq!(page.sections[2].content, SectionContent::Empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPage {
    /// Page heading.
    pub title: String,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl ItemPage {
    /// Assembles the page of `item` from whatever data is available.
    #[must_use]
    pub fn new(item: &Item, data: ItemPageData<'_>) -> Self {
        let id = item.id.as_str();
        Self {
            title: format!("{} ({})", item.name, to_display_id(id)),
            sections: vec![
                Section::recipes("作成レシピ", id, data.producing),
                Section::listing(
                    "利用先 部品・装備品",
                    build_recipes_for_item_table(id, data.for_item),
                ),
                Section::listing(
                    "利用先 設備・車両",
                    build_recipes_for_building_table(id, data.for_building),
                ),
                Section::listing(
                    "マイルストーン",
                    build_milestones_table(id, data.milestones),
                ),
                Section::listing("分子分析機", build_researches_table(id, data.researches)),
            ],
        }
    }

    /// Assembles the page of an item from a catalog, or `None` if the
    /// catalog does not know the item.
    #[instrument(skip(catalog))]
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, item_id: &str) -> Option<Self> {
        let Some(item) = catalog.item(item_id) else {
            debug!("item not in catalog");
            return None;
        };

        let producing = catalog.recipes_producing(item_id);
        let for_item = catalog.recipes_using_for_item(item_id);
        let for_building = catalog.recipes_using_for_building(item_id);
        let milestones = catalog.milestones(item_id);
        let researches = catalog.researches(item_id);
        debug!(
            producing = producing.len(),
            for_item = for_item.len(),
            for_building = for_building.len(),
            milestones = milestones.len(),
            researches = researches.len(),
            "collected item page data"
        );

        Some(Self::new(
            item,
            ItemPageData {
                producing: Some(producing.as_slice()),
                for_item: Some(for_item.as_slice()),
                for_building: Some(for_building.as_slice()),
                milestones: Some(milestones.as_slice()),
                researches: Some(researches.as_slice()),
            },
        ))
    }

    /// Writes the page as wiki text. Section headings and messages are
    /// written as wiki comments so the output can be pasted as-is.
    #[must_use]
    pub fn to_wiki(&self, writer: &WikiWriter) -> String {
        let mut out = format!("// {}\n", self.title);
        for section in &self.sections {
            out.push_str(&format!("// {}\n", section.title));
            match section.wiki(writer) {
                Some(text) => out.push_str(&text),
                None => {
                    out.push_str(&format!("// {}\n", section.message().unwrap_or_default()));
                }
            }
        }
        out
    }

    /// Renders the page as an HTML fragment.
    #[must_use]
    pub fn to_html(&self, renderer: &HtmlRenderer) -> String {
        let mut out = format!("<h1>{}</h1>", escape_html(&self.title));
        for section in &self.sections {
            out.push_str(&section.html(renderer));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftwiki_protocol::dummy;

    #[test]
    fn missing_data_is_loading() {
        let page = ItemPage::new(&dummy::screw(), ItemPageData::default());
        assert!(
            page.sections
                .iter()
                .all(|section| section.content == SectionContent::Loading)
        );
        assert_eq!(page.sections[0].message(), Some(LOADING_MESSAGE));
    }

    #[test]
    fn empty_data_has_nothing_to_show() {
        let page = ItemPage::new(
            &dummy::screw(),
            ItemPageData {
                producing: Some(&[][..]),
                for_item: Some(&[][..]),
                for_building: Some(&[][..]),
                milestones: Some(&[][..]),
                researches: Some(&[][..]),
            },
        );
        for section in &page.sections {
            assert_eq!(section.content, SectionContent::Empty, "{}", section.title);
            assert!(section.wiki(&WikiWriter::default()).is_none());
        }
    }

    #[test]
    fn section_wiki_is_newline_terminated() {
        let recipes = [dummy::recipe_iron_ingot(), dummy::recipe_iron_alloy_ingot()];
        let section = Section::recipes("作成レシピ", "Iron_Ingot", Some(&recipes[..]));
        let text = section.wiki(&WikiWriter::default()).unwrap();
        assert!(text.ends_with("#br\n"));
        assert_eq!(text.matches("#br").count(), 2);
        assert!(text.contains("#br\n//\n//\tHD解析\n#aname(Recipe_A1)"));
    }

    #[test]
    fn section_html_shows_message() {
        let section = Section::listing("マイルストーン", Table::placeholder());
        assert_eq!(
            section.html(&HtmlRenderer::default()),
            "<section><h2>マイルストーン</h2><p>データ読み込み中...</p></section>"
        );
    }

    #[test]
    fn unknown_item_has_no_page() {
        assert!(ItemPage::from_catalog(&dummy::dummy_catalog(), "Nobelisk").is_none());
    }

    #[test]
    fn catalog_page_sections() {
        let page = ItemPage::from_catalog(&dummy::dummy_catalog(), "Iron_Plate").unwrap();
        let titles: Vec<&str> = page.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["作成レシピ", "利用先 部品・装備品", "利用先 設備・車両", "マイルストーン", "分子分析機"]
        );
        for section in &page.sections {
            assert!(
                matches!(section.content, SectionContent::Tables(_)),
                "{}",
                section.title
            );
        }
    }

    #[test]
    fn page_wiki_marks_empty_sections() {
        let page = ItemPage::from_catalog(&dummy::dummy_catalog(), "Screw").unwrap();
        let wiki = page.to_wiki(&WikiWriter::default());
        assert!(wiki.starts_with("// ネジ (Screw)\n// 作成レシピ\n//\n"));
        assert!(wiki.contains("// 利用先 設備・車両\n// 表示する項目はありません。\n"));
    }
}
