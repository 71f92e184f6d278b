//! The smallest content unit of a table cell.
//!
//! A cell holds a sequence of tags. Plain strings are passed through to the
//! wiki verbatim, so callers may embed inline markup such as `&br;` or
//! `''bold''` in them.

use craftwiki_protocol::{Building, ConditionKind, Recipe, WikiEntry};
use serde::{Deserialize, Serialize};

/// Content of a table cell.
///
/// Link labels are themselves tags, which lets a link wrap an icon followed
/// by a name. Nesting a link inside another link's label is not produced by
/// any builder and is rendered as-is.
///
/// # Examples
///
/// ```
/// use craftwiki_table::{Tag, serialize_tag};
///
/// let tag = Tag::image_link("鉄板", "素材/Iron_Plate", "Iron_Plate");
/// assert_eq!(
///     serialize_tag(&tag),
///     "[[&ref(Ref_img/Iron_Plate.png,nolink,20x20);鉄板>素材/Iron_Plate]]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Raw text, emitted unescaped.
    Plain(String),
    /// Text with an optional font-size override.
    Text {
        /// The text.
        content: String,
        /// Font size in pixels.
        size: Option<u32>,
    },
    /// An icon from the wiki's image directory.
    Image {
        /// File name of the image, e.g. `Iron_Ingot.png`.
        refer: String,
        /// Width and height in pixels; the renderer default when `None`.
        size: Option<u32>,
    },
    /// A link whose visible label is a sequence of tags.
    Link {
        /// Target wiki page.
        target: String,
        /// Visible label.
        label: Vec<Tag>,
    },
}

impl Tag {
    /// Creates a plain text tag.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Creates a text tag at the default font size.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            size: None,
        }
    }

    /// Creates a text tag rendered at the given font size.
    #[must_use]
    pub fn sized(content: impl Into<String>, size: u32) -> Self {
        Self::Text {
            content: content.into(),
            size: Some(size),
        }
    }

    /// Creates an image tag for the icon of `wiki_id`.
    #[must_use]
    pub fn image(wiki_id: &str) -> Self {
        Self::Image {
            refer: format!("{wiki_id}.png"),
            size: None,
        }
    }

    /// Creates a text link.
    #[must_use]
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link {
            target: target.into(),
            label: vec![Self::plain(label)],
        }
    }

    /// Creates a link labelled with an icon followed by text.
    #[must_use]
    pub fn image_link(label: impl Into<String>, target: impl Into<String>, wiki_id: &str) -> Self {
        Self::Link {
            target: target.into(),
            label: vec![Self::image(wiki_id), Self::plain(label)],
        }
    }

    /// Creates an icon link to any entity with a wiki page.
    #[must_use]
    pub fn entry_link(entry: &impl WikiEntry) -> Self {
        Self::image_link(entry.name(), entry.wiki_link(), entry.wiki_id())
    }

    /// Creates the icon link used in recipe title rows, with the building
    /// name on its own line below the icon.
    #[must_use]
    pub fn building_link(building: &Building) -> Self {
        Self::image_link(
            format!("&br;{}", building.name),
            building.wiki_link.as_str(),
            &building.wiki_id,
        )
    }

    /// Returns `true` if this tag renders to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.is_empty(),
            Self::Text { content, .. } => content.is_empty(),
            Self::Image { .. } | Self::Link { .. } => false,
        }
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for Tag {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

/// Returns the tags describing how a recipe gets unlocked.
///
/// Alternate recipes always point at the hard drive research; other recipes
/// describe their condition, or nothing when they have none.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::dummy::recipe_iron_ingot;
/// use craftwiki_table::{Tag, condition_link};
///
/// let tags = condition_link(&recipe_iron_ingot());
/// assert_eq!(tags, vec![Tag::plain("[ 初期から開放済み ]")]);
/// ```
#[must_use]
pub fn condition_link(recipe: &Recipe) -> Vec<Tag> {
    if recipe.alternate {
        return vec![
            Tag::plain("分析[ "),
            Tag::link("ハードドライブ", "代替レシピ"),
            Tag::plain(" ]"),
        ];
    }

    let Some(condition) = &recipe.condition else {
        return Vec::new();
    };

    match condition.kind {
        ConditionKind::Onboarding => vec![Tag::plain("[ 初期から開放済み ]")],
        ConditionKind::Milestone => {
            let tier = condition.tier.map(|t| t.to_string()).unwrap_or_default();
            vec![
                Tag::plain("マイルストーン[ "),
                Tag::link(
                    format!("ティア{tier}:{}", condition.name),
                    condition.wiki_link.as_str(),
                ),
                Tag::plain(" ]"),
            ]
        }
        ConditionKind::Research => {
            let category = condition.category.as_deref().unwrap_or_default();
            vec![
                Tag::plain("分析[ "),
                Tag::link(
                    format!("{category}:{}", condition.name),
                    condition.wiki_link.as_str(),
                ),
                Tag::plain(" ]"),
            ]
        }
        ConditionKind::Other => Vec::new(),
    }
}
