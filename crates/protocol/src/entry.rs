//! Common accessors shared by every entity that has a wiki page.

/// An entity that is documented on the wiki.
///
/// Items, buildings and recipes all carry a display name, the wiki page they
/// live on and the id used to name their icon asset. Table builders use this
/// trait to produce icon links without caring which kind of entity they got.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::{WikiEntry, dummy::iron_ingot};
///
/// let item = iron_ingot();
/// assert_eq!(item.wiki_id(), "Iron_Ingot");
/// assert_eq!(item.name(), "鉄のインゴット");
/// ```
pub trait WikiEntry {
    /// Display name shown in link labels.
    fn name(&self) -> &str;

    /// Wiki page (and optional anchor) the entity links to.
    fn wiki_link(&self) -> &str;

    /// Stable id of the entity's icon asset, without extension.
    fn wiki_id(&self) -> &str;
}

/// Converts an id into its display form by replacing `_` with spaces.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::to_display_id;
///
/// assert_eq!(to_display_id("Iron_Ingot"), "Iron Ingot");
/// ```
#[must_use]
pub fn to_display_id(id: &str) -> String {
    id.replace('_', " ")
}

/// Converts a display id back into its storage form.
///
/// # Examples
///
/// ```
/// use craftwiki_protocol::to_id;
///
/// assert_eq!(to_id("Iron Ingot"), "Iron_Ingot");
/// ```
#[must_use]
pub fn to_id(display_id: &str) -> String {
    display_id.replace(' ', "_")
}
