// Structured mod entry produced from one load order line

use serde::Serialize;

/// One mod entry of a load order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRecord {
    /// Display name, never empty
    pub name: String,

    /// Main page of the mod
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_link: Option<String>,

    /// Version label exactly as written in the list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// All-in-one download bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aio_link: Option<String>,

    /// Supplementary info or README
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_link: Option<String>,

    /// The mod was struck through in the list
    pub unavailable: bool,

    /// Free-text annotation (e.g. "paid mod")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ModRecord {
    /// Create a record holding only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Links in display order, labelled
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Mod", self.primary_link.as_deref()),
            ("AIO", self.aio_link.as_deref()),
            ("Info", self.info_link.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, link)| link.map(|l| (label, l)))
        .collect()
    }
}

/// Trim a captured field, mapping blank text to `None`
pub(crate) fn field(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
