use serde::{Deserialize, Serialize};

use crate::constants::settings::{ENABLE_FIELD, STYLE_FIELD};
use crate::document::Document;
use crate::style::Style;

/// The change case settings stored in the settings singleton.
///
/// The style is kept as the raw tag stored by the host, which may be empty or
/// unknown; resolving it is left to the transformer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub style: Option<String>,
}

impl GlobalSettings {
    pub fn new(enabled: bool, style: Style) -> Self {
        GlobalSettings {
            enabled,
            style: Some(style.label()),
        }
    }

    /// Reads the settings from the settings singleton document
    pub fn from_document(doc: &Document) -> Self {
        GlobalSettings {
            enabled: doc.get_flag(ENABLE_FIELD),
            style: doc.get_str(STYLE_FIELD).map(str::to_string),
        }
    }

    /// Writes the settings into the settings singleton document
    pub fn write_to(&self, doc: &mut Document) {
        doc.set(ENABLE_FIELD, if self.enabled { 1 } else { 0 });
        doc.set(STYLE_FIELD, self.style.clone().unwrap_or_default());
    }

    /// Returns the configured style tag, ignoring blank values
    pub fn style_tag(&self) -> Option<&str> {
        self.style.as_deref().filter(|s| !s.trim().is_empty())
    }
}
