//! The case styles supported by the transformer.
//!
//! Every style has a canonical label, which is the option value stored in the
//! settings record and shown to users (e.g. `tOGGLE cASE`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Style {
    #[strum(serialize = "Sentence case")]
    #[serde(rename = "Sentence case")]
    SentenceCase,
    #[strum(serialize = "lowercase")]
    #[serde(rename = "lowercase")]
    Lowercase,
    #[strum(serialize = "UPPERCASE")]
    #[serde(rename = "UPPERCASE")]
    Uppercase,
    #[strum(serialize = "Capitalize Each Word")]
    #[serde(rename = "Capitalize Each Word")]
    CapitalizeEachWord,
    #[strum(serialize = "tOGGLE cASE")]
    #[serde(rename = "tOGGLE cASE")]
    ToggleCase,
    #[strum(serialize = "camelCase")]
    #[serde(rename = "camelCase")]
    CamelCase,
    #[strum(serialize = "PascalCase")]
    #[serde(rename = "PascalCase")]
    PascalCase,
}

impl Default for Style {
    fn default() -> Self {
        Style::SentenceCase
    }
}

impl Style {
    /// All the styles, in the order they are offered as options
    pub const ALL: [Style; 7] = [
        Style::SentenceCase,
        Style::Lowercase,
        Style::Uppercase,
        Style::CapitalizeEachWord,
        Style::ToggleCase,
        Style::CamelCase,
        Style::PascalCase,
    ];

    /// Returns the canonical label of the style
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Returns the variant name of the style (e.g. `ToggleCase`)
    pub fn key(&self) -> &'static str {
        match self {
            Style::SentenceCase => "SentenceCase",
            Style::Lowercase => "Lowercase",
            Style::Uppercase => "Uppercase",
            Style::CapitalizeEachWord => "CapitalizeEachWord",
            Style::ToggleCase => "ToggleCase",
            Style::CamelCase => "CamelCase",
            Style::PascalCase => "PascalCase",
        }
    }

    /// Resolves a style tag, accepting either the canonical label or the variant name.
    /// Matching is exact: `Uppercase` and `UPPERCASE` resolve, `upper case` does not.
    ///
    /// # Arguments
    /// * `tag` - The style tag to resolve.
    ///
    /// # Returns
    /// The matching style or `None` for an unknown tag.
    ///
    /// # Examples
    /// ```
    /// use recase::style::Style;
    ///
    /// assert_eq!(Style::from_tag("tOGGLE cASE"), Some(Style::ToggleCase));
    /// assert_eq!(Style::from_tag("PascalCase"), Some(Style::PascalCase));
    /// assert_eq!(Style::from_tag("Title Case"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Style> {
        Style::ALL
            .into_iter()
            .find(|style| style.label() == tag || style.key() == tag)
    }

    /// The newline separated option list stored in the style selector field
    pub fn options() -> String {
        Style::ALL
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Style::from_tag(s).ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Style::SentenceCase.label(), "Sentence case");
        assert_eq!(Style::Lowercase.label(), "lowercase");
        assert_eq!(Style::Uppercase.label(), "UPPERCASE");
        assert_eq!(Style::CapitalizeEachWord.label(), "Capitalize Each Word");
        assert_eq!(Style::ToggleCase.label(), "tOGGLE cASE");
        assert_eq!(Style::CamelCase.label(), "camelCase");
        assert_eq!(Style::PascalCase.label(), "PascalCase");
    }

    #[test]
    fn test_from_tag() {
        for style in Style::ALL {
            assert_eq!(Style::from_tag(&style.label()), Some(style));
            assert_eq!(Style::from_tag(style.key()), Some(style));
        }
        assert_eq!(Style::from_tag(""), None);
        assert_eq!(Style::from_tag("sentence case"), None);
        assert_eq!(Style::from_tag("uppercase"), None);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "snake_case".parse::<Style>().unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(ref s) if s == "snake_case"));
    }

    #[test]
    fn test_options() {
        assert_eq!(
            Style::options(),
            "Sentence case\nlowercase\nUPPERCASE\nCapitalize Each Word\ntOGGLE cASE\ncamelCase\nPascalCase"
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Style::ToggleCase).unwrap();
        assert_eq!(json, "\"tOGGLE cASE\"");
        let style: Style = serde_json::from_str("\"camelCase\"").unwrap();
        assert_eq!(style, Style::CamelCase);
    }
}
