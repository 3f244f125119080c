//! Entry points of the case transformer.
//!
//! The transformer never fails: blank input and unknown styles are returned
//! unchanged, and a failing transform is written to the error log before the
//! original text is handed back.

use std::sync::Arc;

use crate::constants::host::LOG_TITLE;
use crate::error::Result;
use crate::error_log;
use crate::string_utils::is_blank;
use crate::style::Style;
use crate::transforms::{TransformManager, TransformRegistry};

pub struct CaseTransformer {
    registry: Arc<TransformRegistry>,
}

impl Default for CaseTransformer {
    fn default() -> Self {
        Self::new(TransformManager::get().share())
    }
}

impl CaseTransformer {
    pub fn new(registry: Arc<TransformRegistry>) -> Self {
        Self { registry }
    }

    /// Transforms the text using the given style.
    ///
    /// # Arguments
    /// * `text` - The text to transform
    /// * `style` - The style to apply
    ///
    /// # Returns
    /// The transformed text, or the original text if it is blank or the
    /// transformation failed
    pub fn apply(&self, text: &str, style: Style) -> String {
        match self.try_apply(text, style) {
            Ok(transformed) => transformed,
            Err(e) => {
                error_log!(LOG_TITLE, "Change Case Transformation Error: {}", e);
                text.to_string()
            }
        }
    }

    /// Transforms the text using the given style, reporting transform failures
    /// to the caller instead of logging them.
    pub fn try_apply(&self, text: &str, style: Style) -> Result<String> {
        if is_blank(text) {
            return Ok(text.to_string());
        }
        self.registry.apply(style, text)
    }

    /// Transforms the text using a raw style tag (label or variant name).
    /// Unknown or empty tags leave the text unchanged.
    pub fn apply_tag(&self, text: &str, tag: &str) -> String {
        match Style::from_tag(tag) {
            Some(style) => self.apply(text, style),
            None => text.to_string(),
        }
    }
}

/// Transforms the text based on the given style tag using the shared transforms.
///
/// # Examples
///
/// ```
/// use recase::case::change_case;
///
/// assert_eq!(change_case("hello world", "camelCase"), "helloWorld");
/// assert_eq!(change_case("hello. world. ok", "Sentence case"), "Hello. World. Ok");
/// assert_eq!(change_case("   ", "UPPERCASE"), "   ");
/// assert_eq!(change_case("keep Me", "kebab-case"), "keep Me");
/// ```
pub fn change_case(text: &str, style: &str) -> String {
    CaseTransformer::default().apply_tag(text, style)
}

/// Previews the case transformation of a text, used before enabling a style.
pub fn preview_case_change(text: &str, style: &str) -> String {
    change_case(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transforms::Transform;

    struct Failing;

    impl Transform for Failing {
        fn transform(&self, _text: &str) -> Result<String> {
            Err(Error::Msg("boom".to_string()))
        }
    }

    #[test]
    fn test_blank_text_is_unchanged() {
        for style in Style::ALL {
            assert_eq!(change_case("", &style.label()), "");
            assert_eq!(change_case("   ", &style.label()), "   ");
            assert_eq!(change_case("\n\t", &style.label()), "\n\t");
        }
    }

    #[test]
    fn test_styles() {
        assert_eq!(change_case("hello world", "UPPERCASE"), "HELLO WORLD");
        assert_eq!(change_case("HELLO", "lowercase"), "hello");
        assert_eq!(change_case("hello world", "camelCase"), "helloWorld");
        assert_eq!(change_case("hello world", "PascalCase"), "HelloWorld");
        assert_eq!(change_case("hello. world. ok", "Sentence case"), "Hello. World. Ok");
        assert_eq!(change_case("Hello", "tOGGLE cASE"), "hELLO");
        assert_eq!(
            change_case("the lord of the rings", "Capitalize Each Word"),
            "The Lord Of The Rings"
        );
    }

    #[test]
    fn test_special_titlecase_mappings() {
        assert_eq!(change_case("\u{FB01}ne day", "Capitalize Each Word"), "Fine Day");
        assert_eq!(change_case("\u{FB01}ne day", "PascalCase"), "FineDay");
        assert_eq!(change_case("\u{1FB3}", "Capitalize Each Word"), "\u{1FBC}");
        assert_eq!(change_case("a\u{1C}b", "PascalCase"), "AB");
    }

    #[test]
    fn test_variant_names_are_accepted() {
        assert_eq!(change_case("hello world", "Uppercase"), "HELLO WORLD");
        assert_eq!(change_case("hello world", "ToggleCase"), "HELLO WORLD");
    }

    #[test]
    fn test_unknown_style_is_identity() {
        for text in ["hello World", "  padded ", "MiXeD. case"] {
            assert_eq!(change_case(text, "snake_case"), text);
            assert_eq!(change_case(text, ""), text);
            assert_eq!(change_case(text, "uppercase"), text);
        }
    }

    #[test]
    fn test_failed_transform_returns_original() {
        let mut registry = TransformRegistry::default();
        registry.register(Style::Uppercase, Failing);
        let transformer = CaseTransformer::new(Arc::new(registry));

        assert_eq!(transformer.apply("keep me", Style::Uppercase), "keep me");
        assert_eq!(transformer.apply("keep me", Style::PascalCase), "KeepMe");
        assert!(transformer.try_apply("keep me", Style::Uppercase).is_err());
        assert_eq!(transformer.try_apply("  ", Style::Uppercase).unwrap(), "  ");
    }

    #[test]
    fn test_preview() {
        assert_eq!(
            preview_case_change("this is a test sentence. here is another sentence.", "Sentence case"),
            "This is a test sentence. Here is another sentence."
        );
    }
}
