use super::Transform;
use crate::error::{Error, Result};
use crate::style::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

pub struct TransformRegistry {
    transforms: HashMap<Style, Arc<Box<dyn Transform>>>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.init();
        registry
    }
}

impl TransformRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Initializes the transform registry with one transform per style
    /// - SentenceFormatter: Sentence case
    /// - LowerFormatter: lowercase
    /// - UpperFormatter: UPPERCASE
    /// - TitleFormatter: Capitalize Each Word
    /// - ToggleFormatter: tOGGLE cASE
    /// - CamelFormatter: camelCase
    /// - PascalFormatter: PascalCase
    pub fn init(&mut self) {
        self.register(Style::SentenceCase, super::SentenceFormatter);
        self.register(Style::Lowercase, super::LowerFormatter);
        self.register(Style::Uppercase, super::UpperFormatter);
        self.register(Style::CapitalizeEachWord, super::TitleFormatter);
        self.register(Style::ToggleCase, super::ToggleFormatter);
        self.register(Style::CamelCase, super::CamelFormatter);
        self.register(Style::PascalCase, super::PascalFormatter);
    }

    /// Registers the transform for the given style, replacing any previous one
    pub fn register<T: Transform + 'static>(&mut self, style: Style, transform: T) {
        let boxed = Arc::new(Box::new(transform) as Box<dyn Transform>);
        self.transforms.insert(style, boxed);
    }

    pub fn get(&self, style: Style) -> Option<&Arc<Box<dyn Transform>>> {
        self.transforms.get(&style)
    }

    /// Applies the transform registered for the style
    ///
    /// # Arguments
    /// * `style` - The style to apply
    /// * `text` - The text to transform
    ///
    /// # Returns
    /// The transformed text or an error if the style has no transform or the
    /// transform fails
    pub fn apply(&self, style: Style, text: &str) -> Result<String> {
        self.get(style)
            .ok_or_else(|| Error::TransformError {
                style: style.label(),
                cause: "no transform registered".to_string(),
            })?
            .transform(text)
    }
}

/// Global transform manager that provides thread-safe access to the shared transform registry
pub struct TransformManager {
    registry: Arc<TransformRegistry>,
}

impl TransformManager {
    /// Gets a reference to the global transform manager
    pub fn get() -> &'static TransformManager {
        static INSTANCE: Lazy<TransformManager> = Lazy::new(|| TransformManager {
            registry: Arc::new(TransformRegistry::default()),
        });
        &INSTANCE
    }

    /// Gets a clone of the shared registry
    pub fn share(&self) -> Arc<TransformRegistry> {
        Arc::clone(&self.registry)
    }

    /// Applies the transform registered for the style
    pub fn apply(&self, style: Style, text: &str) -> Result<String> {
        self.registry.apply(style, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reverse;

    impl Transform for Reverse {
        fn transform(&self, text: &str) -> Result<String> {
            Ok(text.chars().rev().collect())
        }
    }

    #[test]
    fn test_default_registry_covers_all_styles() {
        let registry = TransformRegistry::default();
        for style in Style::ALL {
            assert!(registry.get(style).is_some(), "missing {}", style);
        }
    }

    #[test]
    fn test_apply_missing_style() {
        let registry = TransformRegistry::new();
        let err = registry.apply(Style::Uppercase, "abc").unwrap_err();
        assert!(matches!(err, Error::TransformError { ref style, .. } if style == "UPPERCASE"));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = TransformRegistry::default();
        registry.register(Style::Uppercase, Reverse);
        assert_eq!(registry.apply(Style::Uppercase, "abc").unwrap(), "cba");
    }

    #[test]
    fn test_manager() {
        let manager = TransformManager::get();
        assert_eq!(manager.apply(Style::Uppercase, "abc").unwrap(), "ABC");
        assert!(Arc::ptr_eq(&manager.share(), &TransformManager::get().share()));
    }
}
