use crate::error::Result;
use crate::transforms::Transform;

/// Lowercases every character of the text
pub struct LowerFormatter;

/// Uppercases every character of the text
pub struct UpperFormatter;

/// Swaps the case of every character: uppercase characters are lowercased and
/// everything else is uppercased. Applying it twice restores the original text.
pub struct ToggleFormatter;

impl Transform for LowerFormatter {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(text.to_lowercase())
    }
}

impl Transform for UpperFormatter {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(text.to_uppercase())
    }
}

impl Transform for ToggleFormatter {
    fn transform(&self, text: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_uppercase() {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
        }
        Ok(result)
    }
}
