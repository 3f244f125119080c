use crate::error::Result;

mod letter_case;
mod registry;
mod sentence;
mod title;
mod words;

pub use letter_case::{LowerFormatter, ToggleFormatter, UpperFormatter};
pub use registry::{TransformManager, TransformRegistry};
pub use sentence::SentenceFormatter;
pub use title::TitleFormatter;
pub use words::{CamelFormatter, PascalFormatter};

/// Trait for the case transformations applied to a text
///
/// Each transform implements a single case style. Transforms are stateless
/// and shared through the global [`TransformManager`].
///
/// # Examples
///
/// ```
/// use recase::transforms::{Transform, UpperFormatter};
///
/// let formatter = UpperFormatter;
/// let result = formatter.transform("Hello").unwrap();
/// assert_eq!(result, "HELLO");
/// ```
pub trait Transform: Send + Sync {
    /// Transforms the input text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    ///
    /// # Returns
    /// The transformed text or an error if transformation fails
    fn transform(&self, text: &str) -> Result<String>;
}
