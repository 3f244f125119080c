use crate::error::Result;
use crate::string_utils::{is_cased, push_lowercase, push_titlecase};
use crate::transforms::Transform;

/// Title cases the text: every cased character that follows another cased
/// character is lowercased, every other character is title cased.
///
/// Word boundaries are any uncased character, so apostrophes, digits and
/// punctuation start a new word (`they're` becomes `They'Re`).
pub struct TitleFormatter;

impl Transform for TitleFormatter {
    fn transform(&self, text: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len());
        let mut previous_is_cased = false;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if previous_is_cased {
                push_lowercase(&mut result, c, chars.peek().copied());
            } else {
                push_titlecase(&mut result, c);
            }
            previous_is_cased = is_cased(c);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(text: &str) -> String {
        TitleFormatter.transform(text).unwrap()
    }

    #[test]
    fn test_words() {
        assert_eq!(title("hello world"), "Hello World");
        assert_eq!(title("HELLO WORLD"), "Hello World");
        assert_eq!(title("  spaced   out  "), "  Spaced   Out  ");
    }

    #[test]
    fn test_apostrophes_and_punctuation() {
        assert_eq!(title("they're bill's friends"), "They'Re Bill'S Friends");
        assert_eq!(title("hello-world foo_bar"), "Hello-World Foo_Bar");
        assert_eq!(title("e-mail (draft)"), "E-Mail (Draft)");
    }

    #[test]
    fn test_digits_start_words() {
        assert_eq!(title("3rd place"), "3Rd Place");
        assert_eq!(title("a1b2"), "A1B2");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(title("élan vital"), "Élan Vital");
        assert_eq!(title("ΟΔΟΣ"), "\u{039F}\u{03B4}\u{03BF}\u{03C2}");
        assert_eq!(title("\u{01C6}emal"), "\u{01C5}emal");
    }

    #[test]
    fn test_special_titlecase_mappings() {
        assert_eq!(title("\u{FB01}ne day"), "Fine Day");
        assert_eq!(title("\u{FB04}uent \u{FB06}ory"), "Fluent Story");
        assert_eq!(title("\u{1FB3}"), "\u{1FBC}");
        assert_eq!(title("\u{1FBC}\u{1FBC}"), "\u{1FBC}\u{1FB3}");
        assert_eq!(title("\u{10D0}\u{10D1}"), "\u{10D0}\u{10D1}");
    }
}
