use crate::error::Result;
use crate::string_utils::{is_blank, trim_separators, upper_first};
use crate::transforms::Transform;

/// Sentences are only delimited by a period followed by a single space.
/// `!`, `?` or a period followed by a newline do not start a new sentence.
const SENTENCE_DELIMITER: &str = ". ";

/// Capitalizes the first letter of every sentence and lowercases the rest.
///
/// Each sentence is trimmed before being capitalized, so surrounding
/// whitespace inside a sentence is dropped while blank sentences are kept as is.
pub struct SentenceFormatter;

impl Transform for SentenceFormatter {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(text
            .split(SENTENCE_DELIMITER)
            .map(|sentence| {
                if is_blank(sentence) {
                    sentence.to_string()
                } else {
                    upper_first(trim_separators(sentence))
                }
            })
            .collect::<Vec<String>>()
            .join(SENTENCE_DELIMITER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str) -> String {
        SentenceFormatter.transform(text).unwrap()
    }

    #[test]
    fn test_basic_sentences() {
        assert_eq!(sentence("hello. world. ok"), "Hello. World. Ok");
        assert_eq!(
            sentence("this is a TEST. here is ANOTHER sentence."),
            "This is a test. Here is another sentence."
        );
    }

    #[test]
    fn test_single_character_sentence() {
        assert_eq!(sentence("a. b"), "A. B");
        assert_eq!(sentence("i"), "I");
    }

    #[test]
    fn test_sentences_are_trimmed() {
        assert_eq!(sentence("  hello there  "), "Hello there");
        // The extra space after the delimiter belongs to the next sentence
        assert_eq!(sentence("one.  two"), "One. Two");
        assert_eq!(sentence("\u{1C}first. \u{1F}second"), "First. Second");
    }

    #[test]
    fn test_blank_sentences_pass_through() {
        assert_eq!(sentence("end. . again"), "End. . Again");
        assert_eq!(sentence("trailing. "), "Trailing. ");
    }

    #[test]
    fn test_other_punctuation_is_not_a_boundary() {
        assert_eq!(sentence("wow! GREAT? yes"), "Wow! great? yes");
        assert_eq!(sentence("first.\nsecond"), "First.\nsecond");
    }
}
