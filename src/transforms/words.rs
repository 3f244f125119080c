use crate::error::Result;
use crate::string_utils::{capitalize, split_words};
use crate::transforms::Transform;

/// Joins the whitespace separated words of the text with no separator:
/// the first word is lowercased and the following ones capitalized.
/// Text without any word is returned as is.
pub struct CamelFormatter;

/// Joins the whitespace separated words of the text with no separator,
/// capitalizing every word.
pub struct PascalFormatter;

impl Transform for CamelFormatter {
    fn transform(&self, text: &str) -> Result<String> {
        let mut words = split_words(text);
        let Some(first) = words.next() else {
            return Ok(text.to_string());
        };

        Ok(std::iter::once(first.to_lowercase())
            .chain(words.map(capitalize))
            .collect())
    }
}

impl Transform for PascalFormatter {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(split_words(text).map(capitalize).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(CamelFormatter.transform("hello world").unwrap(), "helloWorld");
        assert_eq!(
            CamelFormatter.transform("  The QUICK\tbrown\nfox ").unwrap(),
            "theQuickBrownFox"
        );
        assert_eq!(CamelFormatter.transform("single").unwrap(), "single");
        assert_eq!(CamelFormatter.transform("don't stop").unwrap(), "don'tStop");
    }

    #[test]
    fn test_camel_case_without_words() {
        assert_eq!(CamelFormatter.transform("").unwrap(), "");
        assert_eq!(CamelFormatter.transform(" \t ").unwrap(), " \t ");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(PascalFormatter.transform("hello world").unwrap(), "HelloWorld");
        assert_eq!(
            PascalFormatter.transform("order NUMBER 42a").unwrap(),
            "OrderNumber42a"
        );
        assert_eq!(PascalFormatter.transform("   ").unwrap(), "");
    }

    #[test]
    fn test_information_separators_split_words() {
        assert_eq!(PascalFormatter.transform("a\u{1C}b").unwrap(), "AB");
        assert_eq!(CamelFormatter.transform("one\u{1F}two").unwrap(), "oneTwo");
        assert_eq!(CamelFormatter.transform("\u{1D}\u{1E}").unwrap(), "\u{1D}\u{1E}");
    }

    #[test]
    fn test_ligatures_are_title_cased() {
        assert_eq!(PascalFormatter.transform("\u{FB01}ne day").unwrap(), "FineDay");
        assert_eq!(CamelFormatter.transform("good \u{FB02}ow").unwrap(), "goodFlow");
    }

    #[test]
    fn test_reapplying_collapses_inner_capitals() {
        // The joined output is a single word, so a second pass lowercases its tail
        let camel = CamelFormatter.transform("make it camel").unwrap();
        assert_eq!(camel, "makeItCamel");
        let again = CamelFormatter.transform(&camel).unwrap();
        assert_eq!(again, "makeitcamel");
        assert_eq!(CamelFormatter.transform(&again).unwrap(), again);

        let pascal = PascalFormatter.transform("make it pascal").unwrap();
        assert_eq!(pascal, "MakeItPascal");
        assert_eq!(PascalFormatter.transform(&pascal).unwrap(), "Makeitpascal");
        assert_eq!(PascalFormatter.transform("Single").unwrap(), "Single");
    }
}
