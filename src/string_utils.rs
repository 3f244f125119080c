use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks whether the character is a titlecase letter (general category Lt, e.g. `ǅ`)
pub fn is_titlecase(c: char) -> bool {
    get_general_category(c) == GeneralCategory::TitlecaseLetter
}

/// Checks whether the character is cased, i.e. uppercase, lowercase or titlecase.
/// Digits, punctuation, apostrophes and caseless scripts are not cased and
/// therefore start a new word when title casing.
///
/// # Examples
///
/// ```
/// use recase::string_utils::is_cased;
///
/// assert!(is_cased('a'));
/// assert!(is_cased('Ä'));
/// assert!(!is_cased('\''));
/// assert!(!is_cased('3'));
/// assert!(!is_cased('漢'));
/// ```
pub fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || is_titlecase(c)
}

/// Appends the titlecase mapping of the character to the output.
///
/// The titlecase form differs from the uppercase one for the Latin digraphs,
/// the Latin and Armenian ligatures, the Greek letters with iota subscript
/// and the Georgian Mkhedruli letters. The rest map to their uppercase form.
///
/// # Examples
///
/// ```
/// use recase::string_utils::push_titlecase;
///
/// let mut out = String::new();
/// push_titlecase(&mut out, '\u{FB01}');
/// assert_eq!(out, "Fi");
/// ```
pub fn push_titlecase(output: &mut String, c: char) {
    match c {
        '\u{01C4}'..='\u{01C6}' => output.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => output.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => output.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => output.push('\u{01F2}'),
        '\u{00DF}' => output.push_str("Ss"),
        '\u{FB00}' => output.push_str("Ff"),
        '\u{FB01}' => output.push_str("Fi"),
        '\u{FB02}' => output.push_str("Fl"),
        '\u{FB03}' => output.push_str("Ffi"),
        '\u{FB04}' => output.push_str("Ffl"),
        '\u{FB05}' | '\u{FB06}' => output.push_str("St"),
        '\u{0587}' => output.push_str("\u{0535}\u{0582}"),
        '\u{FB13}' => output.push_str("\u{0544}\u{0576}"),
        '\u{FB14}' => output.push_str("\u{0544}\u{0565}"),
        '\u{FB15}' => output.push_str("\u{0544}\u{056B}"),
        '\u{FB16}' => output.push_str("\u{054E}\u{0576}"),
        '\u{FB17}' => output.push_str("\u{0544}\u{056D}"),
        // Greek with iota subscript: the small letters map to the titlecase
        // ones (prosgegrammeni), which are their own titlecase form
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            output.push(char::from_u32(c as u32 + 8).unwrap_or(c))
        }
        '\u{1F88}'..='\u{1F8F}' | '\u{1F98}'..='\u{1F9F}' | '\u{1FA8}'..='\u{1FAF}' => {
            output.push(c)
        }
        '\u{1FB3}' | '\u{1FBC}' => output.push('\u{1FBC}'),
        '\u{1FC3}' | '\u{1FCC}' => output.push('\u{1FCC}'),
        '\u{1FF3}' | '\u{1FFC}' => output.push('\u{1FFC}'),
        '\u{1FB2}' => output.push_str("\u{1FBA}\u{0345}"),
        '\u{1FB4}' => output.push_str("\u{0386}\u{0345}"),
        '\u{1FC2}' => output.push_str("\u{1FCA}\u{0345}"),
        '\u{1FC4}' => output.push_str("\u{0389}\u{0345}"),
        '\u{1FF2}' => output.push_str("\u{1FFA}\u{0345}"),
        '\u{1FF4}' => output.push_str("\u{038F}\u{0345}"),
        '\u{1FB7}' => output.push_str("\u{0391}\u{0342}\u{0345}"),
        '\u{1FC7}' => output.push_str("\u{0397}\u{0342}\u{0345}"),
        '\u{1FF7}' => output.push_str("\u{03A9}\u{0342}\u{0345}"),
        // Mkhedruli has no titlecase, only the Mtavruli uppercase
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => output.push(c),
        _ => output.extend(c.to_uppercase()),
    }
}

/// Appends the lowercase mapping of the character to the output, using the
/// final form of sigma when it closes a word.
///
/// # Arguments
/// * `output` - The string to append to
/// * `c` - The character to lowercase
/// * `next` - The character following `c` in the text (if any)
pub fn push_lowercase(output: &mut String, c: char, next: Option<char>) {
    if c == 'Σ' && !next.is_some_and(is_cased) {
        output.push('ς');
    } else {
        output.extend(c.to_lowercase());
    }
}

/// Capitalizes a word: the first character is title cased and the
/// remainder lowercased.
///
/// # Examples
///
/// ```
/// use recase::string_utils::capitalize;
///
/// assert_eq!(capitalize("hELLO"), "Hello");
/// assert_eq!(capitalize("éCOLE"), "École");
/// assert_eq!(capitalize("1ST"), "1st");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            push_titlecase(&mut result, first);
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

/// Uppercases the first character of the text and lowercases the remainder.
/// Unlike [`capitalize`] the first character is fully uppercased (`ß` becomes `SS`).
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(text.len());
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

/// Checks whether the character separates words. Besides the Unicode
/// whitespace, the information separators (U+001C to U+001F) count as well.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Splits the text on runs of separators, dropping the empty pieces
///
/// # Examples
///
/// ```
/// use recase::string_utils::split_words;
///
/// let words: Vec<&str> = split_words(" one\ttwo\u{1C}three ").collect();
/// assert_eq!(words, vec!["one", "two", "three"]);
/// ```
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Removes the leading and trailing separators of the text
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(is_separator)
}

/// Checks whether the text is empty or only made of separators
pub fn is_blank(text: &str) -> bool {
    trim_separators(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_titlecase() {
        assert!(is_titlecase('\u{01C5}'));
        assert!(is_titlecase('\u{1F88}'));
        assert!(!is_titlecase('A'));
        assert!(!is_titlecase('a'));
    }

    #[test]
    fn test_push_titlecase() {
        let mut out = String::new();
        push_titlecase(&mut out, 'a');
        push_titlecase(&mut out, '\u{01C6}');
        push_titlecase(&mut out, 'ß');
        push_titlecase(&mut out, '1');
        assert_eq!(out, "A\u{01C5}Ss1");
    }

    #[test]
    fn test_push_titlecase_ligatures() {
        let mut out = String::new();
        for c in ['\u{FB00}', '\u{FB01}', '\u{FB02}', '\u{FB03}', '\u{FB04}', '\u{FB06}'] {
            push_titlecase(&mut out, c);
        }
        assert_eq!(out, "FfFiFlFfiFflSt");

        let mut out = String::new();
        push_titlecase(&mut out, '\u{0587}');
        push_titlecase(&mut out, '\u{FB13}');
        assert_eq!(out, "\u{0535}\u{0582}\u{0544}\u{0576}");
    }

    #[test]
    fn test_push_titlecase_iota_subscript() {
        let mut out = String::new();
        push_titlecase(&mut out, '\u{1FB3}');
        push_titlecase(&mut out, '\u{1F80}');
        push_titlecase(&mut out, '\u{1FA7}');
        push_titlecase(&mut out, '\u{1F8A}');
        push_titlecase(&mut out, '\u{1FF3}');
        assert_eq!(out, "\u{1FBC}\u{1F88}\u{1FAF}\u{1F8A}\u{1FFC}");

        let mut out = String::new();
        push_titlecase(&mut out, '\u{1FB4}');
        push_titlecase(&mut out, '\u{1FF7}');
        assert_eq!(out, "\u{0386}\u{0345}\u{03A9}\u{0342}\u{0345}");
    }

    #[test]
    fn test_push_titlecase_georgian() {
        let mut out = String::new();
        push_titlecase(&mut out, '\u{10D0}');
        assert_eq!(out, "\u{10D0}");
    }

    #[test]
    fn test_push_lowercase_final_sigma() {
        let mut out = String::new();
        push_lowercase(&mut out, 'Σ', Some('Α'));
        push_lowercase(&mut out, 'Σ', None);
        push_lowercase(&mut out, 'Σ', Some(' '));
        assert_eq!(out, "σςς");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("WORLD"), "World");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("ßtraße"), "Sstraße");
        assert_eq!(capitalize("'quoted'"), "'quoted'");
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("hELLO"), "Hello");
        assert_eq!(upper_first("ßig"), "SSig");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n "));
        assert!(!is_blank(" a "));
        assert!(is_blank("\u{1C}\u{1F} "));
    }

    #[test]
    fn test_split_words() {
        let words: Vec<&str> = split_words("a\u{1C}b\u{1D} \u{1E}c\u{1F}").collect();
        assert_eq!(words, vec!["a", "b", "c"]);
        assert_eq!(split_words(" \t\n").count(), 0);
        assert_eq!(trim_separators("\u{1F} x y \u{1C}"), "x y");
    }
}
