//! Locale-style ordering for drink names.
//!
//! Names are compared level by level, the way default locale collation does:
//!
//! 1. base characters, with case and Latin diacritics folded (`É` ~ `e`,
//!    `ș` ~ `s`, `ß` ~ `ss`); whitespace and punctuation sort before digits,
//!    digits before letters
//! 2. diacritics (unaccented first)
//! 3. case (lowercase first, so `cola` sorts before `Cola`)
//! 4. code points, so distinct strings never compare equal

use core::cmp::Ordering;

/// Compare two names in collation order.
pub fn compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accents(a).cmp(accents(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

/// First-level grouping: everything non-alphanumeric, then digits, then letters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Other,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            CharClass::Letter
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

fn base_letters(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .flat_map(expand)
        .map(|c| {
            let base = fold(c).0;
            (CharClass::of(base), base)
        })
}

/// Letters that count as two letters at the first level.
fn expand(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        'ß' => ('s', Some('s')),
        'æ' => ('a', Some('e')),
        'œ' => ('o', Some('e')),
        other => (other, None),
    };
    core::iter::once(first).chain(second)
}

fn accents(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().flat_map(char::to_lowercase).map(|c| fold(c).1)
}

fn case_marks(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

// Accent weights, ordered the way they break ties at the second level.
const GRAVE: u8 = 1;
const ACUTE: u8 = 2;
const CIRCUMFLEX: u8 = 3;
const TILDE: u8 = 4;
const DIAERESIS: u8 = 5;
const RING: u8 = 6;
const MACRON: u8 = 7;
const BREVE: u8 = 8;
const OGONEK: u8 = 9;
const CARON: u8 = 10;
const CEDILLA: u8 = 11;
const DOT: u8 = 12;
const STROKE: u8 = 13;
const LIGATURE: u8 = 14;

/// Split a lowercase Latin letter into its base letter and accent weight.
fn fold(c: char) -> (char, u8) {
    match c {
        'à' => ('a', GRAVE),
        'á' => ('a', ACUTE),
        'â' => ('a', CIRCUMFLEX),
        'ã' => ('a', TILDE),
        'ä' => ('a', DIAERESIS),
        'å' => ('a', RING),
        'ā' => ('a', MACRON),
        'ă' => ('a', BREVE),
        'ą' => ('a', OGONEK),
        'ç' => ('c', CEDILLA),
        'ć' => ('c', ACUTE),
        'č' => ('c', CARON),
        'ċ' => ('c', DOT),
        'ď' => ('d', CARON),
        'đ' => ('d', STROKE),
        'è' => ('e', GRAVE),
        'é' => ('e', ACUTE),
        'ê' => ('e', CIRCUMFLEX),
        'ë' => ('e', DIAERESIS),
        'ē' => ('e', MACRON),
        'ę' => ('e', OGONEK),
        'ě' => ('e', CARON),
        'ė' => ('e', DOT),
        'ğ' => ('g', BREVE),
        'ģ' => ('g', CEDILLA),
        'ì' => ('i', GRAVE),
        'í' => ('i', ACUTE),
        'î' => ('i', CIRCUMFLEX),
        'ï' => ('i', DIAERESIS),
        'ī' => ('i', MACRON),
        'į' => ('i', OGONEK),
        'ĺ' => ('l', ACUTE),
        'ľ' => ('l', CARON),
        'ļ' => ('l', CEDILLA),
        'ł' => ('l', STROKE),
        'ñ' => ('n', TILDE),
        'ń' => ('n', ACUTE),
        'ň' => ('n', CARON),
        'ņ' => ('n', CEDILLA),
        'ò' => ('o', GRAVE),
        'ó' => ('o', ACUTE),
        'ô' => ('o', CIRCUMFLEX),
        'õ' => ('o', TILDE),
        'ö' => ('o', DIAERESIS),
        'ō' => ('o', MACRON),
        'ø' => ('o', STROKE),
        'ŕ' => ('r', ACUTE),
        'ř' => ('r', CARON),
        'ś' => ('s', ACUTE),
        'š' => ('s', CARON),
        'ş' | 'ș' => ('s', CEDILLA),
        'ť' => ('t', CARON),
        'ţ' | 'ț' => ('t', CEDILLA),
        'ù' => ('u', GRAVE),
        'ú' => ('u', ACUTE),
        'û' => ('u', CIRCUMFLEX),
        'ü' => ('u', DIAERESIS),
        'ů' => ('u', RING),
        'ū' => ('u', MACRON),
        'ų' => ('u', OGONEK),
        'ý' => ('y', ACUTE),
        'ÿ' => ('y', DIAERESIS),
        'ź' => ('z', ACUTE),
        'ž' => ('z', CARON),
        'ż' => ('z', DOT),
        'ß' | 'æ' | 'œ' => (c, LIGATURE),
        other => (other, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_sorts_before_uppercase_of_same_word() {
        assert_eq!(compare("cola", "Cola"), Ordering::Less);
        assert_eq!(compare("Cola", "cola"), Ordering::Greater);
    }

    #[test]
    fn letters_compare_case_insensitively_first() {
        // Code-point order would put "Beer" first.
        assert_eq!(compare("apple", "Beer"), Ordering::Less);
        assert_eq!(compare("Zinfandel", "ale"), Ordering::Greater);
    }

    #[test]
    fn accents_only_break_ties() {
        assert_eq!(compare("cafe", "café"), Ordering::Less);
        assert_eq!(compare("café", "cafes"), Ordering::Less);
        assert_eq!(compare("țuică", "tuica"), Ordering::Greater);
        assert_eq!(compare("țuică", "vin"), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(compare("Cola", "Cola Zero"), Ordering::Less);
        assert_eq!(compare("", "a"), Ordering::Less);
    }

    #[test]
    fn only_identical_strings_are_equal() {
        assert_eq!(compare("Cola", "Cola"), Ordering::Equal);
        assert_ne!(compare("ş", "ș"), Ordering::Equal);
    }

    #[test]
    fn sorting_a_mixed_list() {
        let mut names = vec!["Water", "Cola", "apă", "cola", "Ale", "beer"];
        names.sort_by(|a, b| compare(a, b));
        assert_eq!(names, vec!["Ale", "apă", "beer", "cola", "Cola", "Water"]);
    }

    #[test]
    fn punctuation_sorts_before_digits_and_digits_before_letters() {
        // Code-point order would put `{` and `~` after the letters.
        assert_eq!(compare("{Cola}", "7Up"), Ordering::Less);
        assert_eq!(compare("~Cola", "Ale"), Ordering::Less);
        assert_eq!(compare("7Up", "Ale"), Ordering::Less);
        assert_eq!(compare("Cola Zero", "ColaX"), Ordering::Less);
        assert_eq!(compare("Cola 2", "Cola 10"), Ordering::Greater);
    }

    #[test]
    fn sharp_s_compares_like_double_s() {
        assert_eq!(compare("Straße", "Strasse"), Ordering::Greater);
        assert_eq!(compare("Straße", "Strasz"), Ordering::Less);
        assert_eq!(compare("ß", "t"), Ordering::Less);
    }

    #[test]
    fn sorting_names_with_digits_and_punctuation() {
        let mut names = vec!["Zero", "Straße", "7Up", "Stout", "(Diet) Cola", "Strasse"];
        names.sort_by(|a, b| compare(a, b));
        assert_eq!(
            names,
            vec!["(Diet) Cola", "7Up", "Stout", "Strasse", "Straße", "Zero"]
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: comparison is antisymmetric.
            #[test]
            fn compare_is_antisymmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
                prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
            }

            /// Property: Equal means identical.
            #[test]
            fn equal_only_when_identical(a in "[a-zA-Zăâîșț ]{0,8}", b in "[a-zA-Zăâîșț ]{0,8}") {
                prop_assert_eq!(compare(&a, &b) == Ordering::Equal, a == b);
            }

            /// Property: comparison is transitive over sorted triples.
            #[test]
            fn compare_is_transitive(mut v in proptest::collection::vec("[a-cA-Cáč]{0,4}", 3)) {
                v.sort_by(|a, b| compare(a, b));
                prop_assert_ne!(compare(&v[0], &v[2]), Ordering::Greater);
            }
        }
    }
}
