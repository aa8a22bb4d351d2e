use std::collections::BTreeSet;

use crate::catalog::Catalog;

/// Distinct characters of `text`.
pub fn unique_symbols(text: &str) -> BTreeSet<char> {
    text.chars().collect()
}

/// Index of the first catalog charset that holds every character of `text`.
///
/// The catalog is sorted by length, so the first match is the smallest base
/// the message can be written in. Returns `None` when no charset covers the
/// text; the empty text is covered by index 0.
pub fn shortest_charset(catalog: &Catalog, text: &str) -> Option<usize> {
    let wanted = unique_symbols(text);
    catalog.iter().position(|charset| charset.covers(&wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LETTERS, NUMBERS, PUNCTUATION};

    #[test]
    fn most_frequent_letter_uses_first_charset() {
        let catalog = Catalog::generate();
        assert_eq!(shortest_charset(&catalog, "e"), Some(0));
        assert_eq!(shortest_charset(&catalog, ""), Some(0));
    }

    #[test]
    fn digits_alone_use_digit_charset() {
        let catalog = Catalog::generate();
        assert_eq!(shortest_charset(&catalog, "2024"), Some(1));
    }

    #[test]
    fn full_alphabet_uses_last_charset() {
        let catalog = Catalog::generate();
        let all = format!("{}{}{}", LETTERS, NUMBERS, PUNCTUATION.concat());
        assert_eq!(shortest_charset(&catalog, &all), Some(catalog.len() - 1));
    }

    #[test]
    fn uncovered_character_is_not_found() {
        let catalog = Catalog::generate();
        assert_eq!(shortest_charset(&catalog, "\\"), None);
        assert_eq!(shortest_charset(&catalog, "E"), None);
    }

    #[test]
    fn match_is_minimal() {
        let catalog = Catalog::generate();
        let text = "hello, world!";
        let index = shortest_charset(&catalog, text).unwrap();
        let wanted = unique_symbols(text);
        assert!(catalog.get(index).unwrap().covers(&wanted));
        assert!(catalog.iter().take(index).all(|charset| !charset.covers(&wanted)));
    }
}
