//! Pure string analysis. No I/O, no store access; `analyze` is total over
//! every finite string, including the empty one.

use crate::model::Properties;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// SHA-256 of the value's UTF-8 bytes, rendered as lowercase hex.
///
/// This is the record identity: byte-identical values hash identically
/// across runs, so the id is fully determined by the value.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Derive the full property set for a value.
pub fn analyze(value: &str) -> Properties {
    let mut character_frequency_map: BTreeMap<char, u64> = BTreeMap::new();
    let mut length = 0usize;
    for ch in value.chars() {
        length += 1;
        *character_frequency_map.entry(ch).or_insert(0) += 1;
    }

    Properties {
        length,
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency_map.len(),
        word_count: value.split_whitespace().count(),
        content_hash: content_hash(value),
        character_frequency_map,
    }
}

/// Strips Unicode whitespace and case-folds, then compares the normalized
/// sequence with its reversal. Punctuation is kept. An empty normalized
/// form (empty or all-whitespace input) counts as a palindrome.
fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    normalized.iter().eq(normalized.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn racecar_properties() {
        let props = analyze("racecar");
        assert_eq!(props.length, 7);
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 4);
        assert_eq!(props.word_count, 1);
        assert_eq!(
            props.content_hash,
            "e00f9ef51a95f6e854862eed28dc0f1a68f154d9f75ddd841ab00de6ede9209b"
        );
    }

    #[test]
    fn hello_world_properties() {
        let props = analyze("Hello World");
        assert_eq!(props.length, 11);
        assert!(!props.is_palindrome);
        assert_eq!(props.unique_characters, 8);
        assert_eq!(props.word_count, 2);

        let expected: Vec<(char, u64)> = vec![
            (' ', 1),
            ('H', 1),
            ('W', 1),
            ('d', 1),
            ('e', 1),
            ('l', 3),
            ('o', 2),
            ('r', 1),
        ];
        let got: Vec<(char, u64)> = props
            .character_frequency_map
            .iter()
            .map(|(c, n)| (*c, *n))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn empty_string_properties() {
        let props = analyze("");
        assert_eq!(props.length, 0);
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 0);
        assert_eq!(props.word_count, 0);
        assert!(props.character_frequency_map.is_empty());
        // SHA-256 of the empty input
        assert_eq!(
            props.content_hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn whitespace_only_is_palindrome_with_zero_words() {
        let props = analyze(" \t\n ");
        assert!(props.is_palindrome);
        assert_eq!(props.word_count, 0);
        assert_eq!(props.length, 4);
        // Whitespace still counts as characters in the frequency map
        assert_eq!(props.character_frequency_map.get(&' '), Some(&3));
    }

    #[test]
    fn palindrome_ignores_case_and_whitespace_but_not_punctuation() {
        assert!(analyze("Race car").is_palindrome);
        assert!(analyze("Never odd or even").is_palindrome);
        // Punctuation is retained by normalization, so this one fails
        assert!(!analyze("A man, a plan, a canal: Panama").is_palindrome);
        assert!(analyze("amanaplanacanalpanama").is_palindrome);
    }

    #[test]
    fn length_counts_code_points_not_bytes() {
        let props = analyze("héllo");
        assert_eq!(props.length, 5);
        assert_eq!(props.unique_characters, 5);
        assert_eq!(props.character_frequency_map.get(&'é'), Some(&1));
    }

    #[test]
    fn frequency_map_is_case_sensitive() {
        let props = analyze("Ee");
        assert_eq!(props.character_frequency_map.get(&'E'), Some(&1));
        assert_eq!(props.character_frequency_map.get(&'e'), Some(&1));
        assert_eq!(props.unique_characters, 2);
    }

    #[test]
    fn analyze_is_deterministic() {
        let a = analyze("some value, twice");
        let b = analyze("some value, twice");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_values_hash_differently() {
        assert_ne!(content_hash("a"), content_hash("b"));
        assert_ne!(content_hash("racecar"), content_hash("racecar "));
    }
}
