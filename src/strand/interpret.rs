//! Natural-language query interpreter.
//!
//! A fixed, ordered table of pattern rules over the lowercased query text.
//! Each rule is a pure function taking the text and the filter built so far,
//! returning an updated filter when it fires. Rule order is load-bearing:
//! an earlier contribution wins for a field, with one exception — the
//! first-vowel rule runs last and replaces any letter the contains rule
//! captured. If no rule fires at all, the query is unparsable.
//!
//! The output passes through the same [`RawFilter::parse`] validation as
//! the structured endpoint; rules only emit well-formed fields, so this is
//! shared contract rather than a check expected to trip.

use crate::error::{Result, StrandError};
use crate::filter::{RawFilter, RecordFilter};
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+words?").expect("word count pattern"));
static LONGER_THAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than\s+(\d+)").expect("longer-than pattern"));
static SHORTER_THAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shorter than\s+(\d+)").expect("shorter-than pattern"));
static CONTAINS_LETTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"contain(?:s|ing)\s+(?:the\s+)?(?:letter\s+)?([a-z])\b")
        .expect("contains-letter pattern")
});

type Rule = fn(&str, &RawFilter) -> Option<RawFilter>;

const RULES: &[Rule] = &[
    single_word,
    numbered_words,
    palindromic,
    longer_than,
    shorter_than,
    contains_letter,
    first_vowel,
];

/// Translate free text into a validated filter. Deterministic and pure over
/// the lowercased input; fails with `UnparsableQuery` when nothing matches.
pub fn interpret(text: &str) -> Result<RecordFilter> {
    let lowered = text.to_lowercase();
    let mut filter = RawFilter::default();
    let mut fired = false;

    for rule in RULES {
        if let Some(updated) = rule(&lowered, &filter) {
            filter = updated;
            fired = true;
        }
    }

    if !fired {
        return Err(StrandError::UnparsableQuery(text.to_string()));
    }
    filter.parse()
}

fn single_word(text: &str, so_far: &RawFilter) -> Option<RawFilter> {
    if so_far.word_count.is_some() || !text.contains("single word") {
        return None;
    }
    Some(RawFilter {
        word_count: Some("1".into()),
        ..so_far.clone()
    })
}

fn numbered_words(text: &str, so_far: &RawFilter) -> Option<RawFilter> {
    // Only when the single-word rule has not already claimed the field
    if so_far.word_count.is_some() {
        return None;
    }
    let caps = WORD_COUNT_RE.captures(text)?;
    Some(RawFilter {
        word_count: Some(caps[1].to_string()),
        ..so_far.clone()
    })
}

fn palindromic(text: &str, so_far: &RawFilter) -> Option<RawFilter> {
    // Substring match covers "palindrome", "palindromic", "palindromes"
    if so_far.is_palindrome.is_some() || !text.contains("palindrom") {
        return None;
    }
    Some(RawFilter {
        is_palindrome: Some("true".into()),
        ..so_far.clone()
    })
}

fn longer_than(text: &str, so_far: &RawFilter) -> Option<RawFilter> {
    if so_far.min_length.is_some() {
        return None;
    }
    let caps = LONGER_THAN_RE.captures(text)?;
    let n: i64 = caps[1].parse().ok()?;
    // "longer than N" is exclusive, the filter bound is inclusive
    Some(RawFilter {
        min_length: Some((n + 1).to_string()),
        ..so_far.clone()
    })
}

fn shorter_than(text: &str, so_far: &RawFilter) -> Option<RawFilter> {
    if so_far.max_length.is_some() {
        return None;
    }
    let caps = SHORTER_THAN_RE.captures(text)?;
    let n: i64 = caps[1].parse().ok()?;
    Some(RawFilter {
        max_length: Some((n - 1).to_string()),
        ..so_far.clone()
    })
}

fn contains_letter(text: &str, so_far: &RawFilter) -> Option<RawFilter> {
    if so_far.contains_character.is_some() {
        return None;
    }
    let caps = CONTAINS_LETTER_RE.captures(text)?;
    Some(RawFilter {
        contains_character: Some(caps[1].to_string()),
        ..so_far.clone()
    })
}

fn first_vowel(text: &str, so_far: &RawFilter) -> Option<RawFilter> {
    if !text.contains("first vowel") {
        return None;
    }
    // Maps to the literal 'a', not the first vowel of the query text, and
    // replaces whatever the contains rule captured.
    Some(RawFilter {
        contains_character: Some("a".into()),
        ..so_far.clone()
    })
}
