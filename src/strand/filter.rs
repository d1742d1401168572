//! Structured filters over record properties.
//!
//! A filter arrives as uninterpreted strings (query parameters, CLI flags,
//! or fields synthesized by the natural-language interpreter) and passes
//! through one shared validation path, [`RawFilter::parse`], before it is
//! ever applied. Present fields combine with logical AND; an empty filter
//! selects every record.

use crate::error::{Result, StrandError};
use crate::model::Properties;
use serde::{Deserialize, Serialize};

/// Filter fields exactly as received from a transport, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilter {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl RawFilter {
    /// Validate every present field independently. Any malformed field
    /// fails the whole filter with `InvalidFilterValue`.
    pub fn parse(&self) -> Result<RecordFilter> {
        Ok(RecordFilter {
            is_palindrome: self
                .is_palindrome
                .as_deref()
                .map(|raw| parse_bool("is_palindrome", raw))
                .transpose()?,
            min_length: self
                .min_length
                .as_deref()
                .map(|raw| parse_int("min_length", raw))
                .transpose()?,
            max_length: self
                .max_length
                .as_deref()
                .map(|raw| parse_int("max_length", raw))
                .transpose()?,
            word_count: self
                .word_count
                .as_deref()
                .map(|raw| parse_int("word_count", raw))
                .transpose()?,
            contains_character: self
                .contains_character
                .as_deref()
                .map(|raw| parse_char("contains_character", raw))
                .transpose()?,
        })
    }
}

fn parse_bool(field: &'static str, raw: &str) -> Result<bool> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(StrandError::InvalidFilterValue {
            field,
            reason: format!("expected true or false, got {other:?}"),
        }),
    }
}

// Bounds are signed: "shorter than 0" produces max_length = -1, which must
// match nothing rather than saturate into matching the empty string.
fn parse_int(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| StrandError::InvalidFilterValue {
            field,
            reason: format!("expected an integer, got {raw:?}"),
        })
}

fn parse_char(field: &'static str, raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(StrandError::InvalidFilterValue {
            field,
            reason: format!("expected exactly one character, got {raw:?}"),
        }),
    }
}

/// A validated filter. Serialized back to callers so list responses can
/// echo the filter that was actually applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// True when the record's properties satisfy every present field.
    pub fn matches(&self, props: &Properties) -> bool {
        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if (props.length as i64) < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if (props.length as i64) > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count as i64 != count {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            // Key presence implies a count of at least one
            if !props.character_frequency_map.contains_key(&ch) {
                return false;
            }
        }
        true
    }
}
