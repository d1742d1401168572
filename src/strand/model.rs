use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fixed property set derived from a value by the analyzer.
///
/// All character-level fields count Unicode code points: `length`,
/// `unique_characters` and `character_frequency_map` iterate the same
/// code-point sequence, so they always agree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub content_hash: String,
    pub character_frequency_map: BTreeMap<char, u64>,
}

/// A stored, analyzed string. Immutable once created: the only mutations
/// the store knows are insert and delete of whole records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRecord {
    /// Content hash of `value`; never assigned externally.
    pub id: String,
    pub value: String,
    pub properties: Properties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    // id duplicates properties.content_hash so a serialized record is
    // self-describing without reaching into the nested struct.
    pub fn new(value: String, properties: Properties) -> Self {
        Self {
            id: properties.content_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}
