//! Type guards and extraction over optional related values.
//!
//! Cardinality is carried by [`Related`] itself, so these are plain matches.
//! They exist for callers holding an `Option` (a relation that may not have
//! been loaded) and treat `None` as "neither".

use omja_core::{Record, Related};
use serde_json::Value;

pub fn is_record(data: Option<&Related>) -> bool {
    matches!(data, Some(Related::One(_)))
}

pub fn is_record_set(data: Option<&Related>) -> bool {
    matches!(data, Some(Related::Many(_)))
}

/// Attribute name/value pairs of `record`, nothing for `None`.
pub fn attributes_of(record: Option<&Record>) -> impl Iterator<Item = (&str, &Value)> {
    record
        .into_iter()
        .flat_map(|record| record.attributes.iter())
        .map(|(name, value)| (name.as_str(), value))
}

/// Relation name/value pairs of `record`, nothing for `None`.
pub fn relations_of(record: Option<&Record>) -> impl Iterator<Item = (&str, &Related)> {
    record
        .into_iter()
        .flat_map(|record| record.relations.iter())
        .map(|(name, related)| (name.as_str(), related))
}
