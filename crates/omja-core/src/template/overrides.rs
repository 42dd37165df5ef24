use super::{LinkObject, RelationTypes, Template};
use crate::inflect::KeyCase;
use indexmap::IndexMap;
use serde_json::Value;

/// Raw document-writer options applied on top of every computed template.
///
/// Supplied once when the mapper is constructed. Each `Some` field replaces
/// the computed value; entries in `relations` replace (or add) the nested
/// template for that relation.
#[derive(Debug, Clone, Default)]
pub struct SerializerOptions {
    pub attributes: Option<Vec<String>>,
    pub relations: IndexMap<String, Template>,
    pub top_level_links: Option<LinkObject>,
    pub data_links: Option<LinkObject>,
    pub meta: Option<Value>,
    pub key_for_attribute: Option<KeyCase>,
    pub type_for_attribute: Option<RelationTypes>,
    pub pluralize_type: Option<bool>,
    pub ignore_relationship_data: Option<bool>,
}
