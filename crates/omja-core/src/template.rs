mod link;
pub use link::{Link, LinkArgs, LinkFn, LinkObject};

mod overrides;
pub use overrides::SerializerOptions;

use crate::inflect::KeyCase;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// Shape-based description of what to emit for one resource level.
///
/// A template is built once per mapping call and shared by every record of
/// the primary data, so it only depends on the union of the records' shapes,
/// never on individual values.
#[derive(Debug, Clone)]
pub struct Template {
    /// Member names to emit, in output order. Names that have an entry in
    /// `relations` are routed to `relationships`; all others are attributes.
    pub attributes: Vec<String>,

    /// Nested templates keyed by relation name
    pub relations: IndexMap<String, Template>,

    /// Set on nested levels: the related resources are referenced by this
    /// key rather than embedded.
    pub reference: Option<String>,

    /// Whether resources at this level are copied into `included`
    pub included: bool,

    pub top_level_links: Option<LinkObject>,
    pub data_links: Option<LinkObject>,
    pub relationship_links: Option<LinkObject>,
    pub included_links: Option<LinkObject>,

    /// Top-level `meta` member
    pub meta: Option<Value>,

    pub key_for_attribute: KeyCase,
    pub type_for_attribute: Option<RelationTypes>,

    /// Pluralize resource `type` members
    pub pluralize_type: bool,

    /// Omit `data` from relationship objects, keeping links only
    pub ignore_relationship_data: bool,
}

/// Caller-supplied resource type names for relations.
#[derive(Clone)]
pub enum RelationTypes {
    Map(IndexMap<String, String>),
    Func(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl Template {
    pub fn new(attributes: Vec<String>) -> Template {
        Template {
            attributes,
            ..Template::default()
        }
    }

    /// Returns `true` if `name` is emitted as a relationship.
    pub fn is_relation(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    /// Applies explicit overrides; every `Some` field replaces the computed
    /// value.
    pub fn apply(&mut self, overrides: &SerializerOptions) {
        if let Some(attributes) = &overrides.attributes {
            self.attributes = attributes.clone();
        }
        if let Some(links) = &overrides.top_level_links {
            self.top_level_links = Some(links.clone());
        }
        if let Some(links) = &overrides.data_links {
            self.data_links = Some(links.clone());
        }
        if let Some(meta) = &overrides.meta {
            self.meta = Some(meta.clone());
        }
        if let Some(key_case) = &overrides.key_for_attribute {
            self.key_for_attribute = key_case.clone();
        }
        if let Some(types) = &overrides.type_for_attribute {
            self.type_for_attribute = Some(types.clone());
        }
        if let Some(pluralize_type) = overrides.pluralize_type {
            self.pluralize_type = pluralize_type;
        }
        if let Some(ignore) = overrides.ignore_relationship_data {
            self.ignore_relationship_data = ignore;
        }
        for (name, template) in &overrides.relations {
            self.relations.insert(name.clone(), template.clone());
            if !self.attributes.contains(name) {
                self.attributes.push(name.clone());
            }
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Template {
            attributes: vec![],
            relations: IndexMap::new(),
            reference: None,
            included: true,
            top_level_links: None,
            data_links: None,
            relationship_links: None,
            included_links: None,
            meta: None,
            key_for_attribute: KeyCase::Unchanged,
            type_for_attribute: None,
            pluralize_type: true,
            ignore_relationship_data: false,
        }
    }
}

impl RelationTypes {
    pub fn func(f: impl Fn(&str) -> String + Send + Sync + 'static) -> RelationTypes {
        RelationTypes::Func(Arc::new(f))
    }

    /// Returns the type name for a relation, if one is configured.
    pub fn type_for(&self, relation: &str) -> Option<String> {
        match self {
            RelationTypes::Map(map) => map.get(relation).cloned(),
            RelationTypes::Func(f) => Some(f(relation)),
        }
    }
}

impl core::fmt::Debug for RelationTypes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RelationTypes::Map(map) => f.debug_tuple("Map").field(map).finish(),
            RelationTypes::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<IndexMap<String, String>> for RelationTypes {
    fn from(map: IndexMap<String, String>) -> Self {
        RelationTypes::Map(map)
    }
}
