use crate::{
    attributes::AttributesOpt,
    links::{Pagination, Query},
};

use omja_core::{inflect::KeyCase, template::RelationTypes};
use serde_json::Value;

/// Per-call mapping options.
///
/// `MapOptions::default()` yields the documented defaults: every loaded
/// relation is referenced and included, links are emitted, and only the
/// identifier attribute is left out of `attributes`.
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub attributes: Option<AttributesOpt>,
    pub key_for_attribute: KeyCase,

    /// `None` allows and includes every relation
    pub relations: Option<Relations>,
    pub relation_types: Option<RelationTypes>,

    pub enable_links: bool,
    pub pagination: Option<Pagination>,
    pub query: Option<Query>,

    /// Top-level `meta` member
    pub meta: Option<Value>,
}

/// Which relations are serialized.
#[derive(Debug, Clone)]
pub enum Relations {
    /// `true`: every relation is referenced and included. `false`: no
    /// relations at all.
    All(bool),

    Select(RelationSelect),
}

#[derive(Debug, Clone)]
pub struct RelationSelect {
    /// Which allowed relations are copied into `included`
    pub included: Inclusion,

    /// Allow-list of relation names; `None` allows every relation
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub enum Inclusion {
    All(bool),
    Only(Vec<String>),
}

impl MapOptions {
    pub fn new() -> MapOptions {
        MapOptions::default()
    }

    pub fn with_attributes(mut self, attributes: AttributesOpt) -> MapOptions {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_key_for_attribute(mut self, key_case: KeyCase) -> MapOptions {
        self.key_for_attribute = key_case;
        self
    }

    pub fn with_relations(mut self, relations: impl Into<Relations>) -> MapOptions {
        self.relations = Some(relations.into());
        self
    }

    pub fn with_relation_types(mut self, relation_types: impl Into<RelationTypes>) -> MapOptions {
        self.relation_types = Some(relation_types.into());
        self
    }

    pub fn with_links(mut self, enable_links: bool) -> MapOptions {
        self.enable_links = enable_links;
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> MapOptions {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_query(mut self, query: Query) -> MapOptions {
        self.query = Some(query);
        self
    }

    pub fn with_meta(mut self, meta: Value) -> MapOptions {
        self.meta = Some(meta);
        self
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            attributes: None,
            key_for_attribute: KeyCase::Unchanged,
            relations: Some(Relations::Select(RelationSelect {
                included: Inclusion::All(true),
                fields: None,
            })),
            relation_types: None,
            enable_links: true,
            pagination: None,
            query: None,
            meta: None,
        }
    }
}

impl Relations {
    /// Relation allow-list check.
    pub fn allows(&self, relation: &str) -> bool {
        match self {
            Relations::All(allowed) => *allowed,
            Relations::Select(select) => select
                .fields
                .as_ref()
                .map_or(true, |fields| fields.iter().any(|f| f == relation)),
        }
    }

    /// Compound-document check. Independent of [`Relations::allows`]: an
    /// allowed relation may still be referenced without being included.
    pub fn includes(&self, relation: &str) -> bool {
        match self {
            Relations::All(included) => *included,
            Relations::Select(select) => match &select.included {
                Inclusion::All(included) => *included,
                Inclusion::Only(names) => {
                    names.iter().any(|n| n == relation) && self.allows(relation)
                }
            },
        }
    }
}

impl RelationSelect {
    /// Allows only `fields`, including all of them.
    pub fn fields<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> RelationSelect {
        RelationSelect {
            included: Inclusion::All(true),
            fields: Some(fields.into_iter().map(Into::into).collect()),
        }
    }

    pub fn with_included(mut self, included: impl Into<Inclusion>) -> RelationSelect {
        self.included = included.into();
        self
    }
}

impl From<bool> for Relations {
    fn from(value: bool) -> Self {
        Relations::All(value)
    }
}

impl From<RelationSelect> for Relations {
    fn from(select: RelationSelect) -> Self {
        Relations::Select(select)
    }
}

impl From<bool> for Inclusion {
    fn from(value: bool) -> Self {
        Inclusion::All(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for Inclusion {
    fn from(names: Vec<S>) -> Self {
        Inclusion::Only(names.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn false_disallows_everything() {
        let relations = Relations::All(false);
        assert!(!relations.allows("author"));
        assert!(!relations.includes("author"));
    }

    #[test]
    fn fields_restrict_allow_list() {
        let relations = Relations::from(RelationSelect::fields(["b"]));
        assert!(!relations.allows("a"));
        assert!(relations.allows("b"));
        assert!(relations.includes("b"));
    }

    #[test]
    fn included_list_intersects_fields() {
        let relations =
            Relations::from(RelationSelect::fields(["a", "b"]).with_included(vec!["b", "c"]));
        assert!(relations.allows("a"));
        assert!(!relations.includes("a"));
        assert!(relations.includes("b"));
        assert!(!relations.includes("c"));
    }

    #[test]
    fn included_list_without_fields() {
        let relations = Relations::Select(RelationSelect {
            included: Inclusion::Only(vec!["c".into()]),
            fields: None,
        });
        assert!(relations.allows("a"));
        assert!(!relations.includes("a"));
        assert!(relations.includes("c"));
    }

    #[test]
    fn included_false_references_only() {
        let relations = Relations::Select(RelationSelect {
            included: Inclusion::All(false),
            fields: None,
        });
        assert!(relations.allows("a"));
        assert!(!relations.includes("a"));
    }
}
