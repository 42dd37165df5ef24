//! JSON:API 1.0 document types.
//!
//! These are output-only values: they derive `Serialize` and are compared in
//! tests through `serde_json::to_value`.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A top-level JSON:API document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Primary data; serialized as `null` when absent
    pub data: Option<PrimaryData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Resource>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryData {
    One(Box<Resource>),
    Many(Vec<Resource>),
}

/// A resource object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub ty: String,

    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IndexMap<String, Relationship>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// A relationship object inside a resource's `relationships` member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Linkage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Resource linkage: `null`, one identifier, or a list of identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Linkage {
    Null(()),
    One(ResourceRef),
    Many(Vec<ResourceRef>),
}

/// A resource identifier object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceRef {
    #[serde(rename = "type")]
    pub ty: String,

    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

impl Document {
    /// The document for absent primary data: `{"data": null}`.
    pub fn null() -> Document {
        Document::default()
    }

    /// Primary resources, in document order.
    pub fn resources(&self) -> &[Resource] {
        match &self.data {
            None => &[],
            Some(PrimaryData::One(resource)) => std::slice::from_ref(&**resource),
            Some(PrimaryData::Many(resources)) => resources,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Resource {
    pub fn new(ty: impl Into<String>, id: impl Into<String>) -> Resource {
        Resource {
            ty: ty.into(),
            id: id.into(),
            attributes: None,
            relationships: None,
            links: None,
        }
    }

    pub fn key(&self) -> (&str, &str) {
        (&self.ty, &self.id)
    }
}

impl Linkage {
    pub fn null() -> Linkage {
        Linkage::Null(())
    }
}

impl ResourceRef {
    pub fn new(ty: impl Into<String>, id: impl Into<String>) -> ResourceRef {
        ResourceRef {
            ty: ty.into(),
            id: id.into(),
            meta: None,
        }
    }
}

impl Links {
    pub fn is_empty(&self) -> bool {
        self.self_.is_none()
            && self.related.is_none()
            && self.first.is_none()
            && self.prev.is_none()
            && self.next.is_none()
            && self.last.is_none()
    }
}
