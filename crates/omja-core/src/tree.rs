use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Plain data projected from a record graph.
///
/// This is what the document writer reads values from. It carries no
/// template information; which attributes and relations end up in the
/// document is decided by the [`Template`](crate::Template).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Tree {
    #[default]
    Null,
    One(Box<Node>),
    Many(Vec<Node>),
}

/// One projected record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Resolved identifier; always present
    pub id: String,

    /// Attribute values, excluding any key shadowed by a relation
    pub fields: IndexMap<String, Value>,

    /// Projected relations
    pub relations: IndexMap<String, Tree>,

    /// Relationship meta (join-table columns) for this record as seen from
    /// the record that loaded it.
    pub meta: IndexMap<String, Value>,
}

impl Tree {
    pub fn is_null(&self) -> bool {
        matches!(self, Tree::Null)
    }

    /// Iterates the nodes held by this tree: none, one, or many.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        match self {
            Tree::Null => [].iter(),
            Tree::One(node) => std::slice::from_ref(&**node).iter(),
            Tree::Many(nodes) => nodes.iter(),
        }
    }

    /// Converts the tree into a plain JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Tree::Null => Value::Null,
            Tree::One(node) => node.to_value(),
            Tree::Many(nodes) => Value::Array(nodes.iter().map(Node::to_value).collect()),
        }
    }
}

impl Node {
    pub fn new(id: impl Into<String>) -> Node {
        Node {
            id: id.into(),
            ..Node::default()
        }
    }

    /// Converts the node into a plain JSON object: `id` first, then the
    /// attributes, then each relation under its own name.
    pub fn to_value(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("id".to_string(), Value::String(self.id.clone()));

        for (name, value) in &self.fields {
            if name != "id" {
                object.insert(name.clone(), value.clone());
            }
        }

        for (name, tree) in &self.relations {
            object.insert(name.clone(), tree.to_value());
        }

        Value::Object(object)
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tree::Null => serializer.serialize_none(),
            Tree::One(node) => node.serialize(serializer),
            Tree::Many(nodes) => serializer.collect_seq(nodes),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;

        for (name, value) in &self.fields {
            if name != "id" {
                map.serialize_entry(name, value)?;
            }
        }

        for (name, tree) in &self.relations {
            map.serialize_entry(name, tree)?;
        }

        map.end()
    }
}
