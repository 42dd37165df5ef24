mod identifier;
pub use identifier::Identifier;

mod record_set;
pub use record_set::RecordSet;

mod related;
pub use related::Related;

use indexmap::IndexMap;
use serde_json::Value;

/// A single resource instance as handed over by the ORM layer.
///
/// Records are read-only from the mapper's point of view. Every structure the
/// mapper derives from a record (samples, templates, projected trees) is a
/// fresh copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Record-level identifier, used when the identifier attributes are not
    /// present in the attribute bag.
    pub id: Option<Value>,

    /// Name(s) of the attribute(s) holding the identifier
    pub id_attribute: Identifier,

    /// Attribute bag, in ORM column order
    pub attributes: IndexMap<String, Value>,

    /// Loaded relations, keyed by relation name
    pub relations: IndexMap<String, Related>,

    /// Join-table columns carried by a record loaded through a many-to-many
    /// relation.
    pub pivot: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    /// Builds a record from a JSON object. Non-object values produce an empty
    /// attribute bag.
    pub fn from_json(value: Value) -> Record {
        let attributes = match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => IndexMap::new(),
        };

        Record {
            attributes,
            ..Record::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Record {
        self.id = Some(id.into());
        self
    }

    pub fn with_id_attribute(mut self, id_attribute: impl Into<Identifier>) -> Record {
        self.id_attribute = id_attribute.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Record {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_relation(mut self, name: impl Into<String>, related: impl Into<Related>) -> Record {
        self.relations.insert(name.into(), related.into());
        self
    }

    pub fn with_pivot(mut self, name: impl Into<String>, value: impl Into<Value>) -> Record {
        self.pivot.insert(name.into(), value.into());
        self
    }

    /// Resolves the record's identifier.
    ///
    /// The identifier attributes take precedence; the record-level `id` is
    /// the fallback. Returns `None` when neither yields a value.
    pub fn id(&self) -> Option<String> {
        self.id_attribute
            .resolve(&self.attributes)
            .or_else(|| self.id.as_ref().and_then(identifier::value_to_id))
    }
}
