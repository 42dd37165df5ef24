use indexmap::IndexMap;
use serde_json::Value;

/// Name(s) of the attribute(s) that hold a record's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A single identifier attribute, `id` by default
    Simple(String),

    /// Several attributes whose values, joined with `,`, form the identifier
    Composite(Vec<String>),
}

impl Identifier {
    pub fn names(&self) -> &[String] {
        match self {
            Identifier::Simple(name) => std::slice::from_ref(name),
            Identifier::Composite(names) => names,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }

    /// Reads the identifier out of an attribute bag. Composite identifiers
    /// resolve only when every component is present and non-null.
    pub fn resolve(&self, attributes: &IndexMap<String, Value>) -> Option<String> {
        match self {
            Identifier::Simple(name) => attributes.get(name).and_then(value_to_id),
            Identifier::Composite(names) if names.is_empty() => None,
            Identifier::Composite(names) => {
                let parts = names
                    .iter()
                    .map(|name| attributes.get(name).and_then(value_to_id))
                    .collect::<Option<Vec<_>>>()?;
                Some(parts.join(","))
            }
        }
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::Simple("id".to_string())
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Simple(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Simple(name)
    }
}

impl From<Vec<String>> for Identifier {
    fn from(names: Vec<String>) -> Self {
        Identifier::Composite(names)
    }
}

impl<const N: usize> From<[&str; N]> for Identifier {
    fn from(names: [&str; N]) -> Self {
        Identifier::Composite(names.iter().map(|name| name.to_string()).collect())
    }
}

/// Renders an identifier value the way it appears in a document: strings
/// verbatim, everything else in its JSON form. `null` is no identifier.
pub(crate) fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
