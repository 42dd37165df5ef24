use crate::guards::{attributes_of, relations_of};

use indexmap::{map::Entry, IndexMap, IndexSet};
use omja_core::{Identifier, Record, Related};
use serde_json::Value;

/// The union shape of a record or record set.
///
/// Templates are shape-based and shared by every record of the primary data,
/// so they are built from a sample rather than from any single record.
/// Relations of a sample are samples themselves, whatever their cardinality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    /// Identifier of the first sampled record
    pub id_attribute: Option<Identifier>,

    /// Union of attribute keys. On collisions the first record's value is
    /// kept.
    pub attributes: IndexMap<String, Value>,

    /// Union of relations, in order of first appearance
    pub relations: IndexMap<String, Sample>,
}

/// `(type, id)` of the records on the current descent path.
type Path = IndexSet<(String, String)>;

impl Sample {
    pub fn identifier(&self) -> Identifier {
        self.id_attribute.clone().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.relations.is_empty()
    }

    /// Merges `other` into `self`, keeping keys and values already present.
    pub fn merge(&mut self, other: Sample) {
        if self.id_attribute.is_none() {
            self.id_attribute = other.id_attribute;
        }

        for (name, value) in other.attributes {
            self.attributes.entry(name).or_insert(value);
        }

        for (name, sample) in other.relations {
            match self.relations.entry(name) {
                Entry::Occupied(mut entry) => entry.get_mut().merge(sample),
                Entry::Vacant(entry) => {
                    entry.insert(sample);
                }
            }
        }
    }
}

/// Reduces `data` of resource type `ty` to a single sample.
///
/// `None` and empty record sets give an empty sample. A record that appears
/// again below itself (same type and id on the descent path) contributes its
/// attributes only, which bounds the walk on cyclic data.
pub fn sample(data: Option<&Related>, ty: &str) -> Sample {
    let mut path = Path::new();
    data.map(|data| sample_related(data, ty, &mut path))
        .unwrap_or_default()
}

fn sample_related(data: &Related, ty: &str, path: &mut Path) -> Sample {
    match data {
        Related::One(record) => sample_record(record, ty, path),
        Related::Many(set) => set.iter().fold(Sample::default(), |mut acc, record| {
            acc.merge(sample_record(record, ty, path));
            acc
        }),
    }
}

fn sample_record(record: &Record, ty: &str, path: &mut Path) -> Sample {
    let mut sample = Sample {
        id_attribute: Some(record.id_attribute.clone()),
        attributes: attributes_of(Some(record))
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect(),
        relations: IndexMap::new(),
    };

    let key = record.id().map(|id| (ty.to_string(), id));

    if let Some(key) = &key {
        if path.contains(key) {
            tracing::trace!(ty, id = %key.1, "record repeats on its own path; sampling attributes only");
            return sample;
        }
        path.insert(key.clone());
    }

    for (name, related) in relations_of(Some(record)) {
        sample
            .relations
            .insert(name.to_string(), sample_related(related, name, path));
    }

    if let Some(key) = &key {
        path.shift_remove(key);
    }

    sample
}
