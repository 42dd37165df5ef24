use super::{Record, RecordSet};

/// The value of a loaded relation: one record or a set of records.
///
/// Cardinality is decided once, when the ORM layer builds the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Related {
    One(Box<Record>),
    Many(RecordSet),
}

impl Related {
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Related::One(record) => Some(record),
            Related::Many(_) => None,
        }
    }

    pub fn as_record_set(&self) -> Option<&RecordSet> {
        match self {
            Related::One(_) => None,
            Related::Many(set) => Some(set),
        }
    }

    /// Number of records held: 1 for a single record.
    pub fn len(&self) -> usize {
        match self {
            Related::One(_) => 1,
            Related::Many(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Record> for Related {
    fn from(record: Record) -> Self {
        Related::One(Box::new(record))
    }
}

impl From<RecordSet> for Related {
    fn from(set: RecordSet) -> Self {
        Related::Many(set)
    }
}

impl From<Vec<Record>> for Related {
    fn from(models: Vec<Record>) -> Self {
        Related::Many(RecordSet::from(models))
    }
}
