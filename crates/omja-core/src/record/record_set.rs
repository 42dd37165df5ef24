use super::Record;

/// An ordered collection of records of one nominal type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub models: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> RecordSet {
        RecordSet::default()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.models.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.models.iter()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(models: Vec<Record>) -> Self {
        RecordSet { models }
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        RecordSet {
            models: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
