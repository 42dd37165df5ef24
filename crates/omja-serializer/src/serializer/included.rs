use indexmap::{map::Entry, IndexMap};
use omja_core::document::Resource;

/// The `included` member under construction, keyed by `(type, id)`.
#[derive(Debug, Default)]
pub(super) struct Included {
    resources: IndexMap<(String, String), Resource>,
}

impl Included {
    /// Claims the slot for `key`. Returns `true` if the key was not seen
    /// before.
    pub(super) fn reserve(&mut self, key: &(String, String)) -> bool {
        match self.resources.entry(key.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Resource::new(&key.0, &key.1));
                true
            }
        }
    }

    /// Stores `resource` under `key`. A fresh slot is overwritten; an
    /// existing entry only gains the members it is missing.
    pub(super) fn merge(&mut self, key: (String, String), resource: Resource, fresh: bool) {
        let Some(existing) = self.resources.get_mut(&key) else {
            self.resources.insert(key, resource);
            return;
        };

        if fresh {
            *existing = resource;
            return;
        }

        tracing::debug!(ty = %key.0, id = %key.1, "merging repeated included resource");

        if let Some(attributes) = resource.attributes {
            let target = existing.attributes.get_or_insert_with(Default::default);
            for (name, value) in attributes {
                target.entry(name).or_insert(value);
            }
        }

        if let Some(relationships) = resource.relationships {
            let target = existing.relationships.get_or_insert_with(Default::default);
            for (name, relationship) in relationships {
                target.entry(name).or_insert(relationship);
            }
        }

        if existing.links.is_none() {
            existing.links = resource.links;
        }
    }

    pub(super) fn into_resources(self) -> Vec<Resource> {
        self.resources.into_values().collect()
    }
}
