mod included;
use included::Included;

mod relationship;
mod resource;

use indexmap::IndexSet;
use omja_core::{
    document::{Document, PrimaryData},
    inflect,
    template::LinkArgs,
    Template, Tree,
};

/// Writes a JSON:API document from a template and a projected data tree.
///
/// The template decides which members are emitted and how they are linked;
/// the tree supplies the values. Related resources whose template is marked
/// `included` are collected, de-duplicated by `(type, id)`, into the
/// document's `included` member.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Resource type of the primary data, before pluralization
    ty: &'a str,

    /// Root template. Naming options (key case, relation types,
    /// pluralization) are read from here for every level.
    template: &'a Template,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// `(type, id)` of every primary resource. These are never repeated in
    /// `included`.
    primary: IndexSet<(String, String)>,

    /// Compound document members collected so far
    included: Included,
}

impl<'a> Serializer<'a> {
    pub fn new(ty: &'a str, template: &'a Template) -> Serializer<'a> {
        Serializer { ty, template }
    }

    pub fn serialize(&self, tree: &Tree) -> Document {
        let ty = self.type_name(self.ty);

        let mut fmt = Formatter {
            serializer: self,
            primary: tree
                .nodes()
                .map(|node| (ty.clone(), node.id.clone()))
                .collect(),
            included: Included::default(),
        };

        let data_links = self.template.data_links.as_ref();

        let data = match tree {
            Tree::Null => None,
            Tree::One(node) => Some(PrimaryData::One(Box::new(fmt.resource(
                &ty,
                node,
                self.template,
                data_links,
            )))),
            Tree::Many(nodes) => Some(PrimaryData::Many(
                nodes
                    .iter()
                    .map(|node| fmt.resource(&ty, node, self.template, data_links))
                    .collect(),
            )),
        };

        let included = fmt.included.into_resources();

        Document {
            data,
            included: (!included.is_empty()).then_some(included),
            links: self
                .template
                .top_level_links
                .as_ref()
                .and_then(|links| links.resolve(LinkArgs::default())),
            meta: self.template.meta.clone(),
        }
    }

    /// Output `type` member for a raw type name. Key casing never applies
    /// to types.
    fn type_name(&self, raw: &str) -> String {
        if self.template.pluralize_type {
            inflect::pluralize(raw)
        } else {
            raw.to_string()
        }
    }

    /// Output `type` member for the resources of a relation. A configured
    /// relation type is used exactly as given.
    fn relation_type(&self, relation: &str) -> String {
        self.template
            .type_for_attribute
            .as_ref()
            .and_then(|types| types.type_for(relation))
            .unwrap_or_else(|| self.type_name(relation))
    }

    fn member_name(&self, name: &str) -> String {
        self.template.key_for_attribute.apply(name)
    }
}
