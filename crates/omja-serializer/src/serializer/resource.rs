use super::Formatter;

use indexmap::IndexMap;
use omja_core::{
    document::Resource,
    template::{LinkArgs, LinkObject},
    Node, Template,
};
use serde_json::Map;

impl Formatter<'_> {
    /// Builds the resource object for `node`.
    ///
    /// Members are emitted in template order. A member with a nested
    /// template becomes a relationship, anything else is read from the
    /// node's fields. Members the node does not carry are skipped, which is
    /// how records of a heterogeneous set each keep their own shape.
    pub(super) fn resource(
        &mut self,
        ty: &str,
        node: &Node,
        template: &Template,
        links: Option<&LinkObject>,
    ) -> Resource {
        let mut attributes = Map::new();
        let mut relationships = IndexMap::new();

        for name in &template.attributes {
            if let Some(nested) = template.relations.get(name) {
                let Some(tree) = node.relations.get(name) else {
                    continue;
                };

                let relationship = self.relationship(name, node, tree, nested);
                relationships.insert(self.serializer.member_name(name), relationship);
            } else if let Some(value) = node.fields.get(name) {
                attributes.insert(self.serializer.member_name(name), value.clone());
            }
        }

        Resource {
            ty: ty.to_string(),
            id: node.id.clone(),
            attributes: (!attributes.is_empty()).then_some(attributes),
            relationships: (!relationships.is_empty()).then_some(relationships),
            links: links.and_then(|links| links.resolve(LinkArgs::new(Some(node), None))),
        }
    }
}
