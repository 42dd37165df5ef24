use super::Formatter;

use omja_core::{
    document::{Linkage, Relationship, ResourceRef},
    template::LinkArgs,
    Node, Template, Tree,
};

impl Formatter<'_> {
    /// Builds the relationship object for relation `name` of `owner`, and
    /// queues the related resources for `included` when the nested template
    /// asks for it.
    pub(super) fn relationship(
        &mut self,
        name: &str,
        owner: &Node,
        tree: &Tree,
        template: &Template,
    ) -> Relationship {
        let ty = self.serializer.relation_type(name);

        if template.included {
            for node in tree.nodes() {
                self.include(&ty, node, template);
            }
        }

        let data = if self.serializer.template.ignore_relationship_data {
            None
        } else {
            Some(match tree {
                Tree::Null => Linkage::null(),
                Tree::One(node) => Linkage::One(self.resource_ref(&ty, node)),
                Tree::Many(nodes) => Linkage::Many(
                    nodes
                        .iter()
                        .map(|node| self.resource_ref(&ty, node))
                        .collect(),
                ),
            })
        };

        let links = template
            .relationship_links
            .as_ref()
            .and_then(|links| links.resolve(LinkArgs::new(Some(owner), tree.nodes().next())));

        Relationship { data, links }
    }

    fn resource_ref(&self, ty: &str, node: &Node) -> ResourceRef {
        let meta = (!node.meta.is_empty()).then(|| {
            node.meta
                .iter()
                .map(|(key, value)| (self.serializer.member_name(key), value.clone()))
                .collect()
        });

        ResourceRef {
            ty: ty.to_string(),
            id: node.id.clone(),
            meta,
        }
    }

    fn include(&mut self, ty: &str, node: &Node, template: &Template) {
        let key = (ty.to_string(), node.id.clone());

        if self.primary.contains(&key) {
            return;
        }

        // Reserve the slot first so a resource precedes the resources it
        // pulls in.
        let fresh = self.included.reserve(&key);

        let resource = self.resource(ty, node, template, template.included_links.as_ref());
        self.included.merge(key, resource, fresh);
    }
}
