use crate::{
    attributes::filtered_attribute_names,
    links::{included_resource_link, resource_self_link, LinkContext},
    options::MapOptions,
    sample::Sample,
};

use omja_core::Template;

/// Builds the template for `sample` and, recursively, for every allowed
/// relation.
///
/// The walk is bounded by the sample, which is a finite snapshot; cycles in
/// the source records were already cut while sampling.
pub fn build_template(sample: &Sample, options: &MapOptions, ctx: &LinkContext) -> Template {
    let mut template = Template::new(filtered_attribute_names(sample, options.attributes.as_ref()));

    for (name, related) in &sample.relations {
        let allowed = options
            .relations
            .as_ref()
            .map_or(true, |relations| relations.allows(name));

        if !allowed {
            tracing::trace!(ty = %ctx.ty, relation = %name, "relation not allowed; skipping");
            continue;
        }

        let child = ctx.child(name);
        let mut nested = build_template(related, options, &child);
        nested.reference = Some("id".to_string());

        if options.enable_links {
            nested.relationship_links = Some(resource_self_link(&child));
            nested.included_links = Some(included_resource_link(&child));
        }

        nested.included = options
            .relations
            .as_ref()
            .map_or(true, |relations| relations.includes(name));

        tracing::trace!(
            ty = %ctx.ty,
            relation = %name,
            included = nested.included,
            "relation allowed"
        );

        if !template.attributes.contains(name) {
            template.attributes.push(name.clone());
        }
        template.relations.insert(name.clone(), nested);
    }

    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        options::{RelationSelect, Relations},
        sample::sample,
    };
    use omja_core::{Record, Related};
    use serde_json::json;

    fn article() -> Sample {
        let record = Record::from_json(json!({"id": 1, "title": "T"}))
            .with_relation(
                "author",
                Record::from_json(json!({"id": 2, "name": "N"}))
                    .with_relation("company", Record::from_json(json!({"id": 3, "city": "C"}))),
            )
            .with_relation("comments", vec![Record::from_json(json!({"id": 4, "body": "B"}))]);

        sample(Some(&Related::from(record)), "article")
    }

    fn ctx() -> LinkContext {
        LinkContext::new("https://h", "article")
    }

    #[test]
    fn attributes_then_relations() {
        let template = build_template(&article(), &MapOptions::default(), &ctx());

        assert_eq!(template.attributes, ["title", "author", "comments"]);
        assert!(template.reference.is_none());

        let author = &template.relations["author"];
        assert_eq!(author.attributes, ["name", "company"]);
        assert_eq!(author.reference.as_deref(), Some("id"));
        assert!(author.included);
        assert!(author.relationship_links.is_some());
        assert!(author.included_links.is_some());

        let company = &author.relations["company"];
        assert_eq!(company.attributes, ["city"]);
        assert!(company.relations.is_empty());
    }

    #[test]
    fn relations_false_skips_everything() {
        let options = MapOptions::default().with_relations(false);
        let template = build_template(&article(), &options, &ctx());

        assert_eq!(template.attributes, ["title"]);
        assert!(template.relations.is_empty());
    }

    #[test]
    fn unset_relations_allow_and_include() {
        let options = MapOptions {
            relations: None,
            ..MapOptions::default()
        };
        let template = build_template(&article(), &options, &ctx());
        assert!(template.relations["comments"].included);
    }

    #[test]
    fn fields_apply_at_every_depth() {
        let options = MapOptions::default()
            .with_relations(Relations::from(RelationSelect::fields(["author"])));
        let template = build_template(&article(), &options, &ctx());

        assert_eq!(template.attributes, ["title", "author"]);
        assert!(template.relations["author"].relations.is_empty());
        assert_eq!(template.relations["author"].attributes, ["name"]);
    }

    #[test]
    fn links_disabled() {
        let options = MapOptions::default().with_links(false);
        let template = build_template(&article(), &options, &ctx());

        let author = &template.relations["author"];
        assert!(author.relationship_links.is_none());
        assert!(author.included_links.is_none());
    }

    #[test]
    fn empty_sample_gives_empty_template() {
        let template = build_template(&Sample::default(), &MapOptions::default(), &ctx());
        assert!(template.attributes.is_empty());
        assert!(template.relations.is_empty());
    }
}
