use crate::{
    links::{resource_self_link, top_level_links, LinkContext},
    options::MapOptions,
    project::to_json,
    sample::sample,
    template::build_template,
};

use omja_core::{template::SerializerOptions, Document, Error, Related, Result};
use omja_serializer::Serializer;

/// Maps records to JSON:API documents.
///
/// A mapper holds only its base URL and the serializer overrides given at
/// construction, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Mapper {
    base_url: String,
    overrides: Option<SerializerOptions>,
}

impl Mapper {
    /// Creates a mapper rooted at `base_url`.
    ///
    /// The URL must be absolute. Trailing slashes are trimmed here, once;
    /// every link is built by appending `/`-separated segments to the result.
    pub fn new(base_url: &str, overrides: Option<SerializerOptions>) -> Result<Mapper> {
        if base_url.trim().is_empty() {
            return Err(Error::invalid_construction("base URL is required"));
        }

        url::Url::parse(base_url)?;

        Ok(Mapper {
            base_url: base_url.trim_end_matches('/').to_string(),
            overrides,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maps `data` of resource type `ty` to a JSON:API document.
    ///
    /// `None` data yields `{"data": null}`. `ty` must not be empty.
    pub fn map(&self, data: Option<&Related>, ty: &str, options: &MapOptions) -> Result<Document> {
        if ty.is_empty() {
            return Err(Error::missing_argument("map", "type"));
        }

        let Some(data) = data else {
            tracing::debug!(ty, "mapping null data");
            return Ok(Document::null());
        };

        tracing::debug!(
            ty,
            records = data.len(),
            links = options.enable_links,
            paginated = options.pagination.is_some(),
            "mapping records"
        );

        let ctx = LinkContext::new(&self.base_url, ty)
            .with_pagination(options.pagination)
            .with_query(options.query.clone());

        let mut template = build_template(&sample(Some(data), ty), options, &ctx);

        if options.enable_links {
            template.top_level_links = Some(top_level_links(&ctx));
            template.data_links = Some(resource_self_link(&ctx));
        }

        template.meta = options.meta.clone();
        template.key_for_attribute = options.key_for_attribute.clone();
        template.type_for_attribute = options.relation_types.clone();

        if let Some(overrides) = &self.overrides {
            template.apply(overrides);
        }

        let tree = to_json(Some(data), ty)?;

        Ok(Serializer::new(ty, &template).serialize(&tree))
    }
}
