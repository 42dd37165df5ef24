use indexmap::IndexMap;
use omja_core::{
    inflect::pluralize,
    template::{Link, LinkObject},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Query parameters preserved across pagination links, in caller order.
pub type Query = IndexMap<String, String>;

/// Offset/limit pagination state of the primary data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,

    /// Total number of records across all pages
    pub total: Option<u64>,

    /// Row count reported by the ORM, used when `total` is not given
    pub row_count: Option<u64>,
}

/// Everything needed to build the links of one resource level.
#[derive(Debug, Clone, Default)]
pub struct LinkContext {
    /// Base URL without trailing slash
    pub base_url: String,

    /// Resource type (for nested levels, the relation name)
    pub ty: String,

    /// Type of the resource owning this level, for nested levels
    pub parent: Option<String>,

    pub pagination: Option<Pagination>,
    pub query: Query,
}

impl Pagination {
    pub fn new(offset: u64, limit: u64) -> Pagination {
        Pagination {
            offset,
            limit,
            total: None,
            row_count: None,
        }
    }

    pub fn with_total(mut self, total: u64) -> Pagination {
        self.total = Some(total);
        self
    }

    pub fn with_row_count(mut self, row_count: u64) -> Pagination {
        self.row_count = Some(row_count);
        self
    }

    /// Effective total: `total`, else the ORM row count.
    pub fn total(&self) -> Option<u64> {
        self.total.or(self.row_count)
    }
}

impl LinkContext {
    pub fn new(base_url: impl Into<String>, ty: impl Into<String>) -> LinkContext {
        LinkContext {
            base_url: base_url.into(),
            ty: ty.into(),
            ..LinkContext::default()
        }
    }

    pub fn with_pagination(mut self, pagination: Option<Pagination>) -> LinkContext {
        self.pagination = pagination;
        self
    }

    pub fn with_query(mut self, query: Option<Query>) -> LinkContext {
        self.query = query.unwrap_or_default();
        self
    }

    /// Context for the resources of relation `relation` of this level.
    pub fn child(&self, relation: &str) -> LinkContext {
        LinkContext {
            base_url: self.base_url.clone(),
            ty: relation.to_string(),
            parent: Some(self.ty.clone()),
            pagination: None,
            query: self.query.clone(),
        }
    }

    fn collection_url(&self, ty: &str) -> String {
        format!("{}/{}", self.base_url, pluralize(ty))
    }
}

/// Top-level links: `self`, plus pagination links when the effective total
/// spans more than one page.
pub fn top_level_links(ctx: &LinkContext) -> LinkObject {
    let mut links = LinkObject {
        self_: Some(Link::Static(ctx.collection_url(&ctx.ty))),
        ..LinkObject::default()
    };

    let paginated = ctx
        .pagination
        .as_ref()
        .and_then(|pag| pag.total().map(|total| total > 0 && total > pag.limit))
        .unwrap_or(false);

    if paginated {
        links.merge(pagination_links(ctx));
    }

    links
}

/// `first`/`prev` when not on the first page; `next`/`last` when the total is
/// known and records remain after this page.
pub fn pagination_links(ctx: &LinkContext) -> LinkObject {
    let mut links = LinkObject::default();

    let Some(pag) = ctx.pagination else {
        return links;
    };

    if pag.limit == 0 {
        return links;
    }

    let base = ctx.collection_url(&ctx.ty);
    let query = encode_query(&ctx.query);
    let page = |limit: u64, offset: u64| {
        Link::Static(format!(
            "{base}?page[limit]={limit}&page[offset]={offset}{query}"
        ))
    };

    if pag.offset > 0 {
        links.first = Some(page(pag.limit, 0));
        links.prev = Some(page(pag.limit, pag.offset.saturating_sub(pag.limit)));
    }

    if let Some(total) = pag.total() {
        // An offset past `u64::MAX - limit` has no page after it.
        if let Some(next) = pag.offset.checked_add(pag.limit).filter(|next| *next < total) {
            links.next = Some(page(pag.limit, next));

            let (last_limit, last_offset) = last_page(pag.offset, pag.limit, total);
            links.last = Some(page(last_limit, last_offset));
        }
    }

    links
}

/// Limit and offset of the last page, sized so it does not overlap the page
/// before it.
fn last_page(offset: u64, limit: u64, total: u64) -> (u64, u64) {
    let remainder = (total - offset) % limit;
    let last_limit = if remainder == 0 { limit } else { remainder };
    (last_limit, total - last_limit)
}

/// Resource links.
///
/// Primary resources link to themselves. Nested levels get relationship
/// `self`/`related` links rooted at the parent resource.
pub fn resource_self_link(ctx: &LinkContext) -> LinkObject {
    match &ctx.parent {
        None => {
            let base = ctx.collection_url(&ctx.ty);
            LinkObject {
                self_: Some(Link::dynamic(move |args| {
                    args.target().map(|node| format!("{base}/{}", node.id))
                })),
                ..LinkObject::default()
            }
        }
        Some(parent) => {
            let base = ctx.collection_url(parent);
            let relation = ctx.ty.clone();
            let related_base = base.clone();
            let related_relation = relation.clone();

            LinkObject {
                self_: Some(Link::dynamic(move |args| {
                    args.record
                        .map(|owner| format!("{base}/{}/relationships/{relation}", owner.id))
                })),
                related: Some(Link::dynamic(move |args| {
                    args.record.map(|owner| {
                        format!("{related_base}/{}/{related_relation}", owner.id)
                    })
                })),
                ..LinkObject::default()
            }
        }
    }
}

/// Self link of a resource in `included`, rooted at its own collection.
pub fn included_resource_link(ctx: &LinkContext) -> LinkObject {
    let base = ctx.collection_url(&ctx.ty);
    LinkObject {
        self_: Some(Link::dynamic(move |args| {
            args.target().map(|node| format!("{base}/{}", node.id))
        })),
        ..LinkObject::default()
    }
}

/// Characters escaped in query values. Everything else, brackets and commas
/// included, is copied as given.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'<')
    .add(b'>')
    .add(b'`');

const QUERY_KEY: &AsciiSet = &QUERY_VALUE.add(b'=');

/// Appends the caller's query parameters as a suffix starting with `&`, in
/// caller order. Any `page` parameter is dropped; pagination owns it.
fn encode_query(query: &Query) -> String {
    query
        .iter()
        .filter(|(key, _)| *key != "page" && !key.starts_with("page["))
        .map(|(key, value)| {
            format!(
                "&{}={}",
                utf8_percent_encode(key, QUERY_KEY),
                utf8_percent_encode(value, QUERY_VALUE)
            )
        })
        .collect()
}
