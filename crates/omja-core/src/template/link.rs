use crate::document::Links;
use crate::tree::Node;
use std::sync::Arc;

/// A link computed from the record being serialized.
pub type LinkFn = Arc<dyn Fn(LinkArgs<'_>) -> Option<String> + Send + Sync>;

/// What a dynamic link is evaluated against.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkArgs<'a> {
    /// The record owning the member being serialized. For relationship links
    /// this is the parent record; for top-level links there is none.
    pub record: Option<&'a Node>,

    /// The record the link points at, when it differs from `record`.
    pub current: Option<&'a Node>,
}

/// A single link member: fixed, or computed per record.
#[derive(Clone)]
pub enum Link {
    Static(String),
    Dynamic(LinkFn),
}

/// Link descriptors for one `links` member.
#[derive(Debug, Clone, Default)]
pub struct LinkObject {
    pub self_: Option<Link>,
    pub related: Option<Link>,
    pub first: Option<Link>,
    pub prev: Option<Link>,
    pub next: Option<Link>,
    pub last: Option<Link>,
}

impl<'a> LinkArgs<'a> {
    pub fn new(record: Option<&'a Node>, current: Option<&'a Node>) -> LinkArgs<'a> {
        LinkArgs { record, current }
    }

    /// The record the link is about: `current` when set, `record` otherwise.
    pub fn target(&self) -> Option<&'a Node> {
        self.current.or(self.record)
    }
}

impl Link {
    pub fn dynamic(f: impl Fn(LinkArgs<'_>) -> Option<String> + Send + Sync + 'static) -> Link {
        Link::Dynamic(Arc::new(f))
    }

    pub fn resolve(&self, args: LinkArgs<'_>) -> Option<String> {
        match self {
            Link::Static(link) => Some(link.clone()),
            Link::Dynamic(f) => f(args),
        }
    }
}

impl From<String> for Link {
    fn from(link: String) -> Self {
        Link::Static(link)
    }
}

impl From<&str> for Link {
    fn from(link: &str) -> Self {
        Link::Static(link.to_string())
    }
}

impl core::fmt::Debug for Link {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Link::Static(link) => f.debug_tuple("Static").field(link).finish(),
            Link::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl LinkObject {
    pub fn is_empty(&self) -> bool {
        self.self_.is_none()
            && self.related.is_none()
            && self.first.is_none()
            && self.prev.is_none()
            && self.next.is_none()
            && self.last.is_none()
    }

    /// Adds every member of `other` that is set, replacing existing ones.
    pub fn merge(&mut self, other: LinkObject) {
        let LinkObject {
            self_,
            related,
            first,
            prev,
            next,
            last,
        } = other;

        self.self_ = self_.or(self.self_.take());
        self.related = related.or(self.related.take());
        self.first = first.or(self.first.take());
        self.prev = prev.or(self.prev.take());
        self.next = next.or(self.next.take());
        self.last = last.or(self.last.take());
    }

    /// Evaluates every member. Returns `None` when nothing resolves.
    pub fn resolve(&self, args: LinkArgs<'_>) -> Option<Links> {
        let eval = |link: &Option<Link>| link.as_ref().and_then(|link| link.resolve(args));

        let links = Links {
            self_: eval(&self.self_),
            related: eval(&self.related),
            first: eval(&self.first),
            prev: eval(&self.prev),
            next: eval(&self.next),
            last: eval(&self.last),
        };

        (!links.is_empty()).then_some(links)
    }
}
