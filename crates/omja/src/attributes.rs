use crate::sample::Sample;

use omja_core::{Identifier, Result};
use regex::Regex;

/// Matches attribute names: exactly (case-sensitive) or by pattern.
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(String),
    Pattern(Regex),
}

/// Attribute selection rules.
#[derive(Debug, Clone)]
pub enum AttributesOpt {
    /// Only the matching attributes are emitted
    Include(Vec<Matcher>),

    /// `include` is applied first (when given), then anything matching
    /// `omit` is removed. `omit` wins on conflicts.
    Filter {
        include: Option<Vec<Matcher>>,
        omit: Vec<Matcher>,
    },
}

impl Matcher {
    pub fn exact(name: impl Into<String>) -> Matcher {
        Matcher::Exact(name.into())
    }

    /// Compiles `pattern` into a pattern matcher.
    pub fn pattern(pattern: &str) -> Result<Matcher> {
        Ok(Matcher::Pattern(Regex::new(pattern)?))
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Exact(exact) => exact == name,
            Matcher::Pattern(pattern) => pattern.is_match(name),
        }
    }
}

impl From<&str> for Matcher {
    fn from(name: &str) -> Self {
        Matcher::Exact(name.to_string())
    }
}

impl From<String> for Matcher {
    fn from(name: String) -> Self {
        Matcher::Exact(name)
    }
}

impl From<Regex> for Matcher {
    fn from(pattern: Regex) -> Self {
        Matcher::Pattern(pattern)
    }
}

impl AttributesOpt {
    pub fn include<M: Into<Matcher>>(matchers: impl IntoIterator<Item = M>) -> AttributesOpt {
        AttributesOpt::Include(matchers.into_iter().map(Into::into).collect())
    }

    pub fn omit<M: Into<Matcher>>(matchers: impl IntoIterator<Item = M>) -> AttributesOpt {
        AttributesOpt::Filter {
            include: None,
            omit: matchers.into_iter().map(Into::into).collect(),
        }
    }

    fn keeps(&self, name: &str) -> bool {
        let any = |matchers: &[Matcher]| matchers.iter().any(|m| m.matches(name));

        match self {
            AttributesOpt::Include(include) => any(include),
            AttributesOpt::Filter { include, omit } => {
                include.as_deref().map_or(true, any) && !any(omit)
            }
        }
    }
}

/// Attribute names of a sample that end up in the document.
pub fn filtered_attribute_names(sample: &Sample, options: Option<&AttributesOpt>) -> Vec<String> {
    filter_names(
        sample.attributes.keys().map(String::as_str),
        &sample.identifier(),
        options,
    )
}

/// Member names a resource object keeps for itself.
const RESERVED: [&str; 2] = ["id", "type"];

/// Filters raw attribute names, preserving their order.
///
/// Identifier attributes and the reserved `id`/`type` names are always
/// removed; the remaining names go through the caller's rules.
pub fn filter_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
    identifier: &Identifier,
    options: Option<&AttributesOpt>,
) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| !RESERVED.contains(name) && !identifier.contains(name))
        .filter(|name| options.map_or(true, |options| options.keeps(name)))
        .map(str::to_string)
        .collect()
}
