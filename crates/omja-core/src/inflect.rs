use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase};
use std::sync::Arc;

/// Returns the plural form of a type name. Names that are already plural are
/// returned unchanged.
pub fn pluralize(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Naming transform applied to attribute and relationship member names.
#[derive(Clone, Default)]
pub enum KeyCase {
    /// Keep names as the ORM reports them
    #[default]
    Unchanged,

    /// `first-name`
    Dash,

    /// `first_name`
    Snake,

    /// `firstName`
    Camel,

    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl KeyCase {
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> KeyCase {
        KeyCase::Custom(Arc::new(f))
    }

    pub fn apply(&self, key: &str) -> String {
        match self {
            KeyCase::Unchanged => key.to_string(),
            KeyCase::Dash => key.to_kebab_case(),
            KeyCase::Snake => key.to_snake_case(),
            KeyCase::Camel => key.to_lower_camel_case(),
            KeyCase::Custom(f) => f(key),
        }
    }
}

impl core::fmt::Debug for KeyCase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyCase::Unchanged => f.write_str("Unchanged"),
            KeyCase::Dash => f.write_str("Dash"),
            KeyCase::Snake => f.write_str("Snake"),
            KeyCase::Camel => f.write_str("Camel"),
            KeyCase::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
