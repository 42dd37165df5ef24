use crate::{mapper::Mapper, options::MapOptions};

use omja_core::{template::SerializerOptions, Document, Error, Related, Result};

/// Source-specific record adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    /// Bookshelf-style models and collections, as modeled by
    /// [`Record`](omja_core::Record) and [`RecordSet`](omja_core::RecordSet)
    Bookshelf,
}

impl Adapter {
    pub const NAMES: &'static [&'static str] = &["bookshelf"];
}

impl std::str::FromStr for Adapter {
    type Err = Error;

    fn from_str(name: &str) -> Result<Adapter> {
        match name {
            "bookshelf" => Ok(Adapter::Bookshelf),
            _ => Err(Error::invalid_construction(format!(
                "unknown adapter `{name}`; choose from [{}]",
                Adapter::NAMES.join(", ")
            ))),
        }
    }
}

/// Adapter-selecting entry point.
#[derive(Debug, Clone)]
pub struct Translator {
    adapter: Adapter,
    mapper: Mapper,
}

impl Translator {
    pub fn new(
        adapter: &str,
        base_url: &str,
        overrides: Option<SerializerOptions>,
    ) -> Result<Translator> {
        Ok(Translator {
            adapter: adapter.parse()?,
            mapper: Mapper::new(base_url, overrides)?,
        })
    }

    pub fn adapter(&self) -> Adapter {
        self.adapter
    }

    pub fn to_jsonapi(
        &self,
        data: Option<&Related>,
        ty: &str,
        options: &MapOptions,
    ) -> Result<Document> {
        if ty.is_empty() {
            return Err(Error::missing_argument("to_jsonapi", "type"));
        }

        match self.adapter {
            Adapter::Bookshelf => self.mapper.map(data, ty, options),
        }
    }
}
