pub mod attributes;
pub use attributes::{AttributesOpt, Matcher};

pub mod guards;

pub mod links;
pub use links::{LinkContext, Pagination, Query};

mod mapper;
pub use mapper::Mapper;

pub mod options;
pub use options::{Inclusion, MapOptions, RelationSelect, Relations};

pub mod project;

pub mod sample;
pub use sample::Sample;

pub mod template;

mod translator;
pub use translator::{Adapter, Translator};

pub use omja_core::{
    document, err, inflect::KeyCase, template::RelationTypes, template::SerializerOptions, bail,
    Document, Error, Identifier, Node, Record, RecordSet, Related, Result, Template, Tree,
};
pub use omja_serializer::Serializer;
