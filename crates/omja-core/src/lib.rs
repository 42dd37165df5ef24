pub mod document;
pub use document::Document;

mod error;
pub use error::{Error, IntoError};

pub mod inflect;

pub mod record;
pub use record::{Identifier, Record, RecordSet, Related};

pub mod template;
pub use template::Template;

pub mod tree;
pub use tree::{Node, Tree};

/// A Result type alias that uses omja's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
