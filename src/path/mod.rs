//! Compact path grammar: parsing, formatting, extraction, legacy translation.

pub mod builder;
pub mod error;
pub mod legacy;
pub mod parser;
pub mod segment;
pub(crate) mod token;

pub use builder::{extract, LocationStep};
pub use error::ParseError;
pub use legacy::from_legacy;
pub use parser::parse;
pub use segment::{format_path, PathSegment, TrackRef};
