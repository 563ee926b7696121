//! Document transfer object: metadata plus ordered styled paragraphs.
//!
//! This is the only materialized output of the pipeline and the sole
//! artifact handed to serialization layers.

mod document;
mod paragraph;

pub use document::{
    DocumentDto, Metadata, MetadataField, LOCATION_DATE_SEPARATOR, METADATA_TEMPLATE,
};
pub use paragraph::{Paragraph, TextSpan};
