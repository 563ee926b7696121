//! Source document model.
//!
//! An already-parsed word-processing document: paragraphs, runs, tables,
//! lists, images and footnotes. Layout-derived values (indentation, pixel
//! sizes, rotation, table spans) arrive resolved; the exporter only reads
//! this tree and never writes back into it.

mod document;
mod paragraph;
mod resource;
mod table;

pub use document::{Document, Footnote, Node, NumberingItem, NumberingSpan};
pub use paragraph::{
    Indentation, Inline, Justification, Paragraph, Run, RunContent, RunProperties, VerticalAlign,
};
pub use resource::{Image, ImageSource};
pub use table::{Table, TableCell, TableRow};
