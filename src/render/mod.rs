//! Rendering module: flat event streams to markup, transfer objects and text.

mod cleanup;
mod json;
mod markup;
mod options;
mod reduce;
mod text;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use json::{to_json, JsonFormat};
pub use markup::render_markup;
pub use options::DtoOptions;
pub use reduce::{reduce_to_document, reduce_to_dto};
pub use text::to_text;
