//! Error types for undocx library.

use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A close event without a matching open, a close for the wrong tag,
    /// or tags still open when the stream ends.
    #[error("Malformed event stream: {0}")]
    MalformedEventStream(String),

    /// Metadata extraction needs more leading paragraphs than the document has.
    #[error("Metadata extraction needs {required} paragraphs but the document has {available}")]
    Underflow {
        /// Number of paragraphs the template consumes
        required: usize,
        /// Number of paragraphs that were available
        available: usize,
    },

    /// The location/date paragraph did not split into exactly two parts.
    #[error("Cannot split location and date: {0:?}")]
    SplitFormat(String),

    /// Error during rendering (JSON serialization, cleanup setup).
    #[error("Rendering error: {0}")]
    Render(String),
}
