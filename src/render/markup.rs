//! Nested markup rendering.

use crate::error::Result;
use crate::markup::{MarkupEvent, NestingTracker};

/// Concatenate the markup form of every event.
///
/// Fails with [`crate::Error::MalformedEventStream`] when a close does not
/// match the innermost open tag or tags are still open at the end.
pub fn render_markup<I>(events: I) -> Result<String>
where
    I: IntoIterator<Item = MarkupEvent>,
{
    let mut tracker = NestingTracker::new();
    let mut output = String::new();
    for event in events {
        tracker.track(&event)?;
        output.push_str(&event.to_html());
    }
    tracker.finish()?;
    Ok(output)
}
