//! Well-nestedness checks for event streams.

use crate::error::{Error, Result};

use super::MarkupEvent;

/// Stack of currently open tags.
#[derive(Debug, Default)]
pub struct NestingTracker {
    open: Vec<String>,
}

impl NestingTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one event, failing on a close that does not match.
    pub fn track(&mut self, event: &MarkupEvent) -> Result<()> {
        match event {
            MarkupEvent::Text(_) => Ok(()),
            MarkupEvent::Open(tag) => {
                if !tag.is_self_closing() {
                    self.open.push(tag.name().to_string());
                }
                Ok(())
            }
            MarkupEvent::Close { name } => match self.open.pop() {
                Some(open) if open == *name => Ok(()),
                Some(open) => Err(Error::MalformedEventStream(format!(
                    "</{}> closes <{}>",
                    name, open
                ))),
                None => Err(Error::MalformedEventStream(format!(
                    "</{}> without a matching open tag",
                    name
                ))),
            },
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Check that every opened tag was closed.
    pub fn finish(self) -> Result<()> {
        if self.open.is_empty() {
            Ok(())
        } else {
            Err(Error::MalformedEventStream(format!(
                "unclosed tags at end of stream: {}",
                self.open
                    .iter()
                    .map(|name| format!("<{}>", name))
                    .collect::<Vec<_>>()
                    .join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Tag;

    #[test]
    fn test_balanced_stream() {
        let mut tracker = NestingTracker::new();
        let events = [
            Tag::new("p").open(),
            Tag::new("br").self_closing().open(),
            MarkupEvent::text("x"),
            MarkupEvent::close("p"),
        ];
        for event in &events {
            tracker.track(event).unwrap();
        }
        assert_eq!(tracker.depth(), 0);
        assert!(tracker.finish().is_ok());
    }

    #[test]
    fn test_unmatched_close() {
        let mut tracker = NestingTracker::new();
        let err = tracker.track(&MarkupEvent::close("p")).unwrap_err();
        assert!(matches!(err, Error::MalformedEventStream(_)));
    }

    #[test]
    fn test_mismatched_close() {
        let mut tracker = NestingTracker::new();
        tracker.track(&Tag::new("p").open()).unwrap();
        assert!(tracker.track(&MarkupEvent::close("em")).is_err());
    }

    #[test]
    fn test_unclosed_at_end() {
        let mut tracker = NestingTracker::new();
        tracker.track(&Tag::new("p").open()).unwrap();
        tracker.track(&Tag::new("em").open()).unwrap();
        let err = tracker.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed event stream: unclosed tags at end of stream: <p>, <em>"
        );
    }
}
