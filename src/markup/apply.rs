//! Wrapping event sequences in a tag.

use super::filter::{filter_if_nonempty, Replay};
use super::{MarkupEvent, Tag};

enum State<I: Iterator<Item = MarkupEvent>> {
    Pending {
        tag: Tag,
        content: I,
        allow_empty: bool,
    },
    Content {
        content: Replay<I>,
        close: Option<MarkupEvent>,
    },
    Closing(MarkupEvent),
    Done,
}

/// Lazy sequence produced by [`Tag::apply`].
///
/// Nothing is pulled from the content until the first item is requested.
pub struct Apply<I: Iterator<Item = MarkupEvent>> {
    state: State<I>,
}

impl Tag {
    /// Wrap `content` with this tag's open and close events.
    ///
    /// Self-closing tags emit no close event. With `allow_empty` false the
    /// content is checked first, and the whole wrapper (tag and content)
    /// yields nothing when that content is whitespace only.
    pub fn apply<I>(self, content: I, allow_empty: bool) -> Apply<I::IntoIter>
    where
        I: IntoIterator<Item = MarkupEvent>,
    {
        Apply {
            state: State::Pending {
                tag: self,
                content: content.into_iter(),
                allow_empty,
            },
        }
    }
}

impl<I: Iterator<Item = MarkupEvent>> Iterator for Apply<I> {
    type Item = MarkupEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Pending {
                    tag,
                    content,
                    allow_empty,
                } => {
                    let content = if allow_empty {
                        Vec::new().into_iter().chain(content)
                    } else {
                        match filter_if_nonempty(content) {
                            Some(content) => content,
                            None => return None,
                        }
                    };
                    let close = (!tag.is_self_closing()).then(|| tag.close());
                    self.state = State::Content { content, close };
                    return Some(MarkupEvent::Open(tag));
                }
                State::Content { mut content, close } => match content.next() {
                    Some(event) => {
                        self.state = State::Content { content, close };
                        return Some(event);
                    }
                    None => {
                        if let Some(close) = close {
                            self.state = State::Closing(close);
                        }
                    }
                },
                State::Closing(close) => return Some(close),
                State::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MarkupEvent {
        MarkupEvent::text(s)
    }

    #[test]
    fn test_apply_wraps_content() {
        let events: Vec<_> = Tag::new("p").apply(vec![text("hi")], true).collect();
        assert_eq!(
            events,
            vec![Tag::new("p").open(), text("hi"), MarkupEvent::close("p")]
        );
    }

    #[test]
    fn test_apply_allows_empty_by_flag() {
        let events: Vec<_> = Tag::new("tr").apply(Vec::new(), true).collect();
        assert_eq!(events, vec![Tag::new("tr").open(), MarkupEvent::close("tr")]);
    }

    #[test]
    fn test_apply_suppresses_empty() {
        let events: Vec<_> = Tag::new("a")
            .with_attr("href", "#x")
            .apply(vec![text("  "), text("\n")], false)
            .collect();
        assert!(events.is_empty());
    }

    #[test]
    fn test_self_closing_never_closes() {
        let hr = Tag::new("hr").self_closing();
        let events: Vec<_> = hr.clone().apply(vec![text("x")], false).collect();
        assert_eq!(events, vec![hr.open(), text("x")]);

        let events: Vec<_> = hr.clone().apply(Vec::new(), true).collect();
        assert_eq!(events, vec![hr.open()]);
    }

    #[test]
    fn test_apply_is_lazy() {
        let mut pulled = 0;
        {
            let source = (0..3).map(|_| {
                pulled += 1;
                text("x")
            });
            let mut applied = Tag::new("li").apply(source, true);
            assert!(applied.next().is_some());
        }
        assert_eq!(pulled, 0);
    }

    #[test]
    fn test_apply_nested_depth() {
        let inner = Tag::new("em").apply(vec![text("a")], false);
        let outer = Tag::new("p").apply(inner, false);
        let mut depth = 0i32;
        let mut returns_to_zero = 0;
        for event in outer {
            match event {
                MarkupEvent::Open(_) => depth += 1,
                MarkupEvent::Close { .. } => {
                    depth -= 1;
                    if depth == 0 {
                        returns_to_zero += 1;
                    }
                }
                MarkupEvent::Text(_) => {}
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
        assert_eq!(returns_to_zero, 1);
    }
}
