//! Merging of adjacent same-style runs.
//!
//! Source documents often split one bold run into several, e.g.
//! `<strong>A</strong><strong>B</strong>` around a spell-check boundary.
//! The merger splices such runs back together without touching visible
//! text or its order.

use std::collections::VecDeque;
use std::iter::Peekable;

use super::filter::is_invisible;
use super::MarkupEvent;

/// Merge adjacent style spans within one scope of sibling events.
pub fn merge_style_runs<I>(events: I) -> StyleRunMerger<I::IntoIter>
where
    I: IntoIterator<Item = MarkupEvent>,
{
    StyleRunMerger::new(events.into_iter())
}

/// One-lookahead state machine behind [`merge_style_runs`].
///
/// When a style closes and the next item reopens the same style, both are
/// dropped. A single invisible item (whitespace or a break) between the two
/// is pulled inside the span; if no reopen follows it, the close is emitted
/// right after it.
pub struct StyleRunMerger<I: Iterator<Item = MarkupEvent>> {
    events: Peekable<I>,
    current_open_style: Option<String>,
    pending: VecDeque<MarkupEvent>,
}

impl<I: Iterator<Item = MarkupEvent>> StyleRunMerger<I> {
    /// Create a merger over `events`.
    pub fn new(events: I) -> Self {
        Self {
            events: events.peekable(),
            current_open_style: None,
            pending: VecDeque::new(),
        }
    }

    /// Name of the style span currently open, if any.
    pub fn current_open_style(&self) -> Option<&str> {
        self.current_open_style.as_deref()
    }

    fn next_reopens(&mut self) -> bool {
        match (&self.current_open_style, self.events.peek()) {
            (Some(style), Some(next)) => next.is_open_tag(style),
            _ => false,
        }
    }
}

impl<I: Iterator<Item = MarkupEvent>> Iterator for StyleRunMerger<I> {
    type Item = MarkupEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        loop {
            let event = self.events.next()?;
            if !event.is_style() {
                return Some(event);
            }

            if let MarkupEvent::Open(ref tag) = event {
                self.current_open_style = Some(tag.name().to_string());
                return Some(event);
            }

            if self.next_reopens() {
                self.events.next();
                log::debug!("merged adjacent {:?} runs", self.current_open_style);
                continue;
            }

            let gap_is_invisible = self.events.peek().is_some_and(is_invisible);
            if gap_is_invisible {
                let invisible = self.events.next()?;
                if self.next_reopens() {
                    self.events.next();
                    log::debug!(
                        "merged {:?} runs across an invisible gap",
                        self.current_open_style
                    );
                } else {
                    self.pending.push_back(event);
                    self.current_open_style = None;
                }
                return Some(invisible);
            }

            self.current_open_style = None;
            return Some(event);
        }
    }
}
