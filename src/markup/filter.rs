//! Emptiness and whitespace classification.

use std::iter::Chain;
use std::vec;

use super::MarkupEvent;

/// A sequence with its scanned prefix reattached in front of the tail.
pub type Replay<I> = Chain<vec::IntoIter<MarkupEvent>, I>;

/// Check if the event is a text atom with nothing but whitespace.
pub fn is_only_whitespace(event: &MarkupEvent) -> bool {
    matches!(event, MarkupEvent::Text(text) if text.trim().is_empty())
}

/// Check if the event carries no visible content: whitespace text or a break.
pub fn is_invisible(event: &MarkupEvent) -> bool {
    match event {
        MarkupEvent::Text(text) => text.trim().is_empty(),
        _ => event.is_break(),
    }
}

/// Check if the event counts as significant content.
///
/// Tags count only when they allow whitespace (breaks, tabs, images);
/// text counts when it has a non-whitespace character.
pub fn is_significant(event: &MarkupEvent) -> bool {
    match event {
        MarkupEvent::Text(text) => !text.trim().is_empty(),
        _ => event.allows_whitespace(),
    }
}

/// Return the sequence if it holds any significant content.
///
/// Items are pulled until the first significant one; those are replayed
/// ahead of the untouched tail. An all-whitespace input is drained and
/// `None` is returned.
pub fn filter_if_nonempty<I>(mut events: I) -> Option<Replay<I>>
where
    I: Iterator<Item = MarkupEvent>,
{
    let mut queue = Vec::new();
    for event in events.by_ref() {
        let significant = is_significant(&event);
        queue.push(event);
        if significant {
            return Some(queue.into_iter().chain(events));
        }
    }
    None
}

/// Split off the leading whitespace-only text atoms.
///
/// Returns the whitespace prefix and, if anything else follows, the rest of
/// the sequence starting with the first non-whitespace item.
pub fn split_leading_whitespace<I>(mut events: I) -> (Vec<MarkupEvent>, Option<Replay<I>>)
where
    I: Iterator<Item = MarkupEvent>,
{
    let mut leading = Vec::new();
    for event in events.by_ref() {
        if is_only_whitespace(&event) {
            leading.push(event);
        } else {
            return (leading, Some(vec![event].into_iter().chain(events)));
        }
    }
    (leading, None)
}
