//! Markup event model and the lazy algorithms over event sequences.
//!
//! Everything here works on pull-based iterators consumed exactly once.
//! Lookahead is bounded: the emptiness filter buffers only the whitespace
//! prefix it has to scan, and the style merger peeks one item (two across
//! an invisible gap).

mod apply;
mod event;
pub mod filter;
mod merge;
mod nesting;

pub use apply::Apply;
pub use event::{names, Attributes, MarkupEvent, Tag};
pub use filter::{filter_if_nonempty, is_invisible, is_only_whitespace, Replay};
pub use merge::{merge_style_runs, StyleRunMerger};
pub use nesting::NestingTracker;

/// Boxed lazy event sequence, the currency of the exporter.
pub type Events<'a> = Box<dyn Iterator<Item = MarkupEvent> + 'a>;
