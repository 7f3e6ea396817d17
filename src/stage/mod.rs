//! Transform stages
//!
//! Each stage owns exactly one upstream producer and applies a caller
//! supplied function lazily, one element per pull. A stage never buffers
//! beyond the element in flight and forwards its upstream's status verbatim.

pub mod filter;
pub mod map;

pub use filter::Filter;
pub use map::Map;

use crate::producer::Producer;

/// Lazily apply `f` to every element of `upstream`
pub fn map<P, R, F>(upstream: P, f: F) -> Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> R,
{
    Map::new(upstream, f)
}

/// Lazily keep the elements of `upstream` that satisfy `predicate`
pub fn filter<P, F>(upstream: P, predicate: F) -> Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    Filter::new(upstream, predicate)
}
