use std::fmt;

use crate::{producer::Producer, util::Result};

/// Stage that drops upstream elements failing a predicate
///
/// A single pull may drain the upstream entirely when nothing matches; that
/// is an empty result, not a failure.
pub struct Filter<P, F> {
    upstream: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(upstream: P, predicate: F) -> Self {
        Filter {
            upstream,
            predicate,
        }
    }

    pub fn into_inner(self) -> P {
        self.upstream
    }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next_value(&mut self) -> Option<P::Item> {
        while let Some(value) = self.upstream.next_value() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }

    #[inline]
    fn status(&self) -> Result<()> {
        self.upstream.status()
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Filter<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}
