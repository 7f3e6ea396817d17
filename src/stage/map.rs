use std::fmt;

use crate::{producer::Producer, util::Result};

/// Stage that applies a function to every upstream element
///
/// The function is called once per pulled element and never after the
/// upstream has exhausted.
pub struct Map<P, F> {
    upstream: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(upstream: P, f: F) -> Self {
        Map { upstream, f }
    }

    pub fn into_inner(self) -> P {
        self.upstream
    }
}

impl<P, R, F> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next_value(&mut self) -> Option<R> {
        self.upstream.next_value().map(&mut self.f)
    }

    #[inline]
    fn status(&self) -> Result<()> {
        self.upstream.status()
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Map<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}
