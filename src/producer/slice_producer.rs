use std::borrow::Cow;

use crate::producer::Producer;

/// Producer over an ordered, already materialized collection
///
/// Backed by a `Cow` so callers can hand over an owned `Vec<T>` or lend a
/// `&[T]`. Elements are cloned out and never mutated.
///
/// # Implementation Notes
///
/// `position` counts elements already produced and only ever grows, up to
/// `values.len()`. The physical index is derived from it, so forward and
/// reverse traversal share one cursor.
#[derive(Debug, Clone)]
pub struct SliceProducer<'a, T: Clone> {
    values: Cow<'a, [T]>,
    position: usize,
    reverse: bool,
}

impl<'a, T: Clone> SliceProducer<'a, T> {
    pub fn new(values: impl Into<Cow<'a, [T]>>, reverse: bool) -> Self {
        SliceProducer {
            values: values.into(),
            position: 0,
            reverse,
        }
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of elements produced so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.values.len() - self.position
    }
}

impl<T: Clone> Producer for SliceProducer<'_, T> {
    type Item = T;

    fn next_value(&mut self) -> Option<T> {
        let len = self.values.len();
        if self.position >= len {
            return None;
        }

        let index = if self.reverse {
            len - 1 - self.position
        } else {
            self.position
        };
        self.position += 1;
        Some(self.values[index].clone())
    }
}

/// Produce the elements of `values` front to back
pub fn from_slice<'a, T: Clone>(values: impl Into<Cow<'a, [T]>>) -> SliceProducer<'a, T> {
    SliceProducer::new(values, false)
}

/// Produce the elements of `values` back to front
pub fn from_reverse_slice<'a, T: Clone>(values: impl Into<Cow<'a, [T]>>) -> SliceProducer<'a, T> {
    SliceProducer::new(values, true)
}
