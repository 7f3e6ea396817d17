//! Producer module for pullseq
//!
//! Provides the pull contract every source and stage implements, and the
//! source producers that sit at the bottom of a pipeline:
//! - SliceProducer (ordered in-memory collection, forward or reverse)
//! - Generator (pure function of a running counter and a repeat bound)
//! - IterProducer / Fallible (bridges from `std::iter::Iterator`)
//!
//! # Architecture
//!
//! A pipeline is a singly-linked pull chain. Terminal algorithms pull from the
//! outermost stage, which pulls from its upstream, down to a source.
//!
//! ```text
//! to_vec()
//!     ↓
//! Map
//!     └─→ Filter
//!             └─→ SliceProducer / Generator / Fallible
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Lazy Evaluation**: No stage holds more than the element in flight
//! 2. **Single Pass**: Cursors only move forward; there is no reset
//! 3. **Stable Exhaustion**: Once `next_value` returns None it keeps doing so
//! 4. **Transparent Failure**: Stages forward upstream status unchanged

use crate::{
    algorithm::{self, Drained},
    stage::{Filter, Map},
    util::Result,
};

/// Pull contract for a finite, ordered sequence of elements
///
/// # Lifecycle
///
/// A producer is built once, drained once, then dropped:
///
/// ```ignore
/// let mut producer = pullseq::from_slice(vec![1, 2, 3]);
/// while let Some(value) = producer.next_value() {
///     println!("{value}");
/// }
/// producer.status()?;
/// ```
///
/// # Error Handling
///
/// Failure is latched inside the producer and surfaced through `status()`.
/// Callers must only rely on an `Ok` status after `next_value` has returned
/// None; producers may defer detecting a failure until then.
pub trait Producer {
    type Item;

    /// Advance and fetch the next element
    ///
    /// Returns None once the producer is exhausted, and keeps returning None
    /// on every later call.
    fn next_value(&mut self) -> Option<Self::Item>;

    /// Failure accumulated during iteration, if any
    ///
    /// Default implementation never fails
    fn status(&self) -> Result<()> {
        Ok(())
    }

    /// Lazily apply `f` to every element
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        Map::new(self, f)
    }

    /// Lazily drop elements for which `predicate` is false
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Drain, calling `action` on every element
    fn for_each<F>(self, action: F) -> Result<()>
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        algorithm::for_each(self, action)
    }

    /// Drain, left-folding every element into `init`
    fn reduce<R, F>(self, init: R, combine: F) -> Drained<R>
    where
        Self: Sized,
        F: FnMut(R, Self::Item) -> R,
    {
        algorithm::reduce(self, init, combine)
    }

    /// Drain into a newly allocated `Vec`, in emission order
    fn to_vec(self) -> Drained<Vec<Self::Item>>
    where
        Self: Sized,
    {
        algorithm::to_vec(self)
    }

    /// Borrow the producer so it can be drained and inspected afterwards
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Switch to the split `advance` / `current` form of the contract
    fn cursor(self) -> Cursor<Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }

    /// Expose the producer as a fused `std::iter::Iterator`
    fn into_values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }
}

impl<P: Producer + ?Sized> Producer for &mut P {
    type Item = P::Item;

    #[inline]
    fn next_value(&mut self) -> Option<Self::Item> {
        (**self).next_value()
    }

    #[inline]
    fn status(&self) -> Result<()> {
        (**self).status()
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Item = P::Item;

    #[inline]
    fn next_value(&mut self) -> Option<Self::Item> {
        (**self).next_value()
    }

    #[inline]
    fn status(&self) -> Result<()> {
        (**self).status()
    }
}

mod adapter;
mod cursor;
mod generator;
mod slice_producer;

pub use adapter::{Fallible, IterProducer, Values, from_iter, from_results};
pub use cursor::Cursor;
pub use generator::{Generator, arithmetic, generate, step_sequence, unit_sequence};
pub use slice_producer::{SliceProducer, from_reverse_slice, from_slice};
