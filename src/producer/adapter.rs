use std::iter::{Fuse, FusedIterator};

use tracing::trace;

use crate::{
    producer::Producer,
    util::{Result, Status},
};

/// Producer over any `std::iter::Iterator`
///
/// The iterator is fused so exhaustion stays stable even if the wrapped
/// iterator would resume. Never fails.
#[derive(Debug, Clone)]
pub struct IterProducer<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IterProducer<I> {
    pub fn new(iter: I) -> Self {
        IterProducer { iter: iter.fuse() }
    }
}

impl<I: Iterator> Producer for IterProducer<I> {
    type Item = I::Item;

    #[inline]
    fn next_value(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

pub fn from_iter<I: IntoIterator>(iter: I) -> IterProducer<I::IntoIter> {
    IterProducer::new(iter.into_iter())
}

/// Producer over an iterator of `Result`s
///
/// Yields every `Ok` element in order. The first `Err` is latched as the
/// producer's status and ends the sequence: nothing after it is pulled from
/// the wrapped iterator.
#[derive(Debug)]
pub struct Fallible<I> {
    iter: I,
    status: Option<Status>,
    done: bool,
}

impl<T, I> Fallible<I>
where
    I: Iterator<Item = Result<T>>,
{
    pub fn new(iter: I) -> Self {
        Fallible {
            iter,
            status: None,
            done: false,
        }
    }
}

impl<T, I> Producer for Fallible<I>
where
    I: Iterator<Item = Result<T>>,
{
    type Item = T;

    fn next_value(&mut self) -> Option<T> {
        if self.done {
            return None;
        }

        match self.iter.next() {
            Some(Ok(value)) => Some(value),
            Some(Err(status)) => {
                trace!(%status, "producer latched failure");
                self.status = Some(status);
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn status(&self) -> Result<()> {
        match &self.status {
            Some(status) => Err(status.clone()),
            None => Ok(()),
        }
    }
}

pub fn from_results<T, I>(iter: I) -> Fallible<I::IntoIter>
where
    I: IntoIterator<Item = Result<T>>,
{
    Fallible::new(iter.into_iter())
}

/// A producer viewed as a `std::iter::Iterator`
///
/// The producer's status is still reachable through `status()` once the
/// iterator returns None.
#[derive(Debug)]
pub struct Values<P> {
    producer: P,
}

impl<P: Producer> Values<P> {
    pub fn new(producer: P) -> Self {
        Values { producer }
    }

    pub fn status(&self) -> Result<()> {
        self.producer.status()
    }

    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P: Producer> Iterator for Values<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.producer.next_value()
    }
}

// Exhaustion is stable for every producer
impl<P: Producer> FusedIterator for Values<P> {}
