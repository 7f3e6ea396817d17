//! Terminal algorithms
//!
//! Each one drains a producer chain exactly once, to exhaustion, and pairs
//! its aggregate with the chain's final status. None of them short-circuit.

use tracing::debug;

use crate::{producer::Producer, util::Result};

/// Aggregate produced by draining a chain, paired with the chain's status
///
/// A failed upstream still yields whatever was aggregated before the failure
/// was latched; `status` tells the two cases apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Drained<T> {
    pub value: T,
    pub status: Result<()>,
}

impl<T> Drained<T> {
    pub fn new(value: T, status: Result<()>) -> Self {
        Drained { value, status }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Discard the partial aggregate if the chain failed
    pub fn into_result(self) -> Result<T> {
        self.status.map(|()| self.value)
    }
}

fn finish(algorithm: &'static str, elements: usize, status: &Result<()>) {
    debug!(algorithm, elements, failed = status.is_err(), "drained producer");
}

/// Call `action` on every element, in emission order
pub fn for_each<P, F>(mut producer: P, mut action: F) -> Result<()>
where
    P: Producer,
    F: FnMut(P::Item),
{
    let mut elements = 0usize;
    while let Some(value) = producer.next_value() {
        action(value);
        elements += 1;
    }

    let status = producer.status();
    finish("for_each", elements, &status);
    status
}

/// Left-fold every element into `init` with `combine`
pub fn reduce<P, R, F>(mut producer: P, init: R, mut combine: F) -> Drained<R>
where
    P: Producer,
    F: FnMut(R, P::Item) -> R,
{
    let mut acc = init;
    let mut elements = 0usize;
    while let Some(value) = producer.next_value() {
        acc = combine(acc, value);
        elements += 1;
    }

    let status = producer.status();
    finish("reduce", elements, &status);
    Drained::new(acc, status)
}

/// Collect every element, in emission order, into a new `Vec`
pub fn to_vec<P: Producer>(mut producer: P) -> Drained<Vec<P::Item>> {
    let mut values = Vec::new();
    while let Some(value) = producer.next_value() {
        values.push(value);
    }

    let status = producer.status();
    finish("to_vec", values.len(), &status);
    Drained::new(values, status)
}
