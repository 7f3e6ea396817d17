use std::fmt;

use tracing::{debug, warn};

use crate::{
    numeric::Step,
    producer::Producer,
    util::{Result, Status},
};

/// Producer driven by a pure function of a running counter
///
/// Calls `generate(count, repeat)` for `count` in `0..repeat`, then exhausts.
/// The arithmetic constructors below are all built on top of it.
pub struct Generator<F> {
    count: usize,
    repeat: usize,
    generate: F,
}

impl<F> Generator<F> {
    pub fn new(repeat: usize, generate: F) -> Self {
        Generator {
            count: 0,
            repeat,
            generate,
        }
    }

    /// Elements produced so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn repeat(&self) -> usize {
        self.repeat
    }

    pub fn remaining(&self) -> usize {
        self.repeat - self.count
    }
}

impl<T, F> Producer for Generator<F>
where
    F: FnMut(usize, usize) -> T,
{
    type Item = T;

    fn next_value(&mut self) -> Option<T> {
        if self.count >= self.repeat {
            return None;
        }
        let value = (self.generate)(self.count, self.repeat);
        self.count += 1;
        Some(value)
    }
}

impl<F> fmt::Debug for Generator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("count", &self.count)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}

/// Produce `generate(count, repeat)` for every count in `0..repeat`
pub fn generate<T, F>(repeat: usize, f: F) -> Generator<F>
where
    F: FnMut(usize, usize) -> T,
{
    Generator::new(repeat, f)
}

/// Produce `start + step * i` for `i` in `0..repeat`
///
/// A zero step is allowed and yields `repeat` copies of `start`.
///
/// # Errors
///
/// `InvalidArgument` if the last element, `start + step * (repeat - 1)`, does
/// not fit the element type (or is not finite, for floats). The elements are
/// monotone, so every earlier one fits as well.
pub fn arithmetic<T: Step>(
    start: T,
    repeat: usize,
    step: T,
) -> Result<Generator<impl FnMut(usize, usize) -> T>> {
    if let Some(last) = repeat.checked_sub(1)
        && T::checked_term(start, step, last).is_none()
    {
        warn!(?start, ?step, repeat, "rejected arithmetic sequence that overflows");
        return Err(Status::invalid_argument(format!(
            "arithmetic sequence from {start:?} by {step:?} overflows before {repeat} elements"
        )));
    }

    Ok(Generator::new(repeat, move |count, _| {
        T::term(start, step, count)
    }))
}

/// Produce the inclusive walk from `start` to `end`
///
/// The sign of `step` is ignored: the walk always heads from `start` toward
/// `end`. Only the magnitude decides the spacing, and the element count is
/// `floor(|end - start| / |step|) + 1`, so `end` itself is produced only when
/// the span is a multiple of the step.
///
/// # Errors
///
/// `InvalidArgument` if `step` is zero (or not finite, for floats), or if the
/// walk has more elements than fit in a `usize`.
pub fn step_sequence<T: Step>(
    start: T,
    end: T,
    step: T,
) -> Result<Generator<impl FnMut(usize, usize) -> T>> {
    if !step.is_valid_step() {
        warn!(?start, ?end, ?step, "rejected step sequence with unusable step");
        return Err(Status::invalid_argument(format!(
            "step sequence from {start:?} to {end:?} needs a non-zero finite step, got {step:?}"
        )));
    }

    let Some(repeat) = T::count_between(start, end, step) else {
        warn!(?start, ?end, ?step, "rejected step sequence with too many elements");
        return Err(Status::invalid_argument(format!(
            "step sequence from {start:?} to {end:?} by {step:?} has too many elements"
        )));
    };

    let descending = start > end;
    debug!(?start, ?end, ?step, descending, repeat, "built step sequence");

    Ok(Generator::new(repeat, move |count, _| {
        T::offset(start, step, count, descending)
    }))
}

/// `step_sequence` with a step of one
pub fn unit_sequence<T: Step>(
    start: T,
    end: T,
) -> Result<Generator<impl FnMut(usize, usize) -> T>> {
    step_sequence(start, end, T::one())
}
