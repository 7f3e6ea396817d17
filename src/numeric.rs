use std::{
    fmt,
    ops::{Add, Mul},
};

/// Arithmetic needed by the generator constructors.
///
/// Integer impls do their intermediate math in `i128` so that spans such as
/// `i8::MIN..=i8::MAX` or `0..=u64::MAX` never overflow the element type.
pub trait Step: Copy + PartialOrd + Add<Output = Self> + Mul<Output = Self> + fmt::Debug {
    fn one() -> Self;

    /// `start + step * index`, or None if it does not fit the element type
    fn checked_term(start: Self, step: Self, index: usize) -> Option<Self>;

    /// `start + step * index`
    ///
    /// Prerequisite: `checked_term` returns Some for the same arguments.
    fn term(start: Self, step: Self, index: usize) -> Self;

    /// Whether `self` can be used as a step magnitude
    ///
    /// Zero is never valid; float impls also reject NaN and infinities.
    fn is_valid_step(self) -> bool;

    /// Number of elements in the inclusive walk from `start` to `end`
    ///
    /// `floor(|end - start| / |step|) + 1`, or None if it does not fit in a
    /// `usize`. Prerequisite: `step.is_valid_step()`.
    fn count_between(start: Self, end: Self, step: Self) -> Option<usize>;

    /// `start + |step| * index`, or `start - |step| * index` when descending
    ///
    /// Prerequisite: the result lies between `start` and the walk's `end`.
    fn offset(start: Self, step: Self, index: usize, descending: bool) -> Self;
}

macro_rules! impl_step_int {
    ($($t:ty),* $(,)?) => {$(
        impl Step for $t {
            #[inline]
            fn one() -> Self {
                1
            }

            fn checked_term(start: Self, step: Self, index: usize) -> Option<Self> {
                let value = (step as i128)
                    .checked_mul(index as i128)?
                    .checked_add(start as i128)?;
                <$t>::try_from(value).ok()
            }

            #[inline]
            fn term(start: Self, step: Self, index: usize) -> Self {
                (start as i128 + step as i128 * index as i128) as $t
            }

            #[inline]
            fn is_valid_step(self) -> bool {
                self != 0
            }

            fn count_between(start: Self, end: Self, step: Self) -> Option<usize> {
                let span = (end as i128 - start as i128).unsigned_abs();
                let steps = span / (step as i128).unsigned_abs();
                usize::try_from(steps).ok()?.checked_add(1)
            }

            #[inline]
            fn offset(start: Self, step: Self, index: usize, descending: bool) -> Self {
                let delta = (step as i128).abs() * index as i128;
                let value = if descending {
                    start as i128 - delta
                } else {
                    start as i128 + delta
                };
                value as $t
            }
        }
    )*};
}

macro_rules! impl_step_float {
    ($($t:ty),* $(,)?) => {$(
        impl Step for $t {
            #[inline]
            fn one() -> Self {
                1.0
            }

            fn checked_term(start: Self, step: Self, index: usize) -> Option<Self> {
                let value = Self::term(start, step, index);
                value.is_finite().then_some(value)
            }

            #[inline]
            fn term(start: Self, step: Self, index: usize) -> Self {
                start + step * index as $t
            }

            #[inline]
            fn is_valid_step(self) -> bool {
                self.is_finite() && self != 0.0
            }

            fn count_between(start: Self, end: Self, step: Self) -> Option<usize> {
                let steps = ((end - start).abs() / step.abs()).floor();
                // NaN when a bound is infinite
                if steps.is_nan() || steps >= usize::MAX as $t {
                    return None;
                }
                (steps as usize).checked_add(1)
            }

            #[inline]
            fn offset(start: Self, step: Self, index: usize, descending: bool) -> Self {
                let delta = step.abs() * index as $t;
                if descending { start - delta } else { start + delta }
            }
        }
    )*};
}

impl_step_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_step_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_between_int() {
        assert_eq!(i32::count_between(1, 5, 1), Some(5));
        assert_eq!(i32::count_between(5, 1, 1), Some(5));
        assert_eq!(i32::count_between(1, 1, 3), Some(1));
        assert_eq!(i32::count_between(0, 10, 3), Some(4));
        assert_eq!(i32::count_between(0, 10, -3), Some(4));
    }

    #[test]
    fn test_count_between_full_range() {
        assert_eq!(i8::count_between(i8::MIN, i8::MAX, 1), Some(256));
        assert_eq!(u8::count_between(u8::MAX, 0, 1), Some(256));
    }

    #[test]
    fn test_count_between_overflow() {
        assert_eq!(u64::count_between(0, u64::MAX, 1), None);
        assert_eq!(f64::count_between(0.0, 1e300, 1.0), None);
        assert_eq!(f64::count_between(0.0, f64::INFINITY, 1.0), None);
    }

    #[test]
    fn test_count_between_float() {
        assert_eq!(f64::count_between(0.0, 1.0, 0.25), Some(5));
        assert_eq!(f64::count_between(0.0, 1.0, 0.3), Some(4));
        assert_eq!(f64::count_between(1.0, 0.0, -0.5), Some(3));
    }

    #[test]
    fn test_offset_unsigned_descending() {
        assert_eq!(u8::offset(5, 2, 2, true), 1);
        assert_eq!(u8::offset(250, 5, 1, false), 255);
        assert_eq!(i8::offset(i8::MAX, 1, 255, true), i8::MIN);
    }

    #[test]
    fn test_checked_term_int() {
        assert_eq!(u8::checked_term(0, 1, 255), Some(255));
        assert_eq!(u8::checked_term(0, 1, 256), None);
        assert_eq!(u8::checked_term(200, 100, 1), None);
        assert_eq!(u8::checked_term(200, 0, usize::MAX), Some(200));
        assert_eq!(i8::checked_term(i8::MAX, -1, 255), Some(i8::MIN));
        assert_eq!(i8::checked_term(i8::MIN, -1, 1), None);
        assert_eq!(u32::checked_term(10, u32::MAX, usize::MAX), None);
    }

    #[test]
    fn test_term_wide_index() {
        // The index does not fit in i8, the result does
        assert_eq!(i8::term(i8::MAX, -1, 255), i8::MIN);
        assert_eq!(u8::term(7, 0, 1000), 7);
    }

    #[test]
    fn test_checked_term_float() {
        assert_eq!(f64::checked_term(0.5, 0.25, 2), Some(1.0));
        assert_eq!(f64::checked_term(f64::MAX, f64::MAX, 1), None);
        assert_eq!(f32::checked_term(1.0, 0.0, usize::MAX), Some(1.0));
    }

    #[test]
    fn test_valid_step() {
        assert!(!0i32.is_valid_step());
        assert!((-2i32).is_valid_step());
        assert!(!0.0f64.is_valid_step());
        assert!(!f64::NAN.is_valid_step());
        assert!(!f64::INFINITY.is_valid_step());
        assert!(0.5f32.is_valid_step());
    }
}
