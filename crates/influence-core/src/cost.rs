//! The [`Cost`] trait: numeric cell values stored in an influence field.
//!
//! Integer costs are used by the cardinal and uniform 8-way metrics, real
//! costs by the Euclidean metric. Integer arithmetic saturates so that
//! weighting a large sentinel never wraps around and flips its sign.

use std::fmt;

/// A numeric cell value.
///
/// The sign and magnitude of a cost are handled separately: relaxation
/// shrinks the magnitude and keeps the sign, see [`magnitude`](Self::magnitude)
/// and [`with_sign_of`](Self::with_sign_of).
pub trait Cost: Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;
    /// One unit step.
    const ONE: Self;
    /// Whether values of this type are whole numbers.
    const INTEGRAL: bool;
    /// Default impassable marker.
    const DEFAULT_BAD: Self;
    /// Default goal marker.
    const DEFAULT_GOAL: Self;
    /// Default unreached / floor marker.
    const DEFAULT_UNREACHED: Self;

    /// `self + rhs`, saturating for integers.
    fn plus(self, rhs: Self) -> Self;

    /// `self * rhs`, saturating for integers.
    fn times(self, rhs: Self) -> Self;

    /// `-self`, saturating for integers.
    fn negate(self) -> Self;

    /// Absolute value.
    fn magnitude(self) -> Self;

    /// Whether the value is strictly below zero.
    fn is_negative(self) -> bool;

    /// Lossy conversion from `f64` (rounds for integers).
    fn from_f64(v: f64) -> Self;

    /// Lossy conversion to `f64`.
    fn to_f64(self) -> f64;

    /// Whether the value is a usable number (rejects NaN).
    fn is_valid(self) -> bool;

    /// Give `self` (a magnitude) the sign of `sign`.
    #[inline]
    fn with_sign_of(self, sign: Self) -> Self {
        if sign.is_negative() {
            self.negate()
        } else {
            self
        }
    }

    /// The smaller of two costs; `self` wins ties.
    #[inline]
    fn lesser(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

macro_rules! impl_int_cost {
    ($($t:ty => $bad:expr, $unreached:expr);* $(;)?) => {$(
        impl Cost for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const INTEGRAL: bool = true;
            const DEFAULT_BAD: Self = $bad;
            const DEFAULT_GOAL: Self = 0;
            const DEFAULT_UNREACHED: Self = $unreached;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            #[inline]
            fn times(self, rhs: Self) -> Self {
                self.saturating_mul(rhs)
            }

            #[inline]
            fn negate(self) -> Self {
                self.saturating_neg()
            }

            #[inline]
            fn magnitude(self) -> Self {
                self.saturating_abs()
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v.round() as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_valid(self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! impl_float_cost {
    ($($t:ty => $bad:expr, $unreached:expr);* $(;)?) => {$(
        impl Cost for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const INTEGRAL: bool = false;
            const DEFAULT_BAD: Self = $bad;
            const DEFAULT_GOAL: Self = 0.0;
            const DEFAULT_UNREACHED: Self = $unreached;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn times(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn negate(self) -> Self {
                -self
            }

            #[inline]
            fn magnitude(self) -> Self {
                self.abs()
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0.0
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_valid(self) -> bool {
                !self.is_nan()
            }
        }
    )*};
}

// Sentinels stay inside the range where the type still counts in whole
// steps, so `unreached + 2` is representable and distinct.
impl_int_cost! {
    i32 => -(1 << 30), 1 << 29;
    i64 => -(1 << 53), 1 << 52;
}

impl_float_cost! {
    f32 => -16_777_216.0, 8_388_608.0;
    f64 => -9_007_199_254_740_992.0, 4_503_599_627_370_496.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_survives_magnitude_round_trip() {
        let v: i64 = -7;
        let m = v.magnitude();
        assert_eq!(m, 7);
        assert_eq!(m.with_sign_of(v), -7);
        assert_eq!(3i64.with_sign_of(5), 3);
        assert_eq!(2.5f64.with_sign_of(-1.0), -2.5);
    }

    #[test]
    fn integer_arithmetic_saturates() {
        assert_eq!(i32::MAX.plus(1), i32::MAX);
        assert_eq!(i64::DEFAULT_UNREACHED.times(1 << 20), i64::MAX);
        assert_eq!(i64::MIN.magnitude(), i64::MAX);
        assert_eq!(i64::MIN.negate(), i64::MAX);
    }

    #[test]
    fn unreached_leaves_headroom() {
        assert!(i32::DEFAULT_UNREACHED.plus(2) > i32::DEFAULT_UNREACHED);
        assert!(i64::DEFAULT_UNREACHED.plus(2) > i64::DEFAULT_UNREACHED);
        assert!(f32::DEFAULT_UNREACHED.plus(2.0) > f32::DEFAULT_UNREACHED);
        assert!(f64::DEFAULT_UNREACHED.plus(2.0) > f64::DEFAULT_UNREACHED);
    }

    #[test]
    fn float_validity() {
        assert!(1.0f64.is_valid());
        assert!(f64::INFINITY.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(0i32.is_valid());
    }

    #[test]
    fn conversions() {
        assert_eq!(i64::from_f64(std::f64::consts::SQRT_2), 1);
        assert_eq!(f64::from_f64(1.5), 1.5);
        assert_eq!(3i32.to_f64(), 3.0);
        assert_eq!(4i64.lesser(2), 2);
    }
}
