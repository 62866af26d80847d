//! Cost domain for edge weights and cumulative path costs.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

/// A non-negative, totally ordered path cost.
///
/// Implemented for every primitive integer type and for `f32`/`f64`. Floats
/// are ordered with `total_cmp`, so a `NaN` cost sorts after every finite
/// cost instead of poisoning the frontier.
///
/// Negative costs are accepted by the type system but void the optimality
/// guarantee of the search.
///
/// Path costs are accumulated with [`add_cost`](Cost::add_cost), which
/// saturates at the type's maximum for integers. A path whose true cost does
/// not fit in `Self` reports `Self::MAX` instead of overflowing.
pub trait Cost: Copy + Debug + Add<Output = Self> {
    /// The cost of the empty path.
    fn zero() -> Self;

    /// Extends a path cost by one edge without overflowing.
    fn add_cost(self, edge: Self) -> Self;

    /// Total order used by the frontier.
    fn cmp_cost(&self, other: &Self) -> Ordering;
}

macro_rules! impl_cost_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cost for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn add_cost(self, edge: Self) -> Self {
                    self.saturating_add(edge)
                }

                #[inline]
                fn cmp_cost(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_cost_for_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cost for $ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn add_cost(self, edge: Self) -> Self {
                    self + edge
                }

                #[inline]
                fn cmp_cost(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_cost_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_cost_for_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_costs_saturate() {
        assert_eq!(250u8.add_cost(10), u8::MAX);
        assert_eq!(i16::MAX.add_cost(1), i16::MAX);
        assert_eq!(3u32.add_cost(4), 7);
    }

    #[test]
    fn test_float_costs_add_and_order() {
        assert_eq!(0.5f64.add_cost(0.25), 0.75);
        assert_eq!(1.0f32.cmp_cost(&f32::NAN), Ordering::Less);
        assert_eq!(f64::zero(), 0.0);
    }
}
