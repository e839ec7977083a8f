use std::cmp::{Ordering, PartialOrd};

/// The types that can be used as bounds of an interval.
///
/// Bounds are compared numerically.  Integers always compare, but floats
/// have NaN, which is not even equal to itself.  Such values are rejected
/// when an interval is created, so that sorting and merging never have to
/// deal with incomparable bounds.
///
/// You can use your own numeric types by implementing this trait:
/// ```
///     use interval_union::{Interval, Numeric};
///     #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
///     struct Meters(f32);
///     impl std::fmt::Display for Meters {
///         fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///             write!(f, "{}m", self.0)
///         }
///     }
///     impl Numeric for Meters {}
///     assert!(Interval::new(Meters(1.0), Meters(2.0)).is_ok());
///     assert!(Interval::new(Meters(f32::NAN), Meters(2.0)).is_err());
/// ```
pub trait Numeric:
    PartialOrd + Copy + ::core::fmt::Debug + ::core::fmt::Display
{
    /// Whether the value can be ordered relative to other values.
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}
impl Numeric for u128 {}
impl Numeric for usize {}
impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for i128 {}
impl Numeric for isize {}
impl Numeric for f32 {}
impl Numeric for f64 {}

#[cfg(feature = "decimal")]
impl Numeric for rust_decimal::Decimal {}

/// Compare two bounds.
/// Only valid for bounds that passed [`Numeric::is_comparable`], which is
/// the case for all bounds stored in an interval.
pub(crate) fn order<T: Numeric>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}

/// The larger of two bounds
pub(crate) fn max_bound<T: Numeric>(left: T, right: T) -> T {
    match order(&left, &right) {
        Ordering::Less => right,
        Ordering::Equal | Ordering::Greater => left,
    }
}
