use crate::bounds::{max_bound, Numeric};
use crate::errors::{Error, Result};
use std::ops::Range;

/// A closed-open interval of values (`[left, right)`), i.e. all values `v`
/// such that `left <= v < right`.
///
/// The interval is empty when both bounds are equal.  An interval whose
/// left bound is greater than its right bound cannot be created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval<T> {
    left: T,
    right: T,
}

impl<T: Numeric> Interval<T> {
    /// Construct the interval `[left, right)`.
    ///
    /// ```
    ///    use interval_union::{Error, Interval};
    ///    assert!(Interval::new(1, 3).is_ok());
    ///    assert!(Interval::new(3, 3).unwrap().is_empty());
    ///    assert!(matches!(
    ///        Interval::new(3, 1),
    ///        Err(Error::InvalidInterval { .. })
    ///    ));
    /// ```
    pub fn new(left: T, right: T) -> Result<Self> {
        for bound in [&left, &right] {
            if !bound.is_comparable() {
                log::debug!("rejecting interval with bound {bound:?}");
                return Err(Error::InvalidBound(format!("{bound:?}")));
            }
        }
        if left > right {
            log::debug!("rejecting interval <{left:?},{right:?}>");
            return Err(Error::InvalidInterval {
                left: format!("{left:?}"),
                right: format!("{right:?}"),
            });
        }
        Ok(Self { left, right })
    }

    /// The lower bound, included in the interval (unless it is empty)
    #[must_use]
    pub fn left(&self) -> T {
        self.left
    }

    /// The upper bound, never included in the interval
    #[must_use]
    pub fn right(&self) -> T {
        self.right
    }

    /// True if the interval contains no value, i.e. both bounds are equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right
    }

    /// Whether value is contained in the interval
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.left <= *value && *value < self.right
    }

    /// Whether the two intervals have at least one value in common.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left < other.right
            && other.left < self.right
    }

    /// Whether no value lies between the two intervals, i.e. they either
    /// overlap or touch (`[1,3)` and `[3,5)` are contiguous).  Their union
    /// is then a single interval.
    #[must_use]
    pub fn contiguous(&self, other: &Self) -> bool {
        self.left <= other.right && other.left <= self.right
    }

    /// Extend the right bound so that self also covers other.
    /// Only meaningful when both intervals are contiguous.
    pub(crate) fn absorb(&mut self, other: &Self) {
        self.right = max_bound(self.right, other.right);
    }

    /// Returns the values of self that are not in other.
    ///
    /// ```text
    ///    [------ self ------)
    ///          [- other -)
    ///    [-----)         [--)      Remainder::Two
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Remainder<T> {
        if self.left < other.left {
            if self.right <= other.left {
                // no common part
                Remainder::One(*self)
            } else if self.right <= other.right {
                // other truncates our right side
                Remainder::One(Self {
                    left: self.left,
                    right: other.left,
                })
            } else {
                Remainder::Two(
                    Self {
                        left: self.left,
                        right: other.left,
                    },
                    Self {
                        left: other.right,
                        right: self.right,
                    },
                )
            }
        } else if self.left >= other.right {
            Remainder::One(*self)
        } else if self.right > other.right {
            // other truncates our left side
            Remainder::One(Self {
                left: other.right,
                right: self.right,
            })
        } else {
            Remainder::Empty
        }
    }
}

impl<T: Numeric> TryFrom<(T, T)> for Interval<T> {
    type Error = Error;

    fn try_from(value: (T, T)) -> Result<Self> {
        Interval::new(value.0, value.1)
    }
}

impl<T: Numeric> TryFrom<Range<T>> for Interval<T> {
    type Error = Error;

    fn try_from(value: Range<T>) -> Result<Self> {
        Interval::new(value.start, value.end)
    }
}

impl<T> From<Interval<T>> for Range<T> {
    fn from(value: Interval<T>) -> Self {
        value.left..value.right
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "<{},{}>", self.left, self.right)
    }
}

/// What is left of an interval after removing the values of another one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Remainder<T> {
    Empty,
    One(Interval<T>),
    Two(Interval<T>, Interval<T>),
}

impl<T> IntoIterator for Remainder<T> {
    type Item = Interval<T>;
    type IntoIter =
        ::core::iter::Flatten<::core::array::IntoIter<Option<Interval<T>>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        let pieces = match self {
            Remainder::Empty => [None, None],
            Remainder::One(a) => [Some(a), None],
            Remainder::Two(a, b) => [Some(a), Some(b)],
        };
        pieces.into_iter().flatten()
    }
}
