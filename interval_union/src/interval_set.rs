use crate::bounds::{order, Numeric};
use crate::errors::Result;
use crate::intervals::Interval;
use itertools::Itertools;

/// A union of closed-open intervals.
///
/// The intervals are always kept in normalized form: sorted by their left
/// bound, non-empty, and neither overlapping nor touching (for any two
/// consecutive intervals `a` and `b`, `a.right() < b.left()`).  Since this
/// form is unique for a given set of values, two sets are equal if and only
/// if they contain the same values.
///
/// Methods taking `&mut self` (`initialize`, `add`, `insert`, `normalize`)
/// modify the set in place and return it for chaining.  The set algebra
/// (`union`, `difference`,...) never modifies its operands and returns a
/// new set.
///
/// ```
///    use interval_union::IntervalSet;
///    let a = IntervalSet::from_pairs([(0, 10)]).unwrap();
///    let b = IntervalSet::from_pairs([(3, 5)]).unwrap();
///    assert_eq!(a.difference(&b).to_string(), "<0,3> U <5,10>");
///    assert_eq!((&a - &b).union(&b), a);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalSet<T> {
    /// The empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// True if the set contains no value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The number of disjoint intervals in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Iterate over the intervals, in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// The interval with the lowest values
    #[must_use]
    pub fn first(&self) -> Option<&Interval<T>> {
        self.intervals.first()
    }

    /// The interval with the highest values
    #[must_use]
    pub fn last(&self) -> Option<&Interval<T>> {
        self.intervals.last()
    }
}

impl<T> Default for IntervalSet<T> {
    /// Returns an empty set
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> IntervalSet<T> {
    /// Build a set from `(left, right)` pairs, in any order.  Each pair is
    /// validated as per [`Interval::new`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let intervals = pairs
            .into_iter()
            .map(Interval::try_from)
            .collect::<Result<Vec<_>>>()?;
        let mut set = Self::new();
        set.initialize(intervals);
        Ok(set)
    }

    /// Replace the contents of the set with the given intervals.  They can
    /// be given in any order, and may overlap, touch or be empty.
    pub fn initialize<I>(&mut self, raw: I) -> &mut Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        self.intervals = raw.into_iter().collect();
        self.normalize()
    }

    /// Restore the normalized form: drop empty intervals, sort, and merge
    /// intervals that overlap or touch.
    ///
    /// Overlapping intervals are merged, not only adjacent ones, so that
    /// union and difference never see overlapping intervals in their
    /// operands.
    pub fn normalize(&mut self) -> &mut Self {
        let raw_len = self.intervals.len();
        self.intervals.retain(|i| !i.is_empty());
        self.intervals.sort_by(|a, b| {
            order(&a.left(), &b.left())
                .then_with(|| order(&a.right(), &b.right()))
        });

        let mut merged: Vec<Interval<T>> =
            Vec::with_capacity(self.intervals.len());
        for current in self.intervals.drain(..) {
            match merged.last_mut() {
                Some(previous) if previous.contiguous(&current) => {
                    previous.absorb(&current);
                }
                Some(_) | None => merged.push(current),
            }
        }
        log::trace!("normalized {raw_len} intervals into {}", merged.len());
        self.intervals = merged;
        self
    }

    /// Add the interval `[left, right)` to the set.
    /// On error, the set is left unchanged.
    pub fn add(&mut self, left: T, right: T) -> Result<&mut Self> {
        let interval = Interval::new(left, right)?;
        Ok(self.insert(interval))
    }

    /// Add an interval to the set
    pub fn insert(&mut self, interval: Interval<T>) -> &mut Self {
        self.intervals.push(interval);
        self.normalize()
    }

    /// Whether the value is in one of the intervals
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let pos = self.intervals.partition_point(|i| i.right() <= *value);
        self.intervals.get(pos).is_some_and(|i| i.contains(value))
    }

    /// The smallest interval that contains all values of the set, or None
    /// if the set is empty.
    #[must_use]
    pub fn hull(&self) -> Option<Interval<T>> {
        self.first()
            .zip(self.last())
            .and_then(|(first, last)| Interval::new(first.left(), last.right()).ok())
    }

    /// The values that are in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self {
            intervals: self.iter().chain(other.iter()).copied().collect(),
        };
        result.normalize();
        result
    }

    /// The values of self that are not in subtrahend.
    ///
    /// Each interval of the subtrahend is removed in turn from what remains
    /// of self: intervals are either kept, truncated on one side, split in
    /// two or removed entirely (see [`Interval::difference`]).
    #[must_use]
    pub fn difference(&self, subtrahend: &Self) -> Self {
        let mut minuend = self.intervals.clone();
        for s in subtrahend.iter() {
            minuend = minuend.iter().flat_map(|m| m.difference(s)).collect();
            log::trace!("after removing {s}: {} intervals left", minuend.len());
        }
        let mut result = Self { intervals: minuend };
        result.normalize();
        result
    }

    /// The values that are in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.difference(&self.difference(other))
    }

    /// The values that are in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }
}

impl<T: Numeric> From<Interval<T>> for IntervalSet<T> {
    fn from(value: Interval<T>) -> Self {
        let mut set = Self::new();
        set.insert(value);
        set
    }
}

impl<T: Numeric> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.initialize(iter);
        set
    }
}

impl<T: Numeric> Extend<Interval<T>> for IntervalSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.intervals.extend(iter);
        self.normalize();
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

///  &IntervalSet | &IntervalSet
impl<T: Numeric> std::ops::BitOr<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    /// Same as [`IntervalSet::union()`]
    fn bitor(self, rhs: &IntervalSet<T>) -> Self::Output {
        self.union(rhs)
    }
}

///  &IntervalSet - &IntervalSet
impl<T: Numeric> std::ops::Sub<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    /// Same as [`IntervalSet::difference()`]
    fn sub(self, rhs: &IntervalSet<T>) -> Self::Output {
        self.difference(rhs)
    }
}

///  &IntervalSet & &IntervalSet
impl<T: Numeric> std::ops::BitAnd<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    /// Same as [`IntervalSet::intersection()`]
    fn bitand(self, rhs: &IntervalSet<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

///  &IntervalSet ^ &IntervalSet
impl<T: Numeric> std::ops::BitXor<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    /// Same as [`IntervalSet::symmetric_difference()`]
    fn bitxor(self, rhs: &IntervalSet<T>) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for IntervalSet<T> {
    /// Displays as `<l1,r1> U <l2,r2> U ...`.  The empty set is displayed
    /// as an empty string.
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{}", self.intervals.iter().join(" U "))
    }
}


#[cfg(test)]
mod properties {
    use super::IntervalSet;
    use crate::intervals::Interval;
    use ::proptest::prelude::*;
    use itertools::Itertools;

    const POINTS: ::core::ops::Range<i32> = -1..62;

    fn small_interval() -> impl Strategy<Value = Interval<i32>> {
        (0..50_i32, 0..10_i32)
            .prop_map(|(left, len)| Interval::new(left, left + len).unwrap())
    }

    fn small_set() -> impl Strategy<Value = IntervalSet<i32>> {
        prop::collection::vec(small_interval(), 0..8)
            .prop_map(|raw| raw.into_iter().collect::<IntervalSet<i32>>())
    }

    fn assert_normalized(set: &IntervalSet<i32>) {
        for i in set {
            assert!(!i.is_empty(), "{set} has an empty interval");
        }
        for (a, b) in set.iter().tuple_windows() {
            assert!(a.right() < b.left(), "{set} is not normalized");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            failure_persistence: None,
            .. ProptestConfig::default()
        })]

        #[test]
        fn proptest_normalize(raw in prop::collection::vec(small_interval(), 0..12)) {
            let mut set = IntervalSet::new();
            set.initialize(raw.clone());
            assert_normalized(&set);

            let once = set.clone();
            set.normalize();
            prop_assert_eq!(&set, &once);

            for p in POINTS {
                let expected = raw.iter().any(|i| i.contains(&p));
                prop_assert_eq!(set.contains(&p), expected);
            }
        }

        #[test]
        fn proptest_union(a in small_set(), b in small_set(), c in small_set()) {
            let ab = a.union(&b);
            assert_normalized(&ab);
            prop_assert_eq!(&ab, &b.union(&a));
            prop_assert_eq!(ab.union(&c), a.union(&b.union(&c)));
            for p in POINTS {
                prop_assert_eq!(ab.contains(&p), a.contains(&p) || b.contains(&p));
            }
        }

        #[test]
        fn proptest_difference(a in small_set(), b in small_set()) {
            let a_before = a.clone();
            let b_before = b.clone();

            let diff = a.difference(&b);
            let inter = a.intersection(&b);
            assert_normalized(&diff);
            assert_normalized(&inter);

            prop_assert!(a.difference(&a).is_empty());
            prop_assert_eq!(diff.union(&inter), a.clone());
            for p in POINTS {
                prop_assert_eq!(diff.contains(&p), a.contains(&p) && !b.contains(&p));
                prop_assert_eq!(inter.contains(&p), a.contains(&p) && b.contains(&p));
            }

            let _ = a.union(&b);
            prop_assert_eq!(a, a_before);
            prop_assert_eq!(b, b_before);
        }
    }
}
