//! This crate provides unions of closed-open numeric intervals.
//!
//! An [`Interval`] `[A,B)` contains all values `v` such that `A <= v < B`.
//! An [`IntervalSet`] is a union of such intervals, stored in normalized
//! form: sorted, without empty intervals, and without two intervals that
//! overlap or touch.
//!
//!  |Operation |Method                               |Operator
//!  |----------|-------------------------------------|---------
//!  |union     |[`IntervalSet::union`]               |`&a \| &b`
//!  |difference|[`IntervalSet::difference`]          |`&a - &b`
//!  |intersection|[`IntervalSet::intersection`]      |`&a & &b`
//!  |symmetric difference|[`IntervalSet::symmetric_difference`]|`&a ^ &b`
//!
//! Any numeric type can be used for the bounds (see [`Numeric`]).  Bounds
//! are validated when an interval is created: the left bound must not be
//! greater than the right bound, and NaN is rejected.
//!
//! Given two sets, we can compute the following:
//!
//! ```text
//!          [---- A ----)    [-- A --)
//!                [------ B ------)
//!
//!          [------------------------)     Union (A | B)
//!          [-----)               [--)     Difference (A - B)
//!                [-----)    [----)        Intersection (A & B)
//!          [-----)     [----)    [--)     Symmetric difference (A ^ B)
//! ```
//!
//! Intervals that touch are merged, since no value lies between them:
//! ```
//!    use interval_union::IntervalSet;
//!    let set = IntervalSet::from_pairs([(3, 5), (1, 3)]).unwrap();
//!    assert_eq!(set.to_string(), "<1,5>");
//! ```
//!
//! Sets can be built incrementally:
//! ```
//!    use interval_union::IntervalSet;
//!    let mut set = IntervalSet::new();
//!    set.add(0.0, 1.5)?.add(4.0, 5.0)?;
//!    assert!(set.contains(&1.0));
//!    assert!(!set.contains(&1.5));
//!    assert_eq!(set.to_string(), "<0,1.5> U <4,5>");
//!    # Ok::<(), interval_union::Error>(())
//! ```

mod bounds;
mod errors;
mod interval_set;
mod intervals;

pub use crate::bounds::Numeric;
pub use crate::errors::{Error, Result};
pub use crate::interval_set::IntervalSet;
pub use crate::intervals::{Interval, Remainder};
