use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::rings::fraction::Fraction;

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Display
    + Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + Display
        + Debug
{
}

/// Elements whose division is exact, so `one / det` is a true reciprocal.
///
/// Inversion and negative powers are only offered for these; integer cells
/// would truncate the reciprocal.
///
/// ```compile_fail
/// use exact_matrix::{matrix, Matrix};
///
/// let m: Matrix<i64> = matrix![[1, 2], [3, 4]].unwrap();
/// let _ = m.inverse();
/// ```
pub trait Field: Element {}

impl Field for f32 {}
impl Field for f64 {}
impl Field for Fraction {}

/// Equal, or both unequal to themselves (NaN matches NaN).
#[allow(clippy::eq_op)]
pub(crate) fn same_value<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b || (a != a && b != b)
}

/// Zero or NaN: the cells that count as empty in predicates.
#[allow(clippy::eq_op)]
pub(crate) fn is_falsy<T: Element>(value: &T) -> bool {
    value.is_zero() || value != value
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
