//! Core scalar trait for dense matrix operations
//!
//! This module defines [`RealField`], the scalar abstraction used by every
//! kernel in the crate. Only real scalars are supported: the viewer widgets
//! and constraint solvers this library serves never produce complex-valued
//! systems.

use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for real scalar types usable in dense linear algebra.
///
/// Blanket-implemented for everything satisfying the bounds, which in
/// practice means `f64` (the default for solver work) and `f32` (for
/// memory-constrained viewers).
///
/// `Display` is required so matrices can be rendered by the debug
/// formatter in [`crate::display`].
pub trait RealField:
    Float + NumAssign + FromPrimitive + Display + Debug + Send + Sync + 'static
{
}

impl<T> RealField for T where
    T: Float + NumAssign + FromPrimitive + Display + Debug + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take_field<T: RealField>(x: T) -> T {
        x.abs()
    }

    #[test]
    fn test_f64_is_real_field() {
        assert_eq!(take_field(-2.0_f64), 2.0);
    }

    #[test]
    fn test_f32_is_real_field() {
        assert_eq!(take_field(-2.0_f32), 2.0);
    }
}
