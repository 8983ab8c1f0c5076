use derive_more::Display;
use num_traits::One;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;
use ordered_float::OrderedFloat;

use crate::cost::Cost;

/// A float-valued [`Cost`].
///
/// Plain floats cannot back a cost since NaN breaks total ordering; this
/// wraps `OrderedFloat<f64>` and uses infinity as the unreachable upper bound.
#[derive(Copy, Clone, Default, Debug, Display, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[display("{_0}")]
pub struct FloatCost(OrderedFloat<f64>);

impl Cost for FloatCost {}

impl FloatCost {
    pub fn new(f: f64) -> Self {
        Self(OrderedFloat(f))
    }

    #[inline(always)]
    pub fn infinity() -> Self {
        Self(OrderedFloat(f64::INFINITY))
    }

    pub fn get(&self) -> f64 {
        self.0.into_inner()
    }
}

impl std::ops::Add for FloatCost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Mul for FloatCost {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::AddAssign for FloatCost {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SaturatingAdd for FloatCost {
    fn saturating_add(&self, rhs: &Self) -> Self {
        // Float addition already saturates at infinity.
        Self(self.0 + rhs.0)
    }
}

impl Zero for FloatCost {
    #[inline(always)]
    fn zero() -> Self {
        Self(OrderedFloat(0.0))
    }
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.0 == OrderedFloat(0.0)
    }
}

impl One for FloatCost {
    #[inline(always)]
    fn one() -> Self {
        Self(OrderedFloat(1.0))
    }
}

impl UpperBounded for FloatCost {
    fn max_value() -> Self {
        Self::infinity()
    }
}
