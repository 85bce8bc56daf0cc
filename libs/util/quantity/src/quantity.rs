// This file is part of Measures.
//
// Measures is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Measures is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Measures.  If not, see <http://www.gnu.org/licenses/>.
use crate::{error::Result, Dimension, DynamicQuantity, Prefix, Unit, UnitError};
use approx::AbsDiffEq;
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A magnitude measured in `prefix unit`, raised to `power`.
///
/// The value in base units is `magnitude * (prefix.as_factor() * unit.to_base()) ^ power`.
/// Quantities are plain values; every operation yields a new one.
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit> {
    magnitude: f64,
    unit: U,
    prefix: Prefix,
    power: f64,
}

impl<U: Unit> Quantity<U> {
    pub fn new(magnitude: f64, unit: U) -> Self {
        Self::from_parts(magnitude, unit, Prefix::Base, 1.)
    }

    pub fn prefixed(magnitude: f64, unit: U, prefix: Prefix) -> Self {
        Self::from_parts(magnitude, unit, prefix, 1.)
    }

    pub fn from_parts(magnitude: f64, unit: U, prefix: Prefix, power: f64) -> Self {
        Self {
            magnitude,
            unit,
            prefix,
            power,
        }
    }

    /// A quantity expressed in the base unit with no prefix.
    pub fn from_base(magnitude: f64, power: f64) -> Self {
        Self::from_parts(magnitude, U::BASE, Prefix::Base, power)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    /// The magnitude of this quantity when expressed in `prefix unit` at the same power.
    pub fn get(&self, unit: U, prefix: Prefix) -> f64 {
        let unit_factor = self.unit.to_base() / unit.to_base();
        let prefix_factor = self.prefix.as_factor() / prefix.as_factor();
        self.magnitude * unit_factor.powf(self.power) * prefix_factor.powf(self.power)
    }

    pub fn get_base(&self) -> f64 {
        self.get(U::BASE, Prefix::Base)
    }

    pub fn to(&self, unit: U, prefix: Prefix) -> Self {
        Self::from_parts(self.get(unit, prefix), unit, prefix, self.power)
    }

    pub fn to_base(&self) -> Self {
        self.to(U::BASE, Prefix::Base)
    }

    pub fn is_compatible(&self, other: &Self) -> bool {
        self.power == other.power
    }

    pub fn check_compatibility(&self, other: &Self) -> Result<()> {
        if !self.is_compatible(other) {
            return Err(UnitError::IncompatiblePower {
                lhs: self.power,
                rhs: other.power,
            });
        }
        Ok(())
    }

    /// Sum in the unit, prefix and power of `self`.
    pub fn checked_add(self, other: Self) -> Result<Self> {
        self.check_compatibility(&other)?;
        Ok(Self {
            magnitude: self.magnitude + other.get(self.unit, self.prefix),
            ..self
        })
    }

    pub fn checked_sub(self, other: Self) -> Result<Self> {
        self.check_compatibility(&other)?;
        Ok(Self {
            magnitude: self.magnitude - other.get(self.unit, self.prefix),
            ..self
        })
    }

    /// Product of two quantities of the same power; the powers add up.
    pub fn checked_mul(self, other: Self) -> Result<Self> {
        self.check_compatibility(&other)?;
        Ok(Self {
            magnitude: self.magnitude * other.get(self.unit, self.prefix),
            power: self.power + other.power,
            ..self
        })
    }

    /// Quotient of two quantities of the same dimension.
    ///
    /// Equal powers cancel out to a dimensionless scalar. Otherwise the result keeps the
    /// unit and prefix of `self` with the difference of the powers.
    pub fn ratio(self, other: Self) -> DynamicQuantity {
        let magnitude = self.magnitude / other.get(self.unit, self.prefix);
        if self.power == other.power {
            DynamicQuantity::Scalar(magnitude)
        } else {
            U::into_dynamic(Self {
                magnitude,
                power: self.power - other.power,
                ..self
            })
        }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self {
            magnitude: self.magnitude * factor,
            ..self
        }
    }

    /// `1 / self`, in the reciprocal unit family.
    pub fn recip(self) -> Quantity<U::Reciprocal> {
        U::reciprocal(1., self)
    }

    pub(crate) fn inverted(self, scale: f64) -> Self {
        Self {
            magnitude: scale / self.magnitude,
            power: -self.power,
            ..self
        }
    }

    pub fn pow(self, exponent: f64) -> Self {
        Self {
            magnitude: self.magnitude.powf(exponent),
            power: self.power * exponent,
            ..self
        }
    }

    pub fn abs(self) -> Self {
        Self {
            magnitude: self.magnitude.abs(),
            ..self
        }
    }

    /// Total order on quantities of the same power, compared in the unit of `self`.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.check_compatibility(other)?;
        Ok(OrderedFloat(self.magnitude).cmp(&OrderedFloat(other.get(self.unit, self.prefix))))
    }

    pub fn min(self, other: Self) -> Result<Self> {
        Ok(match self.try_cmp(&other)? {
            Ordering::Greater => other,
            _ => self,
        })
    }

    pub fn max(self, other: Self) -> Result<Self> {
        Ok(match self.try_cmp(&other)? {
            Ordering::Less => other,
            _ => self,
        })
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*} ", precision, self.magnitude)?;
        } else {
            write!(f, "{} ", self.magnitude)?;
        }
        if self.power == 1. {
            write!(f, "{}{}", self.prefix, self.unit)
        } else {
            write!(f, "{}({})^{}", self.prefix, self.unit, self.power)
        }
    }
}

// Quantities raised to different powers are never equal and never ordered.
impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.magnitude == other.get(self.unit, self.prefix)
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_compatible(other) {
            return None;
        }
        self.magnitude
            .partial_cmp(&other.get(self.unit, self.prefix))
    }
}

impl<U: Unit> AbsDiffEq for Quantity<U> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.is_compatible(other)
            && self
                .magnitude
                .abs_diff_eq(&other.get(self.unit, self.prefix), epsilon)
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Result<Self>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(other)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Result<Self>;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(other)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self {
            magnitude: self.magnitude / s,
            ..self
        }
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    fn mul(self, q: Quantity<U>) -> Quantity<U> {
        q.scale(self)
    }
}

impl<U: Unit> Div<Quantity<U>> for f64 {
    type Output = Quantity<U::Reciprocal>;

    fn div(self, q: Quantity<U>) -> Quantity<U::Reciprocal> {
        U::reciprocal(self, q)
    }
}

impl<A: Unit, B: Unit> Mul<Quantity<B>> for Quantity<A> {
    type Output = Result<DynamicQuantity>;

    fn mul(self, other: Quantity<B>) -> Self::Output {
        DynamicQuantity::from(self).checked_mul(other.into())
    }
}

impl<A: Unit, B: Unit> Div<Quantity<B>> for Quantity<A> {
    type Output = Result<DynamicQuantity>;

    fn div(self, other: Quantity<B>) -> Self::Output {
        DynamicQuantity::from(self).checked_div(other.into())
    }
}

impl<U: Unit> From<Quantity<U>> for DynamicQuantity {
    fn from(q: Quantity<U>) -> Self {
        U::into_dynamic(q)
    }
}

impl<U: Unit> TryFrom<DynamicQuantity> for Quantity<U> {
    type Error = UnitError;

    fn try_from(q: DynamicQuantity) -> Result<Self> {
        let dimension = q.dimension();
        U::from_dynamic(q).ok_or(UnitError::IncompatibleDimension {
            lhs: dimension,
            rhs: U::DIMENSION,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DistanceUnit, FrequencyUnit, TimeUnit};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_get_converts_prefix_and_unit() {
        let d = Quantity::prefixed(1.5, DistanceUnit::Meter, Prefix::Kilo);
        assert_abs_diff_eq!(d.get(DistanceUnit::Meter, Prefix::Base), 1_500.);
        assert_abs_diff_eq!(d.get_base(), 1_500.);
        assert_abs_diff_eq!(
            d.get(DistanceUnit::Foot, Prefix::Base),
            1_500. / 0.3048,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_get_respects_power() {
        let area = Quantity::from_parts(2., DistanceUnit::Meter, Prefix::Kilo, 2.);
        assert_abs_diff_eq!(area.get_base(), 2e6);
        let root = Quantity::from_parts(1., DistanceUnit::Meter, Prefix::Kilo, 0.5);
        assert_abs_diff_eq!(root.get_base(), 1_000f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_add_keeps_left_unit() -> Result<()> {
        let a = Quantity::new(5_000., DistanceUnit::Meter);
        let b = Quantity::prefixed(5., DistanceUnit::Meter, Prefix::Kilo);
        let sum = (a + b)?;
        assert_eq!(sum.unit(), DistanceUnit::Meter);
        assert_eq!(sum.prefix(), Prefix::Base);
        assert_abs_diff_eq!(sum.magnitude(), 10_000.);

        let diff = (b - a)?;
        assert_eq!(diff.prefix(), Prefix::Kilo);
        assert_abs_diff_eq!(diff.magnitude(), 0.);
        Ok(())
    }

    #[test]
    fn test_incompatible_powers_fail() {
        let a = Quantity::new(1., DistanceUnit::Meter);
        let b = Quantity::from_parts(1., DistanceUnit::Meter, Prefix::Base, 2.);
        assert_eq!(
            a + b,
            Err(UnitError::IncompatiblePower { lhs: 1., rhs: 2. })
        );
        assert!(a.checked_mul(b).is_err());
        assert!(a.try_cmp(&b).is_err());
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn test_same_dimension_product_and_ratio() -> Result<()> {
        let a = Quantity::new(3., DistanceUnit::Meter);
        let b = Quantity::new(2., DistanceUnit::Meter);
        let area = a.checked_mul(b)?;
        assert_abs_diff_eq!(area.magnitude(), 6.);
        assert_abs_diff_eq!(area.power(), 2.);

        assert_eq!(a.ratio(b), DynamicQuantity::Scalar(1.5));
        let back = Quantity::<DistanceUnit>::try_from(area.ratio(b))?;
        assert_abs_diff_eq!(back.magnitude(), 3.);
        assert_abs_diff_eq!(back.power(), 1.);
        Ok(())
    }

    #[test]
    fn test_reciprocal() {
        let d = Quantity::new(4., DistanceUnit::Meter);
        let inv = 2. / d;
        assert_abs_diff_eq!(inv.magnitude(), 0.5);
        assert_abs_diff_eq!(inv.power(), -1.);

        let t = Quantity::prefixed(500., TimeUnit::Second, Prefix::Milli);
        let f = t.recip();
        assert_eq!(f.unit(), FrequencyUnit::Hertz);
        assert_abs_diff_eq!(f.magnitude(), 2.);
        let t2 = 1. / f;
        assert_eq!(t2.unit(), TimeUnit::Second);
        assert_abs_diff_eq!(t2.magnitude(), 0.5);
    }

    #[test]
    fn test_pow() {
        let d = Quantity::new(3., DistanceUnit::Meter).pow(2.);
        assert_abs_diff_eq!(d.magnitude(), 9.);
        assert_abs_diff_eq!(d.power(), 2.);
    }

    #[test]
    fn test_display() {
        let d = Quantity::prefixed(1.5, DistanceUnit::Meter, Prefix::Kilo);
        assert_eq!(d.to_string(), "1.5 km");
        assert_eq!(d.pow(2.).to_string(), "2.25 k(m)^2");
        assert_eq!(format!("{:.2}", d), "1.50 km");
        assert_eq!(
            Quantity::new(1., TimeUnit::Second).pow(0.5).to_string(),
            "1 (s)^0.5"
        );
    }

    #[test]
    fn test_ordering() -> Result<()> {
        let a = Quantity::new(1., TimeUnit::Hour);
        let b = Quantity::new(59., TimeUnit::Minute);
        assert!(a > b);
        assert_eq!(a.try_cmp(&b)?, Ordering::Greater);
        assert_eq!(a.min(b)?, b);
        assert_eq!(Quantity::new(60., TimeUnit::Minute), a);
        Ok(())
    }

    #[test]
    fn test_try_from_wrong_dimension() {
        let t: DynamicQuantity = Quantity::new(1., TimeUnit::Second).into();
        assert_eq!(
            Quantity::<DistanceUnit>::try_from(t),
            Err(UnitError::IncompatibleDimension {
                lhs: Dimension::Time,
                rhs: Dimension::Distance
            })
        );
    }
}
