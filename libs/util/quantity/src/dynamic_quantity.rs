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
use crate::{
    error::Result, AccelerationUnit, AngleUnit, AngularVelocityUnit, DensityUnit, Dimension,
    DistanceUnit, FrequencyUnit, Operation, Quantity, SensitivityUnit, SpeedUnit, TimeUnit,
    UnitError,
};
use approx::AbsDiffEq;
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A quantity whose dimension is only known at runtime.
///
/// Products and quotients of quantities may change dimension depending on the operand
/// powers, so they are computed here and converted back to a typed quantity with
/// `TryFrom`.
#[derive(Clone, Copy, Debug)]
pub enum DynamicQuantity {
    Scalar(f64),
    Distance(Quantity<DistanceUnit>),
    Time(Quantity<TimeUnit>),
    Frequency(Quantity<FrequencyUnit>),
    Speed(Quantity<SpeedUnit>),
    Acceleration(Quantity<AccelerationUnit>),
    Angle(Quantity<AngleUnit>),
    AngularVelocity(Quantity<AngularVelocityUnit>),
    Density(Quantity<DensityUnit>),
    Sensitivity(Quantity<SensitivityUnit>),
}

// Evaluates the per-variant expressions with the payload bound to the given name.
macro_rules! dispatch {
    ($value:expr, $s:ident => $on_scalar:expr, $q:ident => $on_quantity:expr) => {
        match $value {
            DynamicQuantity::Scalar($s) => $on_scalar,
            DynamicQuantity::Distance($q) => $on_quantity,
            DynamicQuantity::Time($q) => $on_quantity,
            DynamicQuantity::Frequency($q) => $on_quantity,
            DynamicQuantity::Speed($q) => $on_quantity,
            DynamicQuantity::Acceleration($q) => $on_quantity,
            DynamicQuantity::Angle($q) => $on_quantity,
            DynamicQuantity::AngularVelocity($q) => $on_quantity,
            DynamicQuantity::Density($q) => $on_quantity,
            DynamicQuantity::Sensitivity($q) => $on_quantity,
        }
    };
}

// Pairs up two quantities of the same dimension; `None` for scalars or mixed dimensions.
macro_rules! zip_same_dimension {
    ($lhs:expr, $rhs:expr, ($a:ident, $b:ident) => $on_match:expr) => {
        match ($lhs, $rhs) {
            (DynamicQuantity::Distance($a), DynamicQuantity::Distance($b)) => Some($on_match),
            (DynamicQuantity::Time($a), DynamicQuantity::Time($b)) => Some($on_match),
            (DynamicQuantity::Frequency($a), DynamicQuantity::Frequency($b)) => Some($on_match),
            (DynamicQuantity::Speed($a), DynamicQuantity::Speed($b)) => Some($on_match),
            (DynamicQuantity::Acceleration($a), DynamicQuantity::Acceleration($b)) => {
                Some($on_match)
            }
            (DynamicQuantity::Angle($a), DynamicQuantity::Angle($b)) => Some($on_match),
            (DynamicQuantity::AngularVelocity($a), DynamicQuantity::AngularVelocity($b)) => {
                Some($on_match)
            }
            (DynamicQuantity::Density($a), DynamicQuantity::Density($b)) => Some($on_match),
            (DynamicQuantity::Sensitivity($a), DynamicQuantity::Sensitivity($b)) => {
                Some($on_match)
            }
            _ => None,
        }
    };
}

impl DynamicQuantity {
    pub fn dimension(&self) -> Dimension {
        dispatch!(self, _s => Dimension::Dimensionless, q => q.dimension())
    }

    /// The power the unit is raised to; zero for a dimensionless scalar.
    pub fn power(&self) -> f64 {
        dispatch!(self, _s => 0., q => q.power())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    /// The magnitude in base units with no prefix.
    pub fn get_base(&self) -> f64 {
        dispatch!(self, s => *s, q => q.get_base())
    }

    pub fn scale(self, factor: f64) -> Self {
        dispatch!(self, s => Self::Scalar(s * factor), q => q.scale(factor).into())
    }

    pub fn pow(self, exponent: f64) -> Self {
        dispatch!(self, s => Self::Scalar(s.powf(exponent)), q => q.pow(exponent).into())
    }

    pub fn recip(self) -> Self {
        self.reciprocal(1.)
    }

    /// `scale / self`
    pub fn reciprocal(self, scale: f64) -> Self {
        dispatch!(self, s => Self::Scalar(scale / s), q => (scale / q).into())
    }

    fn incompatible_dimension(&self, other: &Self) -> UnitError {
        UnitError::IncompatibleDimension {
            lhs: self.dimension(),
            rhs: other.dimension(),
        }
    }

    pub fn checked_add(self, other: Self) -> Result<Self> {
        if let (Self::Scalar(a), Self::Scalar(b)) = (self, other) {
            return Ok(Self::Scalar(a + b));
        }
        zip_same_dimension!(self, other, (a, b) => a.checked_add(b).map(Self::from))
            .unwrap_or_else(|| Err(self.incompatible_dimension(&other)))
    }

    pub fn checked_sub(self, other: Self) -> Result<Self> {
        if let (Self::Scalar(a), Self::Scalar(b)) = (self, other) {
            return Ok(Self::Scalar(a - b));
        }
        zip_same_dimension!(self, other, (a, b) => a.checked_sub(b).map(Self::from))
            .unwrap_or_else(|| Err(self.incompatible_dimension(&other)))
    }

    pub fn checked_mul(self, other: Self) -> Result<Self> {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Ok(Self::Scalar(a * b)),
            (Self::Scalar(s), q) | (q, Self::Scalar(s)) => Ok(q.scale(s)),
            _ => zip_same_dimension!(self, other, (a, b) => a.checked_mul(b).map(Self::from))
                .unwrap_or_else(|| self.derive_product(other)),
        }
    }

    pub fn checked_div(self, other: Self) -> Result<Self> {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Ok(Self::Scalar(a / b)),
            (Self::Scalar(s), q) => Ok(q.reciprocal(s)),
            (q, Self::Scalar(s)) => Ok(q.scale(1. / s)),
            _ => zip_same_dimension!(self, other, (a, b) => a.ratio(b))
                .map(Ok)
                .unwrap_or_else(|| self.derive_quotient(other)),
        }
    }

    // Products across dimensions. `p` is the power of the left operand, `q` of the right;
    // results are in base units.
    fn derive_product(self, other: Self) -> Result<Self> {
        use Dimension::*;
        let (p, q) = (self.power(), other.power());
        let m = self.get_base() * other.get_base();
        let derived = match (self.dimension(), other.dimension()) {
            (Time, Speed) | (Speed, Time) if p == q => Self::Distance(Quantity::from_base(m, p)),
            (Time, Acceleration) | (Acceleration, Time) if p == q => {
                Self::Speed(Quantity::from_base(m, p))
            }
            (Time, Acceleration) if p == 2. * q => Self::Distance(Quantity::from_base(m, q)),
            (Acceleration, Time) if q == 2. * p => Self::Distance(Quantity::from_base(m, p)),
            (Time, Frequency) | (Frequency, Time) if p == q => Self::Scalar(m),
            (Distance, Frequency) | (Frequency, Distance) if p == q => {
                Self::Speed(Quantity::from_base(m, p))
            }
            (Distance, Frequency) if q == 2. * p => Self::Acceleration(Quantity::from_base(m, p)),
            (Frequency, Distance) if p == 2. * q => Self::Acceleration(Quantity::from_base(m, q)),
            (Time, AngularVelocity) | (AngularVelocity, Time) if p == q => {
                Self::Angle(Quantity::from_base(m, p))
            }
            (Time, Speed)
            | (Speed, Time)
            | (Time, Acceleration)
            | (Acceleration, Time)
            | (Time, Frequency)
            | (Frequency, Time)
            | (Distance, Frequency)
            | (Frequency, Distance)
            | (Time, AngularVelocity)
            | (AngularVelocity, Time) => {
                return Err(UnitError::IncompatiblePower { lhs: p, rhs: q });
            }
            (lhs, rhs) => {
                return Err(UnitError::UnsupportedOperation {
                    lhs,
                    op: Operation::Multiply,
                    rhs,
                });
            }
        };
        log::trace!("derived {} * {} => {}", self, other, derived);
        Ok(derived)
    }

    fn derive_quotient(self, other: Self) -> Result<Self> {
        use Dimension::*;
        let (p, q) = (self.power(), other.power());
        let m = self.get_base() / other.get_base();
        let derived = match (self.dimension(), other.dimension()) {
            (Distance, Time) if p == q => Self::Speed(Quantity::from_base(m, p)),
            (Distance, Time) if q == 2. * p => Self::Acceleration(Quantity::from_base(m, p)),
            (Distance, Speed) if p == q => Self::Time(Quantity::from_base(m, p)),
            (Time, Frequency) if p == q => Self::Time(Quantity::from_base(m, 2. * p)),
            (Speed, Time) if p == q => Self::Acceleration(Quantity::from_base(m, p)),
            (Speed, Distance) if p == q => Self::Frequency(Quantity::from_base(m, p)),
            (Speed, Frequency) if p == q => Self::Distance(Quantity::from_base(m, p)),
            (Frequency, Time) if p == q => Self::Frequency(Quantity::from_base(m, 2. * p)),
            (Angle, Time) if p == q => Self::AngularVelocity(Quantity::from_base(m, p)),
            (Distance, Time)
            | (Distance, Speed)
            | (Time, Frequency)
            | (Speed, Time)
            | (Speed, Distance)
            | (Speed, Frequency)
            | (Frequency, Time)
            | (Angle, Time) => {
                return Err(UnitError::IncompatiblePower { lhs: p, rhs: q });
            }
            (lhs, rhs) => {
                return Err(UnitError::UnsupportedOperation {
                    lhs,
                    op: Operation::Divide,
                    rhs,
                });
            }
        };
        log::trace!("derived {} / {} => {}", self, other, derived);
        Ok(derived)
    }

    /// Compares two quantities of the same dimension and power.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        if let (Self::Scalar(a), Self::Scalar(b)) = (self, other) {
            return Ok(OrderedFloat(*a).cmp(&OrderedFloat(*b)));
        }
        zip_same_dimension!(self, other, (a, b) => a.try_cmp(b))
            .unwrap_or_else(|| Err(self.incompatible_dimension(other)))
    }
}

impl fmt::Display for DynamicQuantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        dispatch!(self, s => fmt::Display::fmt(s, f), q => fmt::Display::fmt(q, f))
    }
}

impl PartialEq for DynamicQuantity {
    fn eq(&self, other: &Self) -> bool {
        if let (Self::Scalar(a), Self::Scalar(b)) = (self, other) {
            return a == b;
        }
        zip_same_dimension!(self, other, (a, b) => a == b).unwrap_or(false)
    }
}

impl PartialOrd for DynamicQuantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if let (Self::Scalar(a), Self::Scalar(b)) = (self, other) {
            return a.partial_cmp(b);
        }
        zip_same_dimension!(self, other, (a, b) => a.partial_cmp(b)).flatten()
    }
}

impl AbsDiffEq for DynamicQuantity {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if let (Self::Scalar(a), Self::Scalar(b)) = (self, other) {
            return a.abs_diff_eq(b, epsilon);
        }
        zip_same_dimension!(self, other, (a, b) => a.abs_diff_eq(b, epsilon)).unwrap_or(false)
    }
}

impl From<f64> for DynamicQuantity {
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}

impl Add for DynamicQuantity {
    type Output = Result<Self>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(other)
    }
}

impl Sub for DynamicQuantity {
    type Output = Result<Self>;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(other)
    }
}

impl Mul for DynamicQuantity {
    type Output = Result<Self>;

    fn mul(self, other: Self) -> Self::Output {
        self.checked_mul(other)
    }
}

impl Div for DynamicQuantity {
    type Output = Result<Self>;

    fn div(self, other: Self) -> Self::Output {
        self.checked_div(other)
    }
}

impl Mul<f64> for DynamicQuantity {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}

impl Div<f64> for DynamicQuantity {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        self.scale(1. / s)
    }
}

impl Neg for DynamicQuantity {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Acceleration, Angle, Distance, Frequency, Prefix, Speed, Time};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_distance_over_time_is_speed() -> Result<()> {
        let v = Speed::try_from((Distance::kilometers(1.5) / Time::minutes(1.))?)?;
        assert_abs_diff_eq!(v.in_meters_per_second(), 25., epsilon = 1e-9);
        assert_eq!(v.prefix(), Prefix::Base);
        Ok(())
    }

    #[test]
    fn test_distance_over_time_squared_is_acceleration() -> Result<()> {
        let t2 = Time::seconds(2.).pow(2.);
        let a = Acceleration::try_from((Distance::meters(8.) / t2)?)?;
        assert_abs_diff_eq!(a.in_meters_per_second2(), 2.);
        Ok(())
    }

    #[test]
    fn test_speed_times_time() -> Result<()> {
        let d = Distance::try_from((Speed::meters_per_second(5.) * Time::seconds(10.))?)?;
        assert_abs_diff_eq!(d, Distance::meters(50.));
        let d = Distance::try_from((Time::minutes(1.) * Speed::knots(60.))?)?;
        assert_abs_diff_eq!(d.in_nautical_miles(), 1., epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_acceleration_rows() -> Result<()> {
        let a = Acceleration::meters_per_second2(3.);
        let v = Speed::try_from((a * Time::seconds(2.))?)?;
        assert_abs_diff_eq!(v.in_meters_per_second(), 6.);
        let d = Distance::try_from((Time::seconds(2.).pow(2.) * a)?)?;
        assert_abs_diff_eq!(d.in_meters(), 12.);
        let a2 = Acceleration::try_from((Speed::meters_per_second(6.) / Time::seconds(2.))?)?;
        assert_abs_diff_eq!(a2, a);
        Ok(())
    }

    #[test]
    fn test_frequency_rows() -> Result<()> {
        let f = Frequency::hertz(4.);
        assert_eq!((Time::seconds(2.) * f)?, DynamicQuantity::Scalar(8.));
        assert_eq!((f * Time::seconds(2.))?, DynamicQuantity::Scalar(8.));

        let v = Speed::try_from((Distance::meters(3.) * f)?)?;
        assert_abs_diff_eq!(v.in_meters_per_second(), 12.);
        let v = Speed::try_from((f * Distance::meters(3.))?)?;
        assert_abs_diff_eq!(v.in_meters_per_second(), 12.);

        let f2 = f.pow(2.);
        let a = Acceleration::try_from((Distance::meters(3.) * f2)?)?;
        assert_abs_diff_eq!(a.in_meters_per_second2(), 48.);
        let a = Acceleration::try_from((f2 * Distance::meters(3.))?)?;
        assert_abs_diff_eq!(a.in_meters_per_second2(), 48.);

        let d = Distance::try_from((Speed::meters_per_second(12.) / f)?)?;
        assert_abs_diff_eq!(d.in_meters(), 3.);
        let g = Frequency::try_from((Speed::meters_per_second(12.) / Distance::meters(3.))?)?;
        assert_abs_diff_eq!(g.in_hertz(), 4.);

        let t = Time::try_from((Time::seconds(2.) / f)?)?;
        assert_abs_diff_eq!(t.power(), 2.);
        assert_abs_diff_eq!(t.in_seconds(), 0.5);

        let g = Frequency::try_from((f / Time::seconds(2.))?)?;
        assert_abs_diff_eq!(g.power(), 2.);
        assert_abs_diff_eq!(g.magnitude(), 2.);
        Ok(())
    }

    #[test]
    fn test_angular_rows() -> Result<()> {
        let w = crate::AngularVelocity::try_from((Angle::degrees(90.) / Time::seconds(2.))?)?;
        assert_abs_diff_eq!(w.in_degrees_per_second(), 45., epsilon = 1e-12);
        let a = Angle::try_from((Time::seconds(4.) * w)?)?;
        assert_abs_diff_eq!(a.in_degrees(), 180., epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_unsupported_pairs() {
        assert_eq!(
            Distance::meters(1.) * Time::seconds(1.),
            Err(UnitError::UnsupportedOperation {
                lhs: Dimension::Distance,
                op: Operation::Multiply,
                rhs: Dimension::Time,
            })
        );
        assert_eq!(
            Time::seconds(1.) / Distance::meters(1.),
            Err(UnitError::UnsupportedOperation {
                lhs: Dimension::Time,
                op: Operation::Divide,
                rhs: Dimension::Distance,
            })
        );
    }

    #[test]
    fn test_matched_row_with_wrong_power() {
        let t3 = Time::seconds(1.).pow(3.);
        assert_eq!(
            Distance::meters(1.) / t3,
            Err(UnitError::IncompatiblePower { lhs: 1., rhs: 3. })
        );
    }

    #[test]
    fn test_same_dimension() -> Result<()> {
        let ratio = (Distance::kilometers(1.) / Distance::meters(250.))?;
        assert_eq!(ratio.as_scalar(), Some(4.));
        let area = (Distance::meters(2.) * Distance::meters(3.))?;
        assert_eq!(area.dimension(), Dimension::Distance);
        assert_abs_diff_eq!(area.power(), 2.);
        Ok(())
    }

    #[test]
    fn test_add_mixed_dimensions_fails() {
        let d: DynamicQuantity = Distance::meters(1.).into();
        let t: DynamicQuantity = Time::seconds(1.).into();
        assert_eq!(
            d + t,
            Err(UnitError::IncompatibleDimension {
                lhs: Dimension::Distance,
                rhs: Dimension::Time,
            })
        );
        assert!(d.try_cmp(&t).is_err());
        assert_ne!(d, t);
    }

    #[test]
    fn test_scalars() -> Result<()> {
        let d: DynamicQuantity = Distance::meters(2.).into();
        assert_eq!((DynamicQuantity::from(3.) * d)?, Distance::meters(6.).into());
        let inv = (DynamicQuantity::from(1.) / d)?;
        assert_abs_diff_eq!(inv.power(), -1.);
        assert_eq!(-d, Distance::meters(-2.).into());
        Ok(())
    }
}
