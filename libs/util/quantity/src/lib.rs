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

//! Physical quantities carrying a magnitude, a unit, a metric or binary prefix and a
//! (possibly fractional) power.
//!
//! Quantities of one dimension are typed, e.g. [`Distance`] is `Quantity<DistanceUnit>`.
//! Arithmetic that may change the dimension of the result goes through
//! [`DynamicQuantity`], which owns the table of supported derivations:
//!
//! ```
//! use quantity::{Distance, Speed, Time};
//!
//! let d = Distance::kilometers(1.5);
//! let t = Time::minutes(1.);
//! let v = Speed::try_from((d / t).unwrap()).unwrap();
//! assert!((v.in_meters_per_second() - 25.).abs() < 1e-12);
//! ```
pub(crate) mod acceleration;
pub(crate) mod angle;
pub(crate) mod angular_velocity;
pub(crate) mod bearing;
pub(crate) mod density;
pub(crate) mod distance;
pub(crate) mod dms;
pub(crate) mod dynamic_quantity;
pub(crate) mod error;
pub(crate) mod frequency;
pub(crate) mod generic;
pub(crate) mod geodetic;
pub(crate) mod prefix;
pub(crate) mod quantity;
pub(crate) mod sensitivity;
pub(crate) mod speed;
pub(crate) mod time;
pub(crate) mod unit;

pub use crate::{
    acceleration::Acceleration,
    angle::{coerce, Angle},
    angular_velocity::AngularVelocity,
    bearing::{Bearing, BearingReference, RelativeBearing, RelativeReference},
    density::Density,
    distance::Distance,
    dms::Dms,
    dynamic_quantity::DynamicQuantity,
    error::{Operation, Result, UnitError},
    frequency::Frequency,
    geodetic::{Latitude, Longitude},
    prefix::Prefix,
    quantity::Quantity,
    sensitivity::Sensitivity,
    speed::Speed,
    time::Time,
    unit::{
        acceleration::AccelerationUnit, angle::AngleUnit, angular_velocity::AngularVelocityUnit,
        density::DensityUnit, distance::DistanceUnit, frequency::FrequencyUnit,
        sensitivity::SensitivityUnit, speed::SpeedUnit, time::TimeUnit, Dimension, Unit,
    },
};

pub use ordered_float;
