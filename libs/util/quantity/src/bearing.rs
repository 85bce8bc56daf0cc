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
use crate::{coerce, error::Result, Angle, UnitError};
use ordered_float::OrderedFloat;
use std::{
    f64::consts::FRAC_PI_2,
    fmt,
    ops::{Add, Sub},
};

/// Frame an absolute bearing is measured in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BearingReference {
    /// From east, counterclockwise (mathematical convention).
    Eccw,
    /// From north, clockwise (compass convention).
    Ncw,
}

impl BearingReference {
    pub fn to_eccw(self, radians: f64) -> f64 {
        match self {
            Self::Eccw => radians,
            Self::Ncw => FRAC_PI_2 - radians,
        }
    }

    pub fn from_eccw(self, radians: f64) -> f64 {
        // Both transforms are involutions.
        self.to_eccw(radians)
    }
}

/// Frame a relative bearing is measured in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RelativeReference {
    Ccw,
    Cw,
}

impl RelativeReference {
    pub fn to_ccw(self, radians: f64) -> f64 {
        match self {
            Self::Ccw => radians,
            Self::Cw => -radians,
        }
    }

    pub fn from_ccw(self, radians: f64) -> f64 {
        self.to_ccw(radians)
    }
}

fn plain_angle(angle: &Angle) -> Result<f64> {
    if angle.power() != 1. {
        return Err(UnitError::IncompatiblePower {
            lhs: angle.power(),
            rhs: 1.,
        });
    }
    Ok(angle.in_radians())
}

/// An absolute orientation, stored as ECCW radians in `[0, 2π)`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Bearing {
    eccw: OrderedFloat<f64>,
}

impl Bearing {
    pub fn new(angle: Angle, reference: BearingReference) -> Result<Self> {
        Ok(Self::from_radians(plain_angle(&angle)?, reference))
    }

    pub fn from_radians(radians: f64, reference: BearingReference) -> Self {
        Self {
            eccw: OrderedFloat(coerce(reference.to_eccw(radians))),
        }
    }

    pub fn from_degrees(degrees: f64, reference: BearingReference) -> Self {
        Self::from_radians(degrees.to_radians(), reference)
    }

    pub fn radians(&self, reference: BearingReference) -> f64 {
        coerce(reference.from_eccw(self.eccw.0))
    }

    pub fn degrees(&self, reference: BearingReference) -> f64 {
        self.radians(reference).to_degrees()
    }

    pub fn angle(&self, reference: BearingReference) -> Angle {
        Angle::radians(self.radians(reference))
    }

    pub fn eccw(&self) -> Angle {
        self.angle(BearingReference::Eccw)
    }

    pub fn ncw(&self) -> Angle {
        self.angle(BearingReference::Ncw)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let degrees = self.degrees(BearingReference::Ncw);
        if let Some(precision) = f.precision() {
            write!(f, "{degrees:.precision$}°")
        } else {
            write!(f, "{degrees}°")
        }
    }
}

/// An orientation relative to some heading, stored as CCW radians in `[0, 2π)`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RelativeBearing {
    ccw: OrderedFloat<f64>,
}

impl RelativeBearing {
    pub fn new(angle: Angle, reference: RelativeReference) -> Result<Self> {
        Ok(Self::from_radians(plain_angle(&angle)?, reference))
    }

    pub fn from_radians(radians: f64, reference: RelativeReference) -> Self {
        Self {
            ccw: OrderedFloat(coerce(reference.to_ccw(radians))),
        }
    }

    pub fn from_degrees(degrees: f64, reference: RelativeReference) -> Self {
        Self::from_radians(degrees.to_radians(), reference)
    }

    pub fn radians(&self, reference: RelativeReference) -> f64 {
        coerce(reference.from_ccw(self.ccw.0))
    }

    pub fn degrees(&self, reference: RelativeReference) -> f64 {
        self.radians(reference).to_degrees()
    }

    pub fn angle(&self, reference: RelativeReference) -> Angle {
        Angle::radians(self.radians(reference))
    }
}

impl fmt::Display for RelativeBearing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let degrees = self.degrees(RelativeReference::Cw);
        if let Some(precision) = f.precision() {
            write!(f, "{degrees:.precision$}° cw")
        } else {
            write!(f, "{degrees}° cw")
        }
    }
}

// The sum of two orientations is not an orientation.
impl Add for Bearing {
    type Output = Angle;

    fn add(self, other: Self) -> Angle {
        Angle::radians(self.eccw.0 + other.eccw.0)
    }
}

impl Sub for Bearing {
    type Output = RelativeBearing;

    fn sub(self, other: Self) -> RelativeBearing {
        RelativeBearing::from_radians(self.eccw.0 - other.eccw.0, RelativeReference::Ccw)
    }
}

impl Add<RelativeBearing> for Bearing {
    type Output = Bearing;

    fn add(self, other: RelativeBearing) -> Bearing {
        Bearing::from_radians(self.eccw.0 + other.ccw.0, BearingReference::Eccw)
    }
}

impl Sub<RelativeBearing> for Bearing {
    type Output = Bearing;

    fn sub(self, other: RelativeBearing) -> Bearing {
        Bearing::from_radians(self.eccw.0 - other.ccw.0, BearingReference::Eccw)
    }
}

impl Add<Bearing> for RelativeBearing {
    type Output = Bearing;

    fn add(self, other: Bearing) -> Bearing {
        other + self
    }
}

impl Add for RelativeBearing {
    type Output = Angle;

    fn add(self, other: Self) -> Angle {
        Angle::radians(self.ccw.0 + other.ccw.0)
    }
}

impl Sub for RelativeBearing {
    type Output = RelativeBearing;

    fn sub(self, other: Self) -> RelativeBearing {
        RelativeBearing::from_radians(self.ccw.0 - other.ccw.0, RelativeReference::Ccw)
    }
}
