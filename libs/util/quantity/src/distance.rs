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
use crate::{DistanceUnit, Prefix, Quantity};

pub type Distance = Quantity<DistanceUnit>;

impl Distance {
    pub fn meters(v: f64) -> Self {
        Self::new(v, DistanceUnit::Meter)
    }

    pub fn kilometers(v: f64) -> Self {
        Self::prefixed(v, DistanceUnit::Meter, Prefix::Kilo)
    }

    pub fn nautical_miles(v: f64) -> Self {
        Self::new(v, DistanceUnit::NauticalMile)
    }

    pub fn yards(v: f64) -> Self {
        Self::new(v, DistanceUnit::Yard)
    }

    pub fn kiloyards(v: f64) -> Self {
        Self::prefixed(v, DistanceUnit::Yard, Prefix::Kilo)
    }

    pub fn feet(v: f64) -> Self {
        Self::new(v, DistanceUnit::Foot)
    }

    pub fn in_meters(&self) -> f64 {
        self.get(DistanceUnit::Meter, Prefix::Base)
    }

    pub fn in_kilometers(&self) -> f64 {
        self.get(DistanceUnit::Meter, Prefix::Kilo)
    }

    pub fn in_nautical_miles(&self) -> f64 {
        self.get(DistanceUnit::NauticalMile, Prefix::Base)
    }

    pub fn in_yards(&self) -> f64 {
        self.get(DistanceUnit::Yard, Prefix::Base)
    }

    pub fn in_feet(&self) -> f64 {
        self.get(DistanceUnit::Foot, Prefix::Base)
    }
}

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::Distance::meters($num as f64)
    };
}

#[macro_export]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::Distance::kilometers($num as f64)
    };
}

#[macro_export]
macro_rules! nautical_miles {
    ($num:expr) => {
        $crate::Distance::nautical_miles($num as f64)
    };
}

#[macro_export]
macro_rules! feet {
    ($num:expr) => {
        $crate::Distance::feet($num as f64)
    };
}
