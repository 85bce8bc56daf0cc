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
use crate::{AccelerationUnit, Prefix, Quantity};

pub type Acceleration = Quantity<AccelerationUnit>;

impl Acceleration {
    pub fn meters_per_second2(v: f64) -> Self {
        Self::new(v, AccelerationUnit::MeterPerSecondSquared)
    }

    pub fn kilometers_per_hour2(v: f64) -> Self {
        Self::new(v, AccelerationUnit::KilometerPerHourSquared)
    }

    pub fn knots_per_hour(v: f64) -> Self {
        Self::new(v, AccelerationUnit::KnotPerHour)
    }

    pub fn in_meters_per_second2(&self) -> f64 {
        self.get(AccelerationUnit::MeterPerSecondSquared, Prefix::Base)
    }

    pub fn in_kilometers_per_hour2(&self) -> f64 {
        self.get(AccelerationUnit::KilometerPerHourSquared, Prefix::Base)
    }

    pub fn in_knots_per_hour(&self) -> f64 {
        self.get(AccelerationUnit::KnotPerHour, Prefix::Base)
    }
}

#[macro_export]
macro_rules! meters_per_second2 {
    ($num:expr) => {
        $crate::Acceleration::meters_per_second2($num as f64)
    };
}
