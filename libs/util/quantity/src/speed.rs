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
use crate::{Prefix, Quantity, SpeedUnit};

pub type Speed = Quantity<SpeedUnit>;

impl Speed {
    pub fn meters_per_second(v: f64) -> Self {
        Self::new(v, SpeedUnit::MeterPerSecond)
    }

    pub fn kilometers_per_hour(v: f64) -> Self {
        Self::new(v, SpeedUnit::KilometerPerHour)
    }

    pub fn knots(v: f64) -> Self {
        Self::new(v, SpeedUnit::Knot)
    }

    pub fn in_meters_per_second(&self) -> f64 {
        self.get(SpeedUnit::MeterPerSecond, Prefix::Base)
    }

    pub fn in_kilometers_per_hour(&self) -> f64 {
        self.get(SpeedUnit::KilometerPerHour, Prefix::Base)
    }

    pub fn in_knots(&self) -> f64 {
        self.get(SpeedUnit::Knot, Prefix::Base)
    }
}

#[macro_export]
macro_rules! meters_per_second {
    ($num:expr) => {
        $crate::Speed::meters_per_second($num as f64)
    };
}

#[macro_export]
macro_rules! knots {
    ($num:expr) => {
        $crate::Speed::knots($num as f64)
    };
}
