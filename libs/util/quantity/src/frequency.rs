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
use crate::{FrequencyUnit, Prefix, Quantity};

pub type Frequency = Quantity<FrequencyUnit>;

impl Frequency {
    pub fn hertz(v: f64) -> Self {
        Self::new(v, FrequencyUnit::Hertz)
    }

    pub fn kilohertz(v: f64) -> Self {
        Self::prefixed(v, FrequencyUnit::Hertz, Prefix::Kilo)
    }

    pub fn rpm(v: f64) -> Self {
        Self::new(v, FrequencyUnit::RotationsPerMinute)
    }

    pub fn in_hertz(&self) -> f64 {
        self.get(FrequencyUnit::Hertz, Prefix::Base)
    }

    pub fn in_kilohertz(&self) -> f64 {
        self.get(FrequencyUnit::Hertz, Prefix::Kilo)
    }

    pub fn in_rpm(&self) -> f64 {
        self.get(FrequencyUnit::RotationsPerMinute, Prefix::Base)
    }
}

#[macro_export]
macro_rules! hertz {
    ($num:expr) => {
        $crate::Frequency::hertz($num as f64)
    };
}
