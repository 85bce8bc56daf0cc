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
use crate::{AngularVelocityUnit, Prefix, Quantity};

pub type AngularVelocity = Quantity<AngularVelocityUnit>;

impl AngularVelocity {
    pub fn radians_per_second(v: f64) -> Self {
        Self::new(v, AngularVelocityUnit::RadianPerSecond)
    }

    pub fn degrees_per_second(v: f64) -> Self {
        Self::new(v, AngularVelocityUnit::DegreePerSecond)
    }

    pub fn in_radians_per_second(&self) -> f64 {
        self.get(AngularVelocityUnit::RadianPerSecond, Prefix::Base)
    }

    pub fn in_degrees_per_second(&self) -> f64 {
        self.get(AngularVelocityUnit::DegreePerSecond, Prefix::Base)
    }
}

#[macro_export]
macro_rules! radians_per_second {
    ($num:expr) => {
        $crate::AngularVelocity::radians_per_second($num as f64)
    };
}

#[macro_export]
macro_rules! degrees_per_second {
    ($num:expr) => {
        $crate::AngularVelocity::degrees_per_second($num as f64)
    };
}
