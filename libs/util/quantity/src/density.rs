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
use crate::{DensityUnit, Prefix, Quantity};

pub type Density = Quantity<DensityUnit>;

impl Density {
    pub fn grams_per_cubic_centimeter(v: f64) -> Self {
        Self::new(v, DensityUnit::GramPerCubicCentimeter)
    }

    pub fn kilograms_per_cubic_meter(v: f64) -> Self {
        Self::new(v, DensityUnit::KilogramPerCubicMeter)
    }

    pub fn in_grams_per_cubic_centimeter(&self) -> f64 {
        self.get(DensityUnit::GramPerCubicCentimeter, Prefix::Base)
    }

    pub fn in_kilograms_per_cubic_meter(&self) -> f64 {
        self.get(DensityUnit::KilogramPerCubicMeter, Prefix::Base)
    }
}
