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
use crate::unit_enum;

unit_enum! {
    /// Units of mass density. The base unit is grams per cubic centimeter.
    pub enum DensityUnit in Density, base GramPerCubicCentimeter, reciprocal Self {
        GramPerCubicCentimeter => (1., "g/cm^3", "gram_per_cubic_centimeter"),
        KilogramPerCubicMeter => (1e-3, "kg/m^3", "kilogram_per_cubic_meter"),
    }
}
