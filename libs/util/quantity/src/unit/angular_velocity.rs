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
use std::f64::consts::PI;

unit_enum! {
    /// Units of angular velocity. The base unit is radians per second.
    pub enum AngularVelocityUnit in AngularVelocity, base RadianPerSecond, reciprocal Self {
        RadianPerSecond => (1., "rad/s", "radian_per_second", "radians per second"),
        DegreePerSecond => (PI / 180., "°/s", "degree_per_second", "degrees per second"),
    }
}
