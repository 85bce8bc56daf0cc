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
    /// Units of speed. The base unit is meters per second.
    pub enum SpeedUnit in Speed, base MeterPerSecond, reciprocal Self {
        MeterPerSecond => (1., "m/s", "meter_per_second", "meters per second"),
        KilometerPerHour => (1_000. / 3_600., "km/h", "kilometer_per_hour", "kilometers per hour"),
        Knot => (1_852. / 3_600., "kt", "knot", "knots"),
    }
}
