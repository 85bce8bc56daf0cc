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
use crate::{unit_enum, FrequencyUnit};

unit_enum! {
    /// Units of time. The base unit is the second; the reciprocal of a time is a frequency.
    pub enum TimeUnit in Time, base Second, reciprocal FrequencyUnit {
        Second => (1., "s", "second", "seconds", "sec"),
        Minute => (60., "min", "minute", "minutes"),
        Hour => (3_600., "h", "hour", "hours"),
    }
}
