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
use crate::{unit_enum, TimeUnit};

unit_enum! {
    /// Units of frequency. The base unit is the hertz; the reciprocal of a frequency is a time.
    pub enum FrequencyUnit in Frequency, base Hertz, reciprocal TimeUnit {
        Hertz => (1., "Hz", "hertz"),
        RotationsPerMinute => (1. / 60., "RPM", "rotations_per_minute", "rotations per minute"),
    }
}
