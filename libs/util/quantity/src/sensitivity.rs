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
use crate::{Prefix, Quantity, SensitivityUnit};

pub type Sensitivity = Quantity<SensitivityUnit>;

impl Sensitivity {
    pub fn db_re_1_volt_per_micropascal(v: f64) -> Self {
        Self::new(v, SensitivityUnit::DecibelVoltPerMicropascal)
    }

    pub fn in_db_re_1_volt_per_micropascal(&self) -> f64 {
        self.get(SensitivityUnit::DecibelVoltPerMicropascal, Prefix::Base)
    }
}
