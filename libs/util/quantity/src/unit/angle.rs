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
    /// Units of plane angle. The base unit is the radian.
    pub enum AngleUnit in Angle, base Radian, reciprocal Self {
        Radian => (1., "rad", "radian", "radians"),
        Degree => (PI / 180., "°", "degree", "degrees", "deg"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Unit;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_degree_factor() {
        assert_abs_diff_eq!(AngleUnit::Degree.to_base() * 180., PI, epsilon = 1e-9);
        assert_eq!("°".parse::<AngleUnit>().unwrap(), AngleUnit::Degree);
        assert_eq!("deg".parse::<AngleUnit>().unwrap(), AngleUnit::Degree);
    }
}
