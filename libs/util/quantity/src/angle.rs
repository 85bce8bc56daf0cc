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
use crate::{AngleUnit, Dms, Prefix, Quantity};
use std::f64::consts::TAU;

pub type Angle = Quantity<AngleUnit>;

/// Wraps an angle in radians into `[0, 2π)`.
pub fn coerce(radians: f64) -> f64 {
    let wrapped = radians % TAU;
    if wrapped < 0. {
        // A tiny negative remainder rounds to exactly 2π when shifted.
        let shifted = wrapped + TAU;
        if shifted >= TAU {
            0.
        } else {
            shifted
        }
    } else {
        wrapped
    }
}

impl Angle {
    pub fn radians(v: f64) -> Self {
        Self::new(v, AngleUnit::Radian)
    }

    pub fn degrees(v: f64) -> Self {
        Self::new(v, AngleUnit::Degree)
    }

    pub fn from_dms(dms: Dms) -> Self {
        Self::degrees(dms.to_decimal_degrees())
    }

    pub fn in_radians(&self) -> f64 {
        self.get(AngleUnit::Radian, Prefix::Base)
    }

    pub fn in_degrees(&self) -> f64 {
        self.get(AngleUnit::Degree, Prefix::Base)
    }

    pub fn to_dms(&self) -> Dms {
        Dms::from_decimal_degrees(self.in_degrees())
    }

    /// The same angle wrapped into `[0, 2π)`, in radians.
    pub fn coerced(&self) -> Self {
        Self::radians(coerce(self.in_radians()))
    }

    pub fn sin(&self) -> f64 {
        self.in_radians().sin()
    }

    pub fn cos(&self) -> f64 {
        self.in_radians().cos()
    }

    pub fn tan(&self) -> f64 {
        self.in_radians().tan()
    }
}

#[macro_export]
macro_rules! radians {
    ($num:expr) => {
        $crate::Angle::radians($num as f64)
    };
}

#[macro_export]
macro_rules! degrees {
    ($num:expr) => {
        $crate::Angle::degrees($num as f64)
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_coerce() {
        assert_abs_diff_eq!(coerce(-PI / 2.), 3. * PI / 2., epsilon = 1e-9);
        assert_abs_diff_eq!(coerce(5. * PI), PI, epsilon = 1e-12);
        assert_eq!(coerce(TAU), 0.);
        assert_eq!(coerce(-1e-20), 0.);
        let once = coerce(-7.);
        assert_eq!(coerce(once), once);
    }

    #[test]
    fn test_degrees_radians() {
        assert_abs_diff_eq!(degrees!(180).in_radians(), PI, epsilon = 1e-9);
        assert_abs_diff_eq!(radians!(PI / 2.).in_degrees(), 90., epsilon = 1e-12);
        assert_abs_diff_eq!(degrees!(30).sin(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(degrees!(-90).coerced().in_degrees(), 270., epsilon = 1e-9);
    }
}
