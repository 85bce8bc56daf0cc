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
use crate::{error::Result, Angle, Dms, UnitError};
use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt,
    str::FromStr,
};

// A range-checked angle printed as unsigned DMS with a hemisphere letter.
macro_rules! geodetic_angle {
    (
        $(#[$meta:meta])*
        $Name:ident,
        $kind:literal,
        $limit:expr,
        $positive:literal,
        $negative:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        pub struct $Name(Angle);

        impl $Name {
            /// Largest magnitude accepted, in radians.
            pub const LIMIT: f64 = $limit;

            pub fn new(angle: Angle) -> Result<Self> {
                if angle.power() != 1. {
                    return Err(UnitError::IncompatiblePower {
                        lhs: angle.power(),
                        rhs: 1.,
                    });
                }
                let radians = angle.in_radians();
                if !(-Self::LIMIT..=Self::LIMIT).contains(&radians) {
                    return Err(UnitError::OutOfRange {
                        kind: $kind,
                        radians,
                    });
                }
                Ok(Self(angle))
            }

            pub fn from_radians(radians: f64) -> Result<Self> {
                Self::new(Angle::radians(radians))
            }

            pub fn from_degrees(degrees: f64) -> Result<Self> {
                Self::new(Angle::degrees(degrees))
            }

            pub fn from_dms(dms: Dms) -> Result<Self> {
                Self::new(dms.to_angle())
            }

            pub fn angle(&self) -> Angle {
                self.0
            }

            pub fn in_radians(&self) -> f64 {
                self.0.in_radians()
            }

            pub fn in_degrees(&self) -> f64 {
                self.0.in_degrees()
            }

            pub fn to_dms(&self) -> Dms {
                self.0.to_dms()
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let dms = self.to_dms();
                let hemisphere = if dms.is_negative() { $negative } else { $positive };
                let text = dms.to_string_with(f.precision().unwrap_or(0), false);
                write!(f, "{text}{hemisphere}")
            }
        }

        impl FromStr for $Name {
            type Err = UnitError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_dms(Dms::parse_lenient(s))
            }
        }

        impl TryFrom<Angle> for $Name {
            type Error = UnitError;

            fn try_from(angle: Angle) -> Result<Self> {
                Self::new(angle)
            }
        }

        impl From<$Name> for Angle {
            fn from(v: $Name) -> Angle {
                v.0
            }
        }
    };
}

geodetic_angle!(
    /// Angle north of the equator, within `[-π/2, π/2]`.
    Latitude,
    "latitude",
    FRAC_PI_2,
    'N',
    'S'
);

geodetic_angle!(
    /// Angle east of the prime meridian, within `[-π, π]`.
    Longitude,
    "longitude",
    PI,
    'E',
    'W'
);

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_latitude_range() {
        assert!(Latitude::from_radians(FRAC_PI_2).is_ok());
        assert!(Latitude::from_radians(-FRAC_PI_2).is_ok());
        assert!(Latitude::from_degrees(89.999).is_ok());
        match Latitude::from_degrees(95.) {
            Err(UnitError::OutOfRange { kind, radians }) => {
                assert_eq!(kind, "latitude");
                assert_abs_diff_eq!(radians, 95f64.to_radians(), epsilon = 1e-12);
            }
            other => panic!("expected out of range, got {other:?}"),
        }
        assert!(Latitude::from_radians(f64::NAN).is_err());
    }

    #[test]
    fn test_longitude_range() {
        assert!(Longitude::from_radians(-PI).is_ok());
        assert!(Longitude::from_degrees(-179.999).is_ok());
        assert!(Longitude::from_degrees(180.5).is_err());
    }

    #[test]
    fn test_format() -> Result<()> {
        let lat = Latitude::from_degrees(-43.6474)?;
        assert_eq!(lat.to_string(), "43°38'51\"S");
        assert_eq!(format!("{:.2}", lat), "43°38'50.64\"S");
        let lon = Longitude::from_degrees(172.5)?;
        assert_eq!(lon.to_string(), "172°30'00\"E");
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<()> {
        let lon: Longitude = "122°25'W".parse()?;
        assert_abs_diff_eq!(lon.in_degrees(), -(122. + 25. / 60.), epsilon = 1e-12);
        assert!("91°N".parse::<Latitude>().is_err());
        Ok(())
    }
}
