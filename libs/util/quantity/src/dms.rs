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
use crate::Angle;
use std::{convert::Infallible, fmt, str::FromStr};

const SEPARATORS: &[char] = &['°', '\'', '"', '′', '″'];

/// An angle in degrees, minutes and seconds.
///
/// The sign is carried only by the degree, so a negative zero degree is negative:
/// -0.5° is `-0°30'00"`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dms {
    degree: f64,
    minute: f64,
    second: f64,
}

impl Dms {
    pub const MAX_PRECISION: usize = 15;

    pub fn new(degree: f64, minute: f64, second: f64) -> Self {
        Self {
            degree,
            minute,
            second,
        }
    }

    pub fn from_decimal_degrees(degrees: f64) -> Self {
        let whole = if degrees > 0. {
            degrees.floor()
        } else {
            degrees.ceil()
        };
        let minutes = (degrees.abs() - whole.abs()) * 60.;
        let minute = minutes.floor();
        Self {
            degree: whole,
            minute,
            second: (minutes - minute) * 60.,
        }
    }

    pub fn from_angle(angle: Angle) -> Self {
        Self::from_decimal_degrees(angle.in_degrees())
    }

    pub fn to_decimal_degrees(&self) -> f64 {
        let sign = if self.is_negative() { -1. } else { 1. };
        self.degree + sign * (self.minute / 60. + self.second / 3_600.)
    }

    pub fn to_angle(&self) -> Angle {
        Angle::degrees(self.to_decimal_degrees())
    }

    pub fn degree(&self) -> f64 {
        self.degree
    }

    pub fn minute(&self) -> f64 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    pub fn is_negative(&self) -> bool {
        self.degree.is_sign_negative()
    }

    /// Reads `DD°MM'SS.sss"` text. Missing or malformed fields read as zero; a trailing
    /// `S` or `W` negates the degree and a trailing `N` or `E` is ignored.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim();
        let southern_or_western = s.ends_with(['S', 's', 'W', 'w']);
        let body = s.trim_end_matches(['N', 'n', 'S', 's', 'E', 'e', 'W', 'w', ' ']);

        let mut fields = [0f64; 3];
        let tokens = body
            .split(|c: char| SEPARATORS.contains(&c) || c.is_whitespace())
            .filter(|token| !token.is_empty());
        for (field, token) in fields.iter_mut().zip(tokens) {
            match token.parse::<f64>() {
                Ok(v) => *field = v,
                Err(e) => log::warn!("ignoring malformed field {token:?} in {s:?}: {e}"),
            }
        }

        let [mut degree, minute, second] = fields;
        if southern_or_western {
            degree = -degree;
        }
        Self {
            degree,
            minute,
            second,
        }
    }

    /// Formats as `DD°MM'SS.sss"` with the seconds rounded to `precision` decimals,
    /// at most [`Dms::MAX_PRECISION`].
    pub fn to_string_with(&self, precision: usize, show_sign: bool) -> String {
        let precision = precision.min(Self::MAX_PRECISION);
        let scale = 10f64.powi(precision as i32);
        let mut second = (self.second * scale).round() / scale;
        let mut minute = self.minute;
        let mut degree = self.degree.abs();
        if second >= 60. {
            second -= 60.;
            minute += 1.;
        }
        if minute >= 60. {
            minute -= 60.;
            degree += 1.;
        }
        let sign = if show_sign && self.is_negative() {
            "-"
        } else {
            ""
        };
        let width = if precision > 0 { precision + 3 } else { 2 };
        format!(
            "{}{:.0}°{:02.0}'{:0width$.precision$}\"",
            sign,
            degree,
            minute,
            second,
            width = width,
            precision = precision
        )
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_string_with(f.precision().unwrap_or(0), f.sign_plus()))
    }
}

impl From<Angle> for Dms {
    fn from(angle: Angle) -> Self {
        Self::from_angle(angle)
    }
}

impl FromStr for Dms {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_half_degrees() {
        let dms = Dms::from_decimal_degrees(20.5);
        assert_eq!(dms, Dms::new(20., 30., 0.));
        assert_eq!(dms.to_string(), "20°30'00\"");
    }

    #[test]
    fn test_negative_fraction() {
        let dms = Dms::from_decimal_degrees(-43.6474);
        assert_abs_diff_eq!(dms.degree(), -43.);
        assert_abs_diff_eq!(dms.minute(), 38.);
        assert_abs_diff_eq!(dms.second(), 50.64, epsilon = 1e-6);
        assert_eq!(dms.to_string_with(3, false), "43°38'50.640\"");
        assert_eq!(dms.to_string_with(0, false), "43°38'51\"");
        assert_eq!(dms.to_string_with(1, true), "-43°38'50.6\"");
        assert_eq!(format!("{:+.2}", dms), "-43°38'50.64\"");
    }

    #[test]
    fn test_negative_zero_degree() {
        let dms = Dms::from_decimal_degrees(-0.5);
        assert!(dms.is_negative());
        assert_abs_diff_eq!(dms.to_decimal_degrees(), -0.5);
        assert_eq!(dms.to_string_with(0, true), "-0°30'00\"");
    }

    #[test]
    fn test_seconds_carry() {
        let dms = Dms::new(10., 59., 59.9996);
        assert_eq!(dms.to_string_with(3, false), "11°00'00.000\"");
        assert_eq!(dms.to_string(), "11°00'00\"");
    }

    #[test]
    fn test_precision_is_clamped() {
        let dms = Dms::new(10., 5., 30.);
        let text = dms.to_string_with(400, false);
        assert_eq!(text, dms.to_string_with(Dms::MAX_PRECISION, false));
        assert_eq!(text, "10°05'30.000000000000000\"");
        assert!(!format!("{:.4000}", dms).contains("NaN"));
    }

    #[test]
    fn test_round_trip() {
        for d in [-179.99, -90.25, -1.5, -0.01, 0., 0.75, 45.123456, 179.5] {
            assert_abs_diff_eq!(
                Dms::from_decimal_degrees(d).to_decimal_degrees(),
                d,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_parse() {
        let dms: Dms = "43°38'50.64\"S".parse().unwrap();
        assert_eq!(dms, Dms::new(-43., 38., 50.64));
        let dms: Dms = "122°25'W".parse().unwrap();
        assert_eq!(dms, Dms::new(-122., 25., 0.));
        let dms: Dms = "12°30'00\" N".parse().unwrap();
        assert_eq!(dms, Dms::new(12., 30., 0.));
    }

    #[test]
    fn test_parse_is_lenient() {
        let dms: Dms = "12°xx'30\"".parse().unwrap();
        assert_eq!(dms, Dms::new(12., 0., 30.));
        assert_eq!("".parse::<Dms>().unwrap(), Dms::default());
    }

    #[test]
    fn test_angle_round_trip() {
        let angle = Angle::degrees(-12.25);
        assert_abs_diff_eq!(Dms::from(angle).to_angle(), angle, epsilon = 1e-12);
    }
}
