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
use crate::UnitError;
use std::{fmt, str::FromStr};

/// Metric and binary multipliers that may be attached to any unit.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Prefix {
    #[default]
    Base,
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl Prefix {
    pub const ALL: &'static [Prefix] = &[
        Self::Base,
        Self::Yocto,
        Self::Zepto,
        Self::Atto,
        Self::Femto,
        Self::Pico,
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
        Self::Zetta,
        Self::Yotta,
        Self::Kibi,
        Self::Mebi,
        Self::Gibi,
        Self::Tebi,
        Self::Pebi,
        Self::Exbi,
        Self::Zebi,
        Self::Yobi,
    ];

    pub fn all() -> &'static [Prefix] {
        Self::ALL
    }

    /// The multiplier from a prefixed value to the unprefixed one, e.g. 1e3 for kilo.
    pub fn as_factor(self) -> f64 {
        match self {
            Self::Base => 1.,
            Self::Yocto => 1e-24,
            Self::Zepto => 1e-21,
            Self::Atto => 1e-18,
            Self::Femto => 1e-15,
            Self::Pico => 1e-12,
            Self::Nano => 1e-9,
            Self::Micro => 1e-6,
            Self::Milli => 1e-3,
            Self::Kilo => 1e3,
            Self::Mega => 1e6,
            Self::Giga => 1e9,
            Self::Tera => 1e12,
            Self::Peta => 1e15,
            Self::Exa => 1e18,
            Self::Zetta => 1e21,
            Self::Yotta => 1e24,
            Self::Kibi => 2f64.powi(10),
            Self::Mebi => 2f64.powi(20),
            Self::Gibi => 2f64.powi(30),
            Self::Tebi => 2f64.powi(40),
            Self::Pebi => 2f64.powi(50),
            Self::Exbi => 2f64.powi(60),
            Self::Zebi => 2f64.powi(70),
            Self::Yobi => 2f64.powi(80),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Yocto => "y",
            Self::Zepto => "z",
            Self::Atto => "a",
            Self::Femto => "f",
            Self::Pico => "p",
            Self::Nano => "n",
            Self::Micro => "u",
            Self::Milli => "m",
            Self::Kilo => "k",
            Self::Mega => "M",
            Self::Giga => "G",
            Self::Tera => "T",
            Self::Peta => "P",
            Self::Exa => "E",
            Self::Zetta => "Z",
            Self::Yotta => "Y",
            Self::Kibi => "Ki",
            Self::Mebi => "Mi",
            Self::Gibi => "Gi",
            Self::Tebi => "Ti",
            Self::Pebi => "Pi",
            Self::Exbi => "Ei",
            Self::Zebi => "Zi",
            Self::Yobi => "Yi",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Yocto => "yocto",
            Self::Zepto => "zepto",
            Self::Atto => "atto",
            Self::Femto => "femto",
            Self::Pico => "pico",
            Self::Nano => "nano",
            Self::Micro => "micro",
            Self::Milli => "milli",
            Self::Kilo => "kilo",
            Self::Mega => "mega",
            Self::Giga => "giga",
            Self::Tera => "tera",
            Self::Peta => "peta",
            Self::Exa => "exa",
            Self::Zetta => "zetta",
            Self::Yotta => "yotta",
            Self::Kibi => "kibi",
            Self::Mebi => "mebi",
            Self::Gibi => "gibi",
            Self::Tebi => "tebi",
            Self::Pebi => "pebi",
            Self::Exbi => "exbi",
            Self::Zebi => "zebi",
            Self::Yobi => "yobi",
        }
    }

    pub fn is_binary(self) -> bool {
        self >= Self::Kibi
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// Symbols are case sensitive (m is milli, M is mega); names are not.
impl FromStr for Prefix {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "µ" || s == "μ" {
            return Ok(Self::Micro);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|prefix| prefix.symbol() == s || prefix.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnitError::UnknownPrefix(s.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_base_is_unity() {
        assert_eq!(Prefix::default(), Prefix::Base);
        assert_eq!(Prefix::Base.as_factor(), 1.);
        assert_eq!(Prefix::Base.to_string(), "");
    }

    #[test]
    fn test_prefix_factors() {
        assert_abs_diff_eq!(Prefix::Kilo.as_factor(), 1_000.);
        assert_abs_diff_eq!(
            Prefix::Milli.as_factor() * Prefix::Kilo.as_factor(),
            1.,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(Prefix::Kibi.as_factor(), 1_024.);
        assert_abs_diff_eq!(Prefix::Mebi.as_factor(), 1_048_576.);
        assert!(Prefix::Yobi.is_binary());
        assert!(!Prefix::Yotta.is_binary());
    }

    #[test]
    fn test_prefix_parse() {
        assert_eq!("m".parse::<Prefix>().unwrap(), Prefix::Milli);
        assert_eq!("M".parse::<Prefix>().unwrap(), Prefix::Mega);
        assert_eq!("KILO".parse::<Prefix>().unwrap(), Prefix::Kilo);
        assert_eq!("Gi".parse::<Prefix>().unwrap(), Prefix::Gibi);
        assert_eq!("µ".parse::<Prefix>().unwrap(), Prefix::Micro);
        assert_eq!("".parse::<Prefix>().unwrap(), Prefix::Base);
        assert!(matches!(
            "hecto".parse::<Prefix>(),
            Err(UnitError::UnknownPrefix(_))
        ));
    }

    #[test]
    fn test_symbols_round_trip() {
        for prefix in Prefix::ALL {
            assert_eq!(prefix.symbol().parse::<Prefix>().unwrap(), *prefix);
        }
    }
}
