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

// Declares the closed enumeration of units for one dimension and implements `Unit` for it.
//
// Each member lists its factor to the dimension's base unit, its display symbol, its name,
// and any further aliases it may be parsed from. Symbols match exactly; names ignore ASCII case.
//
// The reciprocal clause names the unit family produced by `scalar / quantity`: `Self`
// negates the power in place, any other family receives the value in its base unit.
#[macro_export]
macro_rules! unit_enum {
    (@reciprocal Self, $scale:ident, $quantity:ident) => {
        $quantity.inverted($scale)
    };

    (@reciprocal $Other:ident, $scale:ident, $quantity:ident) => {
        $crate::Quantity::<$Other>::from_base($scale / $quantity.get_base(), $quantity.power())
    };

    (
        $(#[$meta:meta])*
        pub enum $Name:ident in $Dim:ident, base $Base:ident, reciprocal $Recip:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => ($factor:expr, $symbol:literal, $name:literal $(, $alias:literal)*)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant,
            )+
        }

        impl $Name {
            pub const ALL: &'static [$Name] = &[$($Name::$Variant,)+];
        }

        impl $crate::Unit for $Name {
            const DIMENSION: $crate::Dimension = $crate::Dimension::$Dim;
            const BASE: Self = $Name::$Base;
            type Reciprocal = $Recip;

            fn to_base(self) -> f64 {
                match self {
                    $($Name::$Variant => $factor,)+
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    $($Name::$Variant => $symbol,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($Name::$Variant => $name,)+
                }
            }

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn reciprocal(
                scale: f64,
                quantity: $crate::Quantity<Self>,
            ) -> $crate::Quantity<Self::Reciprocal> {
                $crate::unit_enum!(@reciprocal $Recip, scale, quantity)
            }

            fn into_dynamic(quantity: $crate::Quantity<Self>) -> $crate::DynamicQuantity {
                $crate::DynamicQuantity::$Dim(quantity)
            }

            fn from_dynamic(quantity: $crate::DynamicQuantity) -> Option<$crate::Quantity<Self>> {
                match quantity {
                    $crate::DynamicQuantity::$Dim(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str($crate::Unit::symbol(*self))
            }
        }

        impl ::std::str::FromStr for $Name {
            type Err = $crate::UnitError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s == $symbol
                        || s.eq_ignore_ascii_case($name)
                        $(|| s.eq_ignore_ascii_case($alias))*
                    {
                        return Ok($Name::$Variant);
                    }
                )+
                Err($crate::UnitError::UnknownUnit {
                    dimension: $crate::Dimension::$Dim,
                    text: s.to_owned(),
                })
            }
        }
    };
}
