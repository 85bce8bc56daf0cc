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
use crate::{DynamicQuantity, Quantity};
use std::fmt::{self, Debug, Display};

pub(crate) mod acceleration;
pub(crate) mod angle;
pub(crate) mod angular_velocity;
pub(crate) mod density;
pub(crate) mod distance;
pub(crate) mod frequency;
pub(crate) mod sensitivity;
pub(crate) mod speed;
pub(crate) mod time;

/// The physical category a unit or quantity belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Dimension {
    Dimensionless,
    Distance,
    Time,
    Frequency,
    Speed,
    Acceleration,
    Angle,
    AngularVelocity,
    Density,
    Sensitivity,
}

impl Dimension {
    pub fn name(self) -> &'static str {
        match self {
            Self::Dimensionless => "dimensionless",
            Self::Distance => "distance",
            Self::Time => "time",
            Self::Frequency => "frequency",
            Self::Speed => "speed",
            Self::Acceleration => "acceleration",
            Self::Angle => "angle",
            Self::AngularVelocity => "angular velocity",
            Self::Density => "density",
            Self::Sensitivity => "sensitivity",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A closed family of units measuring one [`Dimension`].
///
/// Every member converts to the family's base unit through a plain multiplicative
/// factor; `BASE.to_base()` is always exactly 1. Implementations are generated with
/// `unit_enum!`.
pub trait Unit: Copy + Debug + Display + Eq + 'static {
    const DIMENSION: Dimension;
    const BASE: Self;

    /// Unit family produced by dividing a scalar by a quantity of this family.
    type Reciprocal: Unit;

    /// Multiplicative factor taking one of this unit to the base unit.
    fn to_base(self) -> f64;
    fn symbol(self) -> &'static str;
    fn name(self) -> &'static str;
    fn all() -> &'static [Self];

    fn base() -> Self {
        Self::BASE
    }

    fn reciprocal(scale: f64, quantity: Quantity<Self>) -> Quantity<Self::Reciprocal>;
    fn into_dynamic(quantity: Quantity<Self>) -> DynamicQuantity;
    fn from_dynamic(quantity: DynamicQuantity) -> Option<Quantity<Self>>;
}
