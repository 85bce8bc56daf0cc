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
use crate::Dimension;
use std::fmt;
use thiserror::Error;

pub type Result<T, E = UnitError> = std::result::Result<T, E>;

/// Arithmetic operator named by [`UnitError::UnsupportedOperation`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum UnitError {
    /// The operands belong to different physical dimensions.
    #[error("incompatible dimensions: {lhs} and {rhs}")]
    IncompatibleDimension { lhs: Dimension, rhs: Dimension },

    /// Same dimension, but the units are raised to different powers.
    #[error("incompatible powers: {lhs} and {rhs}")]
    IncompatiblePower { lhs: f64, rhs: f64 },

    /// No derivation exists for this pairing of dimensions.
    #[error("unsupported operation: {lhs} {op} {rhs}")]
    UnsupportedOperation {
        lhs: Dimension,
        op: Operation,
        rhs: Dimension,
    },

    #[error("{kind} out of range: {radians} rad")]
    OutOfRange { kind: &'static str, radians: f64 },

    #[error("unknown {dimension} unit: {text:?}")]
    UnknownUnit { dimension: Dimension, text: String },

    #[error("unknown prefix: {0:?}")]
    UnknownPrefix(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UnitError::UnsupportedOperation {
            lhs: Dimension::Distance,
            op: Operation::Multiply,
            rhs: Dimension::Time,
        };
        assert_eq!(err.to_string(), "unsupported operation: distance * time");

        let err = UnitError::IncompatiblePower { lhs: 1., rhs: 2. };
        assert_eq!(err.to_string(), "incompatible powers: 1 and 2");
    }
}
