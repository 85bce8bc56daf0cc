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
use quantity::UnitError;
use thiserror::Error;

pub type Result<T, E = TimestampError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("failed to parse timestamp: {0}")]
    Parse(#[from] chrono::ParseError),

    /// The instant cannot be represented as nanoseconds in an i64.
    #[error("timestamp out of range: {0}")]
    OutOfRange(String),

    #[error(transparent)]
    Unit(#[from] UnitError),
}
