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
use crate::{Prefix, Quantity, TimeUnit};

pub type Time = Quantity<TimeUnit>;

impl Time {
    pub fn seconds(v: f64) -> Self {
        Self::new(v, TimeUnit::Second)
    }

    pub fn milliseconds(v: f64) -> Self {
        Self::prefixed(v, TimeUnit::Second, Prefix::Milli)
    }

    pub fn microseconds(v: f64) -> Self {
        Self::prefixed(v, TimeUnit::Second, Prefix::Micro)
    }

    pub fn nanoseconds(v: f64) -> Self {
        Self::prefixed(v, TimeUnit::Second, Prefix::Nano)
    }

    pub fn minutes(v: f64) -> Self {
        Self::new(v, TimeUnit::Minute)
    }

    pub fn hours(v: f64) -> Self {
        Self::new(v, TimeUnit::Hour)
    }

    pub fn in_seconds(&self) -> f64 {
        self.get(TimeUnit::Second, Prefix::Base)
    }

    pub fn in_milliseconds(&self) -> f64 {
        self.get(TimeUnit::Second, Prefix::Milli)
    }

    pub fn in_microseconds(&self) -> f64 {
        self.get(TimeUnit::Second, Prefix::Micro)
    }

    pub fn in_nanoseconds(&self) -> f64 {
        self.get(TimeUnit::Second, Prefix::Nano)
    }

    pub fn in_minutes(&self) -> f64 {
        self.get(TimeUnit::Minute, Prefix::Base)
    }

    pub fn in_hours(&self) -> f64 {
        self.get(TimeUnit::Hour, Prefix::Base)
    }
}

#[macro_export]
macro_rules! seconds {
    ($num:expr) => {
        $crate::Time::seconds($num as f64)
    };
}

#[macro_export]
macro_rules! milliseconds {
    ($num:expr) => {
        $crate::Time::milliseconds($num as f64)
    };
}

#[macro_export]
macro_rules! minutes {
    ($num:expr) => {
        $crate::Time::minutes($num as f64)
    };
}

#[macro_export]
macro_rules! hours {
    ($num:expr) => {
        $crate::Time::hours($num as f64)
    };
}
