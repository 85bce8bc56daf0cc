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
use anyhow::Result;
use quantity::Time;
use std::time::Instant;
use timestamp::Timestamp;

#[test]
fn test_now_is_monotonic_enough() {
    let a = Timestamp::now();
    let b = Timestamp::default();
    assert!(b >= a);
}

#[test]
fn test_sleep_until_past_returns_immediately() -> Result<()> {
    let past = (Timestamp::now() - Time::seconds(10.))?;
    let start = Instant::now();
    past.sleep_until();
    assert!(start.elapsed().as_millis() < 100);
    Ok(())
}

#[test]
fn test_sleep_until_future() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let target = (Timestamp::now() + Time::milliseconds(30.))?;
    target.sleep_until();
    assert!(Timestamp::now() >= target);
    Ok(())
}

#[test]
fn test_offsets_from_now_are_exact() -> Result<()> {
    let now = Timestamp::now();
    let later = (now + Time::milliseconds(1.))?;
    assert_eq!(later.as_nanoseconds() - now.as_nanoseconds(), 1_000_000);
    let earlier = (later - Time::nanoseconds(1_000_001.))?;
    assert_eq!(earlier.as_nanoseconds(), now.as_nanoseconds() - 1);
    assert_eq!(now.offset(Time::seconds(0.))?, now);
    Ok(())
}

#[test]
fn test_round_trip_text() -> Result<()> {
    let now = Timestamp::now();
    let back: Timestamp = now.to_iso8601_string().parse()?;
    assert_eq!(back, now);
    Ok(())
}
