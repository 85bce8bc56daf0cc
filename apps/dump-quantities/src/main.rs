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
use quantity::{
    AccelerationUnit, Angle, AngleUnit, AngularVelocityUnit, Bearing, BearingReference,
    DensityUnit, Distance, DistanceUnit, Dms, DynamicQuantity, Frequency, FrequencyUnit,
    Latitude, Longitude, Prefix, SensitivityUnit, Speed, SpeedUnit, Time, TimeUnit, Unit,
};
use structopt::StructOpt;
use timestamp::Timestamp;

/// Print the unit and prefix tables and evaluate sample quantity arithmetic
#[derive(Debug, StructOpt)]
struct Opt {
    /// Print every unit with its symbol and factor to the base unit
    #[structopt(short, long)]
    units: bool,

    /// Print every metric and binary prefix
    #[structopt(short, long)]
    prefixes: bool,

    /// Evaluate a handful of sample expressions
    #[structopt(short, long)]
    samples: bool,

    /// Decimal places used when printing seconds of arc
    #[structopt(long, default_value = "3")]
    precision: usize,

    /// Decimal degrees to print as degrees, minutes and seconds
    #[structopt(long, allow_hyphen_values = true)]
    dms: Vec<f64>,
}

fn dump_units<U: Unit>() {
    println!("{} (base: {})", U::DIMENSION, U::BASE.name());
    for unit in U::all() {
        println!("  {:<16} {:<30} {:e}", unit.symbol(), unit.name(), unit.to_base());
    }
}

fn dump_prefixes() {
    println!("prefixes");
    for prefix in Prefix::ALL {
        println!(
            "  {:<4} {:<8} {:e}",
            prefix.symbol(),
            prefix.name(),
            prefix.as_factor()
        );
    }
}

fn show(label: &str, value: impl std::fmt::Display) {
    println!("  {:<32} {}", label, value);
}

fn dump_samples(precision: usize) -> Result<()> {
    println!("samples");
    show("5000 m + 5 km", (Distance::meters(5_000.) + Distance::kilometers(5.))?);
    show("500 ms + 1 s", (Time::milliseconds(500.) + Time::seconds(1.))?);

    let run = (Speed::knots(12.) * Time::minutes(30.))?;
    show("12 kt * 30 min", run);
    show("  in nautical miles", Distance::try_from(run)?.in_nautical_miles());

    let v = (Distance::kilometers(1.5) / Time::minutes(1.))?;
    show("1.5 km / 1 min", v);
    show("  in knots", Speed::try_from(v)?.in_knots());

    show("1 / 250 ms", 1. / Time::milliseconds(250.));
    show("1 / 3000 RPM", 1. / Frequency::rpm(3_000.));
    let area = (Distance::meters(3.) * Distance::meters(3.))?;
    show("(3 m)^2", area);
    show("(3 m)^2 / 2 m", (area / DynamicQuantity::from(Distance::meters(2.)))?);

    match Distance::meters(1.) * Time::seconds(1.) {
        Ok(v) => show("1 m * 1 s", v),
        Err(e) => show("1 m * 1 s", e),
    }

    let lat = Latitude::from_degrees(-43.6474)?;
    let lon = Longitude::from_degrees(172.6362)?;
    println!(
        "  {:<32} {:.*} {:.*}",
        "position",
        precision,
        lat,
        precision,
        lon
    );
    let heading = Bearing::new(Angle::degrees(350.), BearingReference::Ncw)?;
    let course = Bearing::from_degrees(15., BearingReference::Ncw);
    show("course - heading", course - heading);
    show("now", Timestamp::now());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let everything = !(opt.units || opt.prefixes || opt.samples) && opt.dms.is_empty();
    log::debug!("{:?}", opt);

    if opt.units || everything {
        dump_units::<DistanceUnit>();
        dump_units::<TimeUnit>();
        dump_units::<FrequencyUnit>();
        dump_units::<SpeedUnit>();
        dump_units::<AccelerationUnit>();
        dump_units::<AngleUnit>();
        dump_units::<AngularVelocityUnit>();
        dump_units::<DensityUnit>();
        dump_units::<SensitivityUnit>();
    }
    if opt.prefixes || everything {
        dump_prefixes();
    }
    if opt.samples || everything {
        dump_samples(opt.precision)?;
    }
    for degrees in &opt.dms {
        let dms = Dms::from_decimal_degrees(*degrees);
        println!("{} => {}", degrees, dms.to_string_with(opt.precision, true));
    }

    Ok(())
}
