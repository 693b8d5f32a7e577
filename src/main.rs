//! Command-line entry point for circumpolar
//!
//! Computes great-circle distances and true-north bearings from the first
//! lat/lon pair to every following pair, and annotates the text report with
//! the magnetic declination at the reference point unless `--home` is set.

use std::io;

use clap::Parser;
use log::warn;

use circumpolar::declination::{DeclinationSource, NoaaClient};
use circumpolar::{coordinates, output, DistanceUnit, GeodesyEngine, Settings};

/// CLI options
#[derive(Parser, Debug)]
#[command(name = "circumpolar", version, about)]
struct Opts {
    /// Output results as JSON
    #[clap(long)]
    json: bool,
    /// Output distances in kilometers
    #[clap(long, conflicts_with = "mile")]
    kilo: bool,
    /// Output distances in statute miles
    #[clap(long)]
    mile: bool,
    /// Stay home: don't query NOAA for declination
    #[clap(long)]
    home: bool,
    /// Sphere radius to use instead of Earth's default for the chosen unit
    #[clap(long)]
    radius: Option<f64>,
    /// Decimal lat/lon pairs, negative for S and W: latA lonA latX lonX ...
    #[clap(required = true, allow_negative_numbers = true)]
    coords: Vec<f64>,
}

impl Opts {
    fn unit(&self) -> DistanceUnit {
        if self.kilo {
            DistanceUnit::Kilometers
        } else if self.mile {
            DistanceUnit::StatuteMiles
        } else {
            DistanceUnit::NauticalMiles
        }
    }
}

fn run(opts: &Opts) -> circumpolar::Result<()> {
    let settings = Settings::new(opts.unit(), opts.radius, opts.json, opts.home);

    let locations = coordinates::from_flat_pairs(&opts.coords)?;
    let results = GeodesyEngine::compute_all(&locations, settings.radius);

    // A failed lookup degrades to "no declination", never a fatal error.
    let declination = if settings.offline {
        None
    } else {
        match NoaaClient::new().and_then(|client| client.declination(&locations[0])) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if settings.json {
        output::write_json(&mut out, &results)
    } else {
        output::write_text(&mut out, &results, &settings, declination)
    }
}

fn main() {
    env_logger::init();

    let opts = Opts::parse();
    if let Err(e) = run(&opts) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
