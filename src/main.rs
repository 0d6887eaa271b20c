#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use redadeg::{cli, message::SummaryMessage, package::read_package, utils};

#[macro_use]
extern crate redadeg;

/// Demo sensor feed, one `(tag, values)` package per workout.
const PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    dlog!("mode=print packages={}", PACKAGES.len());

    let mut failed = 0usize;
    for &(tag, data) in PACKAGES {
        let workout = match read_package(tag, data) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!(tag = %tag, err = %e, "skipping sensor package");
                failed += 1;
                continue;
            }
        };

        dlog!(
            "package tag={tag} fields={} wall={}",
            data.len(),
            utils::format_hms(workout.duration_h())
        );

        println!("{}", SummaryMessage::from_workout(&workout));
    }

    if failed > 0 {
        anyhow::bail!("{failed} sensor package(s) could not be decoded");
    }

    Ok(())
}
