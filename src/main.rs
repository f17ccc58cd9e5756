//! Headless simulation runner (default binary).
//!
//! Plays a scripted session and prints a one-line summary. See [`stacker::sim`] for the
//! environment variables it reads.

use anyhow::Result;

use stacker::sim::{self, SimSettings};

fn main() -> Result<()> {
    let settings = SimSettings::from_env()?;
    stacker::logging::init(settings.log_level)?;

    let report = sim::run(&settings)?;
    println!(
        "ticks={} pieces={} lines={} level={} game_over={}",
        report.ticks, report.pieces_locked, report.lines, report.level, report.game_over
    );
    Ok(())
}
