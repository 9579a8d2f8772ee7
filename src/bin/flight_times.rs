// src/bin/flight_times.rs
use color_eyre::eyre::WrapErr;

use flight_times::{
    config::options::RunOptions,
    core::HttpSource,
    gui,
    progress::StdoutProgress,
    runner,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    flight_times::log::init();

    let opts = RunOptions::default();
    let mut source = HttpSource::new().wrap_err("building HTTP client")?;
    let mut progress = StdoutProgress::new();

    let summary = runner::run(&opts, &mut source, Some(&mut progress))
        .wrap_err("scrape run failed")?;

    for m in &summary.means {
        match m.minutes {
            Some(min) => println!("{}: {min:.1} min", m.code),
            None => println!("{}: no data", m.code),
        }
    }

    gui::render_chart(&summary.means).wrap_err("showing chart")?;
    Ok(())
}
