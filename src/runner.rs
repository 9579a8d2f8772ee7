// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::RunOptions,
    core::net::PageSource,
    data::MeanDuration,
    error::Result,
    file::write_dataset_csv,
    progress::Progress,
    scrape::collect_all,
    stats::summarize,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    /// One entry per configured aircraft type, in configuration order.
    pub means: Vec<MeanDuration>,
    pub files_written: Vec<PathBuf>,
}

/// Scrape, dump and summarize every configured aircraft type, one after another.
/// `progress` can be None (no status output) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    source: &mut dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.aircraft.len());
    }

    let mut means = Vec::with_capacity(opts.aircraft.len());
    let mut files_written = Vec::with_capacity(opts.aircraft.len());

    for ac in &opts.aircraft {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Collecting data for {}: {}", ac.name, ac.code));
        }
        logf!("Collecting {} ({})", ac.code, ac.name);

        let dataset = collect_all(source, &opts.base_url, ac.code)
            .inspect_err(|e| loge!("{}: {e}", ac.code))?;
        files_written.push(write_dataset_csv(&opts.out_dir, &dataset)?);

        let mean = summarize(&dataset);
        match mean.minutes {
            Some(m) => logf!("{}: mean ETE {m:.1} min over {} record(s)", ac.code, dataset.len()),
            None => logw!("{}: no usable ETE in {} record(s); no mean", ac.code, dataset.len()),
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(ac.code, dataset.len());
        }
        means.push(mean);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { means, files_written })
}
