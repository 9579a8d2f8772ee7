// src/stats.rs
//
// Reduce a dataset to its mean estimated time enroute.

use crate::data::{AircraftDataset, MeanDuration};

/// `"h:mm"` / `"hh:mm"` to whole minutes. Empty or malformed input is `None`.
pub fn parse_ete(s: &str) -> Option<u32> {
    let (h, m) = s.trim().split_once(':')?;
    let all_digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(h) || m.len() != 2 || !all_digits(m) {
        return None;
    }
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Mean ETE in minutes over records with a usable ETE, hours included.
pub fn mean_minutes(dataset: &AircraftDataset) -> Option<f64> {
    let (sum, n) = dataset
        .records
        .iter()
        .filter_map(|r| parse_ete(&r.ete))
        .fold((0u64, 0u32), |(sum, n), m| (sum + u64::from(m), n + 1));

    (n > 0).then(|| sum as f64 / f64::from(n))
}

pub fn summarize(dataset: &AircraftDataset) -> MeanDuration {
    MeanDuration { code: dataset.code.clone(), minutes: mean_minutes(dataset) }
}
