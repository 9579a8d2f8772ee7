// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// One row of the fixed aircraft table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AircraftType {
    pub name: &'static str,
    pub code: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// `https://<host>/live/aircrafttype`, without trailing slash
    pub base_url: String,
    /// Where `<CODE>_flight_data.csv` files go
    pub out_dir: PathBuf,
    pub aircraft: Vec<AircraftType>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            aircraft: AIRCRAFT.to_vec(),
        }
    }
}
