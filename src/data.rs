// src/data.rs
//
// Flight table rows and the per-aircraft collection they are gathered into.
//
// - FlightRecord: one 7-cell row of the live flights table.
// - AircraftDataset: every record scraped for one aircraft code, in page order.
// - MeanDuration: what survives of a dataset once it has been summarized.

/// Column headers, in the order the site lays them out.
pub const COLUMNS: [&str; 7] = ["ID", "TYPE", "ORIGIN", "DEST", "DEPT", "ETA", "ETE"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightRecord {
    pub ident: String,
    pub aircraft_type: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    /// Estimated time enroute, `hh:mm`; empty when the site has none.
    pub ete: String,
}

impl FlightRecord {
    /// Build from raw cells in column order. Anything but exactly 7 cells is rejected.
    pub fn from_cells(cells: Vec<String>) -> Option<Self> {
        let [ident, aircraft_type, origin, destination, departure, arrival, ete]: [String; 7] =
            cells.try_into().ok()?;
        Some(Self { ident, aircraft_type, origin, destination, departure, arrival, ete })
    }

    pub fn cells(&self) -> [&str; 7] {
        [
            &self.ident,
            &self.aircraft_type,
            &self.origin,
            &self.destination,
            &self.departure,
            &self.arrival,
            &self.ete,
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AircraftDataset {
    pub code: String,
    pub records: Vec<FlightRecord>,
}

impl AircraftDataset {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), records: Vec::new() }
    }

    /// Append one page worth of records. Datasets only ever grow.
    pub fn extend(&mut self, page: Vec<FlightRecord>) {
        self.records.extend(page);
    }

    #[inline] pub fn len(&self) -> usize { self.records.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

/// Mean flight time for one aircraft code. `None` marks a type with no usable ETE.
#[derive(Clone, Debug, PartialEq)]
pub struct MeanDuration {
    pub code: String,
    pub minutes: Option<f64>,
}
