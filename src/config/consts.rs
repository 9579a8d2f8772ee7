// src/config/consts.rs
use super::options::AircraftType;

// Net config
pub const BASE_URL: &str = "https://flightaware.com/live/aircrafttype";
pub const USER_AGENT: &str = concat!("flight_times/", env!("CARGO_PKG_VERSION"));

// Pagination: the site serves 20 rows per page
pub const PAGE_SIZE: usize = 20;
pub const ORDER_SUFFIX: &str = ";order=actualdeparturetime;sort=DESC";

// Scrape
pub const TABLE_CLASSES: [&str; 2] = ["prettyTable", "fullWidth"];

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const CSV_SUFFIX: &str = "_flight_data.csv";

pub const AIRCRAFT: [AircraftType; 4] = [
    AircraftType { name: "Pilatus PC-12", code: "PC12" },
    AircraftType { name: "Cessna Caravan", code: "C208" },
    AircraftType { name: "Beechcraft Super King Air 200", code: "BE20" },
    AircraftType { name: "Cessna Citation Excel/XLS", code: "C56X" },
];

// Chart
pub const CHART_TITLE: &str = "Average Flight Time by Aircraft";
pub const X_LABEL: &str = "Aircraft Code";
pub const Y_LABEL: &str = "Average Flight Time (Minutes)";
pub const BAR_COLORS: [[u8; 3]; 4] = [
    [255, 0, 0],   // red
    [0, 128, 0],   // green
    [0, 0, 255],   // blue
    [255, 165, 0], // orange
];
pub const BAR_ALPHA: f32 = 0.75;
pub const BAR_WIDTH: f64 = 0.8;
