// tests/pipeline_e2e.rs
mod common;

use std::fs;

use common::{flights_page, tmp_dir, ScriptedSource};
use flight_times::config::consts::AIRCRAFT;
use flight_times::config::options::{AircraftType, RunOptions};
use flight_times::file::read_dataset_csv;
use flight_times::gui::ChartModel;
use flight_times::progress::Progress;
use flight_times::runner;

#[derive(Default)]
struct Recorder {
    total: usize,
    lines: Vec<String>,
    done: Vec<(String, usize)>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn item_done(&mut self, code: &str, records: usize) { self.done.push((code.to_string(), records)); }
    fn finish(&mut self) { self.finished = true; }
}

fn opts_for(aircraft: Vec<AircraftType>, dir: &std::path::Path) -> RunOptions {
    RunOptions {
        base_url: "https://example.test/live/aircrafttype".to_string(),
        out_dir: dir.to_path_buf(),
        aircraft,
    }
}

#[test]
fn c208_three_pages_end_to_end() {
    let dir = tmp_dir("e2e_c208");
    let opts = opts_for(vec![AircraftType { name: "Cessna Caravan", code: "C208" }], &dir);
    let mut src = ScriptedSource::new(vec![
        flights_page("A", 20),
        flights_page("B", 20),
        flights_page("X", 0),
    ]);
    let mut rec = Recorder::default();

    let summary = runner::run(&opts, &mut src, Some(&mut rec)).unwrap();

    assert_eq!(src.requested.len(), 3);

    // CSV: header + 40 data rows, all records kept (even those without ETE)
    assert_eq!(summary.files_written, vec![dir.join("C208_flight_data.csv")]);
    let text = fs::read_to_string(&summary.files_written[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 41);
    assert_eq!(lines[0], ",ID,TYPE,ORIGIN,DEST,DEPT,ETA,ETE");
    assert!(lines[1].starts_with("0,A0,C208,"));
    assert!(lines[40].starts_with("39,B19,C208,"));

    let back = read_dataset_csv(&summary.files_written[0], "C208").unwrap();
    assert_eq!(back.len(), 40);

    // Mean over rows that have an ETE: per page of 20, rows 2,5,8,.. are blank
    let expected: Vec<f64> = (0u32..20)
        .filter(|i| i % 3 != 2)
        .map(|i| f64::from((i % 2) * 60 + 15 + i))
        .collect();
    let expected = expected.iter().sum::<f64>() / expected.len() as f64;

    assert_eq!(summary.means.len(), 1);
    assert_eq!(summary.means[0].code, "C208");
    let got = summary.means[0].minutes.unwrap();
    assert!((got - expected).abs() < 1e-9, "{got} vs {expected}");

    assert_eq!(rec.total, 1);
    assert_eq!(rec.lines, vec!["Collecting data for Cessna Caravan: C208"]);
    assert_eq!(rec.done, vec![("C208".to_string(), 40)]);
    assert!(rec.finished);
}

#[test]
fn every_configured_type_gets_an_entry_in_order() {
    let dir = tmp_dir("e2e_all");
    let opts = opts_for(AIRCRAFT.to_vec(), &dir);
    let mut src = ScriptedSource::new(vec![
        // PC12: one page
        flights_page("P", 4), flights_page("X", 0),
        // C208: nothing at all
        flights_page("X", 0),
        // BE20: only blank ETEs
        flights_page("B", 1)
            .replace("<td>0:15</td>", "<td></td>"),
        flights_page("X", 0),
        // C56X: two pages
        flights_page("C", 20), flights_page("D", 2), flights_page("X", 0),
    ]);

    let summary = runner::run(&opts, &mut src, None).unwrap();

    let codes: Vec<&str> = summary.means.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, ["PC12", "C208", "BE20", "C56X"]);
    assert!(summary.means[0].minutes.is_some());
    assert_eq!(summary.means[1].minutes, None);
    assert_eq!(summary.means[2].minutes, None);
    assert!(summary.means[3].minutes.is_some());
    assert_eq!(summary.files_written.len(), 4);

    // Empty dataset still gets a header-only CSV
    let c208 = fs::read_to_string(dir.join("C208_flight_data.csv")).unwrap();
    assert_eq!(c208.lines().count(), 1);

    let chart = ChartModel::from_means(&summary.means);
    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["PC12", "C56X"]);
}

#[test]
fn failure_aborts_the_run() {
    let dir = tmp_dir("e2e_fail");
    let opts = opts_for(AIRCRAFT.to_vec(), &dir);
    let mut src = ScriptedSource::new(vec!["<html>maintenance</html>".to_string()]);

    assert!(runner::run(&opts, &mut src, None).is_err());
    assert_eq!(src.requested.len(), 1);
    assert!(!dir.join("PC12_flight_data.csv").exists());
}
