// tests/common/mod.rs
//
// Offline page source and HTML fixtures shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;

use flight_times::core::PageSource;
use flight_times::{Result, ScrapeError};

/// Serves queued pages in order and records every URL asked for.
/// Running out of pages is reported as a 404.
pub struct ScriptedSource {
    pages: VecDeque<String>,
    pub requested: Vec<String>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages: pages.into(), requested: Vec::new() }
    }
}

impl PageSource for ScriptedSource {
    fn fetch(&mut self, url: &str) -> Result<String> {
        self.requested.push(url.to_string());
        self.pages
            .pop_front()
            .ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 404 })
    }
}

/// A flights page with `n` data rows; idents are `<prefix>0..`.
/// Every third row has no ETE.
pub fn flights_page(prefix: &str, n: usize) -> String {
    let rows: String = (0..n)
        .map(|i| {
            let ete = if i % 3 == 2 { String::new() } else { format!("{}:{:02}", i % 2, 15 + i) };
            format!(
                "<tr><td><a href=\"/live/flight/{prefix}{i}\">{prefix}{i}</a></td>\
                 <td>C208</td><td>Origin {i}</td><td>Dest {i}</td>\
                 <td>Mon 08:{i:02}</td><td>Mon 09:{i:02}</td><td>{ete}</td></tr>"
            )
        })
        .collect();
    format!(
        "<html><body><table class=\"prettyTable fullWidth\">\
         <tr><th colspan=\"7\">Live flights</th></tr>\
         <tr><th>Ident</th><th>Type</th><th>Origin</th><th>Destination</th>\
         <th>Departure</th><th>Estimated Arrival</th><th>ETE</th></tr>\
         {rows}</table></body></html>"
    )
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("flight_times_{}", name));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}
