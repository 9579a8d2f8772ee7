// src/specs/flights.rs
//! Spec for the live aircraft-type page (`/live/aircrafttype/<CODE>`).
//!
//! The flights sit in the first `<table class="prettyTable fullWidth">`. Data
//! rows have exactly 7 `<td>` cells: ID, TYPE, ORIGIN, DEST, DEPT, ETA, ETE.
//! Title, header and filler rows have some other count and are skipped.

use scraper::Html;

use crate::config::consts::TABLE_CLASSES;
use crate::core::html::{elements_named, has_classes, text_of};
use crate::data::FlightRecord;
use crate::error::{Result, ScrapeError};

/// Parse every 7-cell row of the flights table, in document order.
pub fn parse_table(html: &str) -> Result<Vec<FlightRecord>> {
    let doc = Html::parse_document(html);

    let table = elements_named(doc.root_element(), "table")
        .find(|t| has_classes(t, &TABLE_CLASSES))
        .ok_or(ScrapeError::TableNotFound)?;

    let records = elements_named(table, "tr")
        .filter_map(|tr| {
            let cells: Vec<String> = elements_named(tr, "td").map(|td| text_of(&td)).collect();
            FlightRecord::from_cells(cells)
        })
        .collect();

    Ok(records)
}
