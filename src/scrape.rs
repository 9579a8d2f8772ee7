// src/scrape.rs
//
// Pagination over the live aircraft-type listing. The site shows PAGE_SIZE
// rows per page; we keep asking for the next offset until a page comes back
// with no flights.

use crate::{
    config::consts::{ORDER_SUFFIX, PAGE_SIZE},
    core::net::PageSource,
    data::{AircraftDataset, FlightRecord},
    error::{Result, ScrapeError},
    specs::flights,
};

/// First page for a code: `<base>/<CODE>`.
pub fn first_page_url(base_url: &str, code: &str) -> String {
    join!(base_url.trim_end_matches('/'), "/", code)
}

/// Later pages: `<base>/<CODE>?;offset=<N>;order=actualdeparturetime;sort=DESC`.
pub fn page_url(base_url: &str, code: &str, offset: usize) -> String {
    format!("{}?;offset={}{}", first_page_url(base_url, code), offset, ORDER_SUFFIX)
}

fn fetch_page(source: &mut dyn PageSource, url: &str) -> Result<Vec<FlightRecord>> {
    let html = source.fetch(url)?;
    let records = flights::parse_table(&html).map_err(|e| match e {
        ScrapeError::TableNotFound => ScrapeError::MalformedPage { url: s!(url) },
        other => other,
    })?;
    logd!("{url}: {} record(s)", records.len());
    Ok(records)
}

/// Collect every flight listed for `code`, in page order.
///
/// Stops on the first empty page; an empty first page ends the collection
/// without asking for offset 20. There is no page cap: a source that never
/// returns an empty page keeps this looping.
pub fn collect_all(
    source: &mut dyn PageSource,
    base_url: &str,
    code: &str,
) -> Result<AircraftDataset> {
    let mut dataset = AircraftDataset::new(code);

    let first = fetch_page(source, &first_page_url(base_url, code))?;
    let mut requests = 1;

    if !first.is_empty() {
        dataset.extend(first);

        let mut offset = PAGE_SIZE;
        loop {
            let page = fetch_page(source, &page_url(base_url, code, offset))?;
            requests += 1;
            if page.is_empty() {
                break;
            }
            dataset.extend(page);
            offset += PAGE_SIZE;
        }
    }

    logd!("{code}: {} record(s) after {requests} request(s)", dataset.len());
    Ok(dataset)
}
