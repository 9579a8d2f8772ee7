// src/core/net.rs
//
// Page fetching. Pagination talks to a `PageSource`, so the live HTTP client
// can be swapped for canned pages in tests.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

pub trait PageSource {
    /// Full HTML body for `url`. Any failure is fatal to the run.
    fn fetch(&mut self, url: &str) -> Result<String>;
}

/// HTTPS GET with the client's default timeouts; no retries.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpSource {
    fn fetch(&mut self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        logd!("GET {url} -> {status}");

        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp.text()?)
    }
}
