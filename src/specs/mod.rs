// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how one remote page lays out its data and how to read it
//! into typed rows. Specs are pure: they take HTML text and return records.
//!
//! ## What does **not** live here
//! - **Fetching and pagination**: `scrape::collect_all` decides which pages
//!   to request and when to stop.
//! - **Persistence and reporting**: see `file`, `stats` and `gui::chart`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_all → core::net::PageSource::fetch
//!                             ↘ specs::flights::parse_table
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against small HTML fixtures.
pub mod flights;
