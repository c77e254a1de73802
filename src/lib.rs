//! Picklist - PDF pick list extraction library.
//!
//! The library exposes the token classifier, the poppler-backed extractor,
//! and the scan service that ties them together, so the pipeline can be
//! driven without the CLI or web server.

pub mod classify;
pub mod cli;
pub mod config;
pub mod extract;
pub mod models;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;
