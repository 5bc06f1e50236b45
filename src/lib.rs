//! # skupair
//!
//! Finds the SKU pairs that are most often bought together in an order log.
//!
//! ## Usage
//!
//! ```bash
//! skupair [orders.csv] [total] [--format json] [-o pairs.csv]
//! ```
//!
//! ## Modules
//!
//! - `app` - Process setup: logging, working directory, fatal error reporting
//! - `cli` - Argument parsing and the command-line run
//! - `config` - Layered run configuration (defaults, TOML file, env, flags)
//! - `cooccurrence` - SKU index, co-occurrence matrix and pair ranking
//! - `error` - Error types, codes and exit statuses
//! - `io` - Row sources and sinks (delimited text, JSON, in-memory)
//! - `pipeline` - The read, count, rank and write run
pub mod app;
pub mod cli;
pub mod config;
pub mod cooccurrence;
pub mod error;
pub mod io;
pub mod pipeline;
