//! Battery report extraction and parsing.
//!
//! This crate turns a `powercfg /batteryreport` HTML document into the
//! structured telemetry types of [`battery_report_core`]. The pipeline is
//! a one-shot, pure transformation of the in-memory document text: labeled
//! fields are located with loose, case-insensitive markup patterns, values
//! are normalized and coerced, and the capacity-history table is walked
//! row by row. Anything the document does not carry resolves to an absent
//! value; only an unreadable document (or a failed powercfg run) is fatal.
//!
//! # Main entry points
//!
//! - [`parse::parse_report`] — parse in-memory document text.
//! - [`parse::parse_report_file`] — read and parse a report file.
//! - [`generate::run_battery_report`] — run powercfg to produce a fresh
//!   report (Windows only; requires the utility to be installed).
//!
//! # Example
//!
//! ```
//! use battery_report_extract::parse::parse_report;
//!
//! let html = "<table>\
//!     <tr><td>Design Capacity</td><td>57,532 mWh</td></tr>\
//!     <tr><td>Cycle Count</td><td>312</td></tr>\
//! </table>";
//!
//! let report = parse_report(html);
//! assert_eq!(report.battery.design_capacity_mwh, Some(57_532));
//! assert_eq!(report.battery.cycle_count, Some(312));
//! assert!(report.battery.manufacturer.is_none());
//! ```

pub mod error;
pub mod generate;
pub mod output;
pub mod parse;
pub mod scan;

pub use error::{ExtractError, Result};
pub use parse::{ParsedReport, parse_report, parse_report_file};
