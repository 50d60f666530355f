//! Core types and health scoring for battery report telemetry.
//!
//! This crate defines the data model extracted from a `powercfg
//! /batteryreport` HTML document ([`SystemInfo`], [`BatteryInfo`],
//! [`CapacityHistoryEntry`]) and the pure scoring function that turns raw
//! capacity/cycle counters into a [`HealthAssessment`].
//!
//! Every field that comes out of the report is optional: a label missing
//! from the source document maps to `None`, never to zero or an empty
//! string. Zero capacity is abnormal *data*; `None` means "not reported".
//!
//! # Example
//!
//! ```
//! use battery_report_core::{BatteryInfo, RemainingLife, compute_health};
//!
//! let battery = BatteryInfo {
//!     design_capacity_mwh: Some(2000),
//!     full_charge_capacity_mwh: Some(1700),
//!     cycle_count: Some(612),
//!     ..Default::default()
//! };
//!
//! let health = compute_health(&battery);
//! assert_eq!(health.health_percentage, Some(85.0));
//! assert_eq!(health.degradation_percentage, Some(15.0));
//! assert_eq!(health.cycle_penalty, 2);
//! assert_eq!(health.estimated_remaining_life, RemainingLife::Months18To24);
//! ```

pub mod health;
pub mod payload;
pub mod types;

pub use health::compute_health;
pub use payload::BatteryReportPayload;
pub use types::{
    BatteryInfo, CapacityHistoryEntry, HealthAssessment, RemainingLife, SystemInfo,
};
