//! Output payload assembly.
//!
//! The payload is the one JSON shape downstream consumers depend on:
//! `{ system, battery, health, history, generated_at }`, with absent
//! numeric fields serialized as `null`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::health::compute_health;
use crate::types::{BatteryInfo, CapacityHistoryEntry, HealthAssessment, SystemInfo};

/// Complete machine-readable record for one parsed battery report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryReportPayload {
    pub system: SystemInfo,
    pub battery: BatteryInfo,
    pub health: HealthAssessment,
    pub history: Vec<CapacityHistoryEntry>,
    /// ISO-8601 UTC timestamp with trailing `Z`.
    pub generated_at: String,
}

impl BatteryReportPayload {
    /// Assembles a payload stamped with the current UTC time.
    ///
    /// The health assessment is derived from `battery` here so callers
    /// never hand-build an inconsistent payload.
    pub fn assemble(
        system: SystemInfo,
        battery: BatteryInfo,
        history: Vec<CapacityHistoryEntry>,
    ) -> Self {
        Self::assemble_at(system, battery, history, Utc::now())
    }

    /// Assembles a payload with an explicit generation timestamp.
    pub fn assemble_at(
        system: SystemInfo,
        battery: BatteryInfo,
        history: Vec<CapacityHistoryEntry>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let health = compute_health(&battery);
        Self {
            system,
            battery,
            health,
            history,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
