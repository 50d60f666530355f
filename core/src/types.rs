//! Data model for extracted battery report telemetry.
//!
//! The types here mirror the JSON payload contract one-to-one: field names
//! and nesting are fixed for downstream consumers, and absent numeric
//! fields serialize as `null` rather than being omitted.

use serde::{Deserialize, Serialize};

/// Descriptive system context captured from the report header.
///
/// Purely informational; any field may be absent when the source document
/// does not carry the corresponding label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SystemInfo {
    /// System product name (e.g. laptop model).
    pub product: Option<String>,
    /// BIOS identifier and date.
    pub bios: Option<String>,
    /// OS build number.
    pub os_build: Option<String>,
    /// Timestamp the report was generated, as printed by the source.
    pub report_time: Option<String>,
}

/// Battery identity and raw capacity/cycle counters.
///
/// Capacities are in milliwatt-hours. A missing source field maps to
/// `None`, never to zero; the two are semantically distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BatteryInfo {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub chemistry: Option<String>,
    pub design_capacity_mwh: Option<u64>,
    pub full_charge_capacity_mwh: Option<u64>,
    pub cycle_count: Option<u64>,
}

/// One row of the capacity history table.
///
/// `date` is the free-form period label the source prints (e.g.
/// `2024-03-04 - 2024-03-11`), not a parsed calendar type. Entries keep
/// document row order; the source's own chronology is preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityHistoryEntry {
    pub date: String,
    pub full_charge_capacity_mwh: Option<u64>,
    pub design_capacity_mwh: Option<u64>,
}

/// Categorical remaining-life estimate derived from the health percentage.
///
/// Serializes to the exact label strings of the payload contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RemainingLife {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "18-24 months")]
    Months18To24,
    #[serde(rename = "12-18 months")]
    Months12To18,
    #[serde(rename = "6-12 months")]
    Months6To12,
    #[serde(rename = "0-6 months")]
    Months0To6,
}

impl RemainingLife {
    /// The payload label for this band.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Months18To24 => "18-24 months",
            Self::Months12To18 => "12-18 months",
            Self::Months6To12 => "6-12 months",
            Self::Months0To6 => "0-6 months",
        }
    }
}

/// Derived battery health assessment.
///
/// Produced by [`compute_health`](crate::compute_health); every input
/// combination yields a structurally complete assessment, with the
/// percentages absent when either capacity counter is missing or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HealthAssessment {
    /// Full-charge capacity as a percentage of design capacity, 2 decimals.
    pub health_percentage: Option<f64>,
    /// `100 - health_percentage`, 2 decimals.
    pub degradation_percentage: Option<f64>,
    /// Wear score for charge cycles beyond the 500-cycle baseline, capped at 15.
    pub cycle_penalty: u64,
    pub estimated_remaining_life: RemainingLife,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_life_serializes_to_contract_labels() {
        let json = serde_json::to_string(&RemainingLife::Months18To24).unwrap();
        assert_eq!(json, "\"18-24 months\"");
        let json = serde_json::to_string(&RemainingLife::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
    }

    #[test]
    fn test_remaining_life_round_trips() {
        let parsed: RemainingLife = serde_json::from_str("\"0-6 months\"").unwrap();
        assert_eq!(parsed, RemainingLife::Months0To6);
    }

    #[test]
    fn test_absent_numeric_fields_serialize_as_null() {
        let battery = BatteryInfo {
            name: Some("BAT1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&battery).unwrap();
        assert!(json.contains("\"design_capacity_mwh\":null"));
        assert!(json.contains("\"full_charge_capacity_mwh\":null"));
        assert!(json.contains("\"cycle_count\":null"));
    }

    #[test]
    fn test_history_entry_keeps_date_as_free_form_label() {
        let entry = CapacityHistoryEntry {
            date: "2024-03-04 - 2024-03-11".to_string(),
            full_charge_capacity_mwh: Some(51_044),
            design_capacity_mwh: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"date\":\"2024-03-04 - 2024-03-11\""));
        assert!(json.contains("\"design_capacity_mwh\":null"));
    }
}
