//! Output formatting for report payloads.
//!
//! JSON is the stable machine contract (indented, exact field names,
//! `null` for absent numerics). YAML, Markdown, and plain-text table
//! renderings exist for human inspection only.

use std::fs;
use std::path::Path;

use battery_report_core::BatteryReportPayload;

use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a payload in the requested output format.
pub fn format_payload(payload: &BatteryReportPayload, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(payload)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(payload)?),
        OutputFormat::Markdown => Ok(payload_to_markdown(payload)),
        OutputFormat::Table => Ok(payload_to_table(payload)),
    }
}

/// Formats a payload and writes it to `path`.
pub fn write_payload(
    path: &Path,
    payload: &BatteryReportPayload,
    format: OutputFormat,
) -> Result<()> {
    let raw = format_payload(payload, format)?;
    fs::write(path, raw)?;
    Ok(())
}

fn opt_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn opt_mwh(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v} mWh"))
}

fn payload_to_markdown(payload: &BatteryReportPayload) -> String {
    let mut out = String::new();

    out.push_str("# Battery Report\n\n");
    out.push_str(&format!("**Generated:** {}\n\n", payload.generated_at));

    out.push_str("## System\n\n");
    out.push_str("| Field | Value |\n");
    out.push_str("|-------|-------|\n");
    out.push_str(&format!("| Product | {} |\n", opt_str(&payload.system.product)));
    out.push_str(&format!("| BIOS | {} |\n", opt_str(&payload.system.bios)));
    out.push_str(&format!("| OS build | {} |\n", opt_str(&payload.system.os_build)));
    out.push_str(&format!(
        "| Report time | {} |\n\n",
        opt_str(&payload.system.report_time)
    ));

    out.push_str("## Battery\n\n");
    out.push_str("| Field | Value |\n");
    out.push_str("|-------|-------|\n");
    out.push_str(&format!("| Name | {} |\n", opt_str(&payload.battery.name)));
    out.push_str(&format!(
        "| Manufacturer | {} |\n",
        opt_str(&payload.battery.manufacturer)
    ));
    out.push_str(&format!(
        "| Chemistry | {} |\n",
        opt_str(&payload.battery.chemistry)
    ));
    out.push_str(&format!(
        "| Design capacity | {} |\n",
        opt_mwh(payload.battery.design_capacity_mwh)
    ));
    out.push_str(&format!(
        "| Full charge capacity | {} |\n",
        opt_mwh(payload.battery.full_charge_capacity_mwh)
    ));
    out.push_str(&format!(
        "| Cycle count | {} |\n\n",
        payload
            .battery
            .cycle_count
            .map_or_else(|| "-".to_string(), |v| v.to_string())
    ));

    out.push_str("## Health\n\n");
    match payload.health.health_percentage {
        Some(health) => out.push_str(&format!("- **Health:** {health:.2}%\n")),
        None => out.push_str("- **Health:** unknown\n"),
    }
    if let Some(degradation) = payload.health.degradation_percentage {
        out.push_str(&format!("- **Degradation:** {degradation:.2}%\n"));
    }
    out.push_str(&format!(
        "- **Cycle penalty:** {}\n",
        payload.health.cycle_penalty
    ));
    out.push_str(&format!(
        "- **Estimated remaining life:** {}\n",
        payload.health.estimated_remaining_life.label()
    ));

    if !payload.history.is_empty() {
        out.push_str("\n## Capacity History\n\n");
        out.push_str("| Period | Full Charge | Design |\n");
        out.push_str("|--------|-------------|--------|\n");
        for entry in &payload.history {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                entry.date,
                opt_mwh(entry.full_charge_capacity_mwh),
                opt_mwh(entry.design_capacity_mwh)
            ));
        }
    }

    out
}

fn payload_to_table(payload: &BatteryReportPayload) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Battery: {}  Manufacturer: {}  Chemistry: {}\n",
        opt_str(&payload.battery.name),
        opt_str(&payload.battery.manufacturer),
        opt_str(&payload.battery.chemistry)
    ));
    out.push_str(&format!(
        "Capacity: {} / {} (design)  Cycles: {}\n",
        opt_mwh(payload.battery.full_charge_capacity_mwh),
        opt_mwh(payload.battery.design_capacity_mwh),
        payload
            .battery
            .cycle_count
            .map_or_else(|| "-".to_string(), |v| v.to_string())
    ));

    match payload.health.health_percentage {
        Some(health) => out.push_str(&format!(
            "Health: {health:.2}%  Penalty: {}  Remaining: {}\n",
            payload.health.cycle_penalty,
            payload.health.estimated_remaining_life.label()
        )),
        None => out.push_str(&format!(
            "Health: unknown  Penalty: {}  Remaining: {}\n",
            payload.health.cycle_penalty,
            payload.health.estimated_remaining_life.label()
        )),
    }

    if !payload.history.is_empty() {
        out.push_str("\nHistory:\n");
        let max_date = payload
            .history
            .iter()
            .map(|entry| entry.date.len())
            .max()
            .unwrap_or(6);
        for entry in &payload.history {
            out.push_str(&format!(
                "  {:<width$}  {:>12}  {:>12}\n",
                entry.date,
                opt_mwh(entry.full_charge_capacity_mwh),
                opt_mwh(entry.design_capacity_mwh),
                width = max_date
            ));
        }
    }

    out
}
