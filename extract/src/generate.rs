//! Battery report generation via powercfg.
//!
//! The one external blocking call in the pipeline: asks the OS diagnostic
//! utility to write its HTML report to a fixed filename under a chosen
//! directory. The exit-code contract is strict; a non-zero exit is fatal
//! and not retried.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{ExtractError, Result};

/// Filename powercfg writes the report under.
pub const REPORT_FILENAME: &str = "battery-report.html";

/// Runs `powercfg /batteryreport` and returns the generated report path.
///
/// Creates `output_dir` (and parents) first. Fails with
/// [`ExtractError::Io`] when the command cannot be spawned and
/// [`ExtractError::ReportCommand`] when it exits non-zero.
pub fn run_battery_report(output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let report_path = output_dir.join(REPORT_FILENAME);

    debug!(path = %report_path.display(), "Generating battery report");
    let status = Command::new("powercfg")
        .arg("/batteryreport")
        .arg("/output")
        .arg(&report_path)
        .status()?;

    if !status.success() {
        return Err(ExtractError::ReportCommand { status });
    }

    info!(path = %report_path.display(), "Battery report generated");
    Ok(report_path)
}
