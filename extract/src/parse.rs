//! Battery report parsing.
//!
//! Walks one `powercfg /batteryreport` HTML document and produces a
//! complete structural result. Every field is independently optional:
//! a missing label, section, or malformed number degrades to `None` and
//! the rest of the parse proceeds unaffected. The only fatal condition
//! is a document that cannot be read at all.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use battery_report_core::{BatteryInfo, CapacityHistoryEntry, SystemInfo};

use crate::error::Result;
use crate::scan::{clean_fragment, extract_section, find_label_value};

/// Heading of the capacity history section in the source document.
pub const CAPACITY_HISTORY_HEADING: &str = "Battery capacity history";

static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr>(.*?)</tr>").expect("static regex must compile"));
static CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<t[dh][^>]*>(.*?)</t[dh]>").expect("static regex must compile")
});

/// Everything extracted from one report document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedReport {
    pub system: SystemInfo,
    pub battery: BatteryInfo,
    pub history: Vec<CapacityHistoryEntry>,
}

/// Coerces a normalized text value into a non-negative integer.
///
/// Strips every non-digit character ("57,532 mWh" becomes 57532), which
/// discards sign and decimal information by design: the source fields are
/// always non-negative whole counts. Absent or empty input, or text with
/// no digits at all, yields `None` — never zero, never an error.
pub fn coerce_int(value: Option<&str>) -> Option<u64> {
    let value = value?;
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    // Digit runs too long for u64 are garbage data; treat as absent.
    digits.parse().ok()
}

/// Parses the capacity history section into ordered entries.
///
/// Returns an empty vec when the section is missing. Rows with fewer
/// than 3 cells are discarded, as is the header row, detected by its
/// first cell equalling "period" case-insensitively. That literal label
/// is a heuristic keyed to the source document, kept verbatim for
/// source-compatible behavior. Document row order is preserved.
pub fn parse_capacity_history(html: &str) -> Vec<CapacityHistoryEntry> {
    let Some(table) = extract_section(html, CAPACITY_HISTORY_HEADING) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for row in ROW_RE.captures_iter(&table) {
        let cells: Vec<String> = CELL_RE
            .captures_iter(row.get(1).map_or("", |m| m.as_str()))
            .map(|cell| clean_fragment(cell.get(1).map_or("", |m| m.as_str())))
            .collect();
        if cells.len() < 3 || cells[0].eq_ignore_ascii_case("period") {
            continue;
        }
        entries.push(CapacityHistoryEntry {
            date: cells[0].clone(),
            full_charge_capacity_mwh: coerce_int(Some(&cells[1])),
            design_capacity_mwh: coerce_int(Some(&cells[2])),
        });
    }
    entries
}

fn parse_system_info(html: &str) -> SystemInfo {
    SystemInfo {
        product: find_label_value(html, "System Product Name"),
        bios: find_label_value(html, "BIOS"),
        os_build: find_label_value(html, "OS build"),
        report_time: find_label_value(html, "Report Time"),
    }
}

fn parse_battery_info(html: &str) -> BatteryInfo {
    BatteryInfo {
        name: find_label_value(html, "Name"),
        manufacturer: find_label_value(html, "Manufacturer"),
        chemistry: find_label_value(html, "Chemistry"),
        design_capacity_mwh: coerce_int(find_label_value(html, "Design Capacity").as_deref()),
        full_charge_capacity_mwh: coerce_int(
            find_label_value(html, "Full Charge Capacity").as_deref(),
        ),
        cycle_count: coerce_int(find_label_value(html, "Cycle Count").as_deref()),
    }
}

/// Parses a full report document.
///
/// A straight-line composition of independent lookups: system metadata,
/// battery attributes, then the capacity history. Never fails; a document
/// with none of the expected content yields a result full of absent
/// values and an empty history.
pub fn parse_report(html: &str) -> ParsedReport {
    let system = parse_system_info(html);
    let battery = parse_battery_info(html);
    let history = parse_capacity_history(html);

    debug!(
        product = system.product.as_deref().unwrap_or("<absent>"),
        design_capacity_mwh = battery.design_capacity_mwh,
        full_charge_capacity_mwh = battery.full_charge_capacity_mwh,
        cycle_count = battery.cycle_count,
        history_rows = history.len(),
        "Parsed battery report"
    );

    ParsedReport {
        system,
        battery,
        history,
    }
}

/// Reads and parses a report file.
///
/// Invalid UTF-8 bytes are replaced rather than rejected, since powercfg
/// output encoding varies by locale. An unreadable file is the one fatal
/// parse-side error.
pub fn parse_report_file(path: &Path) -> Result<ParsedReport> {
    let bytes = fs::read(path)?;
    let html = String::from_utf8_lossy(&bytes);
    Ok(parse_report(&html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_int_is_idempotent_on_clean_digits() {
        assert_eq!(coerce_int(Some("1000")), Some(1000));
    }

    #[test]
    fn test_coerce_int_strips_separators_and_units() {
        assert_eq!(coerce_int(Some("1,000 mWh")), Some(1000));
        assert_eq!(coerce_int(Some("57,532 mWh")), Some(57_532));
    }

    #[test]
    fn test_coerce_int_absent_and_empty_yield_none() {
        assert_eq!(coerce_int(None), None);
        assert_eq!(coerce_int(Some("")), None);
        assert_eq!(coerce_int(Some("mWh")), None);
        assert_eq!(coerce_int(Some("-")), None);
    }

    #[test]
    fn test_coerce_int_discards_sign_and_decimals() {
        // Signs and decimal points are stripped with every other non-digit.
        assert_eq!(coerce_int(Some("-42")), Some(42));
        assert_eq!(coerce_int(Some("3.14")), Some(314));
    }

    #[test]
    fn test_coerce_int_overflow_yields_none() {
        assert_eq!(coerce_int(Some("99999999999999999999999999")), None);
    }

    #[test]
    fn test_history_filters_header_row_in_any_casing() {
        for header in ["Period", "PERIOD", "period"] {
            let html = format!(
                "<h2>Battery capacity history</h2><table>\
                 <tr><th>{header}</th><th>Full Charge</th><th>Design</th></tr>\
                 <tr><td>2024-03-04</td><td>51,044 mWh</td><td>57,532 mWh</td></tr>\
                 </table>"
            );
            let entries = parse_capacity_history(&html);
            assert_eq!(entries.len(), 1, "header {header:?} should be filtered");
            assert_eq!(entries[0].date, "2024-03-04");
        }
    }

    #[test]
    fn test_history_discards_short_rows() {
        let html = "<h2>Battery capacity history</h2><table>\
                    <tr><td>2024-03-04</td><td>51,044 mWh</td></tr>\
                    <tr><td>2024-03-11</td><td>50,900 mWh</td><td>57,532 mWh</td></tr>\
                    </table>";
        let entries = parse_capacity_history(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "2024-03-11");
    }

    #[test]
    fn test_history_preserves_document_row_order() {
        let html = "<h2>Battery capacity history</h2><table>\
                    <tr><td>2024-03-18</td><td>50,100</td><td>57,532</td></tr>\
                    <tr><td>2024-03-04</td><td>51,044</td><td>57,532</td></tr>\
                    </table>";
        let entries = parse_capacity_history(html);
        let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-18", "2024-03-04"]);
    }

    #[test]
    fn test_history_malformed_numbers_become_absent() {
        let html = "<h2>Battery capacity history</h2><table>\
                    <tr><td>2024-03-04</td><td>n/a</td><td>57,532 mWh</td></tr>\
                    </table>";
        let entries = parse_capacity_history(html);
        assert_eq!(entries[0].full_charge_capacity_mwh, None);
        assert_eq!(entries[0].design_capacity_mwh, Some(57_532));
    }

    #[test]
    fn test_history_missing_section_yields_empty() {
        assert!(parse_capacity_history("<html><body></body></html>").is_empty());
    }

    #[test]
    fn test_parse_report_on_empty_document_yields_all_absent() {
        let report = parse_report("");
        assert_eq!(report.system, SystemInfo::default());
        assert_eq!(report.battery, BatteryInfo::default());
        assert!(report.history.is_empty());
    }

    #[test]
    fn test_missing_label_does_not_disturb_other_fields() {
        let html = "<td>Manufacturer</td><td>SMP</td>\
                    <td>Cycle Count</td><td>312</td>";
        let report = parse_report(html);
        assert_eq!(report.battery.manufacturer.as_deref(), Some("SMP"));
        assert_eq!(report.battery.cycle_count, Some(312));
        assert_eq!(report.battery.chemistry, None);
        assert_eq!(report.battery.design_capacity_mwh, None);
    }

    #[test]
    fn test_parse_report_is_deterministic() {
        let html = "<td>Name</td><td>BAT1</td>\
                    <td>Design Capacity</td><td>57,532 mWh</td>";
        assert_eq!(parse_report(html), parse_report(html));
    }

    #[test]
    fn test_parse_report_file_missing_path_is_fatal() {
        let result = parse_report_file(Path::new("/nonexistent/battery-report.html"));
        assert!(matches!(
            result,
            Err(crate::error::ExtractError::Io(_))
        ));
    }
}
