//! Text scanning over battery report HTML.
//!
//! The report is one known document shape, not arbitrary HTML, so lookups
//! are regex patterns over the raw text rather than a DOM walk: a label
//! cell followed by a value cell, and a section heading followed by a
//! table block. Callers only see the two lookup functions plus the
//! fragment cleaner; the matching strategy stays swappable behind them.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

/// Normalizes an extracted HTML fragment to a single clean line.
///
/// Decodes common character entities, collapses every whitespace run
/// (including newlines) to one space, and trims. Always succeeds; empty
/// input yields an empty string.
pub fn clean_fragment(raw: &str) -> String {
    let decoded = decode_entities(raw);
    WHITESPACE_RE.replace_all(&decoded, " ").trim().to_string()
}

/// Decodes the named and numeric character entities that appear in
/// powercfg output. `&amp;` is decoded last so already-escaped entity
/// text is not double-decoded.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Finds the value cell adjacent to the first occurrence of `label`.
///
/// Matches case-insensitively; the value cell's opening tag may carry
/// attributes (styling classes vary between powercfg versions). Returns
/// `None` when the label does not appear or has no adjacent cell, which
/// is the expected outcome for optional fields, not an error.
pub fn find_label_value(html: &str, label: &str) -> Option<String> {
    // The label is escaped, so this pattern always compiles.
    let pattern = format!(
        r"(?is){}\s*</td>\s*<td[^>]*>(.*?)</td>",
        regex::escape(label)
    );
    let re = Regex::new(&pattern).expect("escaped label regex must compile");
    re.captures(html)
        .map(|caps| clean_fragment(caps.get(1).map_or("", |m| m.as_str())))
}

/// Extracts the raw markup of the table following the heading `title`.
///
/// Matches the heading case-insensitively and captures the next complete
/// `<table>…</table>` block. Returns `None` when the heading is missing
/// or no table follows it.
pub fn extract_section(html: &str, title: &str) -> Option<String> {
    let pattern = format!(r"(?is){}\s*</h2>\s*(<table.*?</table>)", regex::escape(title));
    let re = Regex::new(&pattern).expect("escaped title regex must compile");
    re.captures(html)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_fragment_collapses_whitespace_and_trims() {
        assert_eq!(clean_fragment("  51,044\n   mWh  "), "51,044 mWh");
        assert_eq!(clean_fragment(""), "");
        assert_eq!(clean_fragment("\n\t "), "");
    }

    #[test]
    fn test_clean_fragment_decodes_entities() {
        assert_eq!(clean_fragment("Smith&nbsp;&amp;&nbsp;Co"), "Smith & Co");
        assert_eq!(clean_fragment("&lt;unknown&gt;"), "<unknown>");
        assert_eq!(clean_fragment("O&#39;Brien"), "O'Brien");
    }

    #[test]
    fn test_find_label_value_basic() {
        let html = "<tr><td>Cycle Count</td><td>312</td></tr>";
        assert_eq!(find_label_value(html, "Cycle Count").as_deref(), Some("312"));
    }

    #[test]
    fn test_find_label_value_is_case_insensitive() {
        let html = "<tr><td>CYCLE COUNT</td><td>312</td></tr>";
        assert_eq!(find_label_value(html, "Cycle Count").as_deref(), Some("312"));
    }

    #[test]
    fn test_find_label_value_tolerates_cell_attributes() {
        let html = r#"<td>Design Capacity</td> <td class="value" style="width:20%">57,532 mWh</td>"#;
        assert_eq!(
            find_label_value(html, "Design Capacity").as_deref(),
            Some("57,532 mWh")
        );
    }

    #[test]
    fn test_find_label_value_spans_newlines() {
        let html = "<td>Manufacturer</td>\n  <td>\n    SMP\n  </td>";
        assert_eq!(find_label_value(html, "Manufacturer").as_deref(), Some("SMP"));
    }

    #[test]
    fn test_find_label_value_missing_label_is_none() {
        let html = "<td>Chemistry</td><td>LiP</td>";
        assert_eq!(find_label_value(html, "Serial Number"), None);
    }

    #[test]
    fn test_find_label_value_label_without_value_cell_is_none() {
        let html = "<td>Chemistry</td></tr></table>";
        assert_eq!(find_label_value(html, "Chemistry"), None);
    }

    #[test]
    fn test_find_label_value_uses_first_match_only() {
        let html = "<td>Name</td><td>BAT1</td><td>Name</td><td>BAT2</td>";
        assert_eq!(find_label_value(html, "Name").as_deref(), Some("BAT1"));
    }

    #[test]
    fn test_extract_section_captures_following_table() {
        let html = "<h2>Battery capacity history</h2>\n<table><tr><td>x</td></tr></table>";
        let section = extract_section(html, "Battery capacity history").unwrap();
        assert!(section.starts_with("<table"));
        assert!(section.ends_with("</table>"));
    }

    #[test]
    fn test_extract_section_is_case_insensitive() {
        let html = "BATTERY CAPACITY HISTORY</h2><table></table>";
        assert!(extract_section(html, "Battery capacity history").is_some());
    }

    #[test]
    fn test_extract_section_missing_heading_is_none() {
        assert_eq!(extract_section("<h2>Usage</h2><table></table>", "History"), None);
    }

    #[test]
    fn test_extract_section_heading_without_table_is_none() {
        let html = "<h2>Battery capacity history</h2><p>no data</p>";
        assert_eq!(extract_section(html, "Battery capacity history"), None);
    }
}
