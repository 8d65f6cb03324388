//! Export renderers

use crate::domain::{Entry, ExportFormat};
use crate::error::Result;
use crate::infrastructure::storage;

const CSV_HEADER: &str = "Memo,Tags,Creation Date";

/// Render a snapshot of entries in the requested format.
pub fn render(entries: &[Entry], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => storage::render_entries(entries),
        ExportFormat::Csv => Ok(render_csv(entries)),
        ExportFormat::Text => Ok(render_text(entries)),
    }
}

fn render_csv(entries: &[Entry]) -> String {
    let mut output = String::from(CSV_HEADER);
    output.push('\n');

    for entry in entries {
        output.push_str(&format!(
            "{},{},{}\n",
            csv_field(&entry.content),
            csv_field(&entry.tags.join(", ")),
            entry.created_at.format("%Y-%m-%d")
        ));
    }

    output
}

/// Quote a field when it holds a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_text(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let mut block = format!("Memo: {}\n", entry.content);
            if !entry.tags.is_empty() {
                block.push_str(&format!("Tags: {}\n", entry.tags.join(", ")));
            }
            block.push_str(&format!(
                "Creation Date: {}\n",
                entry.created_at.format("%Y-%m-%d")
            ));
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new(
                1,
                "buy milk".into(),
                vec!["errand".into(), "home".into()],
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            ),
            Entry::new(
                2,
                "write code".into(),
                vec![],
                NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_csv_layout() {
        let csv = render(&sample(), ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Memo,Tags,Creation Date");
        assert_eq!(lines[1], "buy milk,\"errand, home\",2024-01-05");
        assert_eq!(lines[2], "write code,,2024-01-06");
    }

    #[test]
    fn test_csv_escapes_quotes() {
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn test_csv_empty_collection_is_header_only() {
        let csv = render(&[], ExportFormat::Csv).unwrap();
        assert_eq!(csv, "Memo,Tags,Creation Date\n");
    }

    #[test]
    fn test_json_is_parseable_array() {
        let json = render(&sample(), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();

        assert_eq!(array.len(), 2);
        assert_eq!(array[1]["memo"], "write code");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_text_blocks() {
        let text = render(&sample(), ExportFormat::Text).unwrap();
        assert_eq!(
            text,
            "Memo: buy milk\n\
             Tags: errand, home\n\
             Creation Date: 2024-01-05\n\
             \n\
             Memo: write code\n\
             Creation Date: 2024-01-06\n"
        );
    }
}
