//! Output formatting utilities

use crate::domain::Entry;

/// Format a list of entries, one per line
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{:>4}  {}  {}",
            entry.id,
            entry.created_at.format("%Y-%m-%d"),
            first_line(&entry.content)
        ));
        if !entry.tags.is_empty() {
            output.push_str(&format!("  [{}]", entry.tags.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// Format one entry in full
pub fn format_entry(entry: &Entry) -> String {
    let mut output = format!(
        "Id: {}\nCreation Date: {}\n",
        entry.id,
        entry.created_at.format("%Y-%m-%d")
    );
    if !entry.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", entry.tags.join(", ")));
    }
    output.push_str(&format!("\n{}\n", entry.content));
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }

    output
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}
