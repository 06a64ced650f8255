//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with centered headers
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct JobRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "STATE")]
        state: String,
    }

    fn row(id: &str, state: &str) -> JobRow {
        JobRow {
            id: id.to_string(),
            state: state.to_string(),
        }
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<JobRow> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_format_table_rows_and_headers() {
        let out = format_table(&[row("j-1", "Running"), row("j-2", "Ready")]);

        assert!(out.contains("ID"));
        assert!(out.contains("STATE"));
        assert!(out.contains("j-1"));
        assert!(out.contains("Ready"));
        assert!(out.contains("╭"));
    }
}
