//! Shared rendering for table, CSV, JSON, and YAML output

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Escape a value for CSV output
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render rows as a left-aligned table with a dashed rule under the header
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header = format_row(headers.to_vec());
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

/// Render rows as CSV with a header line
pub fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = headers.join(",");
    out.push('\n');
    for row in rows {
        let values: Vec<String> = row.iter().map(|v| escape_csv(v)).collect();
        out.push_str(&values.join(","));
        out.push('\n');
    }
    out
}

/// Serialize for the structured formats, `None` for table and CSV
pub fn render_structured<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(Some)
            .context("Failed to serialize JSON output"),
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map(Some)
            .context("Failed to serialize YAML output"),
        OutputFormat::Table | OutputFormat::Csv => Ok(None),
    }
}

/// Print tabular data in any format. `value` backs the JSON and YAML forms.
pub fn print_rows<T: Serialize + ?Sized>(
    format: OutputFormat,
    headers: &[&str],
    rows: &[Vec<String>],
    value: &T,
) -> Result<()> {
    if let Some(structured) = render_structured(value, format)? {
        println!("{}", structured.trim_end());
        return Ok(());
    }
    match format {
        OutputFormat::Csv => print!("{}", render_csv(headers, rows)),
        _ => print!("{}", render_table(headers, rows)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["Bulma".to_string(), "Uncommon".to_string()],
            vec!["Kame Sage, Elder".to_string(), "Legendary".to_string()],
        ]
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(&["name", "rarity"], &rows());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "name              rarity");
        assert_eq!(lines[1], "-".repeat(lines[0].len()));
        assert_eq!(lines[2], "Bulma             Uncommon");
        assert_eq!(lines[3], "Kame Sage, Elder  Legendary");
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&["name", "rarity"], &rows());
        assert_eq!(
            csv,
            "name,rarity\nBulma,Uncommon\n\"Kame Sage, Elder\",Legendary\n"
        );
    }

    #[test]
    fn test_render_structured() -> Result<()> {
        let value = vec!["a", "b"];
        let json = render_structured(&value, OutputFormat::Json)?.unwrap();
        assert_eq!(serde_json::from_str::<Vec<String>>(&json)?, vec!["a", "b"]);
        let yaml = render_structured(&value, OutputFormat::Yaml)?.unwrap();
        assert!(yaml.contains("- a"));
        assert!(render_structured(&value, OutputFormat::Table)?.is_none());
        assert!(render_structured(&value, OutputFormat::Csv)?.is_none());
        Ok(())
    }
}
