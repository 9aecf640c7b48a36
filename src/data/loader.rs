use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{CanonicalRecord, CellValue, RawRow};
use super::normalizer::normalize_table;

// ---------------------------------------------------------------------------
// RawTable – what a sheet reader hands over
// ---------------------------------------------------------------------------

/// Header row plus data rows, exactly as exported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Split a sheet into its header row and data rows. An empty sheet gives
    /// an empty table.
    pub fn from_sheet(mut sheet: Vec<RawRow>) -> Self {
        if sheet.is_empty() {
            return Self::default();
        }
        let rows = sheet.split_off(1);
        let headers = sheet
            .remove(0)
            .into_iter()
            .map(|cell| cell.to_string())
            .collect();
        RawTable { headers, rows }
    }

    pub fn into_records(self) -> Vec<CanonicalRecord> {
        normalize_table(&self.headers, &self.rows)
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a claims export from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row first, one claim per line
/// * `.json` – `[["Имя", "Статус", ...], ["Игорь", "Принята", ...], ...]`
pub fn load_file(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            read_csv(file)?
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)?
        }
        other => bail!("Unsupported file extension: .{other}"),
    };

    log::info!(
        "Loaded {} rows with {} columns from {}",
        table.rows.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

/// Load and normalize in one step.
pub fn load_records(path: &Path) -> Result<Vec<CanonicalRecord>> {
    Ok(load_file(path)?.into_records())
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Rows may be shorter or longer than the header row.
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Keep the exporter's text unless it is unambiguously a number, so phone
/// numbers like `+7999...` or `007` survive untouched.
fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        if i.to_string() == s {
            return CellValue::Integer(i);
        }
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() && f.to_string() == s {
            return CellValue::Float(f);
        }
    }
    if looks_like_date(s) {
        return CellValue::Date(s.to_string());
    }
    CellValue::Text(s.to_string())
}

/// `2024-05-01`, `01.05.2024 18:30` and similar.
fn looks_like_date(s: &str) -> bool {
    let date_part = s.split([' ', 'T']).next().unwrap_or("");
    let groups: Vec<&str> = date_part.split(['-', '.', '/']).collect();
    groups.len() == 3
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.len() <= 4 && g.chars().all(|c| c.is_ascii_digit()))
        && groups.iter().any(|g| g.len() == 4)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Sheet dumped as an array of row arrays, header row first.
pub fn parse_json(text: &str) -> Result<RawTable> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut sheet = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let cells = row
            .as_array()
            .with_context(|| format!("Row {i} is not a JSON array"))?;
        sheet.push(cells.iter().map(json_to_cell).collect());
    }

    Ok(RawTable::from_sheet(sheet))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) if s.is_empty() => CellValue::Null,
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Field;

    #[test]
    fn csv_export_round_trip_to_records() {
        let data = "Имя,Телефон,Я готов быть лидером,Итого взнос\n\
                    Игорь,+79990001122,☑️,3500\n\
                    Анна,,☐\n";
        let table = read_csv(data.as_bytes()).unwrap();
        assert_eq!(table.headers.len(), 4);
        assert_eq!(table.rows.len(), 2);

        let records = table.into_records();
        assert_eq!(records[0].text(Field::ReadyToLead).as_deref(), Some("да"));
        assert_eq!(records[0].get(Field::TotalContribution), Some(&CellValue::Integer(3500)));
        assert_eq!(records[1].text(Field::ReadyToLead).as_deref(), Some("нет"));
        assert!(!records[1].contains(Field::TotalContribution));
    }

    #[test]
    fn cell_guessing_keeps_ambiguous_text() {
        assert_eq!(guess_cell_type(""), CellValue::Null);
        assert_eq!(guess_cell_type("42"), CellValue::Integer(42));
        assert_eq!(guess_cell_type("1.5"), CellValue::Float(1.5));
        assert_eq!(guess_cell_type("+79990001122"), CellValue::from("+79990001122"));
        assert_eq!(guess_cell_type("007"), CellValue::from("007"));
        assert_eq!(guess_cell_type("2024-05-01"), CellValue::Date("2024-05-01".into()));
        assert_eq!(
            guess_cell_type("01.05.2024 18:30"),
            CellValue::Date("01.05.2024 18:30".into())
        );
        assert_eq!(guess_cell_type("1.2.3"), CellValue::from("1.2.3"));
    }

    #[test]
    fn json_sheet_splits_header_row() {
        let text = r#"[["Имя", "Статус", null], ["Игорь", "Принята", 1], ["Анна"]]"#;
        let table = parse_json(text).unwrap();
        assert_eq!(table.headers, vec!["Имя", "Статус", ""]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec![CellValue::from("Анна")]);
    }

    #[test]
    fn json_rejects_non_array_rows() {
        assert!(parse_json(r#"[{"Имя": "Игорь"}]"#).is_err());
        assert!(parse_json("{}").is_err());
    }

    #[test]
    fn empty_sheet_is_empty_table() {
        assert_eq!(parse_json("[]").unwrap(), RawTable::default());
    }
}
