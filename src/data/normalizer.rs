use super::header_map::{map_headers, HeaderMapping};
use super::model::{CanonicalRecord, CellValue, Field, FieldKind, RawRow};
use super::vocabulary::{CHECKED, UNCHECKED};

/// Checkbox symbol the exporter writes for a ticked box.
pub const CHECKED_SYMBOL: &str = "☑️";
/// Checkbox symbol the exporter writes for an empty box.
pub const UNCHECKED_SYMBOL: &str = "☐";

/// Replace checkbox symbols with `да` / `нет`; anything else is returned as is.
pub fn convert_checkbox(value: CellValue) -> CellValue {
    match value.as_text() {
        Some(CHECKED_SYMBOL) => CellValue::Text(CHECKED.to_string()),
        Some(UNCHECKED_SYMBOL) => CellValue::Text(UNCHECKED.to_string()),
        _ => value,
    }
}

fn coerce(field: Field, value: CellValue) -> CellValue {
    match field.kind() {
        FieldKind::Confirmation => convert_checkbox(value),
        _ => value,
    }
}

/// Build one record from a raw row.
///
/// Null cells, and cells beyond the end of a short row, leave the field
/// absent. A row without any mapped cell yields an empty record.
pub fn normalize_row(mapping: &HeaderMapping, row: &[CellValue]) -> CanonicalRecord {
    let mut record = CanonicalRecord::new();
    for (index, field) in mapping.mapped() {
        match row.get(index) {
            Some(value) if !value.is_null() => {
                record.set(field, coerce(field, value.clone()));
            }
            _ => {}
        }
    }
    record
}

/// Normalize data rows (header row excluded), preserving order 1:1.
pub fn normalize_rows(mapping: &HeaderMapping, rows: &[RawRow]) -> Vec<CanonicalRecord> {
    rows.iter().map(|row| normalize_row(mapping, row)).collect()
}

/// Map the header row and normalize every data row against it.
pub fn normalize_table<S: AsRef<str>>(headers: &[S], rows: &[RawRow]) -> Vec<CanonicalRecord> {
    let mapping = map_headers(headers);
    log::debug!(
        "Header row: {} of {} columns mapped",
        mapping.mapped().count(),
        mapping.width()
    );
    normalize_rows(&mapping, rows)
}
