//! CSV interchange for binder entries.
//!
//! Encoding writes the fixed header `Card ID,Quantity,Set Code,Rarity,
//! Condition,Notes` and one row per entry. Decoding requires only the
//! `Card ID` and `Quantity` columns (case-sensitive header match) and
//! applies a partial-success policy: a row that fails to parse collects an
//! error and processing continues with the next row.

use crate::error::Result;
use crate::models::binder::{Binder, BinderEntry};
use crate::models::card::CardId;

use super::ImportResult;

const HEADER: [&str; 6] = [
    "Card ID",
    "Quantity",
    "Set Code",
    "Rarity",
    "Condition",
    "Notes",
];

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode a binder's entries as CSV text. Empty optional fields render as
/// empty cells.
pub fn encode(binder: &Binder) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for entry in &binder.entries {
        writer.write_record([
            entry.card_id.to_string(),
            entry.quantity.to_string(),
            entry.set_code.clone().unwrap_or_default(),
            entry.rarity.clone().unwrap_or_default(),
            entry.condition.clone().unwrap_or_default(),
            entry.notes.clone().unwrap_or_default(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::YgoBinderError::Store(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

struct Columns {
    card_id: usize,
    quantity: usize,
    set_code: Option<usize>,
    rarity: Option<usize>,
    condition: Option<usize>,
    notes: Option<usize>,
    tags: Option<usize>,
}

/// Decode CSV text into a binder named `name`.
///
/// Fails (success=false) when the mandatory header columns are missing or
/// when zero usable rows were recovered.
pub fn decode(text: &str, name: &str) -> ImportResult<Binder> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => return ImportResult::failure(vec![format!("Unreadable CSV header: {}", e)]),
    };

    let find = |name: &str| headers.iter().position(|h| h == name);
    let columns = match (find("Card ID"), find("Quantity")) {
        (Some(card_id), Some(quantity)) => Columns {
            card_id,
            quantity,
            set_code: find("Set Code"),
            rarity: find("Rarity"),
            condition: find("Condition"),
            notes: find("Notes"),
            tags: find("Tags"),
        },
        _ => {
            return ImportResult::failure(vec![
                "CSV header must contain 'Card ID' and 'Quantity' columns".to_string(),
            ]);
        }
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut binder = Binder::new(name);

    for (row_num, record) in reader.records().enumerate() {
        // Header is row 1; data rows start at 2.
        let rowno = row_num + 2;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                errors.push(format!("Row {}: {}", rowno, e));
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Ok(entry) => {
                if binder.entries.iter().any(|e| e.card_id == entry.card_id) {
                    warnings.push(format!(
                        "Row {}: duplicate card id {}, quantities merged",
                        rowno, entry.card_id
                    ));
                }
                binder.add_entry(entry);
            }
            Err(msg) => errors.push(format!("Row {}: {}", rowno, msg)),
        }
    }

    if binder.entries.is_empty() {
        let mut all_errors = vec!["No usable rows in CSV".to_string()];
        all_errors.extend(errors);
        return ImportResult::failure(all_errors).with_warnings(warnings);
    }

    let mut result = ImportResult::success(binder).with_warnings(warnings);
    result.errors = errors;
    result
}

fn parse_row(record: &csv::StringRecord, columns: &Columns) -> std::result::Result<BinderEntry, String> {
    let raw_id = record.get(columns.card_id).unwrap_or("").trim();
    let card_id: CardId = raw_id
        .parse()
        .map_err(|_| format!("invalid Card ID '{}'", raw_id))?;

    let raw_qty = record.get(columns.quantity).unwrap_or("").trim();
    let quantity: u32 = raw_qty
        .parse()
        .map_err(|_| format!("invalid Quantity '{}'", raw_qty))?;

    let optional = |idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let mut entry = BinderEntry::new(card_id, quantity);
    entry.set_code = optional(columns.set_code);
    entry.rarity = optional(columns.rarity);
    entry.condition = optional(columns.condition);
    entry.notes = optional(columns.notes);
    if let Some(tags) = optional(columns.tags) {
        entry.tags = tags
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    Ok(entry)
}
