//!
//! The benchmarks table.
//!

use crate::model::benchmark::Record;
use crate::model::error::ShapeError;
use crate::output::value;
use crate::policy::Policy;

use super::list_table::Cell;
use super::list_table::ListTable;

/// The section title.
pub const TITLE: &str = "Benchmarks";
/// The header of the leading ordinal column.
pub const INDEX_HEADER: &str = "Index";

///
/// Renders the benchmark records as a table, one row per record.
///
/// The columns are taken from the first record. Returns an empty string if there are no records.
///
/// All records must share the first record's column set. Cells follow the header order,
/// which is the record's own key order unless the record lists its keys differently.
///
pub fn render(records: &[Record], policy: &Policy) -> Result<String, ShapeError> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };
    let family_indices = crate::model::benchmark::validate(records, policy)?;

    let columns: Vec<&str> = first.columns(policy).collect();

    let mut table = ListTable::with_header_rows(1);
    table.push_row(
        std::iter::once(INDEX_HEADER.to_owned())
            .chain(columns.iter().map(|column| policy.label(column))),
    );

    for (index, (record, family_index)) in records.iter().zip(family_indices).enumerate() {
        let ordinal = u128::from(family_index) + 1;
        let mut row = Vec::with_capacity(columns.len() + 1);
        row.push(Cell::Text(ordinal.to_string()));
        for column in columns.iter() {
            // The column sets have been checked to be equal.
            let value = &record.0[*column];
            row.push(Cell::Text(cell(index, column, value, policy)?));
        }
        table.push_row(row);
    }

    let mut buffer = super::heading(TITLE, '-');
    buffer.push_str(table.render().as_str());
    buffer.push('\n');
    Ok(buffer)
}

///
/// Renders the value of the column `key` of the record at `index`.
///
fn cell(
    index: usize,
    key: &str,
    value: &serde_json::Value,
    policy: &Policy,
) -> Result<String, ShapeError> {
    if key == policy.name_key {
        let name = value.as_str().ok_or_else(|| ShapeError::InvalidName {
            index,
            key: key.to_owned(),
            value: value.to_owned(),
        })?;
        return Ok(policy.trim_name(name).to_owned());
    }

    if policy.is_time(key) {
        let time = value.as_f64().ok_or_else(|| ShapeError::InvalidTime {
            index,
            key: key.to_owned(),
            value: value.to_owned(),
        })?;
        return Ok(policy.format_time(time));
    }

    Ok(value::to_text(value))
}
