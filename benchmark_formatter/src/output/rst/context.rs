//!
//! The context table.
//!

use crate::model::context::cache::Cache;
use crate::model::context::Context;
use crate::model::error::ShapeError;
use crate::output::value;

use super::list_table::Cell;
use super::list_table::ListTable;

/// The header of the cache descriptors table.
pub const CACHES_HEADER: [&str; 4] = ["Type", "Level", "Size (Bytes)", "Num Sharing"];

///
/// Renders the context as a two-column key-value table, with an optional section title.
///
/// The `caches` entry is rendered as a table nested into its value cell.
///
pub fn render(context: &Context, title: Option<&str>) -> Result<String, ShapeError> {
    let mut table = ListTable::with_header_rows(1);
    table.push_row(["Key", "Value"]);

    for (key, value) in context.entries() {
        let cell = if key == Context::CACHES_KEY {
            Cell::Table(caches_table(Cache::parse_all(value)?))
        } else {
            Cell::Text(value::to_text(value))
        };
        table.push_row([Cell::from(key.as_str()), cell]);
    }

    let mut buffer = String::new();
    if let Some(title) = title {
        buffer.push_str(super::heading(title, '-').as_str());
    }
    buffer.push_str(table.render().as_str());
    buffer.push('\n');
    Ok(buffer)
}

///
/// Builds the table of the cache descriptors.
///
fn caches_table(caches: Vec<Cache>) -> ListTable {
    let mut table = ListTable::default();
    table.push_row(CACHES_HEADER);
    for cache in caches.iter() {
        table.push_row(cache.cells());
    }
    table
}
