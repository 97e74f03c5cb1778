//! Static sample data shown by the demo page.

use serde_json::json;
use zetable_states::{Row, TextAlign, rows_from_json};

use crate::widgets::TableColumn;

/// The three sample users.
pub fn sample_rows() -> Vec<Row> {
    rows_from_json(json!([
        { "id": 1, "name": "John Doe", "age": 25 },
        { "id": 2, "name": "Jane Smith", "age": 30 },
        { "id": 3, "name": "Bob Johnson", "age": 35 },
    ]))
    .unwrap_or_else(|err| {
        log::error!("Sample rows are invalid: {err}");
        Vec::new()
    })
}

/// ID, Name (centered) and Age.
pub fn sample_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::key("ID", "id"),
        TableColumn::key("Name", "name").text_align(TextAlign::Center),
        TableColumn::key("Age", "age"),
    ]
}
