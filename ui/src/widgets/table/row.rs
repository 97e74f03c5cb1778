//! Row rendering for the data table.

use egui::Ui;
use egui_extras::TableRow;
use zetable_states::{ResolvedColumn, Row};

use super::cells::{render_body_cell, render_checkbox_cell, row_checkbox_label};
use super::columns::TableColumn;

/// Data needed to render one data row.
pub struct DataRow<'a> {
    pub index: usize,
    pub row: &'a Row,
    pub is_selected: bool,
}

/// Renders a data row: its selection checkbox (when enabled) followed by one
/// cell per effective column.
///
/// Returns `true` if the row's checkbox was toggled.
#[inline]
pub fn render_data_row(
    table_row: &mut TableRow<'_, '_>,
    data: &DataRow<'_>,
    resolved: &[ResolvedColumn],
    columns: &[TableColumn],
    show_checkboxes: bool,
) -> bool {
    let mut toggled = false;

    if show_checkboxes {
        table_row.col(|ui| {
            toggled = render_checkbox_cell(ui, data.is_selected, row_checkbox_label(data.index));
        });
    }

    for column in resolved {
        let Some(descriptor) = columns.get(column.source_index) else {
            continue;
        };
        table_row.col(|ui| {
            render_body_cell(ui, descriptor.source(), data.row, column.body_align);
        });
    }

    toggled
}

/// Renders a row that stands for the whole table width (summary, loading and
/// empty placeholders). Content goes into the first cell and runs across the
/// empty cells after it.
#[inline]
pub fn render_span_row(table_row: &mut TableRow<'_, '_>, span: usize, add_contents: impl FnOnce(&mut Ui)) {
    if span == 0 {
        return;
    }
    table_row.col(add_contents);
}
