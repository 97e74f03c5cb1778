//! Table header rendering for the data table.

use egui_extras::TableRow;
use zetable_states::ResolvedColumn;

use super::cells::{SELECT_ALL_LABEL, render_checkbox_cell, render_header_cell};

/// Renders the header row: the select-all checkbox (when enabled) followed by
/// one label per effective column.
///
/// Returns `true` if the select-all checkbox was toggled.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[ResolvedColumn],
    show_checkboxes: bool,
    all_selected: bool,
) -> bool {
    let mut toggled = false;

    if show_checkboxes {
        header.col(|ui| {
            toggled = render_checkbox_cell(ui, all_selected, SELECT_ALL_LABEL.to_owned());
        });
    }

    for column in columns {
        header.col(|ui| {
            render_header_cell(ui, &column.header, column.header_align);
        });
    }

    toggled
}
