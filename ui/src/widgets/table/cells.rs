//! Cell rendering functions for the data table.

use egui::{Checkbox, Label, RichText, Ui, WidgetInfo, WidgetType};
use zetable_states::{CellSource, Row, TextAlign, lookup};

use super::columns::{CellRenderer, align_layout};

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No Data Found";
pub const SELECT_ALL_LABEL: &str = "Select all";

/// Accessibility label of the checkbox for the row at `index`.
pub fn row_checkbox_label(index: usize) -> String {
    format!("Select row {}", index + 1)
}

/// Text of the summary row. Absent values interpolate as empty text.
pub fn summary_text(
    data_length: Option<i64>,
    total_length: Option<i64>,
    label: Option<&str>,
) -> String {
    let shown = data_length.map(|n| n.to_string()).unwrap_or_default();
    let total = total_length.map(|n| n.to_string()).unwrap_or_default();
    let label = label.unwrap_or_default();
    format!("showing {shown} of {total} total {label}")
}

/// Renders a bold header label with the column's header alignment.
#[inline]
pub fn render_header_cell(ui: &mut Ui, header: &str, align: TextAlign) {
    ui.with_layout(align_layout(align), |ui| {
        ui.strong(header);
    });
}

/// Renders a body cell, either by key lookup or through the custom renderer.
#[inline]
pub fn render_body_cell(
    ui: &mut Ui,
    source: &CellSource<CellRenderer>,
    row: &Row,
    align: TextAlign,
) {
    ui.with_layout(align_layout(align), |ui| match source {
        CellSource::Key(key) => {
            ui.label(lookup(row, key));
        }
        CellSource::Render(render) => render(ui, row),
    });
}

/// Renders a text-less checkbox with an accessibility label.
///
/// Returns `true` if the user toggled it this frame.
#[inline]
pub fn render_checkbox_cell(ui: &mut Ui, checked: bool, label: String) -> bool {
    let mut value = checked;
    let response = ui.add(Checkbox::without_text(&mut value));
    response.widget_info(move || {
        WidgetInfo::selected(WidgetType::Checkbox, true, value, label.as_str())
    });
    response.changed()
}

/// Renders the "showing X of Y" summary text without wrapping, so it runs
/// across the empty cells to its right.
#[inline]
pub fn render_summary_cell(ui: &mut Ui, text: &str) {
    ui.add(Label::new(RichText::new(text).italics()).extend());
}

#[inline]
pub fn render_loading_cell(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.add(Label::new(LOADING_TEXT).extend());
    });
}

#[inline]
pub fn render_empty_cell(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("📋").weak());
        ui.add(Label::new(EMPTY_TEXT).extend());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_text_interpolates_values() {
        assert_eq!(
            summary_text(Some(3), Some(10), Some("users")),
            "showing 3 of 10 total users"
        );
    }

    #[test]
    fn summary_text_passes_negative_values_through() {
        assert_eq!(
            summary_text(Some(-1), Some(0), Some("rows")),
            "showing -1 of 0 total rows"
        );
    }

    #[test]
    fn summary_text_leaves_absent_values_empty() {
        assert_eq!(summary_text(None, None, None), "showing  of  total ");
    }

    #[test]
    fn row_checkbox_labels_are_one_based() {
        assert_eq!(row_checkbox_label(0), "Select row 1");
        assert_eq!(row_checkbox_label(9), "Select row 10");
    }
}
