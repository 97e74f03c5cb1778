//! Column descriptors and `egui_extras` column sizing for the data table.

use egui::{Align, Direction, Layout, Ui};
use zetable_states::{CellSource, ColumnSpec, ResolvedColumn, Row, TextAlign};

/// Width of the leading selection column.
pub const CHECKBOX_WIDTH: f32 = 24.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Custom cell renderer. Receives the full row and draws its own content.
pub type CellRenderer = Box<dyn Fn(&mut Ui, &Row)>;

/// Describes how one column is labeled, sized, aligned and rendered.
pub struct TableColumn {
    spec: ColumnSpec,
    source: CellSource<CellRenderer>,
}

impl TableColumn {
    /// A column that shows the row's value under `key`.
    pub fn key(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            spec: ColumnSpec::new(header),
            source: CellSource::Key(key.into()),
        }
    }

    /// A column whose cells are drawn by `render`.
    pub fn custom(header: impl Into<String>, render: impl Fn(&mut Ui, &Row) + 'static) -> Self {
        Self {
            spec: ColumnSpec::new(header),
            source: CellSource::Render(Box::new(render)),
        }
    }

    /// Minimum (and initial) width in points. Defaults to 100.
    pub fn min_width(mut self, width: f32) -> Self {
        self.spec.min_width = Some(width);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.spec.text_align = Some(align);
        self
    }

    /// Omit this column entirely while the viewport is in mobile mode.
    pub fn hide_on_mobile(mut self, hide: bool) -> Self {
        self.spec.hide_on_mobile = hide;
        self
    }

    pub fn header_centered(mut self, centered: bool) -> Self {
        self.spec.header_centered = centered;
        self
    }

    pub fn body_centered(mut self, centered: bool) -> Self {
        self.spec.body_centered = centered;
        self
    }

    pub fn spec(&self) -> &ColumnSpec {
        &self.spec
    }

    pub fn source(&self) -> &CellSource<CellRenderer> {
        &self.source
    }
}

impl std::fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableColumn")
            .field("spec", &self.spec)
            .field("source", &self.source)
            .finish()
    }
}

/// `egui_extras` column sizing for the effective columns, in render order.
pub fn table_columns(resolved: &[ResolvedColumn], show_checkboxes: bool) -> Vec<egui_extras::Column> {
    let checkbox = show_checkboxes.then(|| egui_extras::Column::exact(CHECKBOX_WIDTH));

    checkbox
        .into_iter()
        .chain(resolved.iter().map(|column| {
            egui_extras::Column::initial(column.width).at_least(column.width)
        }))
        .collect()
}

/// Cell layout that places content according to `align`.
pub fn align_layout(align: TextAlign) -> Layout {
    match align {
        TextAlign::Left => Layout::left_to_right(Align::Center),
        TextAlign::Center => Layout::centered_and_justified(Direction::LeftToRight),
        TextAlign::Right => Layout::right_to_left(Align::Center),
    }
}
