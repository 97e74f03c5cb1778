//! Generic data table widget.
//!
//! The table is split into smaller, focused components:
//! - `columns`: column descriptors and sizing
//! - `header`: header row rendering
//! - `row`: data and full-width row rendering
//! - `cells`: cell rendering functions
//! - `state`: host-owned selection and viewport state
//!
//! The host supplies columns and rows every frame and keeps a [`TableState`]
//! alive between frames. Selection changes are reported back through
//! [`TableResponse::selection_changed`] and the optional
//! [`DataTable::on_selection_change`] callback.

pub mod cells;
pub mod columns;
pub mod header;
pub mod row;
mod state;

use egui::{Align, Id, Layout, Response, Ui};
use egui_extras::TableBuilder;
use zetable_states::{ResolvedColumn, Row, Selection, SelectionChange, resolve_columns, span};

pub use columns::{CellRenderer, TableColumn};
pub use state::TableState;

use cells::{render_empty_cell, render_loading_cell, render_summary_cell, summary_text};
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::{DataRow, render_data_row, render_span_row};

type SelectionCallback<'a> = Box<dyn FnMut(&SelectionChange, &Selection) + 'a>;

/// Which of the mutually exclusive body states was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Rows(usize),
}

/// Result of showing a [`DataTable`].
#[derive(Debug)]
pub struct TableResponse {
    pub response: Response,
    /// The selection change caused by user input this frame, if any.
    pub selection_changed: Option<SelectionChange>,
    pub body: BodyState,
    /// Number of data columns rendered after the viewport filter.
    pub visible_columns: usize,
}

/// A table over `rows`, configured per frame.
#[must_use = "You should call .show()"]
pub struct DataTable<'a> {
    id_salt: Id,
    columns: &'a [TableColumn],
    rows: &'a [Row],
    show_checkboxes: bool,
    show_total: bool,
    data_length: Option<i64>,
    total_length: Option<i64>,
    label: Option<&'a str>,
    scrollable: bool,
    loading: bool,
    on_selection_change: Option<SelectionCallback<'a>>,
}

impl<'a> DataTable<'a> {
    pub fn new(id_salt: impl std::hash::Hash, columns: &'a [TableColumn], rows: &'a [Row]) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            columns,
            rows,
            show_checkboxes: false,
            show_total: false,
            data_length: None,
            total_length: None,
            label: None,
            scrollable: true,
            loading: false,
            on_selection_change: None,
        }
    }

    /// Adds a leading selection column with a select-all checkbox in the header.
    pub fn show_checkboxes(mut self, show: bool) -> Self {
        self.show_checkboxes = show;
        self
    }

    /// Renders a "showing X of Y total label" row right below the header.
    pub fn show_total(mut self, show: bool) -> Self {
        self.show_total = show;
        self
    }

    pub fn data_length(mut self, length: i64) -> Self {
        self.data_length = Some(length);
        self
    }

    pub fn total_length(mut self, length: i64) -> Self {
        self.total_length = Some(length);
        self
    }

    /// Noun used in the summary row, e.g. `users`.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Scroll the body under a sticky header. On by default.
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Show a loading placeholder instead of the rows.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Called with the change and the resulting selection whenever the user
    /// toggles a checkbox.
    pub fn on_selection_change(
        mut self,
        callback: impl FnMut(&SelectionChange, &Selection) + 'a,
    ) -> Self {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    pub fn show(mut self, ui: &mut Ui, state: &mut TableState) -> TableResponse {
        state.sync_viewport();

        let row_count = self.rows.len();
        let body = if self.loading {
            BodyState::Loading
        } else if row_count == 0 {
            BodyState::Empty
        } else {
            BodyState::Rows(row_count)
        };
        if !self.loading {
            state.selection_mut().retain_within(row_count);
        }

        let resolved = resolve_columns(self.columns.iter().map(TableColumn::spec), state.is_mobile());
        let span = span(resolved.len(), self.show_checkboxes);
        log::trace!(
            "Rendering table {:?}: {body:?}, {} of {} columns",
            self.id_salt,
            resolved.len(),
            self.columns.len()
        );

        let mut toggled_all = false;
        let mut toggled_row = None;
        let selection = state.selection();
        let all_selected = selection.is_all_selected(row_count);

        let response = ui
            .push_id(self.id_salt, |ui| {
                if span == 0 {
                    self.render_without_columns(ui, body);
                    return;
                }

                let mut builder = TableBuilder::new(ui)
                    .striped(true)
                    .vscroll(self.scrollable)
                    .auto_shrink([false, true])
                    .cell_layout(Layout::left_to_right(Align::Center));
                for column in table_columns(&resolved, self.show_checkboxes) {
                    builder = builder.column(column);
                }

                builder
                    .header(HEADER_HEIGHT, |mut header| {
                        toggled_all = render_table_header(
                            &mut header,
                            &resolved,
                            self.show_checkboxes,
                            all_selected,
                        );
                    })
                    .body(|mut table_body| {
                        if self.show_total {
                            let text = self.summary();
                            table_body.row(ROW_HEIGHT, |mut table_row| {
                                render_span_row(&mut table_row, span, |ui| {
                                    render_summary_cell(ui, &text);
                                });
                            });
                        }

                        match body {
                            BodyState::Loading => table_body.row(ROW_HEIGHT, |mut table_row| {
                                render_span_row(&mut table_row, span, render_loading_cell);
                            }),
                            BodyState::Empty => table_body.row(ROW_HEIGHT, |mut table_row| {
                                render_span_row(&mut table_row, span, render_empty_cell);
                            }),
                            BodyState::Rows(_) => {
                                for (index, row) in self.rows.iter().enumerate() {
                                    let data = DataRow {
                                        index,
                                        row,
                                        is_selected: selection.is_selected(index),
                                    };
                                    table_body.row(ROW_HEIGHT, |mut table_row| {
                                        if render_data_row(
                                            &mut table_row,
                                            &data,
                                            &resolved,
                                            self.columns,
                                            self.show_checkboxes,
                                        ) {
                                            toggled_row = Some(index);
                                        }
                                    });
                                }
                            }
                        }
                    });
            })
            .response;

        // Apply toggles after the table borrowed the selection for rendering.
        let toggle = if toggled_all {
            Some(Toggle::All)
        } else {
            toggled_row.map(Toggle::Row)
        };
        let selection_changed = toggle.map(|toggle| {
            ui.ctx().request_repaint();
            apply_toggle(
                state.selection_mut(),
                toggle,
                row_count,
                self.on_selection_change.as_mut(),
            )
        });

        TableResponse {
            response,
            selection_changed,
            body,
            visible_columns: resolved.len(),
        }
    }

    fn summary(&self) -> String {
        summary_text(self.data_length, self.total_length, self.label)
    }

    /// Every column is hidden and there is no checkbox column, so there is no
    /// grid to place full-width rows in.
    fn render_without_columns(&self, ui: &mut Ui, body: BodyState) {
        if self.show_total {
            render_summary_cell(ui, &self.summary());
        }
        match body {
            BodyState::Loading => render_loading_cell(ui),
            BodyState::Empty => render_empty_cell(ui),
            BodyState::Rows(_) => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    All,
    Row(usize),
}

fn apply_toggle(
    selection: &mut Selection,
    toggle: Toggle,
    row_count: usize,
    callback: Option<&mut SelectionCallback<'_>>,
) -> SelectionChange {
    let change = match toggle {
        Toggle::All => selection.toggle_all(row_count),
        Toggle::Row(index) => selection.toggle_row(index),
    };
    if let Some(callback) = callback {
        callback(&change, &*selection);
    }
    change
}

/// The effective columns a table would render for the given viewport mode.
pub fn visible_columns(columns: &[TableColumn], is_mobile: bool) -> Vec<ResolvedColumn> {
    resolve_columns(columns.iter().map(TableColumn::spec), is_mobile)
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use serde_json::json;
    use zetable_states::{
        DEFAULT_MIN_WIDTH, SelectAllPolicy, TextAlign, ViewportObserver, rows_from_json,
    };

    use super::*;

    struct Fixture {
        columns: Vec<TableColumn>,
        rows: Vec<Row>,
        state: TableState,
        show_checkboxes: bool,
        scrollable: bool,
        loading: bool,
        last: Option<(BodyState, usize)>,
    }

    impl Fixture {
        fn new(rows: Vec<Row>) -> Self {
            Self {
                columns: vec![
                    TableColumn::key("ID", "id"),
                    TableColumn::key("Name", "name").text_align(TextAlign::Center),
                    TableColumn::key("Age", "age").hide_on_mobile(true),
                ],
                rows,
                state: TableState::new(),
                show_checkboxes: false,
                scrollable: true,
                loading: false,
                last: None,
            }
        }
    }

    fn people() -> Vec<Row> {
        rows_from_json(json!([
            { "id": 1, "name": "John Doe", "age": 25 },
            { "id": 2, "name": "Jane Smith", "age": 30 },
            { "id": 3, "name": "Bob Johnson", "age": 35 },
        ]))
        .expect("sample rows are objects")
    }

    fn harness(fixture: Fixture) -> Harness<'static, Fixture> {
        Harness::new_ui_state(
            |ui, fixture: &mut Fixture| {
                let response = DataTable::new("people", &fixture.columns, &fixture.rows)
                    .show_checkboxes(fixture.show_checkboxes)
                    .scrollable(fixture.scrollable)
                    .loading(fixture.loading)
                    .show(ui, &mut fixture.state);
                fixture.last = Some((response.body, response.visible_columns));
            },
            fixture,
        )
    }

    #[test]
    fn test_rows_render_in_input_order() {
        let mut harness = harness(Fixture::new(people()));
        harness.run();

        for header in ["ID", "Name", "Age"] {
            assert!(
                harness.query_by_label(header).is_some(),
                "header {header} should be rendered"
            );
        }
        for name in ["John Doe", "Jane Smith", "Bob Johnson"] {
            assert!(harness.query_by_label(name).is_some(), "{name} should be rendered");
        }
        assert_eq!(harness.state().last, Some((BodyState::Rows(3), 3)));
    }

    #[test]
    fn test_name_column_renders_centered_and_others_left() {
        let mut harness = harness(Fixture::new(people()));
        harness.run();

        let id_header = harness.get_by_label("ID").rect();
        let id_cell = harness.get_by_label("1").rect();
        let name_header = harness.get_by_label("Name").rect();
        let name_cell = harness.get_by_label("John Doe").rect();
        let age_header = harness.get_by_label("Age").rect();
        let age_cell = harness.get_by_label("25").rect();

        assert!((id_cell.left() - id_header.left()).abs() < 1.0);
        assert!((age_cell.left() - age_header.left()).abs() < 1.0);
        assert!(id_header.width() < DEFAULT_MIN_WIDTH / 2.0);

        assert!(
            name_header.width() > DEFAULT_MIN_WIDTH - 10.0,
            "centered header should span its column, got {name_header:?}"
        );
        assert!((name_cell.center().x - name_header.center().x).abs() < 1.0);
        assert!(name_header.left() > id_header.right());
    }

    #[test]
    fn test_non_scrollable_table_renders_every_part() {
        let mut fixture = Fixture::new(people());
        fixture.scrollable = false;
        fixture.show_checkboxes = true;
        let mut harness = harness(fixture);
        harness.run();

        for header in ["ID", "Name", "Age"] {
            assert!(harness.query_by_label(header).is_some());
        }
        for name in ["John Doe", "Jane Smith", "Bob Johnson"] {
            assert!(harness.query_by_label(name).is_some(), "{name} should be rendered");
        }
        assert_eq!(harness.query_all_by_label_contains("Select row").count(), 3);
        assert_eq!(harness.state().last, Some((BodyState::Rows(3), 3)));
    }

    #[test]
    fn test_loading_replaces_rows() {
        let mut fixture = Fixture::new(people());
        fixture.loading = true;
        let mut harness = harness(fixture);
        harness.run_steps(4);

        assert!(harness.query_by_label(cells::LOADING_TEXT).is_some());
        assert!(harness.query_by_label("John Doe").is_none());
        assert!(harness.query_by_label(cells::EMPTY_TEXT).is_none());
        assert_eq!(harness.state().last, Some((BodyState::Loading, 3)));
    }

    #[test]
    fn test_empty_rows_show_placeholder() {
        let mut harness = harness(Fixture::new(Vec::new()));
        harness.run();

        assert!(harness.query_by_label(cells::EMPTY_TEXT).is_some());
        assert!(harness.query_by_label(cells::LOADING_TEXT).is_none());
        assert_eq!(harness.state().last, Some((BodyState::Empty, 3)));
    }

    #[test]
    fn test_checkboxes_render_one_per_row_plus_header() {
        let mut fixture = Fixture::new(people());
        fixture.show_checkboxes = true;
        let mut harness = harness(fixture);
        harness.run();

        assert!(harness.query_by_label(cells::SELECT_ALL_LABEL).is_some());
        assert_eq!(harness.query_all_by_label_contains("Select row").count(), 3);
    }

    #[test]
    fn test_checkboxes_hidden_by_default() {
        let mut harness = harness(Fixture::new(people()));
        harness.run();

        assert!(harness.query_by_label(cells::SELECT_ALL_LABEL).is_none());
        assert_eq!(harness.query_all_by_label_contains("Select row").count(), 0);
    }

    #[test]
    fn test_mobile_viewport_hides_flagged_column_everywhere() {
        let observer = ViewportObserver::fixed(640.0);
        let mut fixture = Fixture::new(people());
        fixture.state = TableState::with_viewport(&observer);
        let mut harness = harness(fixture);
        harness.run();

        assert!(harness.query_by_label("Age").is_none());
        for age in ["25", "30", "35"] {
            assert!(harness.query_by_label(age).is_none(), "age {age} should be hidden");
        }
        assert!(harness.query_by_label("John Doe").is_some());
        assert_eq!(harness.state().last, Some((BodyState::Rows(3), 2)));
    }

    #[test]
    fn test_resize_back_to_desktop_restores_column() {
        let observer = ViewportObserver::fixed(640.0);
        let mut fixture = Fixture::new(people());
        fixture.state = TableState::with_viewport(&observer);
        let mut harness = harness(fixture);
        harness.run();
        assert!(harness.query_by_label("Age").is_none());

        observer.observe(1280.0);
        harness.run();

        assert!(harness.query_by_label("Age").is_some());
        assert!(harness.query_by_label("35").is_some());
        assert!(!harness.state().state.is_mobile());
    }

    #[test]
    fn test_selection_survives_frames_and_prunes_removed_rows() {
        let mut fixture = Fixture::new(people());
        fixture.show_checkboxes = true;
        fixture.state = TableState::new().with_policy(SelectAllPolicy::Derived);
        let mut harness = harness(fixture);
        harness.run();

        harness.state_mut().state.selection_mut().toggle_all(3);
        harness.run();
        assert_eq!(harness.state().state.selection().selected_rows(), &[0, 1, 2]);

        harness.state_mut().rows.truncate(1);
        harness.run();
        assert_eq!(harness.state().state.selection().selected_rows(), &[0]);
    }

    #[test]
    fn test_toggles_notify_callback_with_resulting_selection() {
        let mut seen = Vec::new();
        let mut selection = Selection::default();
        {
            let mut callback: SelectionCallback<'_> =
                Box::new(|change: &SelectionChange, selection: &Selection| {
                    seen.push((*change, selection.selected_rows().to_vec()));
                });

            apply_toggle(&mut selection, Toggle::Row(1), 3, Some(&mut callback));
            apply_toggle(&mut selection, Toggle::All, 3, Some(&mut callback));
            apply_toggle(&mut selection, Toggle::All, 3, Some(&mut callback));
        }

        assert_eq!(
            seen,
            vec![
                (
                    SelectionChange::Row {
                        index: 1,
                        selected: true
                    },
                    vec![1]
                ),
                (SelectionChange::All { selected: true }, vec![0, 1, 2]),
                (SelectionChange::All { selected: false }, vec![]),
            ]
        );
    }

    #[test]
    fn test_toggle_without_callback_still_applies() {
        let mut selection = Selection::default();
        let change = apply_toggle(&mut selection, Toggle::Row(2), 3, None);
        assert_eq!(
            change,
            SelectionChange::Row {
                index: 2,
                selected: true
            }
        );
        assert!(selection.is_selected(2));
    }

    #[test]
    fn test_visible_columns_matches_viewport() {
        let fixture = Fixture::new(Vec::new());
        assert_eq!(visible_columns(&fixture.columns, false).len(), 3);
        assert_eq!(visible_columns(&fixture.columns, true).len(), 2);
    }
}
