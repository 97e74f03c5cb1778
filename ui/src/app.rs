use zetable_states::{Row, ViewportObserver};

use crate::config::DemoConfig;
use crate::sample::{sample_columns, sample_rows};
use crate::widgets::{DataTable, TableColumn, TableState};

/// Demo page rendering the data table over static sample data.
pub struct ZeTableApp {
    config: DemoConfig,
    columns: Vec<TableColumn>,
    rows: Vec<Row>,
    viewport: ViewportObserver,
    table_state: TableState,
}

impl ZeTableApp {
    /// Called once before the first frame.
    pub fn new(config: DemoConfig) -> Self {
        let viewport = ViewportObserver::new();
        let table_state = TableState::with_viewport(&viewport).with_policy(config.select_all_policy);

        Self {
            config,
            columns: sample_columns(),
            rows: sample_rows(),
            viewport,
            table_state,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn table_state(&self) -> &TableState {
        &self.table_state
    }

    pub fn table_state_mut(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    pub fn viewport(&self) -> &ViewportObserver {
        &self.viewport
    }

    /// Renders the page content into `ui`.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.viewport.observe(ui.ctx().content_rect().width());

        ui.heading("Hello World");
        ui.label("NS - SUITE");
        ui.add_space(8.0);

        let data_length = i64::try_from(self.rows.len()).unwrap_or(i64::MAX);
        let total_length = self.config.total_length.unwrap_or(data_length);

        let response = DataTable::new("sample_users", &self.columns, &self.rows)
            .show_checkboxes(self.config.show_checkboxes)
            .show_total(self.config.show_total)
            .data_length(data_length)
            .total_length(total_length)
            .label(&self.config.label)
            .scrollable(self.config.scrollable)
            .loading(self.config.loading)
            .show(ui, &mut self.table_state);

        if let Some(change) = response.selection_changed {
            log::info!(
                "Selection changed ({change:?}), {} rows selected",
                self.table_state.selection().len()
            );
        }
    }
}

impl eframe::App for ZeTableApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
