//! Row selection state.
//!
//! Rows are keyed by their position in the data the host supplies. The
//! selected set is kept as an ordered list with no duplicates.

use serde::Deserialize;

/// How the header "select all" checkbox reflects the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllPolicy {
    /// Checked exactly when every row is selected.
    #[default]
    Derived,
    /// Checked state only changes when the header checkbox is toggled, so
    /// individual row toggles can leave it out of date.
    Latched,
}

/// A single change produced by user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Row { index: usize, selected: bool },
    All { selected: bool },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Vec<usize>,
    latched_all: bool,
    policy: SelectAllPolicy,
}

impl Selection {
    pub fn new(policy: SelectAllPolicy) -> Self {
        Self {
            selected: Vec::new(),
            latched_all: false,
            policy,
        }
    }

    pub fn policy(&self) -> SelectAllPolicy {
        self.policy
    }

    pub fn selected_rows(&self) -> &[usize] {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the header checkbox shows as checked for `row_count` rows.
    pub fn is_all_selected(&self, row_count: usize) -> bool {
        match self.policy {
            SelectAllPolicy::Derived => row_count > 0 && self.selected.len() == row_count,
            SelectAllPolicy::Latched => self.latched_all,
        }
    }

    /// Flips membership of one row. The select-all latch is left untouched.
    pub fn toggle_row(&mut self, index: usize) -> SelectionChange {
        let selected = if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(index);
            true
        };

        log::debug!("Row {index} selection toggled to {selected}");
        SelectionChange::Row { index, selected }
    }

    /// Bulk toggle driven by the header checkbox.
    ///
    /// Clears the selection when select-all is currently on, otherwise selects
    /// `0..row_count`. The reported state is the one after the toggle, so with
    /// no rows a derived select-all stays off.
    pub fn toggle_all(&mut self, row_count: usize) -> SelectionChange {
        if self.is_all_selected(row_count) {
            self.selected.clear();
        } else {
            self.selected = (0..row_count).collect();
        }
        if self.policy == SelectAllPolicy::Latched {
            self.latched_all = !self.latched_all;
        }

        let selected = self.is_all_selected(row_count);

        log::debug!("Select all toggled to {selected} over {row_count} rows");
        SelectionChange::All { selected }
    }

    /// Replaces the selection, dropping duplicates but keeping first-seen order.
    pub fn set_selected(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.selected.clear();
        for index in indices {
            if !self.selected.contains(&index) {
                self.selected.push(index);
            }
        }
    }

    /// Drops indices that no longer point at a row.
    pub fn retain_within(&mut self, row_count: usize) {
        self.selected.retain(|&index| index < row_count);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.latched_all = false;
    }
}
