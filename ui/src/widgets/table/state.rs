//! Host-owned state of one data table instance.

use zetable_states::{SelectAllPolicy, Selection, ViewportObserver, ViewportSubscription};

/// Selection and viewport mode for one table.
///
/// The host keeps this alive for as long as the table is shown and passes it
/// to [`super::DataTable::show`] every frame. Creating it with
/// [`TableState::with_viewport`] subscribes to viewport changes; dropping it
/// releases the subscription.
#[derive(Debug, Default)]
pub struct TableState {
    selection: Selection,
    is_mobile: bool,
    viewport: Option<ViewportSubscription>,
}

impl TableState {
    /// A table that never leaves desktop mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table that follows `observer`. The current width, if already
    /// measured, is applied immediately.
    pub fn with_viewport(observer: &ViewportObserver) -> Self {
        let mut state = Self {
            viewport: Some(observer.subscribe()),
            ..Self::default()
        };
        state.sync_viewport();
        state
    }

    pub fn with_policy(mut self, policy: SelectAllPolicy) -> Self {
        self.selection = Selection::new(policy);
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn is_subscribed(&self) -> bool {
        self.viewport.is_some()
    }

    /// Applies pending viewport changes. Returns `true` if the mode changed.
    pub fn sync_viewport(&mut self) -> bool {
        let Some(mode) = self.viewport.as_ref().and_then(ViewportSubscription::poll) else {
            return false;
        };

        let is_mobile = mode.is_mobile();
        if is_mobile == self.is_mobile {
            return false;
        }

        log::debug!("Table viewport mode changed to {mode:?}");
        self.is_mobile = is_mobile;
        true
    }
}
