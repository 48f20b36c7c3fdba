//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the last
//! `ScreenView` published by the controller, split per field so typing in
//! one input does not re-render the list.

use leptos::prelude::*;
use reactive_stores::Store;
use items_core::{FieldView, RowView, ScreenView};

/// Rendered screen state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Title input
    pub title: FieldView,
    /// Description input
    pub description: FieldView,
    /// One row per record, in list order
    pub rows: Vec<RowView>,
    /// Shown instead of the list when there are no rows
    pub empty_message: Option<&'static str>,
    /// False until the stored items have been loaded
    pub ready: bool,
}

impl AppState {
    pub fn new() -> Self {
        let view = ScreenView::default();
        Self {
            title: view.title,
            description: view.description,
            rows: view.rows,
            empty_message: view.empty_message,
            ready: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Publish a freshly rendered view, touching only the parts that changed
pub fn store_apply_view(store: &AppStore, view: ScreenView) {
    if store.title().get_untracked() != view.title {
        store.title().set(view.title);
    }
    if store.description().get_untracked() != view.description {
        store.description().set(view.description);
    }
    if store.rows().with_untracked(|rows| *rows != view.rows) {
        store.rows().set(view.rows);
    }
    if store.empty_message().get_untracked() != view.empty_message {
        store.empty_message().set(view.empty_message);
    }
}

/// Mark the initial load as finished
pub fn store_mark_ready(store: &AppStore) {
    store.ready().set(true);
}
