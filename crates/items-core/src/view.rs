//! Screen View
//!
//! Rendering is a pure function of controller state. The UI layer draws
//! exactly what `ScreenView::render` returns and nothing else.

use crate::domain::{FormState, Record, ValidationError};

pub const HEADING: &str = "Items List";
pub const TITLE_PLACEHOLDER: &str = "Title";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description";
pub const ADD_LABEL: &str = "Add Item";
pub const DELETE_LABEL: &str = "Delete";
pub const EMPTY_MESSAGE: &str = "No items yet.";

/// One text input with its gated validation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub value: String,
    pub placeholder: &'static str,
    pub error: Option<&'static str>,
}

/// One list row; `id` is what the delete control is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub delete_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub heading: &'static str,
    pub title: FieldView,
    pub description: FieldView,
    pub add_label: &'static str,
    pub rows: Vec<RowView>,
    /// Present exactly when `rows` is empty
    pub empty_message: Option<&'static str>,
}

impl ScreenView {
    pub fn render(records: &[Record], form: &FormState) -> Self {
        let rows: Vec<RowView> = records
            .iter()
            .map(|record| RowView {
                id: record.id.clone(),
                title: record.title.clone(),
                description: record.description.clone(),
                delete_label: DELETE_LABEL,
            })
            .collect();
        let empty_message = rows.is_empty().then_some(EMPTY_MESSAGE);

        Self {
            heading: HEADING,
            title: FieldView {
                value: form.draft_title.clone(),
                placeholder: TITLE_PLACEHOLDER,
                error: form
                    .title_invalid_visible
                    .then(|| ValidationError::EmptyTitle.message()),
            },
            description: FieldView {
                value: form.draft_description.clone(),
                placeholder: DESCRIPTION_PLACEHOLDER,
                error: form
                    .description_invalid_visible
                    .then(|| ValidationError::EmptyDescription.message()),
            },
            add_label: ADD_LABEL,
            rows,
            empty_message,
        }
    }
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::render(&[], &FormState::default())
    }
}
