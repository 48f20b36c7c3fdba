//! List-Form Controller
//!
//! Owns the record list and the form state for the whole session.
//! Loads once at init; every list mutation ends with a save of the full list.

use log::{debug, info};

use crate::domain::{next_record_id, FormState, Record, ValidationError};
use crate::repository::{KeyValueStore, RecordStore};
use crate::view::ScreenView;

/// Result of pressing "Add"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Record),
    Rejected(ValidationError),
}

pub struct ListFormController<S> {
    store: RecordStore<S>,
    records: Vec<Record>,
    form: FormState,
}

impl<S: KeyValueStore> ListFormController<S> {
    /// Build the controller and seed the list from storage
    pub async fn init(store: RecordStore<S>) -> Self {
        let mut controller = Self {
            store,
            records: Vec::new(),
            form: FormState::default(),
        };

        let loaded = controller.store.load().await;
        if !loaded.is_empty() {
            info!("Restored {} items", loaded.len());
            controller.records = loaded;
        }
        controller
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn set_title_value(&mut self, val: impl Into<String>) {
        self.form.set_title(val);
    }

    pub fn set_description_value(&mut self, val: impl Into<String>) {
        self.form.set_description(val);
    }

    /// Validate the drafts and append a new record (drafts stored untrimmed)
    pub async fn add_item(&mut self) -> AddOutcome {
        if let Err(err) = self.form.validate() {
            debug!("Add rejected: {}", err);
            return AddOutcome::Rejected(err);
        }

        let (title, description) = self.form.take_drafts();
        let record = Record::new(next_record_id(&self.records), title, description);
        self.records.push(record.clone());
        self.persist().await;

        AddOutcome::Added(record)
    }

    /// Remove the record with `id`. Returns false (and saves nothing) if absent.
    pub async fn delete_item(&mut self, id: &str) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            debug!("Delete ignored, no item {}", id);
            return false;
        };

        self.records.remove(index);
        self.persist().await;
        true
    }

    pub fn view(&self) -> ScreenView {
        ScreenView::render(&self.records, &self.form)
    }

    async fn persist(&self) {
        self.store.save(&self.records).await;
    }
}
