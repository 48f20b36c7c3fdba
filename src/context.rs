//! Application Context
//!
//! Shared handle to the list-form controller, provided via Leptos Context API.
//! Every UI event becomes one local task that locks the controller, applies
//! one operation (including its save), and publishes the new view.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tokio::sync::Mutex;

use items_core::{AddOutcome, ListFormController, RecordStore};

use crate::storage::DeviceStore;
use crate::store::{store_apply_view, store_mark_ready, AppStore};

type Controller = ListFormController<DeviceStore>;

/// Empty until the startup load finishes; the lock queues events behind it
type SharedController = Rc<Mutex<Option<Controller>>>;

#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<SharedController, LocalStorage>,
    /// Rendered state for components to read
    pub store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(Mutex::new(None))),
            store,
        }
    }

    /// Open device storage and load the saved items (once, at startup)
    pub fn start(&self) {
        let controller = self.controller.get_value();
        let store = self.store;
        spawn_local(async move {
            let mut slot = controller.lock().await;
            let loaded = ListFormController::init(RecordStore::new(DeviceStore::open())).await;
            log::info!("[APP] Loaded {} items", loaded.records().len());
            store_apply_view(&store, loaded.view());
            store_mark_ready(&store);
            *slot = Some(loaded);
        });
    }

    pub fn edit_title(&self, val: String) {
        self.dispatch_sync(move |controller| controller.set_title_value(val));
    }

    pub fn edit_description(&self, val: String) {
        self.dispatch_sync(move |controller| controller.set_description_value(val));
    }

    pub fn add_item(&self) {
        let controller = self.controller.get_value();
        let store = self.store;
        spawn_local(async move {
            let mut slot = controller.lock().await;
            let Some(controller) = slot.as_mut() else { return };
            match controller.add_item().await {
                AddOutcome::Added(record) => log::info!("[APP] Added item {}", record.id),
                AddOutcome::Rejected(err) => log::debug!("[APP] Add rejected: {}", err),
            }
            store_apply_view(&store, controller.view());
        });
    }

    pub fn delete_item(&self, id: String) {
        let controller = self.controller.get_value();
        let store = self.store;
        spawn_local(async move {
            let mut slot = controller.lock().await;
            let Some(controller) = slot.as_mut() else { return };
            if controller.delete_item(&id).await {
                log::info!("[APP] Deleted item {}", id);
            }
            store_apply_view(&store, controller.view());
        });
    }

    fn dispatch_sync(&self, op: impl FnOnce(&mut Controller) + 'static) {
        let controller = self.controller.get_value();
        let store = self.store;
        spawn_local(async move {
            let mut slot = controller.lock().await;
            let Some(controller) = slot.as_mut() else { return };
            op(controller);
            store_apply_view(&store, controller.view());
        });
    }
}
