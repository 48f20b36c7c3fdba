//! Items List App
//!
//! Single screen: heading, the two-field form, and the item list.

use leptos::prelude::*;
use reactive_stores::Store;

use items_core::view::HEADING;

use crate::components::{ItemForm, ItemList};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    // Load saved items once on mount
    ctx.start();

    view! {
        <main class="container">
            <h1 class="heading">{HEADING}</h1>
            <ItemForm />
            <ItemList />
        </main>
    }
}
