//! Item List Component
//!
//! Rows in list order, each with a delete control bound to its id.
//! Shows the empty-state message instead when there are no items.

use leptos::prelude::*;

use items_core::RowView;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <div class="list">
            {move || store.empty_message().get().map(|msg| view! {
                <p class="no-items">{msg}</p>
            })}
            <For
                each=move || store.rows().get()
                key=|row| row.id.clone()
                children=move |row| view! { <ItemRow row=row /> }
            />
        </div>
    }
}

/// A single record row
#[component]
fn ItemRow(row: RowView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = row.id.clone();

    view! {
        <div class="item-container">
            <div>
                <p class="item-title">{row.title}</p>
                <p class="item-description">{row.description}</p>
            </div>
            <button
                class="delete-btn"
                on:click=move |_| ctx.delete_item(id.clone())
            >
                {row.delete_label}
            </button>
        </div>
    }
}
