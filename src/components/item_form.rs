//! Item Form Component
//!
//! Title and description inputs with inline validation, plus the add button.

use leptos::prelude::*;

use items_core::view::ADD_LABEL;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;
use super::FormField;

/// Form for creating new items
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let loading = Signal::derive(move || !store.ready().get());

    let add_item = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.add_item();
    };

    view! {
        <form class="item-form" on:submit=add_item>
            <FormField
                field=Signal::derive(move || store.title().get())
                on_edit=Callback::new(move |val: String| ctx.edit_title(val))
                disabled=loading
            />
            <FormField
                field=Signal::derive(move || store.description().get())
                on_edit=Callback::new(move |val: String| ctx.edit_description(val))
                disabled=loading
            />
            <button type="submit" class="add-btn" disabled=move || loading.get()>
                {ADD_LABEL}
            </button>
        </form>
    }
}
