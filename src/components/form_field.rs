//! Form Field Component
//!
//! Single-line input with its validation message underneath.

use leptos::prelude::*;

use items_core::FieldView;

#[component]
pub fn FormField(
    #[prop(into)] field: Signal<FieldView>,
    #[prop(into)] on_edit: Callback<String>,
    /// Locked until the saved items are loaded
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <input
                type="text"
                class="input"
                disabled=move || disabled.get()
                placeholder=move || field.with(|f| f.placeholder)
                prop:value=move || field.with(|f| f.value.clone())
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            />
            {move || field.with(|f| f.error).map(|msg| view! {
                <p class="validation-text">{msg}</p>
            })}
        </div>
    }
}
