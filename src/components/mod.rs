//! UI Components
//!
//! Leptos components rendering the published `ScreenView`.

mod form_field;
mod item_form;
mod item_list;

pub use form_field::FormField;
pub use item_form::ItemForm;
pub use item_list::ItemList;
