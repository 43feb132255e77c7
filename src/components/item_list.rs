//! Item List Component
//!
//! Empty list container. One delegated click handler covers the edit icons
//! of every row the view writes into it.

use leptos::prelude::*;

use crate::config::ITEM_LIST_ID;
use crate::context::use_app_context;
use crate::events::edit_row_id;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(row_id) = edit_row_id(&ev) {
            ctx.dispatch("edit", |app| app.edit_click(&row_id));
        }
        ev.prevent_default();
    };

    view! {
        <ul id=ITEM_LIST_ID class="collection" on:click=on_click></ul>
    }
}
