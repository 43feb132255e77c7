//! DOM Event Helpers

use calorie_core::markup;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Element id of the row whose edit icon was clicked, if the click hit one
pub fn edit_row_id(event: &MouseEvent) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    if !target.class_list().contains(markup::EDIT_ICON_CLASS) {
        return None;
    }
    let row = target.closest("li").ok()??;
    Some(row.id())
}

/// Keep the enter key from submitting the form
pub fn suppress_enter_submit() {
    let _ = window_event_listener(ev::keypress, |event| {
        if event.key() == "Enter" {
            event.prevent_default();
        }
    });
}
