//! Item Form Component
//!
//! Name and calorie inputs with the add/update/delete/back buttons.

use leptos::prelude::*;

use crate::config::{
    ADD_BTN_CLASS, BACK_BTN_CLASS, DELETE_BTN_CLASS, ITEM_CALORIES_ID, ITEM_NAME_ID,
    UPDATE_BTN_CLASS,
};
use crate::context::use_app_context;

/// Form for adding and editing meals
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <form class="col">
            <div class="row">
                <div class="input-field col s6">
                    <input type="text" placeholder="Add Item" id=ITEM_NAME_ID />
                    <label for=ITEM_NAME_ID>"Meal"</label>
                </div>
                <div class="input-field col s6">
                    <input type="number" placeholder="Add Calories" id=ITEM_CALORIES_ID />
                    <label for=ITEM_CALORIES_ID>"Calories"</label>
                </div>

                <button
                    class=format!("{} btn blue darken-3", ADD_BTN_CLASS)
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.dispatch("add", |app| app.add_submit());
                    }
                >
                    <i class="fa fa-plus"></i>
                    " Add Meal"
                </button>
                <button
                    class=format!("{} btn orange", UPDATE_BTN_CLASS)
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.dispatch("update", |app| app.update_submit());
                    }
                >
                    <i class="fa fa-pencil-square-o"></i>
                    " Update Meal"
                </button>
                <button
                    class=format!("{} btn red", DELETE_BTN_CLASS)
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.dispatch("delete", |app| app.delete_submit());
                    }
                >
                    <i class="fa fa-remove"></i>
                    " Delete Meal"
                </button>
                <button
                    class=format!("{} btn grey pull-right", BACK_BTN_CLASS)
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.dispatch("back", |app| app.cancel());
                    }
                >
                    <i class="fa fa-chevron-circle-left"></i>
                    " Back"
                </button>
            </div>
        </form>
    }
}
