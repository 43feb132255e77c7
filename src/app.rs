//! Calorie Tracker App
//!
//! Page shell plus the coordinator that keeps the list in sync with the store.

use calorie_core::{Coordinator, ItemStore};
use leptos::prelude::*;

use crate::components::{ItemForm, ItemList, TotalCalories};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::dom_view::DomView;
use crate::events;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let view = DomView::new(document(), config.selectors);
    let ctx = AppContext::new(Coordinator::new(ItemStore::new(), view));

    // Provide context to all children
    provide_context(ctx);

    events::suppress_enter_submit();

    // Effects run after the shell is mounted, so the selectors resolve
    Effect::new(move |_| {
        ctx.dispatch("init", |app| app.init());
    });

    view! {
        <nav class="blue">
            <div class="nav-wrapper">
                <div class="container">
                    <a href="#" class="brand-logo center">"Tracalorie"</a>
                </div>
            </div>
        </nav>
        <br />

        <div class="container">
            <div class="card">
                <div class="card-content">
                    <span class="card-title">"Add Meal / Food Item"</span>
                    <ItemForm />
                </div>
            </div>

            <TotalCalories />

            <ItemList />
        </div>
    }
}
