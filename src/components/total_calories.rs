//! Total Calories Component

use leptos::prelude::*;

use crate::config::TOTAL_CALORIES_CLASS;

#[component]
pub fn TotalCalories() -> impl IntoView {
    view! {
        <h3 class="center-align">
            "Total Calories: "
            <span class=TOTAL_CALORIES_CLASS>"0"</span>
        </h3>
    }
}
