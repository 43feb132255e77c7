//! Application Context
//!
//! The page's coordinator, shared with components via the Leptos Context API.

use calorie_core::{AppResult, Coordinator};
use leptos::prelude::*;

use crate::dom_view::DomView;

/// Handle to the coordinator, provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    coordinator: StoredValue<Coordinator<DomView>, LocalStorage>,
}

impl AppContext {
    pub fn new(coordinator: Coordinator<DomView>) -> Self {
        Self {
            coordinator: StoredValue::new_local(coordinator),
        }
    }

    /// Run one handler to completion and log its failure, if any
    pub fn dispatch<T>(
        &self,
        action: &str,
        handler: impl FnOnce(&mut Coordinator<DomView>) -> AppResult<T>,
    ) -> Option<T> {
        match self.coordinator.try_update_value(handler)? {
            Ok(value) => Some(value),
            Err(e) if e.is_input_error() => {
                log::warn!("{} rejected: {}", action, e);
                None
            }
            Err(e) => {
                log::error!("{} failed: {}", action, e);
                None
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
