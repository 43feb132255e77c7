//! Coordinator
//!
//! Turns user actions into store mutations followed by view updates. This is
//! the only place that sees both the store and a display surface.

use crate::error::{AppError, AppResult, StoreError};
use crate::markup;
use crate::model::ItemId;
use crate::store::ItemStore;
use crate::view::ItemView;

#[cfg(test)]
mod tests;

/// Owns the store and the display surface for one page
pub struct Coordinator<V: ItemView> {
    store: ItemStore,
    view: V,
}

impl<V: ItemView> Coordinator<V> {
    pub fn new(store: ItemStore, view: V) -> Self {
        Self { store, view }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Bring the surface in line with the store on page load
    pub fn init(&mut self) -> AppResult<()> {
        self.view.clear_edit_state()?;

        let items = self.store.list_items();
        if items.is_empty() {
            self.view.set_list_visible(false)?;
        } else {
            self.view.render_items(items)?;
            self.view.set_list_visible(true)?;
        }
        self.show_total()?;

        log::info!("calorie tracker ready ({} items)", self.store.list_items().len());
        Ok(())
    }

    /// Add button. Returns the new id, or `None` when a field was left empty.
    pub fn add_submit(&mut self) -> AppResult<Option<ItemId>> {
        let input = self.view.read_input()?;
        if !input.is_complete() {
            log::debug!("add ignored: empty field");
            return Ok(None);
        }

        let item = self.store.add_item(&input.name, &input.calories)?;
        let id = item.id;
        self.view.append_item(item)?;
        self.show_total()?;
        self.view.clear_input()?;

        self.log_state();
        Ok(Some(id))
    }

    /// Edit icon inside the row with element id `row_element_id`
    pub fn edit_click(&mut self, row_element_id: &str) -> AppResult<ItemId> {
        let id = markup::parse_row_element_id(row_element_id)
            .ok_or_else(|| AppError::InvalidRowId(row_element_id.to_string()))?;

        let item = self.store.set_current_item(id)?;
        self.view.fill_form(item)?;

        log::debug!("editing item {}", id);
        Ok(id)
    }

    /// Update button
    pub fn update_submit(&mut self) -> AppResult<ItemId> {
        let input = self.view.read_input()?;

        let item = self.store.update_item(&input.name, &input.calories)?;
        let id = item.id;
        self.view.replace_item(item)?;
        self.show_total()?;
        self.view.clear_edit_state()?;

        self.log_state();
        Ok(id)
    }

    /// Delete button
    pub fn delete_submit(&mut self) -> AppResult<ItemId> {
        let id = self
            .store
            .current_item()
            .map(|item| item.id)
            .ok_or(StoreError::NoCurrentItem)?;

        self.store.delete_item(id)?;
        self.view.remove_item(id)?;
        self.show_total()?;
        if self.store.is_empty() {
            self.view.set_list_visible(false)?;
        }
        self.view.clear_edit_state()?;

        self.log_state();
        Ok(id)
    }

    /// Back button; the store is left alone
    pub fn cancel(&mut self) -> AppResult<()> {
        self.view.clear_edit_state()?;
        Ok(())
    }

    fn show_total(&mut self) -> AppResult<()> {
        let total = self.store.total_calories();
        self.view.show_total(total)?;
        Ok(())
    }

    fn log_state(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        match serde_json::to_string(&self.store.snapshot()) {
            Ok(json) => log::debug!("state: {}", json),
            Err(e) => log::warn!("could not serialize state: {}", e),
        }
    }
}
