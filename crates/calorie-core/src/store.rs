//! Item Store
//!
//! Owns the item list and the current-item pointer. Knows nothing about the
//! display surface.

use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::model::{Item, ItemId};

/// In-memory item list with an edit selection
#[derive(Debug)]
pub struct ItemStore {
    /// Insertion order is display order
    items: Vec<Item>,
    /// Item selected for editing, resolved by id on every access
    current: Option<ItemId>,
    /// Next id to hand out; only ever grows. `None` once `ItemId::MAX` is taken.
    next_id: Option<ItemId>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            next_id: Some(0),
        }
    }
}

/// Serializable copy of the store state for debugging
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSnapshot {
    pub items: Vec<Item>,
    pub current_item: Option<Item>,
    pub total_calories: u64,
}

/// Parse a calorie count typed by the user
///
/// Surrounding whitespace is ignored; anything other than base-10 digits
/// that fit in a `u32` is rejected.
pub fn parse_calories(text: &str) -> StoreResult<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StoreError::InvalidCalories(text.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| StoreError::InvalidCalories(text.to_string()))
}

fn validate_name(name: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(())
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with items, keeping their ids
    pub fn with_items(items: Vec<Item>) -> StoreResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(StoreError::DuplicateId(item.id));
            }
        }
        let next_id = match items.iter().map(|i| i.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        Ok(Self {
            items,
            current: None,
            next_id,
        })
    }

    pub fn list_items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item; nothing changes if the input is rejected
    pub fn add_item(&mut self, name: &str, calories_text: &str) -> StoreResult<&Item> {
        validate_name(name)?;
        let calories = parse_calories(calories_text)?;

        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        self.items.push(Item::new(id, name, calories));
        log::debug!("added item {} ({:?}, {} cal)", id, name, calories);

        Ok(&self.items[self.items.len() - 1])
    }

    pub fn get_item_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Select an item for editing
    pub fn set_current_item(&mut self, id: ItemId) -> StoreResult<&Item> {
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        self.current = Some(id);
        Ok(&self.items[index])
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current.and_then(|id| self.get_item_by_id(id))
    }

    pub fn clear_current_item(&mut self) {
        self.current = None;
    }

    /// Overwrite name and calories of the current item
    pub fn update_item(&mut self, name: &str, calories_text: &str) -> StoreResult<&Item> {
        let id = self.current.ok_or(StoreError::NoCurrentItem)?;
        validate_name(name)?;
        let calories = parse_calories(calories_text)?;

        let index = self.index_of(id).ok_or(StoreError::NoCurrentItem)?;
        let item = &mut self.items[index];
        item.name = name.to_string();
        item.calories = calories;
        log::debug!("updated item {} ({:?}, {} cal)", id, name, calories);

        Ok(&self.items[index])
    }

    /// Remove an item, clearing the edit selection if it pointed there.
    /// Deleting any other item leaves the selection alone.
    pub fn delete_item(&mut self, id: ItemId) -> StoreResult<Item> {
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        let removed = self.items.remove(index);
        if self.current == Some(id) {
            self.current = None;
        }
        log::debug!("deleted item {}", id);
        Ok(removed)
    }

    pub fn total_calories(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.calories)).sum()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            items: self.items.clone(),
            current_item: self.current_item().cloned(),
            total_calories: self.total_calories(),
        }
    }

    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
