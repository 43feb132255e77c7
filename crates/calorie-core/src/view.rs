//! View Renderer Contract
//!
//! Everything the coordinator needs from a display surface. Implementations
//! hold no item state of their own; the surface is the only thing they touch.

use crate::error::{ViewError, ViewResult};
use crate::markup::{self, DisplayedRow};
use crate::model::{Item, ItemId, ItemInput};

/// Which set of form buttons is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Only the add button
    #[default]
    Add,
    /// Update, delete and back buttons
    Edit,
}

/// A display surface the coordinator renders into and reads the form from
pub trait ItemView {
    /// Replace the whole list body
    fn render_items(&mut self, items: &[Item]) -> ViewResult<()>;

    /// Raw values of the name and calories inputs
    fn read_input(&self) -> ViewResult<ItemInput>;

    /// Show the list and append one row at the end
    fn append_item(&mut self, item: &Item) -> ViewResult<()>;

    /// Re-render the row whose id matches `item.id`
    fn replace_item(&mut self, item: &Item) -> ViewResult<()>;

    fn remove_item(&mut self, id: ItemId) -> ViewResult<()>;

    fn clear_input(&mut self) -> ViewResult<()>;

    /// Copy an item into the form and switch to edit mode
    fn fill_form(&mut self, item: &Item) -> ViewResult<()>;

    fn show_edit_state(&mut self) -> ViewResult<()>;

    /// Clear the form and switch back to add mode
    fn clear_edit_state(&mut self) -> ViewResult<()>;

    fn set_list_visible(&mut self, visible: bool) -> ViewResult<()>;

    fn show_total(&mut self, total: u64) -> ViewResult<()>;

    /// Read every row currently on the surface, in display order
    fn displayed_rows(&self) -> ViewResult<Vec<DisplayedRow>>;
}

/// Display surface kept entirely in memory
///
/// Rows are stored as element id plus inner HTML, the same markup the
/// browser surface writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    rows: Vec<(String, String)>,
    list_visible: bool,
    name: String,
    calories: String,
    mode: FormMode,
    total_text: String,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into the form
    pub fn set_input(&mut self, name: &str, calories: &str) {
        self.name = name.to_string();
        self.calories = calories.to_string();
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn total_text(&self) -> &str {
        &self.total_text
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_index(&self, id: ItemId) -> ViewResult<usize> {
        let element_id = markup::row_element_id(id);
        self.rows
            .iter()
            .position(|(row_id, _)| *row_id == element_id)
            .ok_or_else(|| ViewError::MissingElement(format!("#{}", element_id)))
    }
}

impl ItemView for MemoryView {
    fn render_items(&mut self, items: &[Item]) -> ViewResult<()> {
        self.rows = items
            .iter()
            .map(|item| (markup::row_element_id(item.id), markup::row_inner_html(item)))
            .collect();
        Ok(())
    }

    fn read_input(&self) -> ViewResult<ItemInput> {
        Ok(ItemInput::new(self.name.clone(), self.calories.clone()))
    }

    fn append_item(&mut self, item: &Item) -> ViewResult<()> {
        self.list_visible = true;
        self.rows
            .push((markup::row_element_id(item.id), markup::row_inner_html(item)));
        Ok(())
    }

    fn replace_item(&mut self, item: &Item) -> ViewResult<()> {
        let index = self.row_index(item.id)?;
        self.rows[index].1 = markup::row_inner_html(item);
        Ok(())
    }

    fn remove_item(&mut self, id: ItemId) -> ViewResult<()> {
        let index = self.row_index(id)?;
        self.rows.remove(index);
        Ok(())
    }

    fn clear_input(&mut self) -> ViewResult<()> {
        self.name.clear();
        self.calories.clear();
        Ok(())
    }

    fn fill_form(&mut self, item: &Item) -> ViewResult<()> {
        self.name = item.name.clone();
        self.calories = item.calories.to_string();
        self.show_edit_state()
    }

    fn show_edit_state(&mut self) -> ViewResult<()> {
        self.mode = FormMode::Edit;
        Ok(())
    }

    fn clear_edit_state(&mut self) -> ViewResult<()> {
        self.clear_input()?;
        self.mode = FormMode::Add;
        Ok(())
    }

    fn set_list_visible(&mut self, visible: bool) -> ViewResult<()> {
        self.list_visible = visible;
        Ok(())
    }

    fn show_total(&mut self, total: u64) -> ViewResult<()> {
        self.total_text = total.to_string();
        Ok(())
    }

    fn displayed_rows(&self) -> ViewResult<Vec<DisplayedRow>> {
        self.rows
            .iter()
            .map(|(element_id, html)| {
                markup::parse_row_html(element_id, html)
                    .ok_or_else(|| ViewError::Dom(format!("unreadable row {:?}", element_id)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_missing_row() {
        let mut view = MemoryView::new();
        let err = view.replace_item(&Item::new(3, "Eggs", 300)).unwrap_err();
        assert_eq!(err, ViewError::MissingElement("#item-3".to_string()));
    }

    #[test]
    fn test_fill_form_switches_mode() {
        let mut view = MemoryView::new();
        view.fill_form(&Item::new(1, "Cookie", 400)).unwrap();
        assert_eq!(view.mode(), FormMode::Edit);
        assert_eq!(view.read_input().unwrap(), ItemInput::new("Cookie", "400"));

        view.clear_edit_state().unwrap();
        assert_eq!(view.mode(), FormMode::Add);
        assert_eq!(view.read_input().unwrap(), ItemInput::default());
    }

    #[test]
    fn test_append_shows_list() {
        let mut view = MemoryView::new();
        view.set_list_visible(false).unwrap();
        view.append_item(&Item::new(0, "Eggs", 300)).unwrap();
        assert!(view.is_list_visible());
        assert_eq!(view.row_count(), 1);
    }
}
