//! UI Components
//!
//! Static page shell. Row markup inside the list is written by the view,
//! not by these components.

mod item_form;
mod item_list;
mod total_calories;

pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use total_calories::TotalCalories;
