//! Frontend Configuration
//!
//! Element selectors for the display surface and the log level.

use log::LevelFilter;

/// Element ids and classes the shell renders and the view looks up
pub const ITEM_LIST_ID: &str = "item-list";
pub const ITEM_NAME_ID: &str = "item-name";
pub const ITEM_CALORIES_ID: &str = "item-calories";
pub const ADD_BTN_CLASS: &str = "add-btn";
pub const UPDATE_BTN_CLASS: &str = "update-btn";
pub const DELETE_BTN_CLASS: &str = "delete-btn";
pub const BACK_BTN_CLASS: &str = "back-btn";
pub const TOTAL_CALORIES_CLASS: &str = "total-calories";

/// CSS selectors for every element the view reads or writes
#[derive(Debug, Clone, PartialEq)]
pub struct Selectors {
    pub item_list: String,
    pub list_items: String,
    pub add_btn: String,
    pub update_btn: String,
    pub delete_btn: String,
    pub back_btn: String,
    pub item_name_input: String,
    pub item_calories_input: String,
    pub total_calories: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            item_list: format!("#{}", ITEM_LIST_ID),
            list_items: format!("#{} li", ITEM_LIST_ID),
            add_btn: format!(".{}", ADD_BTN_CLASS),
            update_btn: format!(".{}", UPDATE_BTN_CLASS),
            delete_btn: format!(".{}", DELETE_BTN_CLASS),
            back_btn: format!(".{}", BACK_BTN_CLASS),
            item_name_input: format!("#{}", ITEM_NAME_ID),
            item_calories_input: format!("#{}", ITEM_CALORIES_ID),
            total_calories: format!(".{}", TOTAL_CALORIES_CLASS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub selectors: Selectors,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
