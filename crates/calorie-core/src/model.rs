//! Item Model
//!
//! A single tracked food entry and the raw form input it is built from.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on creation
pub type ItemId = u32;

/// A tracked food entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within a session, never reused
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Calorie count
    pub calories: u32,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, calories: u32) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }
}

/// Raw values read from the name and calories form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub calories: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }

    /// Both fields carry something
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.calories.is_empty()
    }
}
