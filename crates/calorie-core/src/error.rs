//! Error Types
//!
//! Store, display surface and coordinator failures. All of them are local
//! and reported synchronously to the handler that triggered them.

use thiserror::Error;

use crate::model::ItemId;

pub type StoreResult<T> = Result<T, StoreError>;
pub type ViewResult<T> = Result<T, ViewError>;
pub type AppResult<T> = Result<T, AppError>;

/// Item store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid calorie value: {0:?}")]
    InvalidCalories(String),
    #[error("item name is empty")]
    EmptyName,
    #[error("no item is selected for editing")]
    NoCurrentItem,
    #[error("item {0} not found")]
    NotFound(ItemId),
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("no item ids left in this session")]
    IdsExhausted,
}

impl StoreError {
    /// Caused by what the user typed rather than by program state
    pub fn is_input_error(&self) -> bool {
        matches!(self, StoreError::InvalidCalories(_) | StoreError::EmptyName)
    }
}

/// Display surface errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("no element matches {0:?}")]
    MissingElement(String),
    #[error("element {0:?} has an unexpected type")]
    WrongElementType(String),
    #[error("display surface error: {0}")]
    Dom(String),
}

/// Coordinator handler errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("unrecognized row id {0:?}")]
    InvalidRowId(String),
}

impl AppError {
    pub fn is_input_error(&self) -> bool {
        match self {
            AppError::Store(e) => e.is_input_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::NotFound(7).to_string(), "item 7 not found");
        assert_eq!(
            AppError::from(StoreError::NoCurrentItem).to_string(),
            "no item is selected for editing"
        );
        assert_eq!(
            StoreError::InvalidCalories("abc".into()).to_string(),
            r#"invalid calorie value: "abc""#
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(AppError::from(StoreError::EmptyName).is_input_error());
        assert!(!AppError::from(StoreError::NotFound(1)).is_input_error());
        assert!(!AppError::from(ViewError::Dom("x".into())).is_input_error());
    }
}
