//! Calorie Tracker Core
//!
//! Layered the same way as the page:
//! - store: item list, edit selection, totals
//! - view: the display surface contract plus an in-memory surface
//! - markup: row templates shared by every surface
//! - coordinator: user actions to store mutations to view updates

pub mod coordinator;
pub mod error;
pub mod markup;
pub mod model;
pub mod store;
pub mod view;

pub use coordinator::Coordinator;
pub use error::{AppError, AppResult, StoreError, StoreResult, ViewError, ViewResult};
pub use markup::DisplayedRow;
pub use model::{Item, ItemId, ItemInput};
pub use store::{ItemStore, StoreSnapshot};
pub use view::{FormMode, ItemView, MemoryView};
