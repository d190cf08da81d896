// Volume Discount Editor - Core Library

pub mod config;
pub mod editor;
pub mod models;
pub mod preview;
pub mod save;
pub mod validation;

pub use config::*;
pub use editor::*;
pub use models::*;
pub use preview::*;
pub use save::*;
pub use validation::*;
