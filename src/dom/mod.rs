// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod builder;
pub mod dispatch;
pub mod element;

pub use builder::ElementBuilder;
pub use dispatch::{ActionContext, ActionDispatcher};
pub use element::*;
