// ============================================================================
// STATE MODULE - Estado observable con Rc<RefCell>
// ============================================================================

pub mod app_state;
pub mod reactivity;

pub use app_state::AppState;
pub use reactivity::Observable;
