pub mod actions;
pub mod agents;
pub mod app;
pub mod dashboard;
pub mod fraud_rules;
pub mod login;
pub mod pin_verify;
pub mod redemptions;
pub mod settings;
pub mod shared;
pub mod surveys;
pub mod transfers;
pub mod users;

pub use app::render_app;

use crate::dom::ActionDispatcher;
use crate::models::session::Route;
use crate::state::AppState;

/// Registrar TODOS los handlers de acciones. Se llama una única vez
/// al crear la app; los re-renders no vuelven a registrar nada.
pub fn register_all_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    login::register_actions(dispatcher, state);
    pin_verify::register_actions(dispatcher, state);
    dashboard::register_actions(dispatcher, state);
    users::register_actions(dispatcher, state);
    agents::register_actions(dispatcher, state);
    surveys::register_actions(dispatcher, state);
    transfers::register_actions(dispatcher, state);
    redemptions::register_actions(dispatcher, state);
    fraud_rules::register_actions(dispatcher, state);
    settings::register_actions(dispatcher, state);

    // Logout compartido por el header y la vista de PIN
    let state = state.clone();
    dispatcher.register("auth.logout", move |_ctx| {
        state.gateway.logout();
        state.navigate(Route::Login);
    });
}
