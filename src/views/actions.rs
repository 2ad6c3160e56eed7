// ============================================================================
// ACTIONS - Helper común para las acciones de fila de las tablas
// ============================================================================
// Todas las mutaciones de fila siguen el mismo ciclo: leer data-id /
// data-arg, llamar al backend y refrescar la pestaña activa (o mostrar
// el error). El 401 lo resuelve el listener global de sesión expirada.

use std::future::Future;

use wasm_bindgen_futures::spawn_local;

use crate::dom::ActionDispatcher;
use crate::models::session::Route;
use crate::services::ApiError;
use crate::state::AppState;
use crate::views::dashboard;

pub fn register_review_action<F, Fut>(
    dispatcher: &ActionDispatcher,
    state: &AppState,
    name: &str,
    operation: F,
) where
    F: Fn(&AppState, u64, String) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let state = state.clone();
    dispatcher.register(name, move |ctx| {
        let Some(id) = ctx.id else {
            log::warn!("⚠️ [ACTIONS] {} sin data-id", ctx.action);
            return;
        };
        let arg = ctx.arg.unwrap_or_default();

        let future = operation(&state, id, arg);
        let state = state.clone();
        spawn_local(async move {
            match future.await {
                Ok(()) => refresh_current_tab(&state),
                Err(ApiError::SessionExpired) => {}
                Err(e) => state.show_flash(e.user_message()),
            }
        });
    });
}

/// Volver a pedir los datos de la pestaña visible tras una mutación
pub fn refresh_current_tab(state: &AppState) {
    if let Route::Dashboard(tab) = state.route.get() {
        dashboard::load_tab(state.clone(), tab);
    }
}
