// ============================================================================
// APP VIEW - Render raíz con route guard
// ============================================================================
// El guard se evalúa SÍNCRONAMENTE antes de elegir la vista: una ruta
// protegida jamás llega a renderizarse sin sesión verificada (ni un
// frame de contenido protegido).

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::models::session::{Route, RouteDecision};
use crate::state::AppState;
use crate::views::{dashboard, login, pin_verify};

/// Resolver la ruta efectiva aplicando el guard. Como mucho hacen
/// falta dos pasos (toda redirección aterriza en una ruta permitida),
/// el límite es solo un cinturón ante una tabla mal editada.
pub fn resolve_route(state: &AppState) -> Route {
    let mut route = state.route.get();
    for _ in 0..3 {
        match state.gateway.guard_route(route) {
            RouteDecision::Allow => break,
            RouteDecision::Redirect(target) => {
                log::info!("🧭 [GUARD] {:?} -> {:?}", route, target);
                route = target;
            }
        }
    }
    // Dejar la ruta final sin disparar otro render
    state.route.set_silent(route);
    route
}

/// Renderizar la aplicación completa según la ruta permitida
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    match resolve_route(state) {
        Route::Login => login::render_login(state),
        Route::PinVerify => pin_verify::render_pin_verify(state),
        Route::Dashboard(tab) => dashboard::render_dashboard(state, tab),
    }
}
