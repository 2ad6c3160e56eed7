// ============================================================================
// LOYALTY ADMIN PWA - Panel de administración en Rust puro
// ============================================================================
// - Views: funciones que renderizan DOM a partir de datos
// - Services: sesión, auth en dos pasos y CRUD contra el backend
// - State: estado observable con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::models::session::Route;
use crate::utils::constants::SESSION_EXPIRED_EVENT;

// Instancia única de la app, viva durante toda la pestaña
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Loyalty Admin · panel de administración");

    let app = App::new()?;
    app.render()?;

    // Expiración de sesión (401 en cualquier llamada autenticada):
    // el ApiClient ya limpió el store, aquí solo forzamos la
    // navegación a login con el aviso. Este listener global se
    // registra UNA sola vez, en el arranque.
    {
        let state = app.state().clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            log::warn!("🔒 [MAIN] Sesión expirada, volviendo a login");
            state.route.set_silent(Route::Login);
            state
                .flash
                .set(Some("Tu sesión expiró, vuelve a iniciar sesión".to_string()));
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Some(win) = web_sys::window() {
            win.add_event_listener_with_callback(
                SESSION_EXPIRED_EVENT,
                closure.as_ref().unchecked_ref(),
            )?;
        }
        // forget() es seguro: un único registro durante toda la pestaña
        closure.forget();
    }

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la app completa (la llama la suscripción de estado)
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = &*cell.borrow() {
            if let Err(e) = app.render() {
                log::error!("❌ [MAIN] Error re-renderizando: {:?}", e);
            }
        }
    });
}
