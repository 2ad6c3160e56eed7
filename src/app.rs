// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_inner_html, ActionDispatcher};
use crate::state::AppState;
use crate::views::{register_all_actions, render_app};

/// Aplicación principal
pub struct App {
    state: AppState,
    dispatcher: ActionDispatcher,
    root: Element,
}

impl App {
    /// Crear la aplicación: estado, handlers de acciones (una sola
    /// vez) y listener delegado en la raíz
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No existe el elemento #app"))?;

        let state = AppState::new();
        let dispatcher = ActionDispatcher::new();

        register_all_actions(&dispatcher, &state);
        dispatcher.attach(&root)?;

        // Re-render automático en cada cambio de estado, batcheado con
        // un Timeout(0) para no re-renderizar dentro de la notificación
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            dispatcher,
            root,
        })
    }

    /// Renderizar la aplicación completa (el guard decide la vista)
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        self.root.append_child(&view)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.dispatcher
    }
}
