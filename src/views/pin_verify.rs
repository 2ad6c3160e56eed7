// ============================================================================
// PIN VERIFY VIEW - Segundo factor
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{input_value, set_control_disabled, ActionDispatcher, ElementBuilder};
use crate::models::session::Route;
use crate::services::ApiError;
use crate::state::AppState;
use crate::views::shared::{labeled_input, render_flash};

pub fn render_pin_verify(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("login-screen");

    let card = ElementBuilder::new("div")?
        .class("login-card")
        .child(ElementBuilder::new("h1")?.text("Verificación PIN").build())?
        .child(
            ElementBuilder::new("p")?
                .class("login-subtitle")
                .text("Introduce tu PIN de administrador para continuar")
                .build(),
        )?
        .child(render_flash(state)?)?
        .child(labeled_input("PIN", "pin-input", "password", "····")?)?
        .child(
            ElementBuilder::new("button")?
                .id("pin-submit")?
                .class("btn btn-primary")
                .action("auth.pin")?
                .text("Verificar")
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn btn-link")
                .action("auth.logout")?
                .text("Usar otra cuenta")
                .build(),
        )?;

    Ok(screen.child(card.build())?.build())
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    let state = state.clone();
    dispatcher.register("auth.pin", move |_ctx| {
        let pin = input_value("pin-input");
        if pin.is_empty() {
            state.show_flash("Introduce el PIN".to_string());
            return;
        }

        set_control_disabled("pin-submit", true);

        let state = state.clone();
        spawn_local(async move {
            match state.gateway.submit_pin(&pin).await {
                Ok(()) => {
                    state.navigate(Route::default_protected());
                }
                Err(ApiError::SessionExpired) => {}
                Err(e) => {
                    set_control_disabled("pin-submit", false);
                    state.show_flash(e.user_message());
                }
            }
        });
    });
}
