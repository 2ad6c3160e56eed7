// ============================================================================
// LOGIN VIEW - Primer factor (email + contraseña)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{input_value, set_control_disabled, ActionDispatcher, ElementBuilder};
use crate::models::session::Route;
use crate::services::ApiError;
use crate::state::AppState;
use crate::views::shared::{labeled_input, render_flash};

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("login-screen");

    let card = ElementBuilder::new("div")?
        .class("login-card")
        .child(
            ElementBuilder::new("h1")?
                .text("Panel de administración")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("login-subtitle")
                .text("Inicia sesión con tu cuenta de administrador")
                .build(),
        )?
        .child(render_flash(state)?)?
        .child(labeled_input(
            "Email",
            "login-email",
            "email",
            "admin@ejemplo.com",
        )?)?
        .child(labeled_input(
            "Contraseña",
            "login-password",
            "password",
            "********",
        )?)?
        .child(
            ElementBuilder::new("button")?
                .id("login-submit")?
                .class("btn btn-primary")
                .action("auth.login")?
                .text("Entrar")
                .build(),
        )?;

    Ok(screen.child(card.build())?.build())
}

/// Handlers del login. Se registran UNA vez al arrancar la app.
pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    let state = state.clone();
    dispatcher.register("auth.login", move |_ctx| {
        let email = input_value("login-email");
        let password = input_value("login-password");

        if email.is_empty() || password.is_empty() {
            state.show_flash("Email y contraseña son obligatorios".to_string());
            return;
        }

        // Deshabilitar el botón hasta que resuelva la llamada:
        // una sola petición de login en vuelo por vez
        set_control_disabled("login-submit", true);

        let state = state.clone();
        spawn_local(async move {
            match state.gateway.submit_credentials(&email, &password).await {
                Ok(payload) => {
                    log::info!("✅ [LOGIN] Bienvenido {}", payload.user.email);
                    state.navigate(Route::PinVerify);
                }
                Err(ApiError::SessionExpired) => {
                    // El listener global ya navega a login
                }
                Err(e) => {
                    set_control_disabled("login-submit", false);
                    state.show_flash(e.user_message());
                }
            }
        });
    });
}
