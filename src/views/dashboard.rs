// ============================================================================
// DASHBOARD VIEW - Shell de pestañas del panel
// ============================================================================
// La vista renderiza el shell de forma síncrona (el guard ya permitió
// la ruta) y pide los datos de la pestaña activa en segundo plano. Los
// datos viajan por parámetro hasta la tabla: no hay colecciones
// globales mutables.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_inner_html, ActionDispatcher, ElementBuilder};
use crate::models::session::{AdminTab, Route};
use crate::services::ApiError;
use crate::state::AppState;
use crate::views::shared::render_flash;
use crate::views::{agents, fraud_rules, redemptions, settings, surveys, transfers, users};

pub fn render_dashboard(state: &AppState, tab: AdminTab) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("dashboard")
        .child(render_header(state)?)?
        .child(render_tab_bar(tab)?)?
        .child(render_flash(state)?)?
        .child(
            ElementBuilder::new("div")?
                .id("tab-content")?
                .class("tab-content")
                .child(
                    ElementBuilder::new("p")?
                        .class("loading")
                        .text("Cargando...")
                        .build(),
                )?
                .build(),
        )?;

    // Fetch de la pestaña activa después de montar el shell
    load_tab(state.clone(), tab);

    Ok(container.build())
}

fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let email = state
        .gateway
        .current_user()
        .map(|user| user.email)
        .unwrap_or_default();

    Ok(ElementBuilder::new("header")?
        .class("dashboard-header")
        .child(
            ElementBuilder::new("span")?
                .class("brand")
                .text("Plataforma de puntos · Admin")
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .class("header-user")
                .text(&email)
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn btn-link")
                .action("auth.logout")?
                .text("Salir")
                .build(),
        )?
        .build())
}

fn render_tab_bar(active: AdminTab) -> Result<Element, JsValue> {
    let mut bar = ElementBuilder::new("nav")?.class("tab-bar");
    for tab in AdminTab::ALL {
        let class = if tab == active {
            "tab-button active"
        } else {
            "tab-button"
        };
        bar = bar.child(
            ElementBuilder::new("button")?
                .class(class)
                .action("nav.tab")?
                .data_arg(tab.slug())?
                .text(tab.title())
                .build(),
        )?;
    }
    Ok(bar.build())
}

/// Pedir los datos de la pestaña y volcar la tabla en #tab-content.
/// Se usa también para refrescar tras cada mutación.
pub fn load_tab(state: AppState, tab: AdminTab) {
    spawn_local(async move {
        let table = match tab {
            AdminTab::Users => state
                .admin
                .list_users()
                .await
                .and_then(|items| users::render_table(&items).map_err(js_render_error)),
            AdminTab::Agents => state
                .admin
                .list_agents()
                .await
                .and_then(|items| agents::render_table(&items).map_err(js_render_error)),
            AdminTab::Surveys => state
                .admin
                .list_surveys()
                .await
                .and_then(|items| surveys::render_table(&items).map_err(js_render_error)),
            AdminTab::Transfers => state
                .admin
                .list_transfers()
                .await
                .and_then(|items| transfers::render_table(&items).map_err(js_render_error)),
            AdminTab::Redemptions => state
                .admin
                .list_redemptions()
                .await
                .and_then(|items| redemptions::render_table(&items).map_err(js_render_error)),
            AdminTab::FraudRules => state
                .admin
                .list_fraud_rules()
                .await
                .and_then(|items| fraud_rules::render_table(&items).map_err(js_render_error)),
            AdminTab::Settings => state
                .admin
                .list_settings()
                .await
                .and_then(|items| settings::render_table(&items).map_err(js_render_error)),
        };

        let Some(content) = get_element_by_id("tab-content") else {
            // El usuario ya navegó a otra vista, no hay nada que pintar
            return;
        };

        match table {
            Ok(element) => {
                set_inner_html(&content, "");
                if content.append_child(&element).is_err() {
                    log::error!("❌ [DASHBOARD] No se pudo montar la tabla");
                }
            }
            Err(ApiError::SessionExpired) => {
                // El listener global ya está navegando a login
            }
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error cargando {:?}: {}", tab, e);
                content.set_text_content(Some(&e.user_message()));
            }
        }
    });
}

fn js_render_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("Error de render: {:?}", err))
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    let state = state.clone();
    dispatcher.register("nav.tab", move |ctx| {
        let Some(tab) = ctx.arg.as_deref().and_then(AdminTab::from_slug) else {
            log::warn!("⚠️ [DASHBOARD] data-arg de pestaña desconocido");
            return;
        };
        state.navigate(Route::Dashboard(tab));
    });
}
