// ============================================================================
// SETTINGS TAB - Configuración con esquema explícito
// ============================================================================
// Cada setting declara su kind (toggle | text | number) y la vista
// elige el control según el esquema, nunca según el nombre de la clave.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{get_element_by_id, ActionDispatcher, ElementBuilder};
use crate::models::{Setting, SettingKind};
use crate::services::ApiError;
use crate::state::AppState;
use crate::views::actions::refresh_current_tab;
use crate::views::shared::{empty_notice, table_head, td};

fn input_id(key: &str) -> String {
    format!("setting-{}", key)
}

pub fn render_table(items: &[Setting]) -> Result<Element, JsValue> {
    if items.is_empty() {
        return empty_notice("No hay configuración disponible");
    }

    let mut body = ElementBuilder::new("tbody")?;
    for setting in items {
        let control = render_control(setting)?;

        let save = ElementBuilder::new("td")?.child(
            ElementBuilder::new("button")?
                .class("btn btn-small btn-primary")
                .action("settings.save")?
                .data_arg(&setting.key)?
                .text("Guardar")
                .build(),
        )?;

        let row = ElementBuilder::new("tr")?
            .child(td(&setting.key)?)?
            .child(ElementBuilder::new("td")?.child(control)?.build())?
            .child(save.build())?;
        body = body.child(row.build())?;
    }

    Ok(ElementBuilder::new("table")?
        .class("data-table settings-table")
        .child(table_head(&["Clave", "Valor", ""])?)?
        .child(body.build())?
        .build())
}

/// Control según el kind declarado por el backend
fn render_control(setting: &Setting) -> Result<Element, JsValue> {
    let id = input_id(&setting.key);
    match setting.kind {
        SettingKind::Toggle => {
            let mut input = ElementBuilder::new("input")?
                .id(&id)?
                .attr("type", "checkbox")?;
            if setting.is_enabled() {
                input = input.attr("checked", "checked")?;
            }
            Ok(input.build())
        }
        SettingKind::Text => Ok(ElementBuilder::new("input")?
            .id(&id)?
            .attr("type", "text")?
            .attr("value", &setting.value)?
            .build()),
        SettingKind::Number => Ok(ElementBuilder::new("input")?
            .id(&id)?
            .attr("type", "number")?
            .attr("value", &setting.value)?
            .build()),
    }
}

/// Leer el valor actual del control (checkbox -> "true"/"false")
fn control_value(key: &str) -> Option<String> {
    let input: HtmlInputElement = get_element_by_id(&input_id(key))?.dyn_into().ok()?;
    if input.type_() == "checkbox" {
        Some(input.checked().to_string())
    } else {
        Some(input.value())
    }
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    let state = state.clone();
    dispatcher.register("settings.save", move |ctx| {
        let Some(key) = ctx.arg else {
            log::warn!("⚠️ [SETTINGS] Acción de guardado sin clave");
            return;
        };
        let Some(value) = control_value(&key) else {
            log::warn!("⚠️ [SETTINGS] No existe el control de {}", key);
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            match state.admin.update_setting(&key, &value).await {
                Ok(_) => refresh_current_tab(&state),
                Err(ApiError::SessionExpired) => {}
                Err(e) => state.show_flash(e.user_message()),
            }
        });
    });
}
