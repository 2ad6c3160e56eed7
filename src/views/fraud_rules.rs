// ============================================================================
// FRAUD RULES TAB - Administración de reglas antifraude
// ============================================================================
// La evaluación de las reglas es del backend; aquí solo se crean,
// activan/desactivan y eliminan.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{input_value, set_control_disabled, ActionDispatcher, ElementBuilder};
use crate::models::{CreateFraudRuleRequest, FraudRule};
use crate::services::ApiError;
use crate::state::AppState;
use crate::views::actions::{refresh_current_tab, register_review_action};
use crate::views::shared::{empty_notice, labeled_input, table_head, td};

pub fn render_table(items: &[FraudRule]) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.child(render_create_form()?)?;

    if items.is_empty() {
        return container
            .child(empty_notice("No hay reglas configuradas")?)
            .map(ElementBuilder::build);
    }

    let mut body = ElementBuilder::new("tbody")?;
    for rule in items {
        let toggle_label = if rule.enabled { "Desactivar" } else { "Activar" };
        let target = if rule.enabled { "0" } else { "1" };

        let actions = ElementBuilder::new("td")?
            .child(
                ElementBuilder::new("button")?
                    .class("btn btn-small")
                    .action("rules.toggle")?
                    .data_id(rule.id)?
                    .data_arg(target)?
                    .text(toggle_label)
                    .build(),
            )?
            .child(
                ElementBuilder::new("button")?
                    .class("btn btn-small btn-danger")
                    .action("rules.delete")?
                    .data_id(rule.id)?
                    .text("Eliminar")
                    .build(),
            )?;

        let row = ElementBuilder::new("tr")?
            .child(td(&rule.id.to_string())?)?
            .child(td(&rule.name)?)?
            .child(td(rule.description.as_deref().unwrap_or("—"))?)?
            .child(td(&rule.threshold.to_string())?)?
            .child(td(if rule.enabled { "Activa" } else { "Inactiva" })?)?
            .child(actions.build())?;
        body = body.child(row.build())?;
    }

    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(table_head(&[
            "ID",
            "Nombre",
            "Descripción",
            "Umbral",
            "Estado",
            "",
        ])?)?
        .child(body.build())?
        .build();

    container.child(table).map(ElementBuilder::build)
}

fn render_create_form() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("inline-form")
        .child(labeled_input(
            "Nombre",
            "rule-name",
            "text",
            "Límite diario de transferencias",
        )?)?
        .child(labeled_input(
            "Descripción (opcional)",
            "rule-description",
            "text",
            "Qué detecta la regla",
        )?)?
        .child(labeled_input("Umbral", "rule-threshold", "number", "1000")?)?
        .child(
            ElementBuilder::new("button")?
                .id("rule-create")?
                .class("btn btn-primary")
                .action("rules.create")?
                .text("Crear regla")
                .build(),
        )?
        .build())
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    register_review_action(dispatcher, state, "rules.toggle", |state, id, arg| {
        let admin = state.admin.clone();
        let enabled = arg == "1";
        async move { admin.set_rule_enabled(id, enabled).await.map(|_| ()) }
    });

    register_review_action(dispatcher, state, "rules.delete", |state, id, _arg| {
        let admin = state.admin.clone();
        async move { admin.delete_fraud_rule(id).await.map(|_| ()) }
    });

    let state = state.clone();
    dispatcher.register("rules.create", move |_ctx| {
        let name = input_value("rule-name");
        let description = input_value("rule-description");
        let threshold = input_value("rule-threshold");

        let Ok(threshold) = threshold.parse::<i64>() else {
            state.show_flash("El umbral debe ser un número".to_string());
            return;
        };
        if name.trim().is_empty() {
            state.show_flash("El nombre es obligatorio".to_string());
            return;
        }

        set_control_disabled("rule-create", true);

        let state = state.clone();
        spawn_local(async move {
            let description = description.trim();
            let request = CreateFraudRuleRequest {
                name: name.trim().to_string(),
                description: (!description.is_empty()).then(|| description.to_string()),
                threshold,
            };
            match state.admin.create_fraud_rule(&request).await {
                Ok(_) => refresh_current_tab(&state),
                Err(ApiError::SessionExpired) => {}
                Err(e) => {
                    set_control_disabled("rule-create", false);
                    state.show_flash(e.user_message());
                }
            }
        });
    });
}
