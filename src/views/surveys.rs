// ============================================================================
// SURVEYS TAB - Alta y baja de encuestas
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{input_value, set_control_disabled, ActionDispatcher, ElementBuilder};
use crate::models::{CreateSurveyRequest, Survey};
use crate::services::ApiError;
use crate::state::AppState;
use crate::views::actions::{refresh_current_tab, register_review_action};
use crate::views::shared::{empty_notice, labeled_input, table_head, td};

pub fn render_table(items: &[Survey]) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.child(render_create_form()?)?;

    if items.is_empty() {
        return container
            .child(empty_notice("No hay encuestas publicadas")?)
            .map(ElementBuilder::build);
    }

    let mut body = ElementBuilder::new("tbody")?;
    for survey in items {
        let actions = ElementBuilder::new("td")?.child(
            ElementBuilder::new("button")?
                .class("btn btn-small btn-danger")
                .action("surveys.delete")?
                .data_id(survey.id)?
                .text("Eliminar")
                .build(),
        )?;

        let row = ElementBuilder::new("tr")?
            .child(td(&survey.id.to_string())?)?
            .child(td(&survey.title)?)?
            .child(td(&survey.reward_points.to_string())?)?
            .child(td(if survey.is_active { "Activa" } else { "Inactiva" })?)?
            .child(td(&survey.responses_count.to_string())?)?
            .child(actions.build())?;
        body = body.child(row.build())?;
    }

    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(table_head(&[
            "ID",
            "Título",
            "Puntos",
            "Estado",
            "Respuestas",
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
            "Título",
            "survey-title",
            "text",
            "Nueva encuesta",
        )?)?
        .child(labeled_input("Puntos", "survey-points", "number", "100")?)?
        .child(
            ElementBuilder::new("button")?
                .id("survey-create")?
                .class("btn btn-primary")
                .action("surveys.create")?
                .text("Crear encuesta")
                .build(),
        )?
        .build())
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    register_review_action(dispatcher, state, "surveys.delete", |state, id, _arg| {
        let admin = state.admin.clone();
        async move { admin.delete_survey(id).await.map(|_| ()) }
    });

    let state = state.clone();
    dispatcher.register("surveys.create", move |_ctx| {
        let title = input_value("survey-title");
        let points = input_value("survey-points");

        let Ok(reward_points) = points.parse::<i64>() else {
            state.show_flash("Los puntos deben ser un número".to_string());
            return;
        };
        if title.trim().is_empty() {
            state.show_flash("El título es obligatorio".to_string());
            return;
        }

        set_control_disabled("survey-create", true);

        let state = state.clone();
        spawn_local(async move {
            let request = CreateSurveyRequest {
                title: title.trim().to_string(),
                reward_points,
            };
            match state.admin.create_survey(&request).await {
                Ok(_) => refresh_current_tab(&state),
                Err(ApiError::SessionExpired) => {}
                Err(e) => {
                    set_control_disabled("survey-create", false);
                    state.show_flash(e.user_message());
                }
            }
        });
    });
}
