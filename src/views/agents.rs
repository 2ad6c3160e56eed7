// ============================================================================
// AGENTS TAB - Aprobación de agentes de campo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{ActionDispatcher, ElementBuilder};
use crate::models::{Agent, AgentStatus};
use crate::state::AppState;
use crate::views::actions::register_review_action;
use crate::views::shared::{empty_notice, table_head, td};

pub fn render_table(items: &[Agent]) -> Result<Element, JsValue> {
    if items.is_empty() {
        return empty_notice("No hay agentes registrados");
    }

    let mut body = ElementBuilder::new("tbody")?;
    for agent in items {
        let mut actions = ElementBuilder::new("td")?;
        if agent.status == AgentStatus::Pending {
            actions = actions.child(
                ElementBuilder::new("button")?
                    .class("btn btn-small btn-primary")
                    .action("agents.approve")?
                    .data_id(agent.id)?
                    .text("Aprobar")
                    .build(),
            )?;
        }

        let row = ElementBuilder::new("tr")?
            .child(td(&agent.id.to_string())?)?
            .child(td(&agent.name)?)?
            .child(td(&agent.email)?)?
            .child(td(agent.region.as_deref().unwrap_or("—"))?)?
            .child(td(agent.status.label())?)?
            .child(actions.build())?;
        body = body.child(row.build())?;
    }

    Ok(ElementBuilder::new("table")?
        .class("data-table")
        .child(table_head(&["ID", "Nombre", "Email", "Región", "Estado", ""])?)?
        .child(body.build())?
        .build())
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    register_review_action(dispatcher, state, "agents.approve", |state, id, _arg| {
        let admin = state.admin.clone();
        async move { admin.approve_agent(id).await.map(|_| ()) }
    });
}
