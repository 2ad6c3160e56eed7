// ============================================================================
// REDEMPTIONS TAB - Revisión de canjes de puntos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{ActionDispatcher, ElementBuilder};
use crate::models::{Redemption, ReviewStatus};
use crate::state::AppState;
use crate::views::actions::register_review_action;
use crate::views::shared::{empty_notice, table_head, td};

pub fn render_table(items: &[Redemption]) -> Result<Element, JsValue> {
    if items.is_empty() {
        return empty_notice("No hay canjes para revisar");
    }

    let mut body = ElementBuilder::new("tbody")?;
    for redemption in items {
        let mut actions = ElementBuilder::new("td")?;
        if redemption.status == ReviewStatus::Pending {
            actions = actions
                .child(
                    ElementBuilder::new("button")?
                        .class("btn btn-small btn-primary")
                        .action("redemptions.review")?
                        .data_id(redemption.id)?
                        .data_arg("approve")?
                        .text("Aprobar")
                        .build(),
                )?
                .child(
                    ElementBuilder::new("button")?
                        .class("btn btn-small btn-danger")
                        .action("redemptions.review")?
                        .data_id(redemption.id)?
                        .data_arg("reject")?
                        .text("Rechazar")
                        .build(),
                )?;
        }

        let row = ElementBuilder::new("tr")?
            .child(td(&redemption.id.to_string())?)?
            .child(td(&redemption.user_email)?)?
            .child(td(&redemption.reward)?)?
            .child(td(&redemption.points.to_string())?)?
            .child(td(redemption.status.label())?)?
            .child(td(&redemption.created_at.format("%Y-%m-%d %H:%M").to_string())?)?
            .child(actions.build())?;
        body = body.child(row.build())?;
    }

    Ok(ElementBuilder::new("table")?
        .class("data-table")
        .child(table_head(&[
            "ID",
            "Usuario",
            "Recompensa",
            "Puntos",
            "Estado",
            "Fecha",
            "",
        ])?)?
        .child(body.build())?
        .build())
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    register_review_action(dispatcher, state, "redemptions.review", |state, id, arg| {
        let admin = state.admin.clone();
        let approve = arg == "approve";
        async move { admin.review_redemption(id, approve).await.map(|_| ()) }
    });
}
