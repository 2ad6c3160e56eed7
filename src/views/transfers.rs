// ============================================================================
// TRANSFERS TAB - Revisión de transferencias de puntos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{ActionDispatcher, ElementBuilder};
use crate::models::{PointTransfer, ReviewStatus};
use crate::state::AppState;
use crate::views::actions::register_review_action;
use crate::views::shared::{empty_notice, table_head, td};

pub fn render_table(items: &[PointTransfer]) -> Result<Element, JsValue> {
    if items.is_empty() {
        return empty_notice("No hay transferencias para revisar");
    }

    let mut body = ElementBuilder::new("tbody")?;
    for transfer in items {
        let mut actions = ElementBuilder::new("td")?;
        if transfer.status == ReviewStatus::Pending {
            actions = actions
                .child(
                    ElementBuilder::new("button")?
                        .class("btn btn-small btn-primary")
                        .action("transfers.review")?
                        .data_id(transfer.id)?
                        .data_arg("approve")?
                        .text("Aprobar")
                        .build(),
                )?
                .child(
                    ElementBuilder::new("button")?
                        .class("btn btn-small btn-danger")
                        .action("transfers.review")?
                        .data_id(transfer.id)?
                        .data_arg("reject")?
                        .text("Rechazar")
                        .build(),
                )?;
        }

        let row = ElementBuilder::new("tr")?
            .child(td(&transfer.id.to_string())?)?
            .child(td(&transfer.from_email)?)?
            .child(td(&transfer.to_email)?)?
            .child(td(&transfer.amount.to_string())?)?
            .child(td(transfer.status.label())?)?
            .child(td(&transfer.created_at.format("%Y-%m-%d %H:%M").to_string())?)?
            .child(actions.build())?;
        body = body.child(row.build())?;
    }

    Ok(ElementBuilder::new("table")?
        .class("data-table")
        .child(table_head(&[
            "ID", "Origen", "Destino", "Puntos", "Estado", "Fecha", "",
        ])?)?
        .child(body.build())?
        .build())
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    register_review_action(dispatcher, state, "transfers.review", |state, id, arg| {
        let admin = state.admin.clone();
        let approve = arg == "approve";
        async move { admin.review_transfer(id, approve).await.map(|_| ()) }
    });
}
