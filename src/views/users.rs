// ============================================================================
// USERS TAB - Listado y bloqueo de cuentas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{ActionDispatcher, ElementBuilder};
use crate::models::User;
use crate::state::AppState;
use crate::views::actions::register_review_action;
use crate::views::shared::{empty_notice, table_head, td};

pub fn render_table(items: &[User]) -> Result<Element, JsValue> {
    if items.is_empty() {
        return empty_notice("No hay usuarios registrados");
    }

    let mut body = ElementBuilder::new("tbody")?;
    for user in items {
        let toggle_label = if user.is_blocked { "Desbloquear" } else { "Bloquear" };
        // data-arg lleva el estado DESTINO del bloqueo
        let target = if user.is_blocked { "0" } else { "1" };

        let actions = ElementBuilder::new("td")?.child(
            ElementBuilder::new("button")?
                .class("btn btn-small")
                .action("users.toggle-block")?
                .data_id(user.id)?
                .data_arg(target)?
                .text(toggle_label)
                .build(),
        )?;

        let row = ElementBuilder::new("tr")?
            .child(td(&user.id.to_string())?)?
            .child(td(&user.email)?)?
            .child(td(user.name.as_deref().unwrap_or("—"))?)?
            .child(td(&user.points_balance.to_string())?)?
            .child(td(if user.is_blocked { "Bloqueado" } else { "Activo" })?)?
            .child(td(&user.created_at.format("%Y-%m-%d").to_string())?)?
            .child(actions.build())?;
        body = body.child(row.build())?;
    }

    Ok(ElementBuilder::new("table")?
        .class("data-table")
        .child(table_head(&[
            "ID", "Email", "Nombre", "Puntos", "Estado", "Alta", "",
        ])?)?
        .child(body.build())?
        .build())
}

pub fn register_actions(dispatcher: &ActionDispatcher, state: &AppState) {
    register_review_action(
        dispatcher,
        state,
        "users.toggle-block",
        |state, id, arg| {
            let blocked = arg == "1";
            let admin = state.admin.clone();
            async move { admin.set_user_blocked(id, blocked).await.map(|_| ()) }
        },
    );
}
