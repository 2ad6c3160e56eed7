// ============================================================================
// SHARED - Piezas comunes de las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;

/// Línea de error/aviso de la vista actual (vacía si no hay mensaje)
pub fn render_flash(state: &AppState) -> Result<Element, JsValue> {
    let builder = ElementBuilder::new("div")?.id("flash-message")?;
    Ok(match state.flash.get() {
        Some(message) => builder.class("flash flash-error").text(&message).build(),
        None => builder.class("flash flash-empty").build(),
    })
}

/// Input con label, para los formularios de login/PIN/altas
pub fn labeled_input(
    label: &str,
    id: &str,
    input_type: &str,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let field = ElementBuilder::new("div")?.class("form-field");
    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .build();
    Ok(field.child(label_el)?.child(input)?.build())
}

/// Celda de tabla con texto
pub fn td(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

/// Cabecera de tabla a partir de los títulos de columna
pub fn table_head(columns: &[&str]) -> Result<Element, JsValue> {
    let mut row = ElementBuilder::new("tr")?;
    for column in columns {
        row = row.child(ElementBuilder::new("th")?.text(column).build())?;
    }
    Ok(ElementBuilder::new("thead")?.child(row.build())?.build())
}

/// Mensaje para listas vacías
pub fn empty_notice(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class("empty-notice").text(text).build())
}
