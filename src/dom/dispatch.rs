// ============================================================================
// DISPATCH - Delegación de eventos por nombre de acción
// ============================================================================
// Un ÚNICO listener de click en la raíz de la app. Los elementos
// declaran data-action (y opcionalmente data-id / data-arg) y los
// handlers se registran una sola vez al arrancar. Así los re-renders
// nunca acumulan listeners duplicados.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Contexto que recibe cada handler: la acción, sus argumentos
/// declarados en el DOM y el elemento que la disparó.
pub struct ActionContext {
    pub action: String,
    pub id: Option<u64>,
    pub arg: Option<String>,
    pub element: Element,
}

type Handler = Box<dyn Fn(ActionContext)>;

#[derive(Clone, Default)]
pub struct ActionDispatcher {
    handlers: Rc<RefCell<HashMap<String, Handler>>>,
    attached: Rc<Cell<bool>>,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrar el handler de una acción. Registrar dos veces el
    /// mismo nombre reemplaza el handler anterior.
    pub fn register(&self, action: &str, handler: impl Fn(ActionContext) + 'static) {
        self.handlers
            .borrow_mut()
            .insert(action.to_string(), Box::new(handler));
    }

    /// Enganchar el listener delegado en la raíz. Solo la primera
    /// llamada registra; las siguientes son no-ops.
    pub fn attach(&self, root: &Element) -> Result<(), JsValue> {
        if self.attached.get() {
            return Ok(());
        }
        self.attached.set(true);

        let handlers = self.handlers.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(context) = resolve_action(&event) else {
                return;
            };

            let handlers = handlers.borrow();
            match handlers.get(&context.action) {
                Some(handler) => handler(context),
                None => log::warn!("⚠️ [DISPATCH] Acción sin handler: {}", context.action),
            }
        }) as Box<dyn FnMut(Event)>);

        root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        // El listener vive tanto como la app: forget() es seguro aquí
        // porque attach() solo registra una vez
        closure.forget();
        Ok(())
    }
}

/// Buscar el data-action más cercano al target del evento
fn resolve_action(event: &Event) -> Option<ActionContext> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let element = target.closest("[data-action]").ok()??;

    let action = element.get_attribute("data-action")?;
    let id = element
        .get_attribute("data-id")
        .and_then(|raw| raw.parse().ok());
    let arg = element.get_attribute("data-arg");

    Some(ActionContext {
        action,
        id,
        arg,
        element,
    })
}
