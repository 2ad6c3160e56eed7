// Tests de SessionStore contra el sessionStorage real del navegador.
// Se ejecutan con `wasm-pack test --headless --firefox` (o --chrome);
// en el target nativo este archivo no compila nada.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use loyalty_admin_pwa::services::session_store::{
    SessionStore, KEY_ACCESS_TOKEN, KEY_IS_AUTHENTICATED,
};

wasm_bindgen_test_configure!(run_in_browser);

fn raw_item(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|win| win.session_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

#[wasm_bindgen_test]
fn los_valores_se_guardan_serializados_en_sessionstorage() {
    let store = SessionStore::new();
    store.clear();

    store.set(KEY_ACCESS_TOKEN, &"tok1".to_string());
    store.set(KEY_IS_AUTHENTICATED, &true);

    // El valor vive de verdad en sessionStorage, como JSON
    assert_eq!(raw_item(KEY_ACCESS_TOKEN), Some("\"tok1\"".to_string()));
    assert_eq!(raw_item(KEY_IS_AUTHENTICATED), Some("true".to_string()));

    assert_eq!(
        store.get::<String>(KEY_ACCESS_TOKEN),
        Some("tok1".to_string())
    );
    assert_eq!(store.get::<bool>(KEY_IS_AUTHENTICATED), Some(true));
}

#[wasm_bindgen_test]
fn clear_vacia_el_sessionstorage() {
    let store = SessionStore::new();
    store.set(KEY_ACCESS_TOKEN, &"tok1".to_string());
    store.set(KEY_IS_AUTHENTICATED, &true);

    store.clear();

    assert_eq!(raw_item(KEY_ACCESS_TOKEN), None);
    assert_eq!(raw_item(KEY_IS_AUTHENTICATED), None);
    assert_eq!(store.get::<String>(KEY_ACCESS_TOKEN), None);
}

#[wasm_bindgen_test]
fn json_invalido_en_storage_se_trata_como_ausente() {
    let store = SessionStore::new();
    store.clear();

    if let Some(storage) = web_sys::window().and_then(|win| win.session_storage().ok().flatten()) {
        storage
            .set_item(KEY_ACCESS_TOKEN, "{esto no es json")
            .unwrap();
    }

    assert_eq!(store.get::<serde_json::Value>(KEY_ACCESS_TOKEN), None);
}
