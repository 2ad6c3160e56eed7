// ============================================================================
// SESSION STORE - Estado de autenticación con vida de pestaña
// ============================================================================
// Respaldado por sessionStorage: se borra al cerrar la pestaña, que es
// exactamente el ciclo de vida de la sesión. Valores serializados en JSON.
// En tests nativos se sustituye por un mapa en memoria con la misma
// semántica.

use serde::{de::DeserializeOwned, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Claves de la sesión. El conjunto completo se borra en logout/401.
pub const KEY_IS_AUTHENTICATED: &str = "isAuthenticated";
pub const KEY_ACCESS_TOKEN: &str = "accessToken";
pub const KEY_IS_PIN_VERIFIED: &str = "isPinVerified";
pub const KEY_USER_DATA: &str = "userData";

#[derive(Clone, Default)]
pub struct SessionStore {
    #[cfg(not(target_arch = "wasm32"))]
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guardar un valor serializado bajo `key`.
    /// Los errores de cuota no se propagan (solo se loggean).
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.set_raw(key, &json),
            Err(e) => log::error!("❌ [STORE] Error serializando {}: {}", key, e),
        }
    }

    /// Leer y deserializar. `None` si no existe o si el contenido
    /// almacenado no es JSON válido para `T` (se trata como ausente).
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = self.get_raw(key)?;
        serde_json::from_str(&json).ok()
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }

    #[cfg(target_arch = "wasm32")]
    fn set_raw(&self, key: &str, json: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, json).is_err() {
                    log::error!("❌ [STORE] No se pudo guardar {}", key);
                }
            }
            None => log::error!("❌ [STORE] sessionStorage no disponible"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn get_raw(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Borrar TODAS las claves. No existe borrado parcial: logout,
    /// 401 y estado inconsistente limpian la sesión completa.
    #[cfg(target_arch = "wasm32")]
    pub fn clear(&self) {
        match Self::storage() {
            Some(storage) => {
                if storage.clear().is_err() {
                    log::error!("❌ [STORE] No se pudo limpiar la sesión");
                }
            }
            None => log::error!("❌ [STORE] sessionStorage no disponible"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_raw(&self, key: &str, json: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), json.to_string());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_devuelve_lo_guardado() {
        let store = SessionStore::new();
        store.set(KEY_ACCESS_TOKEN, &"tok1".to_string());
        assert_eq!(
            store.get::<String>(KEY_ACCESS_TOKEN),
            Some("tok1".to_string())
        );
    }

    #[test]
    fn get_de_clave_ausente_es_none() {
        let store = SessionStore::new();
        assert_eq!(store.get::<String>(KEY_ACCESS_TOKEN), None);
    }

    #[test]
    fn json_invalido_se_trata_como_ausente() {
        let store = SessionStore::new();
        store.set_raw(KEY_USER_DATA, "{esto no es json");
        assert_eq!(store.get::<serde_json::Value>(KEY_USER_DATA), None);
    }

    #[test]
    fn clear_borra_todas_las_claves() {
        let store = SessionStore::new();
        store.set(KEY_IS_AUTHENTICATED, &true);
        store.set(KEY_ACCESS_TOKEN, &"tok1".to_string());
        store.set(KEY_IS_PIN_VERIFIED, &true);

        store.clear();

        assert_eq!(store.get::<bool>(KEY_IS_AUTHENTICATED), None);
        assert_eq!(store.get::<String>(KEY_ACCESS_TOKEN), None);
        assert_eq!(store.get::<bool>(KEY_IS_PIN_VERIFIED), None);
    }

    #[test]
    fn los_clones_comparten_el_mismo_almacen() {
        let store = SessionStore::new();
        let clone = store.clone();
        store.set(KEY_ACCESS_TOKEN, &"tok1".to_string());
        assert_eq!(
            clone.get::<String>(KEY_ACCESS_TOKEN),
            Some("tok1".to_string())
        );
    }
}
