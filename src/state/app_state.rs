// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// El único estado mutable compartido es el SessionStore (vía gateway)
// y la ruta actual. Los datos de cada pestaña se piden al backend y se
// pasan por parámetro a las vistas: no hay colecciones globales.

use crate::models::session::Route;
use crate::services::{AdminApi, ApiClient, AuthGateway, SessionStore};
use crate::state::reactivity::Observable;

#[derive(Clone)]
pub struct AppState {
    pub gateway: AuthGateway,
    pub admin: AdminApi,
    /// Ruta actual (dirigida por estado, sin URL router)
    pub route: Observable<Route>,
    /// Mensaje de error/aviso visible en la vista actual
    pub flash: Observable<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        let store = SessionStore::new();
        let api = ApiClient::new(store.clone());
        Self::with_api(api, store)
    }

    /// Para tests: inyectar un ApiClient con transporte simulado
    pub fn with_api(api: ApiClient, store: SessionStore) -> Self {
        Self {
            gateway: AuthGateway::new(api.clone(), store),
            admin: AdminApi::new(api),
            route: Observable::new(Route::Login),
            flash: Observable::new(None),
        }
    }

    /// Navegar: fija la ruta y deja que el re-render pase por el guard
    pub fn navigate(&self, route: Route) {
        self.flash.set(None);
        self.route.set(route);
    }

    /// Mostrar un mensaje en la vista actual (re-renderiza)
    pub fn show_flash(&self, message: String) {
        self.flash.set(Some(message));
    }

    /// Suscribir el re-render a los cambios de ruta y de flash
    pub fn subscribe_to_changes(&self, callback: impl Fn() + Clone + 'static) {
        self.route.subscribe(callback.clone());
        self.flash.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
