// ============================================================================
// API CLIENT - Llamadas al backend con manejo de sesión
// ============================================================================
// Construye las peticiones, adjunta el bearer token y clasifica las
// respuestas. Un 401 en cualquier llamada autenticada limpia la sesión
// completa y emite el evento global de expiración; el caller recibe
// `SessionExpired` y NO debe reintentar.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

use crate::services::error::ApiError;
use crate::services::session_store::{SessionStore, KEY_ACCESS_TOKEN};
use crate::services::transport::{ApiRequest, ApiResponse, FetchTransport, HttpMethod, HttpTransport};
use crate::utils::constants::BACKEND_URL;

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    store: SessionStore,
    base_url: String,
}

impl ApiClient {
    pub fn new(store: SessionStore) -> Self {
        Self {
            transport: Rc::new(FetchTransport::new()),
            store,
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Para tests: transporte simulado y base_url arbitraria
    pub fn with_transport(
        transport: Rc<dyn HttpTransport>,
        store: SessionStore,
        base_url: &str,
    ) -> Self {
        Self {
            transport,
            store,
            base_url: base_url.to_string(),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Llamada sin token (solo login). Non-2xx -> ApiError::Api.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let response = self
            .transport
            .send(ApiRequest {
                method,
                url: format!("{}{}", self.base_url, path),
                bearer: None,
                body,
            })
            .await?;
        Self::into_result(response)
    }

    /// Llamada autenticada: adjunta `Authorization: Bearer <token>`.
    /// Token ausente o respuesta 401 expiran la sesión.
    pub async fn authenticated_request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let Some(token) = self.store.get::<String>(KEY_ACCESS_TOKEN) else {
            // Violación de contrato: el route guard debió impedir llegar aquí
            log::warn!("⚠️ [API] Llamada autenticada sin token, expirando sesión");
            self.expire_session();
            return Err(ApiError::SessionExpired);
        };

        log::info!("🌐 [API] {} {}", method.as_str(), path);

        let response = self
            .transport
            .send(ApiRequest {
                method,
                url: format!("{}{}", self.base_url, path),
                bearer: Some(token),
                body,
            })
            .await?;

        if response.status == 401 {
            log::warn!("🔒 [API] 401 en {}, sesión expirada", path);
            self.expire_session();
            return Err(ApiError::SessionExpired);
        }

        Self::into_result(response)
    }

    /// Limpieza total + evento global para forzar la navegación a login
    fn expire_session(&self) {
        self.store.clear();
        emit_session_expired();
    }

    fn into_result<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ApiError> {
        if response.is_success() {
            // Algunos endpoints (verify-pin, deletes) responden sin cuerpo
            let body = if response.body.trim().is_empty() {
                "null"
            } else {
                response.body.as_str()
            };
            serde_json::from_str(body)
                .map_err(|e| ApiError::Network(format!("Respuesta inesperada del servidor: {}", e)))
        } else {
            Err(ApiError::Api {
                status: response.status,
                message: error_detail(&response),
            })
        }
    }
}

/// Detalle de error del cuerpo JSON (`detail`/`message`/`error`),
/// con el status text como último recurso
fn error_detail(response: &ApiResponse) -> String {
    serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|value| {
            ["detail", "message", "error"].iter().find_map(|field| {
                value
                    .get(field)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| response.status_text.clone())
}

#[cfg(target_arch = "wasm32")]
fn emit_session_expired() {
    use crate::utils::constants::SESSION_EXPIRED_EVENT;

    if let Some(win) = web_sys::window() {
        if let Ok(event) = web_sys::CustomEvent::new(SESSION_EXPIRED_EVENT) {
            let _ = win.dispatch_event(&event);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_session_expired() {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session_store::KEY_IS_AUTHENTICATED;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Transporte que devuelve respuestas en orden
    struct ScriptedTransport {
        responses: RefCell<Vec<ApiResponse>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<ApiResponse>) -> Rc<Self> {
            Rc::new(Self {
                responses: RefCell::new(responses),
            })
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, ApiError> {
            Ok(self.responses.borrow_mut().remove(0))
        }
    }

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            status_text: "Status Text".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn error_detail_prefiere_el_cuerpo() {
        let resp = response(422, r#"{"detail":"PIN incorrecto"}"#);
        assert_eq!(error_detail(&resp), "PIN incorrecto");

        let resp = response(500, r#"{"message":"boom"}"#);
        assert_eq!(error_detail(&resp), "boom");

        let resp = response(500, "<html>gateway error</html>");
        assert_eq!(error_detail(&resp), "Status Text");
    }

    #[test]
    fn cuerpo_vacio_en_2xx_se_parsea_como_null() {
        let result: Result<Value, ApiError> = ApiClient::into_result(response(200, ""));
        assert_eq!(result.unwrap(), Value::Null);
    }

    #[test]
    fn non_2xx_es_api_error_con_detalle() {
        let result: Result<Value, ApiError> =
            ApiClient::into_result(response(409, r#"{"error":"duplicado"}"#));
        assert_eq!(
            result.unwrap_err(),
            ApiError::Api {
                status: 409,
                message: "duplicado".to_string()
            }
        );
    }

    #[test]
    fn un_401_limpia_toda_la_sesion() {
        let store = SessionStore::new();
        store.set(KEY_IS_AUTHENTICATED, &true);
        store.set(KEY_ACCESS_TOKEN, &"tok1".to_string());

        let transport = ScriptedTransport::new(vec![response(401, "")]);
        let api = ApiClient::with_transport(transport, store.clone(), "http://test");

        let result: Result<Value, ApiError> =
            block_on(api.authenticated_request(HttpMethod::Get, "/admin/users", None));

        assert_eq!(result.unwrap_err(), ApiError::SessionExpired);
        assert_eq!(store.get::<bool>(KEY_IS_AUTHENTICATED), None);
        assert_eq!(store.get::<String>(KEY_ACCESS_TOKEN), None);
    }

    #[test]
    fn sin_token_no_llega_a_la_red() {
        let store = SessionStore::new();
        let transport = ScriptedTransport::new(vec![]);
        let api = ApiClient::with_transport(transport, store, "http://test");

        let result: Result<Value, ApiError> =
            block_on(api.authenticated_request(HttpMethod::Get, "/admin/users", None));

        assert_eq!(result.unwrap_err(), ApiError::SessionExpired);
    }
}
