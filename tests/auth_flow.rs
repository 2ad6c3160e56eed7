// Escenario completo de autenticación contra un backend simulado:
// login -> PIN -> dashboard -> expiración por 401.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;

use loyalty_admin_pwa::models::session::Route;
use loyalty_admin_pwa::services::session_store::{
    KEY_ACCESS_TOKEN, KEY_IS_AUTHENTICATED, KEY_IS_PIN_VERIFIED, KEY_USER_DATA,
};
use loyalty_admin_pwa::services::{
    AdminApi, ApiClient, ApiError, ApiRequest, ApiResponse, AuthGateway, HttpTransport,
    SessionStore,
};

/// Transporte que sirve respuestas en orden y registra cada petición
#[derive(Default)]
struct MockTransport {
    responses: RefCell<VecDeque<ApiResponse>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    fn push(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(ApiResponse {
            status,
            status_text: "Mock".to_string(),
            body: body.to_string(),
        });
    }

    fn last_request(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().expect("sin peticiones")
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Network("sin respuesta programada".to_string()))
    }
}

struct Harness {
    transport: Rc<MockTransport>,
    store: SessionStore,
    gateway: AuthGateway,
    admin: AdminApi,
}

fn harness() -> Harness {
    let transport = Rc::new(MockTransport::default());
    let store = SessionStore::new();
    let api = ApiClient::with_transport(transport.clone(), store.clone(), "http://mock");
    Harness {
        transport,
        store: store.clone(),
        gateway: AuthGateway::new(api.clone(), store),
        admin: AdminApi::new(api),
    }
}

const PROTECTED: Route = Route::Dashboard(loyalty_admin_pwa::models::session::AdminTab::Users);

const LOGIN_OK: &str =
    r#"{"access_token":"tok1","user":{"id":1,"email":"a@b.com","is_admin":true}}"#;

#[test]
fn escenario_completo_de_sesion() {
    use loyalty_admin_pwa::models::session::RouteDecision::*;

    let h = harness();

    // Pestaña recién abierta: todo redirige a login
    assert_eq!(h.gateway.guard_route(PROTECTED), Redirect(Route::Login));
    assert_eq!(h.gateway.guard_route(Route::PinVerify), Redirect(Route::Login));

    // Login correcto -> AuthenticatedUnverified
    h.transport.push(200, LOGIN_OK);
    let payload = block_on(h.gateway.submit_credentials("a@b.com", "pw123")).unwrap();
    assert_eq!(payload.access_token, "tok1");
    assert_eq!(
        h.store.get::<String>(KEY_ACCESS_TOKEN),
        Some("tok1".to_string())
    );

    // Protegido ya no manda a login sino al PIN
    assert_eq!(h.gateway.guard_route(PROTECTED), Redirect(Route::PinVerify));
    assert_eq!(h.gateway.guard_route(Route::Login), Redirect(Route::PinVerify));

    // PIN correcto -> AuthenticatedVerified
    h.transport.push(200, "");
    block_on(h.gateway.submit_pin("1234")).unwrap();
    assert_eq!(h.store.get::<bool>(KEY_IS_PIN_VERIFIED), Some(true));
    assert_eq!(h.gateway.guard_route(PROTECTED), Allow);
    assert_eq!(
        h.gateway.guard_route(Route::Login),
        Redirect(Route::default_protected())
    );

    // El verify-pin llevó el bearer token
    assert_eq!(h.transport.last_request().bearer, Some("tok1".to_string()));

    // Un 401 en cualquier llamada autenticada destruye la sesión entera
    h.transport.push(401, "");
    let result = block_on(h.admin.list_users());
    assert_eq!(result.unwrap_err(), ApiError::SessionExpired);
    assert_eq!(h.store.get::<bool>(KEY_IS_AUTHENTICATED), None);
    assert_eq!(h.store.get::<String>(KEY_ACCESS_TOKEN), None);
    assert_eq!(h.store.get::<serde_json::Value>(KEY_USER_DATA), None);
    assert_eq!(h.gateway.guard_route(PROTECTED), Redirect(Route::Login));
}

#[test]
fn credenciales_invalidas_no_tocan_la_sesion() {
    let h = harness();

    h.transport.push(401, r#"{"detail":"Email o contraseña incorrectos"}"#);
    let result = block_on(h.gateway.submit_credentials("a@b.com", "mala"));

    assert_eq!(
        result.unwrap_err(),
        ApiError::InvalidCredentials("Email o contraseña incorrectos".to_string())
    );
    assert_eq!(h.store.get::<String>(KEY_ACCESS_TOKEN), None);
    assert_eq!(h.store.get::<bool>(KEY_IS_AUTHENTICATED), None);

    // El login no lleva token
    assert_eq!(h.transport.last_request().bearer, None);
}

#[test]
fn cuenta_sin_permisos_de_admin_se_rechaza() {
    let h = harness();

    h.transport.push(
        200,
        r#"{"access_token":"tok2","user":{"id":7,"email":"user@b.com","is_admin":false}}"#,
    );
    let result = block_on(h.gateway.submit_credentials("user@b.com", "pw"));

    assert!(matches!(result, Err(ApiError::InvalidCredentials(_))));
    assert_eq!(h.store.get::<String>(KEY_ACCESS_TOKEN), None);
}

#[test]
fn pin_incorrecto_es_recuperable() {
    let h = harness();

    h.transport.push(200, LOGIN_OK);
    block_on(h.gateway.submit_credentials("a@b.com", "pw123")).unwrap();

    h.transport.push(422, r#"{"detail":"PIN incorrecto"}"#);
    let result = block_on(h.gateway.submit_pin("0000"));

    assert_eq!(
        result.unwrap_err(),
        ApiError::InvalidCredentials("PIN incorrecto".to_string())
    );
    // La sesión sigue viva, solo falta el segundo factor
    assert_eq!(
        h.store.get::<String>(KEY_ACCESS_TOKEN),
        Some("tok1".to_string())
    );
    assert_eq!(h.store.get::<bool>(KEY_IS_PIN_VERIFIED), Some(false));
}

#[test]
fn pin_sin_token_exige_reautenticacion() {
    let h = harness();

    let result = block_on(h.gateway.submit_pin("1234"));
    assert_eq!(result.unwrap_err(), ApiError::SessionExpired);
}

#[test]
fn logout_limpia_todo() {
    let h = harness();

    h.transport.push(200, LOGIN_OK);
    block_on(h.gateway.submit_credentials("a@b.com", "pw123")).unwrap();

    h.gateway.logout();

    assert_eq!(h.store.get::<String>(KEY_ACCESS_TOKEN), None);
    assert_eq!(h.store.get::<bool>(KEY_IS_AUTHENTICATED), None);
    assert_eq!(h.gateway.guard_route(PROTECTED), loyalty_admin_pwa::models::session::RouteDecision::Redirect(Route::Login));
}

#[test]
fn los_errores_del_servidor_llevan_su_detalle() {
    let h = harness();

    h.transport.push(200, LOGIN_OK);
    block_on(h.gateway.submit_credentials("a@b.com", "pw123")).unwrap();

    h.transport.push(500, r#"{"message":"replica caída"}"#);
    let result = block_on(h.admin.list_users());

    assert_eq!(
        result.unwrap_err(),
        ApiError::Api {
            status: 500,
            message: "replica caída".to_string()
        }
    );
    // Un 500 NO destruye la sesión
    assert_eq!(
        h.store.get::<String>(KEY_ACCESS_TOKEN),
        Some("tok1".to_string())
    );
}
