// ============================================================================
// AUTH GATEWAY - Login en dos pasos + route guard
// ============================================================================
// Orquesta el protocolo credenciales -> PIN y decide qué ruta puede
// renderizarse según la fase de la sesión. Es el único componente que
// escribe en el SessionStore (además del 401 del ApiClient).

use serde_json::json;

use crate::models::auth::{LoginPayload, LoginRequest, PinRequest, SessionUser};
use crate::models::session::{Route, RouteDecision, SessionPhase};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::session_store::{
    SessionStore, KEY_ACCESS_TOKEN, KEY_IS_AUTHENTICATED, KEY_IS_PIN_VERIFIED, KEY_USER_DATA,
};
use crate::services::transport::HttpMethod;
use crate::utils::fingerprint::{device_fingerprint, user_agent};

#[derive(Clone)]
pub struct AuthGateway {
    api: ApiClient,
    store: SessionStore,
}

impl AuthGateway {
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// Primer factor: email + password contra POST /auth/login.
    /// En éxito guarda token y usuario y pasa a AuthenticatedUnverified.
    /// En rechazo NO toca la sesión.
    pub async fn submit_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginPayload, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            device_fingerprint: device_fingerprint(),
            user_agent: user_agent(),
        };

        log::info!("🔐 [AUTH] Login de {}", email);

        let payload: LoginPayload = self
            .api
            .request(
                HttpMethod::Post,
                "/auth/login",
                Some(serde_json::to_value(&request).unwrap_or(json!({}))),
            )
            .await
            .map_err(|e| match e {
                // Sin sesión todavía: cualquier rechazo del servidor
                // son credenciales inválidas para el usuario
                ApiError::Api {
                    status: 400 | 401 | 403,
                    message,
                } => ApiError::InvalidCredentials(message),
                other => other,
            })?;

        if !payload.user.is_admin {
            log::warn!("⚠️ [AUTH] {} no es administrador, login rechazado", email);
            return Err(ApiError::InvalidCredentials(
                "Esta cuenta no tiene permisos de administración".to_string(),
            ));
        }

        self.store.set(KEY_ACCESS_TOKEN, &payload.access_token);
        self.store.set(KEY_USER_DATA, &payload.user);
        self.store.set(KEY_IS_AUTHENTICATED, &true);
        self.store.set(KEY_IS_PIN_VERIFIED, &false);

        log::info!("✅ [AUTH] Login correcto, falta verificar PIN");
        Ok(payload)
    }

    /// Segundo factor: PIN contra POST /auth/verify-pin con el bearer
    /// token. Requiere sesión autenticada; sin token el caller debe
    /// volver a autenticarse.
    pub async fn submit_pin(&self, pin: &str) -> Result<(), ApiError> {
        let request = PinRequest {
            pin: pin.to_string(),
        };

        let result: Result<serde_json::Value, ApiError> = self
            .api
            .authenticated_request(
                HttpMethod::Post,
                "/auth/verify-pin",
                Some(serde_json::to_value(&request).unwrap_or(json!({}))),
            )
            .await;

        match result {
            Ok(_) => {
                self.store.set(KEY_IS_PIN_VERIFIED, &true);
                log::info!("✅ [AUTH] PIN verificado");
                Ok(())
            }
            // PIN incorrecto: recuperable inline, la sesión sigue viva
            Err(ApiError::Api {
                status: 400 | 403 | 422,
                message,
            }) => Err(ApiError::InvalidCredentials(message)),
            Err(other) => Err(other),
        }
    }

    /// Logout explícito: borra la sesión completa
    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.store.clear();
    }

    /// Usuario guardado en la sesión (para el header del dashboard)
    pub fn current_user(&self) -> Option<SessionUser> {
        self.store.get(KEY_USER_DATA)
    }

    /// Fase actual derivada de las claves del store
    pub fn phase(&self) -> SessionPhase {
        derive_phase(
            self.store.get(KEY_IS_AUTHENTICATED).unwrap_or(false),
            self.store.get::<String>(KEY_ACCESS_TOKEN).is_some(),
            self.store.get(KEY_IS_PIN_VERIFIED).unwrap_or(false),
        )
        .0
    }

    /// Route guard. Se evalúa de forma síncrona ANTES de renderizar
    /// cualquier vista protegida. Una sesión inconsistente (flag de
    /// autenticado sin token) se limpia primero.
    pub fn guard_route(&self, route: Route) -> RouteDecision {
        let (phase, inconsistent) = derive_phase(
            self.store.get(KEY_IS_AUTHENTICATED).unwrap_or(false),
            self.store.get::<String>(KEY_ACCESS_TOKEN).is_some(),
            self.store.get(KEY_IS_PIN_VERIFIED).unwrap_or(false),
        );

        if inconsistent {
            log::warn!("⚠️ [AUTH] Sesión inconsistente, limpiando");
            self.store.clear();
        }

        decide(phase, route)
    }
}

/// Fase a partir de los flags. El segundo campo indica una sesión
/// inconsistente (autenticado sin token), que se trata como anónima.
pub fn derive_phase(
    is_authenticated: bool,
    has_token: bool,
    is_pin_verified: bool,
) -> (SessionPhase, bool) {
    match (is_authenticated, has_token) {
        (true, true) if is_pin_verified => (SessionPhase::AuthenticatedVerified, false),
        (true, true) => (SessionPhase::AuthenticatedUnverified, false),
        (true, false) => (SessionPhase::Anonymous, true),
        (false, _) => (SessionPhase::Anonymous, false),
    }
}

/// Tabla de decisión del route guard. Pura e idempotente.
pub fn decide(phase: SessionPhase, route: Route) -> RouteDecision {
    match (phase, route) {
        (SessionPhase::Anonymous, Route::Login) => RouteDecision::Allow,
        (SessionPhase::Anonymous, _) => RouteDecision::Redirect(Route::Login),

        (SessionPhase::AuthenticatedUnverified, Route::PinVerify) => RouteDecision::Allow,
        (SessionPhase::AuthenticatedUnverified, _) => RouteDecision::Redirect(Route::PinVerify),

        (SessionPhase::AuthenticatedVerified, Route::Dashboard(_)) => RouteDecision::Allow,
        (SessionPhase::AuthenticatedVerified, _) => {
            RouteDecision::Redirect(Route::default_protected())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::AdminTab;

    const PROTECTED: Route = Route::Dashboard(AdminTab::Users);

    #[test]
    fn tabla_de_guard_para_anonimo() {
        let phase = SessionPhase::Anonymous;
        assert_eq!(decide(phase, Route::Login), RouteDecision::Allow);
        assert_eq!(
            decide(phase, Route::PinVerify),
            RouteDecision::Redirect(Route::Login)
        );
        assert_eq!(
            decide(phase, PROTECTED),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn tabla_de_guard_para_autenticado_sin_pin() {
        let phase = SessionPhase::AuthenticatedUnverified;
        assert_eq!(
            decide(phase, Route::Login),
            RouteDecision::Redirect(Route::PinVerify)
        );
        assert_eq!(decide(phase, Route::PinVerify), RouteDecision::Allow);
        assert_eq!(
            decide(phase, PROTECTED),
            RouteDecision::Redirect(Route::PinVerify)
        );
    }

    #[test]
    fn tabla_de_guard_para_verificado() {
        let phase = SessionPhase::AuthenticatedVerified;
        assert_eq!(
            decide(phase, Route::Login),
            RouteDecision::Redirect(Route::default_protected())
        );
        assert_eq!(
            decide(phase, Route::PinVerify),
            RouteDecision::Redirect(Route::default_protected())
        );
        assert_eq!(decide(phase, PROTECTED), RouteDecision::Allow);
        assert_eq!(
            decide(phase, Route::Dashboard(AdminTab::Settings)),
            RouteDecision::Allow
        );
    }

    #[test]
    fn el_guard_es_idempotente() {
        for phase in [
            SessionPhase::Anonymous,
            SessionPhase::AuthenticatedUnverified,
            SessionPhase::AuthenticatedVerified,
        ] {
            for route in [Route::Login, Route::PinVerify, PROTECTED] {
                assert_eq!(decide(phase, route), decide(phase, route));
            }
        }
    }

    #[test]
    fn fase_derivada_de_los_flags() {
        assert_eq!(
            derive_phase(false, false, false),
            (SessionPhase::Anonymous, false)
        );
        assert_eq!(
            derive_phase(true, true, false),
            (SessionPhase::AuthenticatedUnverified, false)
        );
        assert_eq!(
            derive_phase(true, true, true),
            (SessionPhase::AuthenticatedVerified, false)
        );
        // PIN verificado solo cuenta con sesión autenticada completa
        assert_eq!(
            derive_phase(false, false, true),
            (SessionPhase::Anonymous, false)
        );
    }

    #[test]
    fn autenticado_sin_token_es_inconsistente() {
        assert_eq!(derive_phase(true, false, true), (SessionPhase::Anonymous, true));
        assert_eq!(
            derive_phase(true, false, false),
            (SessionPhase::Anonymous, true)
        );
    }
}
