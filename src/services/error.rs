// ============================================================================
// API ERROR - Taxonomía de errores de red/API
// ============================================================================

use thiserror::Error;

/// Errores de cualquier llamada al backend.
///
/// - `InvalidCredentials` se muestra inline y no toca la sesión.
/// - `SessionExpired` (401) fuerza logout + navegación a login; el caller
///   no debe reintentar.
/// - `Api` es cualquier otro non-2xx, con el detalle del servidor.
/// - `Timeout` y `Network` se muestran genéricamente, sin reintentos.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ApiError {
    #[error("Credenciales inválidas: {0}")]
    InvalidCredentials(String),

    #[error("Sesión expirada, vuelve a iniciar sesión")]
    SessionExpired,

    #[error("Error del servidor ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("La petición excedió el tiempo de espera")]
    Timeout,

    #[error("Error de red: {0}")]
    Network(String),
}

impl ApiError {
    /// Mensaje corto para mostrar al usuario
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidCredentials(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
