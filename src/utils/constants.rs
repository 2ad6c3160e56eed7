/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Producción: via BACKEND_URL en .env (ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Timeout de red para cada request (sin reintentos automáticos)
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Evento global que fuerza la navegación a login cuando el backend
/// responde 401 en cualquier llamada autenticada
pub const SESSION_EXPIRED_EVENT: &str = "session-expired";
