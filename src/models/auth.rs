use serde::{Deserialize, Serialize};

/// Credenciales del primer paso de login.
/// Transitorias: se descartan en cuanto resuelve la llamada de red.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device_fingerprint: String,
    pub user_agent: String,
}

/// Respuesta de POST /auth/login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginPayload {
    pub access_token: String,
    pub user: SessionUser,
}

/// Usuario autenticado (se guarda serializado bajo `userData`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionUser {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Cuerpo de POST /auth/verify-pin (segundo factor)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PinRequest {
    pub pin: String,
}
