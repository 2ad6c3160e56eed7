use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Usuario de la plataforma (vista de administración)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub points_balance: i64,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}
