use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::transfer::ReviewStatus;

/// Canje de puntos por una recompensa, pendiente de aprobación
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Redemption {
    pub id: u64,
    pub user_email: String,
    pub reward: String,
    pub points: i64,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}
