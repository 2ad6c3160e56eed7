use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pendiente",
            ReviewStatus::Approved => "Aprobada",
            ReviewStatus::Rejected => "Rechazada",
        }
    }
}

/// Transferencia de puntos entre usuarios, sujeta a revisión manual
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PointTransfer {
    pub id: u64,
    pub from_email: String,
    pub to_email: String,
    pub amount: i64,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}
