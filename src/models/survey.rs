use serde::{Deserialize, Serialize};

/// Encuesta publicada en la plataforma
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Survey {
    pub id: u64,
    pub title: String,
    pub reward_points: i64,
    pub is_active: bool,
    #[serde(default)]
    pub responses_count: u64,
}

/// Alta de encuesta desde el dashboard
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateSurveyRequest {
    pub title: String,
    pub reward_points: i64,
}
