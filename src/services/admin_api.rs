// ============================================================================
// ADMIN API - CRUD de las pestañas del dashboard
// ============================================================================
// Wrappers tipados sobre ApiClient::authenticated_request. Toda la
// lógica de negocio (aprobaciones, ledger de puntos, detección de
// fraude) vive en el backend; aquí solo se piden y mutan datos.

use serde_json::json;

use crate::models::{
    Agent, CreateFraudRuleRequest, CreateSurveyRequest, FraudRule, PointTransfer, Redemption,
    Setting, Survey, UpdateSettingRequest, User,
};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::transport::HttpMethod;

#[derive(Clone)]
pub struct AdminApi {
    api: ApiClient,
}

impl AdminApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // ---- usuarios ----

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.api
            .authenticated_request(HttpMethod::Get, "/admin/users", None)
            .await
    }

    /// Bloquear o desbloquear una cuenta
    pub async fn set_user_blocked(&self, id: u64, blocked: bool) -> Result<User, ApiError> {
        self.api
            .authenticated_request(
                HttpMethod::Patch,
                &format!("/admin/users/{}", id),
                Some(json!({ "is_blocked": blocked })),
            )
            .await
    }

    // ---- agentes ----

    pub async fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        self.api
            .authenticated_request(HttpMethod::Get, "/admin/agents", None)
            .await
    }

    pub async fn approve_agent(&self, id: u64) -> Result<Agent, ApiError> {
        self.api
            .authenticated_request(
                HttpMethod::Post,
                &format!("/admin/agents/{}/approve", id),
                None,
            )
            .await
    }

    // ---- encuestas ----

    pub async fn list_surveys(&self) -> Result<Vec<Survey>, ApiError> {
        self.api
            .authenticated_request(HttpMethod::Get, "/admin/surveys", None)
            .await
    }

    pub async fn create_survey(&self, request: &CreateSurveyRequest) -> Result<Survey, ApiError> {
        self.api
            .authenticated_request(
                HttpMethod::Post,
                "/admin/surveys",
                Some(serde_json::to_value(request).unwrap_or(json!({}))),
            )
            .await
    }

    pub async fn delete_survey(&self, id: u64) -> Result<serde_json::Value, ApiError> {
        self.api
            .authenticated_request(HttpMethod::Delete, &format!("/admin/surveys/{}", id), None)
            .await
    }

    // ---- transferencias de puntos ----

    pub async fn list_transfers(&self) -> Result<Vec<PointTransfer>, ApiError> {
        self.api
            .authenticated_request(HttpMethod::Get, "/admin/transfers", None)
            .await
    }

    pub async fn review_transfer(
        &self,
        id: u64,
        approve: bool,
    ) -> Result<PointTransfer, ApiError> {
        let action = if approve { "approve" } else { "reject" };
        self.api
            .authenticated_request(
                HttpMethod::Post,
                &format!("/admin/transfers/{}/{}", id, action),
                None,
            )
            .await
    }

    // ---- canjes ----

    pub async fn list_redemptions(&self) -> Result<Vec<Redemption>, ApiError> {
        self.api
            .authenticated_request(HttpMethod::Get, "/admin/redemptions", None)
            .await
    }

    pub async fn review_redemption(&self, id: u64, approve: bool) -> Result<Redemption, ApiError> {
        let action = if approve { "approve" } else { "reject" };
        self.api
            .authenticated_request(
                HttpMethod::Post,
                &format!("/admin/redemptions/{}/{}", id, action),
                None,
            )
            .await
    }

    // ---- reglas antifraude ----

    pub async fn list_fraud_rules(&self) -> Result<Vec<FraudRule>, ApiError> {
        self.api
            .authenticated_request(HttpMethod::Get, "/admin/fraud-rules", None)
            .await
    }

    pub async fn create_fraud_rule(
        &self,
        request: &CreateFraudRuleRequest,
    ) -> Result<FraudRule, ApiError> {
        self.api
            .authenticated_request(
                HttpMethod::Post,
                "/admin/fraud-rules",
                Some(serde_json::to_value(request).unwrap_or(json!({}))),
            )
            .await
    }

    pub async fn set_rule_enabled(&self, id: u64, enabled: bool) -> Result<FraudRule, ApiError> {
        self.api
            .authenticated_request(
                HttpMethod::Put,
                &format!("/admin/fraud-rules/{}", id),
                Some(json!({ "enabled": enabled })),
            )
            .await
    }

    pub async fn delete_fraud_rule(&self, id: u64) -> Result<serde_json::Value, ApiError> {
        self.api
            .authenticated_request(
                HttpMethod::Delete,
                &format!("/admin/fraud-rules/{}", id),
                None,
            )
            .await
    }

    // ---- configuración ----

    pub async fn list_settings(&self) -> Result<Vec<Setting>, ApiError> {
        self.api
            .authenticated_request(HttpMethod::Get, "/admin/settings", None)
            .await
    }

    pub async fn update_setting(&self, key: &str, value: &str) -> Result<Setting, ApiError> {
        let request = UpdateSettingRequest {
            value: value.to_string(),
        };
        self.api
            .authenticated_request(
                HttpMethod::Put,
                &format!("/admin/settings/{}", key),
                Some(serde_json::to_value(&request).unwrap_or(json!({}))),
            )
            .await
    }
}
