use serde::{Deserialize, Serialize};

/// Regla antifraude evaluada por el backend.
/// El dashboard solo las administra, la detección vive en el servidor.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FraudRule {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub threshold: i64,
    pub enabled: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateFraudRuleRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub threshold: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_descripcion_es_opcional_en_el_alta() {
        let request = CreateFraudRuleRequest {
            name: "Límite diario".to_string(),
            description: None,
            threshold: 1000,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("description"));

        let request = CreateFraudRuleRequest {
            description: Some("Transferencias por día y usuario".to_string()),
            ..request
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"description\":\"Transferencias por día y usuario\""));
    }
}
