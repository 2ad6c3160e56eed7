// ============================================================================
// SETTINGS - Esquema explícito de configuración de la plataforma
// ============================================================================
// Cada setting declara su tipo de control; la vista no adivina nada
// a partir del nombre de la clave.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Toggle,
    Text,
    Number,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Setting {
    pub key: String,
    pub kind: SettingKind,
    pub value: String,
}

impl Setting {
    /// Interpretación booleana de un toggle ("true" activado)
    pub fn is_enabled(&self) -> bool {
        self.kind == SettingKind::Toggle && self.value == "true"
    }
}

/// Cuerpo de PUT /admin/settings/{key}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UpdateSettingRequest {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_se_serializa_en_minusculas() {
        let setting = Setting {
            key: "auto_approval".to_string(),
            kind: SettingKind::Toggle,
            value: "true".to_string(),
        };
        let json = serde_json::to_string(&setting).unwrap();
        assert!(json.contains("\"kind\":\"toggle\""));
    }

    #[test]
    fn kind_desconocido_falla_el_parseo() {
        let json = r#"{"key":"x","kind":"color","value":"red"}"#;
        assert!(serde_json::from_str::<Setting>(json).is_err());
    }

    #[test]
    fn toggle_activado_solo_con_true() {
        let mut setting = Setting {
            key: "auto_approval".to_string(),
            kind: SettingKind::Toggle,
            value: "true".to_string(),
        };
        assert!(setting.is_enabled());

        setting.value = "yes".to_string();
        assert!(!setting.is_enabled());

        setting.kind = SettingKind::Text;
        setting.value = "true".to_string();
        assert!(!setting.is_enabled());
    }
}
