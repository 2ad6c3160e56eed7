use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Pending,
    Approved,
    Suspended,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Pending => "Pendiente",
            AgentStatus::Approved => "Aprobado",
            AgentStatus::Suspended => "Suspendido",
        }
    }
}

/// Agente de campo que recluta usuarios y reparte puntos
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Agent {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub region: Option<String>,
    pub status: AgentStatus,
}
