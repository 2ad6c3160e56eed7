pub mod agent;
pub mod auth;
pub mod fraud;
pub mod redemption;
pub mod session;
pub mod settings;
pub mod survey;
pub mod transfer;
pub mod user;

pub use agent::{Agent, AgentStatus};
pub use auth::{LoginPayload, LoginRequest, PinRequest, SessionUser};
pub use fraud::{CreateFraudRuleRequest, FraudRule};
pub use redemption::Redemption;
pub use session::{AdminTab, Route, RouteDecision, SessionPhase};
pub use settings::{Setting, SettingKind, UpdateSettingRequest};
pub use survey::{CreateSurveyRequest, Survey};
pub use transfer::{PointTransfer, ReviewStatus};
pub use user::User;
