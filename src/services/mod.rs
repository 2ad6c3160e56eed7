pub mod admin_api;
pub mod api_client;
pub mod auth_gateway;
pub mod error;
pub mod session_store;
pub mod transport;

pub use admin_api::AdminApi;
pub use api_client::ApiClient;
pub use auth_gateway::AuthGateway;
pub use error::ApiError;
pub use session_store::SessionStore;
pub use transport::{ApiRequest, ApiResponse, FetchTransport, HttpMethod, HttpTransport};
