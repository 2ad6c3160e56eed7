// ============================================================================
// TRANSPORT - Capa HTTP (stateless)
// ============================================================================
// Solo mueve bytes: sin lógica de negocio, sin tocar la sesión. El trait
// permite sustituir fetch por un transporte simulado en los tests.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

use crate::services::error::ApiError;
use crate::utils::constants::REQUEST_TIMEOUT_MS;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Petición ya resuelta (URL completa, token incluido si aplica)
#[derive(Clone, PartialEq, Debug)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Respuesta cruda del servidor. La clasificación por status
/// la hace el ApiClient.
#[derive(Clone, PartialEq, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transporte HTTP. Solo puede fallar con `Timeout` o `Network`;
/// cualquier respuesta del servidor (aun un 500) es un `ApiResponse`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Transporte real sobre fetch (gloo-net) con timeout por AbortController
#[derive(Clone, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());

        // El timer marca el flag antes de abortar, para distinguir
        // timeout de un fallo de red genuino
        let timed_out = Rc::new(Cell::new(false));
        let timer = controller.clone().map(|ctrl| {
            let timed_out = timed_out.clone();
            Timeout::new(REQUEST_TIMEOUT_MS, move || {
                timed_out.set(true);
                ctrl.abort();
            })
        });

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        builder = builder.abort_signal(signal.as_ref());

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(format!("Error serializando request: {}", e)))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(format!("Error construyendo request: {}", e)))?,
        };

        let sent = prepared.send().await;

        if let Some(timer) = timer {
            timer.cancel();
        }

        let response = sent.map_err(|e| {
            if timed_out.get() {
                ApiError::Timeout
            } else {
                ApiError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();

        Ok(ApiResponse {
            status,
            status_text,
            body,
        })
    }
}
