//! Liveness probe for the analysis service.

use gloo_net::http::Request;

use crate::config::health_url;
use crate::types::{HealthStatus, TransportError};

/// `GET /api/health/`.
pub async fn check_health() -> Result<HealthStatus, TransportError> {
    let response = Request::get(&health_url())
        .send()
        .await
        .map_err(|e| TransportError::Unreachable(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(TransportError::Unreachable(format!(
            "health check returned HTTP {}",
            response.status()
        )));
    }

    response
        .json::<HealthStatus>()
        .await
        .map_err(|e| TransportError::Malformed(e.to_string()))
}
