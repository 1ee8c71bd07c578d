//! Status Route
//!
//! - GET /api/status - Liveness report with server time

use axum::Json;
use chrono::Utc;

use crate::api::dto::StatusResponse;

/// GET /api/status
///
/// Reports that the server is up, with the current server time.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        message: "The Wagon is running.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_is_online() {
        let Json(body) = status().await;
        assert_eq!(body.status, "online");
        assert_eq!(body.message, "The Wagon is running.");
        // RFC 3339 timestamps parse back.
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }
}
