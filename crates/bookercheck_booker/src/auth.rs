// --- File: crates/bookercheck_booker/src/auth.rs ---
use crate::error::BookerError;
use crate::models::{AuthRequest, AuthResponse};
use bookercheck_common::HTTP_CLIENT;
use bookercheck_config::BookerConfig;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tracing::{debug, info};

/// Token issued by `POST /auth`.
///
/// Valid for one checker run; never refreshed, never persisted.
#[derive(Debug, Clone)]
pub struct AuthToken(String);

impl AuthToken {
    /// Value for the `Cookie` header the service expects on DELETE.
    pub fn cookie(&self) -> String {
        format!("token={}", self.0)
    }
}

/// Requests a fresh auth token.
///
/// The service answers 200 for bad credentials too, with a `reason` field
/// instead of a token; that case surfaces as [`BookerError::AuthRejected`].
pub async fn create_token(config: &BookerConfig) -> Result<AuthToken, BookerError> {
    let url = format!("{}/auth", config.base_url);
    info!("[Booker Auth] Requesting token from {}", url);

    let response = HTTP_CLIENT
        .post(&url)
        .header(ACCEPT, "application/json")
        .json(&AuthRequest {
            username: &config.username,
            password: &config.password,
        })
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;
    debug!("[Booker Auth] Response status {}: {}", status, body_text);

    if status != StatusCode::OK {
        return Err(BookerError::ApiError {
            status_code: status.as_u16(),
            message: body_text.trim().to_string(),
        });
    }

    let auth: AuthResponse = serde_json::from_str(&body_text)?;
    match auth.token {
        Some(token) if !token.is_empty() => {
            info!("[Booker Auth] Token issued");
            Ok(AuthToken(token))
        }
        _ => Err(BookerError::AuthRejected(
            auth.reason
                .unwrap_or_else(|| "no token in auth response".to_string()),
        )),
    }
}
