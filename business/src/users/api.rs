//! Users API client.
//!
//! Performs network IO only; callers (commands) map results into compute updates.

use thiserror::Error;

use super::UserRecord;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to parse user list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// GET `{api_url}/users`, expecting a JSON array of users.
pub async fn list_users(api_url: &str) -> Result<Vec<UserRecord>, ApiError> {
    let url = format!("{api_url}/users");

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
