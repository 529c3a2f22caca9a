//! Client for the favorite, selection and timeline-image endpoints.
//!
//! Requests are fire-once: no retries, no cancellation. Callers surface a
//! failure to the user and keep their local state as it was.

use base64::Engine as _;
use reqwest::{header::CONTENT_TYPE, Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid endpoint URL {0}")]
    Url(String),
    #[error("{0}")]
    Server(String),
}

/// `{ "status": "success" | "error", "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Serialize)]
struct ToggleFavoriteBody<'a> {
    favorite: bool,
    shift_title: &'a str,
}

#[derive(Debug, Serialize)]
struct SelectShiftBody<'a> {
    shift_title: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The server redirected; navigate there.
    Redirect(String),
    Ack(ApiStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl TimelineImage {
    /// Inline `data:` URL usable as an `img` source on every platform.
    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{encoded}", self.content_type)
    }
}

/// Leading digits of a turnus name (`"123HLD"` → `"123"`); the whole name
/// when it doesn't start with a digit.
pub fn numeric_prefix(name: &str) -> &str {
    let name = name.trim();
    let end = name
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(name.len(), |(i, _)| i);
    if end == 0 {
        name
    } else {
        &name[..end]
    }
}

#[derive(Debug, Clone)]
pub struct TurnusApi {
    client: Client,
    base: String,
}

impl Default for TurnusApi {
    fn default() -> Self {
        Self::with_base(config::api_base())
    }
}

impl TurnusApi {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{path}", self.base);
        Url::parse(&raw).map_err(|_| ApiError::Url(raw))
    }

    pub async fn toggle_favorite(&self, shift_title: &str, favorite: bool) -> Result<ApiStatus, ApiError> {
        tracing::debug!(shift_title, favorite, "toggling favorite");
        let response = self
            .client
            .post(self.endpoint("/api/toggle_favorite")?)
            .json(&ToggleFavoriteBody { favorite, shift_title })
            .send()
            .await?;
        Ok(response.json::<ApiStatus>().await?)
    }

    pub async fn select_shift(&self, shift_title: &str) -> Result<SelectOutcome, ApiError> {
        let url = self.endpoint("/api/js_select_shift")?;
        let response = self
            .client
            .post(url.clone())
            .json(&SelectShiftBody { shift_title })
            .send()
            .await?;
        if response.url() != &url {
            return Ok(SelectOutcome::Redirect(response.url().to_string()));
        }
        Ok(SelectOutcome::Ack(response.json::<ApiStatus>().await?))
    }

    pub async fn shift_image(&self, turnus_set_id: i64, shift_title: &str) -> Result<TimelineImage, ApiError> {
        let prefix = numeric_prefix(shift_title);
        let response = self
            .client
            .get(self.endpoint(&format!("/api/shift-image/{turnus_set_id}/{prefix}"))?)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(ApiError::Server(
                body.message
                    .unwrap_or_else(|| format!("timeline request failed ({status})")),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        let bytes = response.bytes().await?.to_vec();
        Ok(TimelineImage { content_type, bytes })
    }
}
