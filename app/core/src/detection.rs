//! Detection Report Client
//!
//! The signed-in half of the app uploads a captured image or video to the
//! external detection endpoint and renders the returned report. The model
//! and the endpoint are not ours; this module only gates the call on the
//! session state, ships the file, and parses what comes back. Every report
//! section is optional and an empty report is a valid answer.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::api::api_error;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionManager;

/// Media uploads ride on this timeout instead of the auth client's short
/// one; a video over a phone uplink is legitimately slow.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

// ============================================================================
// Report Model
// ============================================================================

/// Report returned by the predict endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectionReport {
    #[serde(rename = "Abnormality")]
    pub abnormality: Option<Abnormality>,
    #[serde(rename = "EmotionalState")]
    pub emotional_state: Option<EmotionalState>,
    #[serde(rename = "Drowsiness")]
    pub drowsiness: Option<Drowsiness>,
}

/// Abnormal driving behaviors spotted in the media
#[derive(Debug, Clone, Deserialize)]
pub struct Abnormality {
    #[serde(default)]
    pub detected_behaviors: Vec<String>,
}

/// Dominant emotion read from the driver's face
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionalState {
    pub emotion: String,
}

/// Drowsiness score
#[derive(Debug, Clone, Deserialize)]
pub struct Drowsiness {
    pub score: f64,
}

impl DetectionReport {
    /// Human-readable summary for the report screen
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        if let Some(abnormality) = &self.abnormality {
            if !abnormality.detected_behaviors.is_empty() {
                lines.push(format!(
                    "Detected behaviors: {}",
                    abnormality.detected_behaviors.join(", ")
                ));
            }
        }
        if let Some(emotional_state) = &self.emotional_state {
            lines.push(format!("Emotional state: {}", emotional_state.emotion));
        }
        if let Some(drowsiness) = &self.drowsiness {
            lines.push(format!("Drowsiness score: {:.1}", drowsiness.score));
        }

        if lines.is_empty() {
            "No report data.".to_string()
        } else {
            lines.join("\n")
        }
    }
}

// ============================================================================
// Upload Client
// ============================================================================

/// Client for the external detection endpoint
pub struct DetectionApi {
    http: reqwest::Client,
    base_url: String,
}

impl DetectionApi {
    /// Create a client for the given detection base URL
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(UPLOAD_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Upload a media file and parse the detection report.
    ///
    /// Refuses before touching the network unless the session is
    /// authenticated - this screen only exists behind the signed-in graph.
    pub async fn analyze(
        &self,
        session: &SessionManager,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<DetectionReport> {
        if !session.is_authenticated() {
            return Err(ClientError::NotAuthenticated);
        }

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let mut request = self
            .http
            .post(format!("{}/predict", self.base_url))
            .multipart(form);
        if let Some(token) = session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if response.status().is_success() {
            Ok(response.json::<DetectionReport>().await?)
        } else {
            Err(api_error(response).await)
        }
    }
}
