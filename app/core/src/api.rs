//! Auth API Client
//!
//! Thin typed client for the backend auth endpoints. Failures never touch
//! the session store; the caller decides what to persist.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Auth calls are small JSON bodies; anything slower than this is a dead
/// network, not a slow one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Public user projection returned by login
#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the `/api/auth` endpoints
pub struct AuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl AuthApi {
    /// Create a client for the given backend base URL
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// POST /api/auth/signup
    pub async fn sign_up(&self, username: &str, email: &str, password: &str) -> ClientResult<()> {
        let response = self
            .http
            .post(format!("{}/api/auth/signup", self.base_url))
            .json(&SignUpBody {
                username,
                email,
                password,
            })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    /// POST /api/auth/login
    pub async fn log_in(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&LoginBody { email, password })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<LoginResponse>().await?)
        } else {
            Err(api_error(response).await)
        }
    }
}

/// Turn a non-2xx response into `ClientError::Api`, falling back to the
/// generic message when the body is not the expected error shape.
pub(crate) async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => "Something went wrong.".to_string(),
    };
    ClientError::Api { status, message }
}
