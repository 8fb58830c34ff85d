//! App Shell
//!
//! The startup state machine: `Loading` until the one-time session read,
//! then `Unauthenticated` or `Authenticated`. The only transitions after
//! that are explicit - a successful login flips forward, a logout flips
//! back. Nothing polls the token or re-checks expiry.

use std::sync::Arc;

use crate::api::AuthApi;
use crate::error::ClientResult;
use crate::session::{Profile, SessionManager};

/// Shell lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Before the startup session read; nothing is mounted
    Loading,
    /// Signup/login screens
    Unauthenticated,
    /// The signed-in tab graph
    Authenticated,
}

/// Which screen graph to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenGraph {
    /// Signup and login screens
    SignedOut,
    /// Home, detection, and profile tabs
    SignedIn,
}

/// The app shell owning the routing decision
pub struct AppShell {
    session: Arc<SessionManager>,
    state: ShellState,
}

impl AppShell {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self {
            session,
            state: ShellState::Loading,
        }
    }

    /// One-time startup check: token present decides the screen graph.
    /// Calling it again is a no-op once the state has settled.
    pub fn bootstrap(&mut self) -> ShellState {
        if self.state == ShellState::Loading {
            self.state = if self.session.token().is_some() {
                ShellState::Authenticated
            } else {
                ShellState::Unauthenticated
            };
        }
        self.state
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// The graph to mount; `None` while loading so nothing flashes
    pub fn screen_graph(&self) -> Option<ScreenGraph> {
        match self.state {
            ShellState::Loading => None,
            ShellState::Unauthenticated => Some(ScreenGraph::SignedOut),
            ShellState::Authenticated => Some(ScreenGraph::SignedIn),
        }
    }

    /// Run the login flow: call the API, persist the session, re-route.
    /// On any failure the state and the stored session are untouched.
    pub async fn log_in(&mut self, api: &AuthApi, email: &str, password: &str) -> ClientResult<()> {
        let response = api.log_in(email, password).await?;

        let profile = Profile {
            email: response.user.email.clone(),
            username: Some(response.user.username.clone()),
        };
        self.session.set_session(&response.token, &profile)?;

        self.state = ShellState::Authenticated;
        tracing::info!("Login succeeded, switching to the signed-in graph");
        Ok(())
    }

    /// Run the signup flow. Success does not log the user in; the source
    /// flow sends them to the login screen next.
    pub async fn sign_up(
        &self,
        api: &AuthApi,
        username: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<()> {
        api.sign_up(username, email, password).await
    }

    /// Clear the session and fall back to the signed-out graph
    pub fn log_out(&mut self) {
        self.session.clear_session();
        self.state = ShellState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_in(dir: &std::path::Path) -> Arc<SessionManager> {
        Arc::new(SessionManager::new(dir))
    }

    #[test]
    fn test_loading_mounts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let shell = AppShell::new(session_in(dir.path()));

        assert_eq!(shell.state(), ShellState::Loading);
        assert_eq!(shell.screen_graph(), None);
    }

    #[test]
    fn test_bootstrap_without_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = AppShell::new(session_in(dir.path()));

        assert_eq!(shell.bootstrap(), ShellState::Unauthenticated);
        assert_eq!(shell.screen_graph(), Some(ScreenGraph::SignedOut));
    }

    #[test]
    fn test_bootstrap_with_persisted_token_skips_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(dir.path());
        session
            .set_session(
                "tok-1",
                &Profile {
                    email: "a@x.com".to_string(),
                    username: None,
                },
            )
            .unwrap();

        let mut shell = AppShell::new(session);

        // Straight from Loading to the signed-in graph; the signed-out
        // screens are never mounted.
        assert_eq!(shell.screen_graph(), None);
        assert_eq!(shell.bootstrap(), ShellState::Authenticated);
        assert_eq!(shell.screen_graph(), Some(ScreenGraph::SignedIn));
    }

    #[test]
    fn test_logout_is_safe_to_repeat() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(dir.path());
        session
            .set_session(
                "tok-1",
                &Profile {
                    email: "a@x.com".to_string(),
                    username: None,
                },
            )
            .unwrap();

        let mut shell = AppShell::new(session.clone());
        shell.bootstrap();

        shell.log_out();
        shell.log_out();

        assert_eq!(shell.state(), ShellState::Unauthenticated);
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn test_login_flow_persists_and_reroutes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "tok-1",
                "user": { "id": "u-1", "email": "a@x.com", "username": "alice" }
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let session = session_in(dir.path());
        let mut shell = AppShell::new(session.clone());
        shell.bootstrap();

        let api = AuthApi::new(server.uri()).unwrap();
        shell.log_in(&api, "a@x.com", "secret1").await.unwrap();

        assert_eq!(shell.state(), ShellState::Authenticated);
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(session.profile().unwrap().email, "a@x.com");
    }

    #[tokio::test]
    async fn test_failed_login_changes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({ "error": "Invalid credentials" })),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let session = session_in(dir.path());
        let mut shell = AppShell::new(session.clone());
        shell.bootstrap();

        let api = AuthApi::new(server.uri()).unwrap();
        let err = shell.log_in(&api, "a@x.com", "wrong").await.unwrap_err();

        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(shell.state(), ShellState::Unauthenticated);
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }
}
