//! Unit tests for the auth crate
//!
//! Use cases and the HTTP surface are exercised against an in-memory
//! repository that enforces email uniqueness atomically, the same contract
//! the Postgres unique index provides.

use std::sync::{Arc, Mutex};

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, SignUpInput, SignUpUseCase};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory credential store. `create` checks-and-inserts under one lock,
/// mirroring the atomicity of the database unique index.
#[derive(Clone, Default)]
struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserRepository {
    fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }
}

fn use_cases(
    repo: &MemoryUserRepository,
    config: &Arc<AuthConfig>,
) -> (
    SignUpUseCase<MemoryUserRepository>,
    LoginUseCase<MemoryUserRepository>,
) {
    let repo = Arc::new(repo.clone());
    (
        SignUpUseCase::new(repo.clone(), config.clone()),
        LoginUseCase::new(repo, config.clone()),
    )
}

fn sign_up_input(username: &str, email: &str, password: &str) -> SignUpInput {
    SignUpInput {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_string(),
        password: password.to_string(),
    }
}

mod use_case_tests {
    use super::*;
    use crate::application::token;

    #[tokio::test]
    async fn test_signup_then_login_roundtrip() {
        let repo = MemoryUserRepository::default();
        let config = Arc::new(AuthConfig::with_random_secret());
        let (sign_up, login) = use_cases(&repo, &config);

        sign_up
            .execute(sign_up_input("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let output = login
            .execute(login_input("a@x.com", "secret1"))
            .await
            .unwrap();

        assert!(!output.token.is_empty());
        assert_eq!(output.user.email.as_str(), "a@x.com");
        assert_eq!(output.user.user_name.as_str(), "alice");

        // The token's claims carry the stored user's id
        let claims = token::verify(&output.token, &config).unwrap();
        assert_eq!(claims.user_id, output.user.user_id);
    }

    #[tokio::test]
    async fn test_stored_password_is_hashed() {
        let repo = MemoryUserRepository::default();
        let config = Arc::new(AuthConfig::with_random_secret());
        let (sign_up, _) = use_cases(&repo, &config);

        sign_up
            .execute(sign_up_input("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let stored = repo
            .find_by_email(&Email::new("a@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.password_hash.as_str().contains("secret1"));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = MemoryUserRepository::default();
        let config = Arc::new(AuthConfig::with_random_secret());
        let (sign_up, _) = use_cases(&repo, &config);

        sign_up
            .execute(sign_up_input("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let err = sign_up
            .execute(sign_up_input("impostor", "a@x.com", "other"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_signups_admit_one_record() {
        let repo = MemoryUserRepository::default();
        let config = Arc::new(AuthConfig::with_random_secret());
        let (sign_up_a, _) = use_cases(&repo, &config);
        let (sign_up_b, _) = use_cases(&repo, &config);

        let (a, b) = tokio::join!(
            sign_up_a.execute(sign_up_input("alice", "a@x.com", "secret1")),
            sign_up_b.execute(sign_up_input("alice2", "a@x.com", "secret2")),
        );

        assert!(a.is_ok() != b.is_ok(), "exactly one signup must win");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_create_nothing() {
        let repo = MemoryUserRepository::default();
        let config = Arc::new(AuthConfig::with_random_secret());
        let (sign_up, _) = use_cases(&repo, &config);

        for input in [
            sign_up_input("", "a@x.com", "secret1"),
            sign_up_input("alice", "", "secret1"),
            sign_up_input("alice", "a@x.com", ""),
        ] {
            let err = sign_up.execute(input).await.unwrap_err();
            assert!(matches!(err, AuthError::MissingFields));
        }

        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let repo = MemoryUserRepository::default();
        let config = Arc::new(AuthConfig::with_random_secret());
        let (sign_up, login) = use_cases(&repo, &config);

        sign_up
            .execute(sign_up_input("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let wrong_password = login
            .execute(login_input("a@x.com", "wrong"))
            .await
            .unwrap_err();
        let unknown_email = login
            .execute(login_input("nobody@x.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(
            wrong_password.public_message(),
            unknown_email.public_message()
        );
    }
}

mod router_tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::presentation::router::auth_router_generic;

    fn test_router(repo: &MemoryUserRepository) -> Router {
        auth_router_generic(repo.clone(), AuthConfig::with_random_secret())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_signup_created() {
        let repo = MemoryUserRepository::default();
        let app = test_router(&repo);

        let response = app
            .oneshot(post_json(
                "/signup",
                serde_json::json!({
                    "username": "alice", "email": "a@x.com", "password": "secret1"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_missing_field_is_400() {
        let repo = MemoryUserRepository::default();
        let app = test_router(&repo);

        // No username key at all: presence validation answers, not the
        // JSON extractor
        let response = app
            .oneshot(post_json(
                "/signup",
                serde_json::json!({ "email": "a@x.com", "password": "secret1" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "All fields are required");
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_is_400() {
        let repo = MemoryUserRepository::default();
        let app = test_router(&repo);

        let payload = serde_json::json!({
            "username": "alice", "email": "a@x.com", "password": "secret1"
        });

        let first = app
            .clone()
            .oneshot(post_json("/signup", payload.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(post_json("/signup", payload)).await.unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let body = json_body(second).await;
        assert_eq!(body["error"], "Email is already in use");
    }

    #[tokio::test]
    async fn test_login_ok_and_failure_shape() {
        let repo = MemoryUserRepository::default();
        let app = test_router(&repo);

        let signup = app
            .clone()
            .oneshot(post_json(
                "/signup",
                serde_json::json!({
                    "username": "alice", "email": "a@x.com", "password": "secret1"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(signup.status(), StatusCode::CREATED);

        // Correct credentials: token plus the public user projection
        let ok = app
            .clone()
            .oneshot(post_json(
                "/login",
                serde_json::json!({ "email": "a@x.com", "password": "secret1" }),
            ))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        let body = json_body(ok).await;
        assert!(!body["token"].as_str().unwrap().is_empty());
        assert_eq!(body["user"]["email"], "a@x.com");
        assert_eq!(body["user"]["username"], "alice");
        assert!(body["user"]["id"].is_string());
        assert!(body["user"].get("password_hash").is_none());

        // Wrong password and unknown email: identical status and body
        let wrong_password = app
            .clone()
            .oneshot(post_json(
                "/login",
                serde_json::json!({ "email": "a@x.com", "password": "wrong" }),
            ))
            .await
            .unwrap();
        let unknown_email = app
            .oneshot(post_json(
                "/login",
                serde_json::json!({ "email": "nobody@x.com", "password": "secret1" }),
            ))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(wrong_password).await,
            json_body(unknown_email).await
        );
    }

    #[tokio::test]
    async fn test_malformed_json_still_gets_error_body() {
        let repo = MemoryUserRepository::default();
        let app = test_router(&repo);

        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Internal server error");
    }
}
