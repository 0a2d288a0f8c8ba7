//! Integration tests for the auth crate
//!
//! Use cases run against the in-memory repository; the gate is exercised
//! through a real router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::error::AuthError;
use crate::infra::memory::InMemoryCredentialRepository;
use crate::presentation::middleware::{AuthGateState, require_auth};

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig {
        allow_list: vec!["/open".to_string()],
        ..AuthConfig::with_random_secret()
    })
}

fn test_services(config: &Arc<AuthConfig>) -> (Arc<InMemoryCredentialRepository>, Arc<TokenService>) {
    (
        Arc::new(InMemoryCredentialRepository::new()),
        Arc::new(TokenService::new(config.token_secret)),
    )
}

async fn register(
    repo: &Arc<InMemoryCredentialRepository>,
    config: &Arc<AuthConfig>,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .map(|out| out.subject)
}

async fn login(
    repo: &Arc<InMemoryCredentialRepository>,
    config: &Arc<AuthConfig>,
    tokens: &Arc<TokenService>,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    LoginUseCase::new(repo.clone(), config.clone(), tokens.clone())
        .execute(LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .map(|out| out.token)
}

mod use_cases {
    use super::*;

    #[tokio::test]
    async fn register_then_login_roundtrip() {
        let config = test_config();
        let (repo, tokens) = test_services(&config);

        let subject = register(&repo, &config, "a@x.com", "correct-horse-1!")
            .await
            .unwrap();
        assert_eq!(subject, "a@x.com");

        let token = login(&repo, &config, &tokens, "a@x.com", "correct-horse-1!")
            .await
            .unwrap();

        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.subject, "a@x.com");
    }

    #[tokio::test]
    async fn login_normalizes_subject_case() {
        let config = test_config();
        let (repo, tokens) = test_services(&config);

        register(&repo, &config, "a@x.com", "correct-horse-1!")
            .await
            .unwrap();

        let token = login(&repo, &config, &tokens, "A@X.COM", "correct-horse-1!")
            .await
            .unwrap();
        assert_eq!(tokens.validate(&token).unwrap().subject, "a@x.com");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let config = test_config();
        let (repo, tokens) = test_services(&config);

        register(&repo, &config, "a@x.com", "correct-horse-1!")
            .await
            .unwrap();

        let err = login(&repo, &config, &tokens, "a@x.com", "totally-wrong-9?")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_subject_is_rejected_with_same_surface() {
        let config = test_config();
        let (repo, tokens) = test_services(&config);

        register(&repo, &config, "a@x.com", "correct-horse-1!")
            .await
            .unwrap();

        let unknown = login(&repo, &config, &tokens, "nobody@x.com", "correct-horse-1!")
            .await
            .unwrap_err();
        let wrong = login(&repo, &config, &tokens, "a@x.com", "totally-wrong-9?")
            .await
            .unwrap_err();

        // Distinct internally, identical at the boundary
        assert!(matches!(unknown, AuthError::UnknownSubject));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(
            unknown.to_app_error().message(),
            wrong.to_app_error().message()
        );
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let config = test_config();
        let (repo, _) = test_services(&config);

        register(&repo, &config, "a@x.com", "correct-horse-1!")
            .await
            .unwrap();

        let err = register(&repo, &config, "a@x.com", "other-secret-2!")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SubjectTaken));
    }

    #[tokio::test]
    async fn weak_password_is_rejected_at_registration() {
        let config = test_config();
        let (repo, _) = test_services(&config);

        let err = register(&repo, &config, "a@x.com", "short").await.unwrap_err();
        assert!(matches!(err, AuthError::PasswordValidation(_)));
    }
}

mod gate {
    use super::*;

    fn gated_app(config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Router {
        let gate = AuthGateState { config, tokens };

        Router::new()
            .route("/guarded", get(|| async { "ok" }))
            .route("/open", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(gate, require_auth))
    }

    async fn get_with_auth(app: &Router, path: &str, auth: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().uri(path);
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let response = app
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized_with_empty_body() {
        let config = test_config();
        let tokens = Arc::new(TokenService::new(config.token_secret));
        let app = gated_app(config, tokens);

        let (status, body) = get_with_auth(&app, "/guarded", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn fresh_token_is_allowed() {
        let config = test_config();
        let tokens = Arc::new(TokenService::new(config.token_secret));
        let token = tokens.issue("a@x.com", Duration::from_secs(60));
        let app = gated_app(config, tokens);

        let (status, _) = get_with_auth(&app, "/guarded", Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn raw_token_without_prefix_is_allowed() {
        let config = test_config();
        let tokens = Arc::new(TokenService::new(config.token_secret));
        let token = tokens.issue("a@x.com", Duration::from_secs(60));
        let app = gated_app(config, tokens);

        let (status, _) = get_with_auth(&app, "/guarded", Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn expired_token_is_unauthorized() {
        let config = test_config();
        let tokens = Arc::new(TokenService::new(config.token_secret));
        let issued_long_ago = chrono::Utc::now() - chrono::Duration::hours(2);
        let token = tokens.issue_at("a@x.com", Duration::from_secs(60), issued_long_ago);
        let app = gated_app(config, tokens);

        let (status, body) =
            get_with_auth(&app, "/guarded", Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn foreign_key_token_is_unauthorized() {
        let config = test_config();
        let tokens = Arc::new(TokenService::new(config.token_secret));
        let foreign = TokenService::new(platform::crypto::random_secret());
        let token = foreign.issue("a@x.com", Duration::from_secs(60));
        let app = gated_app(config, tokens);

        let (status, _) = get_with_auth(&app, "/guarded", Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn allow_listed_path_passes_without_header() {
        let config = test_config();
        let tokens = Arc::new(TokenService::new(config.token_secret));
        let app = gated_app(config, tokens);

        let (status, _) = get_with_auth(&app, "/open", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
