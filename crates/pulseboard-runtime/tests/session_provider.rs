use chrono::Utc;
use pulseboard_backend::SessionProvider;
use pulseboard_runtime::{Config, Pulseboard, SessionStore};
use pulseboard_testing::fixtures;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.backend.url = Some(server.uri());
    config.backend.anon_key = Some("anon-key".to_string());
    config
}

fn token_body(access: &str, refresh: &str) -> serde_json::Value {
    json!({
        "access_token": access,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": refresh,
        "user": {
            "id": "00000000-0000-0000-0000-000000000001",
            "email": "user1@example.com"
        }
    })
}

#[tokio::test]
async fn test_valid_session_is_returned_without_network() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new()?;
    let app = Pulseboard::with_config(temp_dir.path(), config_for(&server))?;

    let store = SessionStore::new(temp_dir.path());
    store.save(&fixtures::session_for(1))?;

    let session = app.session_provider().current_session().await?;
    assert_eq!(session, Some(fixtures::session_for(1)));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_expired_session_is_refreshed_and_saved() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(json!({ "refresh_token": "refresh-token-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("fresh", "rotated")))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new()?;
    let app = Pulseboard::with_config(temp_dir.path(), config_for(&server))?;

    let mut expired = fixtures::session_for(1);
    expired.expires_at = Some(Utc::now().timestamp() - 10);
    SessionStore::new(temp_dir.path()).save(&expired)?;

    let session = app
        .session_provider()
        .current_session()
        .await?
        .expect("refreshed session");
    assert_eq!(session.access_token, "fresh");
    assert!(session.expires_at.unwrap() > Utc::now().timestamp());

    let stored = app.stored_session()?.expect("stored session");
    assert_eq!(stored.refresh_token.as_deref(), Some("rotated"));
    Ok(())
}

#[tokio::test]
async fn test_expired_session_without_refresh_token_is_absent() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new()?;
    let app = Pulseboard::with_config(temp_dir.path(), config_for(&server))?;

    let mut expired = fixtures::session_for(1);
    expired.expires_at = Some(Utc::now().timestamp() - 10);
    expired.refresh_token = None;
    SessionStore::new(temp_dir.path()).save(&expired)?;

    assert_eq!(app.session_provider().current_session().await?, None);
    Ok(())
}

#[tokio::test]
async fn test_login_stores_session_and_logout_clears_it() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new()?;
    let app = Pulseboard::with_config(temp_dir.path(), config_for(&server))?;

    let session = app.login("user1@example.com", "hunter2").await?;
    assert_eq!(session.user_id(), fixtures::user_id(1));
    assert_eq!(app.stored_session()?, Some(session));

    assert!(app.logout().await?);
    assert_eq!(app.stored_session()?, None);
    assert!(!app.logout().await?);
    Ok(())
}

#[tokio::test]
async fn test_logout_forgets_session_when_server_rejects() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "invalid JWT" })))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new()?;
    let app = Pulseboard::with_config(temp_dir.path(), config_for(&server))?;
    SessionStore::new(temp_dir.path()).save(&fixtures::session_for(1))?;

    assert!(app.logout().await?);
    assert_eq!(app.stored_session()?, None);
    Ok(())
}

#[tokio::test]
async fn test_feed_reads_posts_through_rest_api() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("user_id", "eq.00000000-0000-0000-0000-000000000001"))
        .and(header("authorization", "Bearer access-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "00000000-0000-0000-0000-00000000a001",
                "user_id": "00000000-0000-0000-0000-000000000001",
                "published_at": "2025-03-01T12:00:00Z",
                "views": 10
            },
            {
                "id": "00000000-0000-0000-0000-00000000a002",
                "user_id": "00000000-0000-0000-0000-000000000001",
                "published_at": "2025-03-02T12:00:00Z",
                "views": 20
            }
        ])))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new()?;
    let app = Pulseboard::with_config(temp_dir.path(), config_for(&server))?;
    SessionStore::new(temp_dir.path()).save(&fixtures::session_for(1))?;

    let feed = app.posts_feed()?;
    assert_eq!(feed.refresh().await, Ok(2));

    let state = feed.state();
    assert_eq!(state.data[0].id, fixtures::post_id(2));
    assert_eq!(state.data[1].views, Some(10));
    Ok(())
}

#[test]
fn test_open_without_backend_is_not_configured() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let result = Pulseboard::with_config(temp_dir.path(), Config::default());
    assert!(matches!(
        result,
        Err(pulseboard_runtime::Error::NotConfigured(_))
    ));
    Ok(())
}
