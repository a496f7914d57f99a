use pulseboard_backend::{Error, PostQuery, PostsTable, RestClient, SupabaseEndpoint};
use pulseboard_types::{Session, User, UserId};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OWNER: &str = "00000000-0000-0000-0000-000000000001";

fn session() -> Session {
    Session {
        access_token: "access-123".to_string(),
        token_type: "bearer".to_string(),
        refresh_token: None,
        expires_at: None,
        user: User {
            id: OWNER.parse().unwrap(),
            email: None,
        },
    }
}

fn client(server: &MockServer) -> RestClient {
    let endpoint = SupabaseEndpoint::new(&server.uri(), "anon-key").unwrap();
    RestClient::new(endpoint).unwrap()
}

#[tokio::test]
async fn test_fetch_posts_sends_filter_order_and_auth() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("select", "*"))
        .and(query_param("user_id", format!("eq.{}", OWNER)))
        .and(query_param("order", "published_at.desc.nullslast"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer access-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "00000000-0000-0000-0000-0000000000a1",
                "user_id": OWNER,
                "url": "https://instagram.com/p/a1",
                "post_type": "reel",
                "views": 1500,
                "likes": 120,
                "comments": null,
                "engagement_rate": 8.4,
                "published_at": "2025-03-02T10:00:00Z",
                "scraped_at": null
            },
            {
                "id": "00000000-0000-0000-0000-0000000000a2",
                "user_id": OWNER
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let query = PostQuery::owned_by(UserId::new(Uuid::parse_str(OWNER)?));
    let rows = client(&server).fetch_posts(&session(), &query).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].views, Some(1500));
    assert_eq!(rows[0].comments, None);
    assert_eq!(rows[1].url, None);
    Ok(())
}

#[tokio::test]
async fn test_fetch_posts_empty_result() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let query = PostQuery::owned_by(session().user_id());
    let rows = client(&server).fetch_posts(&session(), &query).await?;
    assert!(rows.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_fetch_posts_surfaces_postgrest_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "PGRST301",
            "details": null,
            "hint": null,
            "message": "JWT expired"
        })))
        .mount(&server)
        .await;

    let query = PostQuery::owned_by(session().user_id());
    let err = client(&server)
        .fetch_posts(&session(), &query)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Query(_)));
    assert_eq!(err.message(), "JWT expired");
}

#[tokio::test]
async fn test_fetch_posts_non_json_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let query = PostQuery::owned_by(session().user_id());
    let err = client(&server)
        .fetch_posts(&session(), &query)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Bad Gateway");
}

#[tokio::test]
async fn test_fetch_posts_malformed_rows_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 7 }])))
        .mount(&server)
        .await;

    let query = PostQuery::owned_by(session().user_id());
    let err = client(&server)
        .fetch_posts(&session(), &query)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_custom_table_name() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/instagram_posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = SupabaseEndpoint::new(&server.uri(), "anon-key")?;
    let client = RestClient::with_table(endpoint, "instagram_posts")?;
    let query = PostQuery::owned_by(session().user_id());
    client.fetch_posts(&session(), &query).await?;
    Ok(())
}
