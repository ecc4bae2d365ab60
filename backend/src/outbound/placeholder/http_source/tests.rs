//! Adapter coverage against a fake upstream served by wiremock.

use super::*;
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn source_for(server: &MockServer) -> PlaceholderHttpSource {
    let base = Url::parse(&server.uri()).expect("mock server URI");
    PlaceholderHttpSource::new(base, Duration::from_secs(5)).expect("client builds")
}

fn post_id(raw: u64) -> PostId {
    PostId::new(raw).expect("valid post id")
}

#[tokio::test]
async fn list_posts_decodes_records_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "userId": 1, "id": 2, "title": "b", "body": "two" },
            { "userId": 3, "id": 1, "title": "a", "body": "one" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = source_for(&server).await.list_posts().await.expect("posts");

    assert_eq!(
        posts,
        vec![
            PostRecord { id: post_id(2), title: "b".into(), body: "two".into(), user_id: 1 },
            PostRecord { id: post_id(1), title: "a".into(), body: "one".into(), user_id: 3 },
        ]
    );
}

#[tokio::test]
async fn fetch_post_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let error = source_for(&server)
        .await
        .fetch_post(post_id(404))
        .await
        .expect_err("missing");
    assert_eq!(error, PlaceholderSourceError::not_found("/posts/404"));
}

#[tokio::test]
async fn fetch_user_keeps_only_record_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "address": { "city": "Gwenborough" },
            "website": "hildegard.org"
        })))
        .mount(&server)
        .await;

    let user = source_for(&server).await.fetch_user(1).await.expect("user");
    assert_eq!(user.name, "Leanne Graham");
    assert_eq!(user.username, "Bret");
}

#[tokio::test]
async fn list_comments_filters_by_post_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("postId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "postId": 7, "id": 31, "name": "n", "email": "e@x.io", "body": "b" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let comments = source_for(&server)
        .await
        .list_comments(post_id(7))
        .await
        .expect("comments");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments.first().and_then(|c| c.field("id")), Some(&json!(31)));
}

#[tokio::test]
async fn create_post_sends_user_id_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(body_json(json!({ "title": "Test title", "body": "Test body", "userId": 1 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "title": "Test title", "body": "Test body", "userId": 1, "id": 101
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = source_for(&server)
        .await
        .create_post(&NewPost {
            title: "Test title".into(),
            body: "Test body".into(),
            author_id: 1,
        })
        .await
        .expect("created");
    assert_eq!(created.id, post_id(101));
}

#[tokio::test]
async fn patch_post_sends_only_title_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/posts/1"))
        .and(body_json(json!({ "title": "Edited Title", "body": "Edited body" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": 1, "id": 1, "title": "Edited Title", "body": "Edited body"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patched = source_for(&server)
        .await
        .patch_post(
            post_id(1),
            &PostEdit {
                title: "Edited Title".into(),
                body: "Edited body".into(),
            },
        )
        .await
        .expect("patched");
    assert_eq!(patched.title, "Edited Title");
}

#[tokio::test]
async fn create_user_posts_canonical_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "name": "John Test",
            "username": "John_Test",
            "email": "test@example.com",
            "phone": "1234567890"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "John Test",
            "username": "John_Test",
            "email": "test@example.com",
            "phone": "1234567890",
            "id": 11
        })))
        .expect(1)
        .mount(&server)
        .await;
    let input = NewUser::try_new("john test", "John_Test", "test@example.com", "1234567890")
        .expect("valid input");

    let created = source_for(&server)
        .await
        .create_user(&input)
        .await
        .expect("created");
    assert_eq!(created.id, 11);
}

#[tokio::test]
async fn server_errors_map_to_status_with_body_preview() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down   for\nmaintenance"))
        .mount(&server)
        .await;

    let error = source_for(&server)
        .await
        .list_users()
        .await
        .expect_err("unavailable");
    assert_eq!(error, PlaceholderSourceError::status(503, "down for maintenance"));
}

#[tokio::test]
async fn malformed_bodies_map_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let error = source_for(&server)
        .await
        .list_posts()
        .await
        .expect_err("not JSON");
    assert!(matches!(error, PlaceholderSourceError::Decode { .. }));
}

#[tokio::test]
async fn slow_responses_map_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    let base = Url::parse(&server.uri()).expect("mock server URI");
    let source =
        PlaceholderHttpSource::new(base, Duration::from_millis(50)).expect("client builds");

    let error = source.fetch_user(1).await.expect_err("too slow");
    assert!(matches!(error, PlaceholderSourceError::Timeout { .. }));
}

#[tokio::test]
async fn forwards_trace_id_in_scope() {
    let server = MockServer::start().await;
    let trace_id = TraceId::generate();
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header(TRACE_ID_HEADER, trace_id.to_string().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let source = source_for(&server).await;

    let users = TraceId::scope(trace_id, source.list_users())
        .await
        .expect("users");
    assert!(users.is_empty());
}

#[rstest]
#[case("http://upstream.test", "http://upstream.test/posts")]
#[case("http://upstream.test/api", "http://upstream.test/api/posts")]
#[case("http://upstream.test/api/", "http://upstream.test/api/posts")]
fn base_urls_are_treated_as_directories(#[case] base: &str, #[case] expected: &str) {
    let source = PlaceholderHttpSource::new(
        Url::parse(base).expect("base URL"),
        Duration::from_secs(1),
    )
    .expect("client builds");
    let request = source
        .request(Method::GET, "posts")
        .expect("request")
        .build()
        .expect("built request");
    assert_eq!(request.url().as_str(), expected);
}

#[rstest]
#[case(StatusCode::GATEWAY_TIMEOUT, true)]
#[case(StatusCode::REQUEST_TIMEOUT, true)]
#[case(StatusCode::INTERNAL_SERVER_ERROR, false)]
#[case(StatusCode::TOO_MANY_REQUESTS, false)]
fn timeout_statuses_map_to_timeout(#[case] status: StatusCode, #[case] is_timeout: bool) {
    let error = map_status_error(status, b"");
    assert_eq!(
        matches!(error, PlaceholderSourceError::Timeout { .. }),
        is_timeout
    );
}
