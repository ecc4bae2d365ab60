//! Shared helpers for end-to-end tests.
//!
//! Each test starts a wiremock server playing the upstream API and builds the
//! real actix app (trace middleware, handlers, API docs, services and reqwest
//! adapter) pointed at it.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use post_aggregator::Trace;
use post_aggregator::doc::swagger_ui;
use post_aggregator::domain::ports::PlaceholderSource;
use post_aggregator::domain::{PostAggregationService, UserDirectoryService};
use post_aggregator::inbound::http::configure;
use post_aggregator::inbound::http::health::HealthState;
use post_aggregator::inbound::http::state::HttpState;
use post_aggregator::outbound::placeholder::PlaceholderHttpSource;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Full application wired against `upstream`.
pub fn app(
    upstream: &MockServer,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let base = Url::parse(&upstream.uri()).expect("mock server URI");
    let source: Arc<dyn PlaceholderSource> = Arc::new(
        PlaceholderHttpSource::new(base.clone(), Duration::from_secs(2)).expect("client builds"),
    );
    let posts = Arc::new(PostAggregationService::new(source.clone()));
    let users = Arc::new(UserDirectoryService::new(source));
    let state = HttpState::new(posts.clone(), posts, users.clone(), users);

    let health = web::Data::new(HealthState::new());
    health.mark_ready(base);
    App::new()
        .app_data(health)
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
        .service(swagger_ui())
}

pub fn user_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": format!("user{id}"),
        "email": format!("user{id}@example.com"),
        "phone": "1-770-736-8031 x56442",
        "website": "example.org",
        "address": { "city": "Gwenborough" },
        "company": { "name": "Romaguera-Crona" }
    })
}

pub fn post_json(id: u64, user_id: u64) -> Value {
    json!({ "userId": user_id, "id": id, "title": format!("title {id}"), "body": format!("body {id}") })
}

pub fn comment_json(id: u64, post_id: u64) -> Value {
    json!({
        "postId": post_id,
        "id": id,
        "name": format!("comment {id}"),
        "email": "commenter@example.com",
        "body": "nice post"
    })
}

pub async fn mount_user(server: &MockServer, id: u64, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(id, name)))
        .mount(server)
        .await;
}

pub async fn mount_comments(server: &MockServer, post_id: u64, comments: Value) {
    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("postId", post_id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(comments))
        .mount(server)
        .await;
}

/// Assert an embedded author carries exactly `{id, name, email}`.
pub fn assert_author_summary(user: &Value) {
    let fields = user.as_object().expect("user object");
    let mut keys: Vec<&str> = fields.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["email", "id", "name"]);
}
