//! Health endpoints: liveness and readiness probes for orchestration.
//!
//! Readiness is tied to the upstream wiring: the service reports ready once
//! the reqwest adapter has been built for a base URL and the listener is
//! bound, and the probe body names that upstream. Liveness drops to false
//! when the server starts draining.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use url::Url;

/// Shared probe state.
pub struct HealthState {
    upstream: OnceLock<Url>,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            upstream: OnceLock::new(),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Start live but not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service ready to take traffic against `upstream`.
    ///
    /// The first upstream recorded wins; later calls leave it unchanged.
    pub fn mark_ready(&self, upstream: Url) {
        let _ = self.upstream.set(upstream);
    }

    /// Fail liveness probes so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.upstream.get().is_some()
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Upstream base URL the service was wired against, once ready.
    pub fn upstream(&self) -> Option<&Url> {
        self.upstream.get()
    }
}

#[derive(Serialize)]
struct ProbeBody<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream: Option<&'a str>,
}

fn probe_response(probe_ok: bool, body: &ProbeBody<'_>) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(body)
}

/// Readiness probe: 200 with the upstream base URL once wired, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Upstream adapter wired; body names the upstream base URL"),
        (status = 503, description = "Server is still starting")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    match state.upstream() {
        Some(upstream) => probe_response(
            true,
            &ProbeBody {
                status: "ready",
                upstream: Some(upstream.as_str()),
            },
        ),
        None => probe_response(
            false,
            &ProbeBody {
                status: "starting",
                upstream: None,
            },
        ),
    }
}

/// Liveness probe: 200 while alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let alive = state.is_alive();
    let status = if alive { "live" } else { "draining" };
    probe_response(
        alive,
        &ProbeBody {
            status,
            upstream: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    const UPSTREAM: &str = "http://upstream.test/api/";

    #[rstest]
    #[case::starting(false, true, "/health/ready", StatusCode::SERVICE_UNAVAILABLE, json!({ "status": "starting" }))]
    #[case::ready(true, true, "/health/ready", StatusCode::OK, json!({ "status": "ready", "upstream": UPSTREAM }))]
    #[case::alive(true, true, "/health/live", StatusCode::OK, json!({ "status": "live" }))]
    #[case::draining(true, false, "/health/live", StatusCode::SERVICE_UNAVAILABLE, json!({ "status": "draining" }))]
    #[actix_web::test]
    async fn probes_reflect_state(
        #[case] wired: bool,
        #[case] alive_flag: bool,
        #[case] uri: &str,
        #[case] expected: StatusCode,
        #[case] expected_body: Value,
    ) {
        let state = web::Data::new(HealthState::new());
        if wired {
            state.mark_ready(Url::parse(UPSTREAM).expect("upstream URL"));
        }
        if !alive_flag {
            state.mark_unhealthy();
        }
        let app = actix_test::init_service(
            App::new()
                .app_data(state.clone())
                .service(ready)
                .service(live),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(res.status(), expected);
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, expected_body);
    }

    #[rstest]
    fn first_upstream_wins() {
        let state = HealthState::new();
        state.mark_ready(Url::parse(UPSTREAM).expect("upstream URL"));
        state.mark_ready(Url::parse("http://other.test/").expect("other URL"));
        assert_eq!(state.upstream().map(Url::as_str), Some(UPSTREAM));
    }
}
