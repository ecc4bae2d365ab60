//! HTTP inbound adapter exposing the posts, users and health endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod posts;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every REST route plus the extractor configs.
///
/// Callers still provide `web::Data<HttpState>` and `web::Data<HealthState>`
/// and wrap the app with [`crate::Trace`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use post_aggregator::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .service(health::ready)
        .service(health::live);
    posts::configure(cfg);
    users::configure(cfg);
}
