//! Users API handlers.
//!
//! ```text
//! GET  /users/     every upstream user, validated and title-cased
//! POST /users/new  {"name":"..","username":"..","email":"..","phone":".."} -> 201
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::domain::{NewUser, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::invalid_user;

/// Request body for `POST /users/new`.
///
/// Example JSON:
/// `{"name":"john test","username":"John_Test","email":"test@example.com","phone":"1234567890"}`
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Full name; must contain a space. Stored in title case.
    #[schema(example = "john test")]
    pub name: String,
    #[schema(example = "John_Test")]
    pub username: String,
    #[schema(example = "test@example.com")]
    pub email: String,
    /// At least seven characters.
    #[schema(example = "1234567890")]
    pub phone: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = crate::domain::UserValidationError;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Self::try_new(value.name, value.username, value.email, value.phone)
    }
}

/// List every upstream user.
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "Users in upstream order", body = [UserSchema]),
        (status = 502, description = "Upstream failure or invalid upstream user", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Validate and create a user upstream.
///
/// Validation happens here, so a bad name or phone never reaches upstream.
#[utoipa::path(
    post,
    path = "/users/new",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner()).map_err(|err| invalid_user(&err))?;
    let user = state.users_command.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Register the users routes, including the slash-less listing alias.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/users").route(web::get().to(list_users)))
        .service(
            web::scope("/users")
                .route("/", web::get().to(list_users))
                .route("/new", web::post().to(create_user)),
        );
}
