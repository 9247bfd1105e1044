use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/setup-user",
    tag = "user",
    params(
        ("fid" = Option<i64>, Query, description = "Farcaster id"),
        ("email" = Option<String>, Query, description = "Account email")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Neither fid nor email given"),
        (status = 404, description = "User not found")
    )
)]
/// Look up an existing account by fid or email.
pub async fn setup_user_lookup(
    user_service: web::Data<UserService>,
    query: web::Query<SetupUserQuery>,
) -> Result<HttpResponse> {
    match user_service.lookup(&query.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": user }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/setup-user",
    tag = "user",
    request_body = SetupUserRequest,
    responses(
        (status = 200, description = "User created or already existing", body = UserResponse),
        (status = 400, description = "Invalid fields")
    )
)]
/// Create the account, or return the existing one when the email is
/// already registered.
pub async fn setup_user(
    user_service: web::Data<UserService>,
    request: web::Json<SetupUserRequest>,
) -> Result<HttpResponse> {
    match user_service.setup_user(request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": user }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/change-avatar",
    tag = "user",
    request_body = ChangeAvatarRequest,
    responses(
        (status = 200, description = "Avatar updated", body = UserResponse),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "User not found")
    )
)]
pub async fn change_avatar(
    user_service: web::Data<UserService>,
    request: web::Json<ChangeAvatarRequest>,
) -> Result<HttpResponse> {
    match user_service.change_avatar(request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": user }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/setup-user", web::get().to(setup_user_lookup))
        .route("/setup-user", web::post().to(setup_user))
        .route("/change-avatar", web::post().to(change_avatar));
}
