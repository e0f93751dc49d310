use actix_web::{HttpResponse, Result, error, web};
use bcrypt::{hash, verify};
use log::info;
use validator::Validate;

use crate::models::role::Role;
use crate::models::user::User;
use crate::state::app_state::AppState;
use crate::structs::auth_request::{
    AdminLoginRequest, LoginRequest, LoginResponse, SignupRequest,
};
use crate::utils::jwt::create_token;

fn issue_token(app_state: &AppState, subject: &str, role: Role) -> Result<String> {
    create_token(
        subject,
        &[role],
        &app_state.config.jwt_secret,
        app_state.config.token_ttl_days,
    )
    .map_err(|e| error::ErrorInternalServerError(format!("Token generation failed: {}", e)))
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({
        "error": "Invalid credentials"
    }))
}

pub async fn signup(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<SignupRequest>,
) -> Result<HttpResponse> {
    if let Err(errors) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let password_hash = hash(&req.password, app_state.config.bcrypt_cost)
        .map_err(|e| error::ErrorInternalServerError(format!("Failed to hash password: {}", e)))?;

    let user = app_state
        .registry
        .register_user(User::new(
            req.name,
            req.email,
            password_hash,
            req.phone,
            req.whatsapp_link,
        ))
        .await?;

    let token = issue_token(&app_state, &user.id, Role::User)?;

    Ok(HttpResponse::Created().json(LoginResponse {
        token,
        role: Role::User,
        user_id: Some(user.id),
    }))
}

pub async fn login(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    if let Err(errors) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let user = match app_state.registry.find_user_by_email(&req.email).await {
        Some(user) => user,
        None => return Ok(invalid_credentials()),
    };

    let password_matches = verify(&req.password, &user.password_hash)
        .map_err(|_| error::ErrorInternalServerError("Password verification failed"))?;
    if !password_matches {
        return Ok(invalid_credentials());
    }

    let token = issue_token(&app_state, &user.id, user.role)?;
    info!("User {} signed in", user.id);

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        role: user.role,
        user_id: Some(user.id),
    }))
}

pub async fn admin_login(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<AdminLoginRequest>,
) -> Result<HttpResponse> {
    if let Err(errors) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let config = &app_state.config;
    if req.username != config.admin_username || req.password != config.admin_password {
        return Ok(invalid_credentials());
    }

    let token = issue_token(&app_state, &req.username, Role::Admin)?;
    info!("Admin {} signed in", req.username);

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        role: Role::Admin,
        user_id: None,
    }))
}
