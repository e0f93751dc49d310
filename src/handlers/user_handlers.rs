use actix_web::{HttpResponse, Result, web};
use validator::Validate;

use crate::models::user::UserResponse;
use crate::state::app_state::AppState;
use crate::structs::user::UpdateProfileRequest;

pub async fn get_user(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user = app_state.registry.find_user(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

pub async fn update_user(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    web::Json(req): web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    if let Err(errors) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let user = app_state
        .registry
        .update_profile(&path.into_inner(), req.into())
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Codes currently claimed by the user
pub async fn get_user_qr_codes(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let codes = app_state.registry.linked_codes(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(codes))
}
