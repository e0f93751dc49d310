use actix_web::{HttpResponse, Result, web};

use crate::models::actor::Actor;
use crate::models::qr_code::QrStatus;
use crate::state::app_state::AppState;
use crate::structs::qr_request::PublicQrView;

/// Finder view of a scanned code
pub async fn scan_qr(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let unique_id = path.into_inner();
    let qr = app_state.registry.find(&unique_id).await?;

    if qr.status == QrStatus::Deleted {
        return Ok(HttpResponse::Gone().json(serde_json::json!({
            "error": format!("QR code {} is no longer in service", qr.unique_id)
        })));
    }

    let target_url = app_state.target_url(&qr.unique_id);
    Ok(HttpResponse::Ok().json(PublicQrView::new(qr, target_url)))
}

pub async fn claim_qr(
    app_state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let qr = app_state.registry.claim(&path.into_inner(), &actor).await?;
    Ok(HttpResponse::Ok().json(qr))
}

pub async fn unlink_qr(
    app_state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let qr = app_state.registry.unlink(&path.into_inner(), &actor).await?;
    Ok(HttpResponse::Ok().json(qr))
}

pub async fn delete_qr(
    app_state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let qr = app_state.registry.delete(&path.into_inner(), &actor).await?;
    Ok(HttpResponse::Ok().json(qr))
}
