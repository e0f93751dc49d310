use actix_web::{HttpResponse, Result, error, web};

use crate::models::print_size::PrintSize;
use crate::models::qr_code::QrCode;
use crate::state::app_state::AppState;
use crate::structs::qr_request::{
    GenerateBatchRequest, ImageParams, PrintItem, PrintParams, PrintSheet, QrSearchParams,
};
use crate::utils::qr_render::render_qr;

fn print_item(app_state: &AppState, qr: &QrCode, size: PrintSize) -> PrintItem {
    PrintItem {
        unique_id: qr.unique_id.clone(),
        target_url: app_state.target_url(&qr.unique_id),
        pixel_size: size.pixels(),
        image_path: format!("/api/admin/qr/{}/image?size={}", qr.unique_id, size),
    }
}

/// List all QR codes, optionally filtered by a search term
pub async fn get_all_qr_codes(
    app_state: web::Data<AppState>,
    query: web::Query<QrSearchParams>,
) -> Result<HttpResponse> {
    let codes = match query.search.as_deref() {
        Some(term) => app_state.registry.search(term).await,
        None => app_state.registry.list_codes().await,
    };
    Ok(HttpResponse::Ok().json(codes))
}

pub async fn generate_batch(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<GenerateBatchRequest>,
) -> Result<HttpResponse> {
    let batch = app_state.registry.generate_batch(req.count).await?;
    Ok(HttpResponse::Created().json(batch))
}

pub async fn get_all_batches(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(app_state.registry.list_batches().await))
}

/// Printable (non-deleted) members of a batch
pub async fn get_batch_codes(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let codes = app_state
        .registry
        .printable_batch_members(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(codes))
}

pub async fn print_batch(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PrintParams>,
) -> Result<HttpResponse> {
    let batch = app_state.registry.find_batch(&path.into_inner()).await?;
    let members = app_state.registry.printable_batch_members(&batch.id).await?;

    let items = members
        .iter()
        .map(|qr| print_item(&app_state, qr, query.size))
        .collect();

    Ok(HttpResponse::Ok().json(PrintSheet {
        title: batch.name,
        size: query.size,
        items,
    }))
}

pub async fn print_qr(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PrintParams>,
) -> Result<HttpResponse> {
    let qr = app_state.registry.find(&path.into_inner()).await?;
    qr.ensure_printable()?;

    Ok(HttpResponse::Ok().json(PrintSheet {
        title: qr.unique_id.clone(),
        size: query.size,
        items: vec![print_item(&app_state, &qr, query.size)],
    }))
}

/// Render the QR image for a code at the requested print size
pub async fn get_qr_image(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ImageParams>,
) -> Result<HttpResponse> {
    let qr = app_state.registry.find(&path.into_inner()).await?;
    qr.ensure_printable()?;

    let target_url = app_state.target_url(&qr.unique_id);
    let body = render_qr(&target_url, query.size.pixels(), query.format)
        .map_err(|e| error::ErrorInternalServerError(format!("{:#}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type(query.format.content_type())
        .body(body))
}
