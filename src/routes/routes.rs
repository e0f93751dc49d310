use actix_web::web;

use crate::handlers::admin_handlers::{
    generate_batch, get_all_batches, get_all_qr_codes, get_batch_codes, get_qr_image,
    print_batch, print_qr,
};
use crate::handlers::auth_handlers::{admin_login, login, signup};
use crate::handlers::health_handlers::health_check;
use crate::handlers::qr_handlers::{claim_qr, delete_qr, scan_qr, unlink_qr};
use crate::handlers::user_handlers::{get_user, get_user_qr_codes, update_user};
use crate::middlewares::authmw::{JwtAuth, RequireRoles};
use crate::middlewares::res_owner::ResourceOwnership;
use crate::models::role::Role;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Scan target printed into every QR code
    cfg.route("/q/{unique_id}", web::get().to(scan_qr));
    // Authentication routes - no auth required
    cfg.service(
        web::scope("/api/auth")
            .route("/signup", web::post().to(signup))
            .route("/login", web::post().to(login))
            .route("/admin/login", web::post().to(admin_login)),
    );
    // API routes - require authentication
    cfg.service(
        web::scope("/api")
            .wrap(JwtAuth)
            .route("/health/check", web::get().to(health_check))
            .route("/qr/{unique_id}/claim", web::post().to(claim_qr))
            .route("/qr/{unique_id}/unlink", web::post().to(unlink_qr))
            .route("/qr/{unique_id}", web::delete().to(delete_qr))
            .service(
                web::resource("/users/{user_id}")
                    .wrap(ResourceOwnership {
                        param_name: "user_id".to_string(),
                    })
                    .route(web::get().to(get_user))
                    .route(web::put().to(update_user)),
            )
            .service(
                web::resource("/users/{user_id}/qr")
                    .wrap(ResourceOwnership {
                        param_name: "user_id".to_string(),
                    })
                    .route(web::get().to(get_user_qr_codes)),
            )
            // Administration routes
            .service(
                web::scope("/admin")
                    .wrap(RequireRoles(vec![Role::Admin]))
                    .route("/qr", web::get().to(get_all_qr_codes))
                    .route("/qr/{unique_id}/print", web::get().to(print_qr))
                    .route("/qr/{unique_id}/image", web::get().to(get_qr_image))
                    .route("/batches", web::get().to(get_all_batches))
                    .route("/batches", web::post().to(generate_batch))
                    .route("/batches/{batch_id}/codes", web::get().to(get_batch_codes))
                    .route("/batches/{batch_id}/print", web::get().to(print_batch)),
            ),
    );
}
