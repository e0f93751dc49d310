pub mod auth_request;
pub mod qr_request;
pub mod user;
