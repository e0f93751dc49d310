pub mod actor;
pub mod print_size;
pub mod qr_batch;
pub mod qr_code;
pub mod role;
pub mod user;
