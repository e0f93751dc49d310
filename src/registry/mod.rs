pub mod error;
pub mod qr_registry;
pub mod seed;
pub mod store;
