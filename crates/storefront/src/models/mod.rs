//! Storefront models.

pub mod session;

pub use session::session_keys;
