//! HTTP route handlers.

pub mod export;
pub mod history;
pub mod scan;
