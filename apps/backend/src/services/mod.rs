//! Backend services.

pub mod store;
