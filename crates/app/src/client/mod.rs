//! Remote cart service

mod errors;
pub mod http;
mod service;

pub use errors::CartServiceError;
pub use http::{HttpCartService, HttpCartServiceConfig};
pub use service::*;
