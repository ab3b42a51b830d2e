pub mod auth_service;
pub mod error;
pub mod request_service;
