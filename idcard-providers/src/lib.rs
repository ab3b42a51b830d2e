//! Transport, remote API boundary and shared models for the ID-card request desk.

pub mod common_models;
pub mod http_client;
pub mod remote_api;
