//! Domain models shared by the providers and the core services.

pub mod id_card_request;
