//! External service integrations.

pub mod cep;
pub mod whatsapp;
