//! Domain Entities

pub mod credential;
