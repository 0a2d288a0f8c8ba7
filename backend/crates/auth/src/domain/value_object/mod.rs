//! Domain Value Objects

pub mod credential_password;

pub use credential_password::{CredentialPassword, RawPassword};
