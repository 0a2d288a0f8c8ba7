//! Infrastructure Layer
//!
//! Database implementations and test/development backends.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCredentialRepository;
pub use postgres::PgCredentialRepository;
