//! Domain Value Objects

pub mod stored_name;

pub use stored_name::StoredName;
