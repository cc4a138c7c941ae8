//! Domain Layer
//!
//! Contains the user entity, value objects, and the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::{NewUser, User};
pub use repository::UserRepository;
