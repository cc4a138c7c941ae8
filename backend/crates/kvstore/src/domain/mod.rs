//! Domain Layer

pub mod entity;
pub mod repository;
pub mod setting_key;

pub use entity::KvEntry;
pub use repository::KvRepository;
pub use setting_key::SettingKey;
