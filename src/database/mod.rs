pub mod activity_registry;
pub mod seed_catalog;

pub use activity_registry::{ActivityRegistry, RegistryError};
pub use seed_catalog::CatalogError;
