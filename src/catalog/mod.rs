mod builder;
mod catalog;
mod queries;

pub use builder::CatalogBuilder;
pub use catalog::Catalog;
