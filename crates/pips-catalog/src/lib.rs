#![forbid(unsafe_code)]

//! Catalog: product records, the category schema registry, and the loader
//! that turns page card data into an ordered, fully resolved catalog.

mod builtin;
pub mod category;
pub mod error;
pub mod loader;
pub mod model;
pub mod registry;

pub use category::Category;
pub use error::CatalogError;
pub use loader::{CardImage, CardPricing, Catalog, ProductCard, load, load_json};
pub use model::{Description, Price, ProductRecord, RubberFinish, SpecField, Specs};
pub use registry::{SchemaRegistry, SchemaTables};
