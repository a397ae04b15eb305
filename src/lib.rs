pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::CatalogConfig;
pub use core::{catalog::Catalog, container::EntityContainer, report::OutputFormat};
pub use domain::model::{sort_natural, Journal, NaturalOrder, ScientificArticle};
pub use domain::ports::Container;
pub use utils::error::{CatalogError, Operation, Result};
