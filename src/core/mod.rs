pub mod catalog;
pub mod container;
pub mod report;

pub use crate::domain::model::{sort_natural, Journal, NaturalOrder, ScientificArticle};
pub use crate::domain::ports::Container;
pub use crate::utils::error::Result;
