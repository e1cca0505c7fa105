//! View controllers. Each owns the derived state of one page.
pub mod catalog;
pub mod detail;

pub use catalog::{CatalogView, ThumbnailCard};
pub use detail::{DetailView, SkuRow};
