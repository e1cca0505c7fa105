//! Domain events
use crate::domain::value_objects::{ImageSource, Sku};

#[derive(Clone, Debug, PartialEq)]
pub enum DomainEvent {
    Catalog(CatalogEvent),
    Detail(DetailEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogEvent {
    FiltersApplied { matched_skus: usize, frames: usize },
    FiltersCleared { frames: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailEvent {
    VariantSelected { sku: Sku, color: String, eye_size: i32 },
    VariantCleared { color: String, eye_size: i32 },
    MainImageResolved { source: ImageSource, overlay_visible: bool },
    GalleryThumbSelected { index: usize },
    StaleProbeDiscarded { generation: u64 },
}
