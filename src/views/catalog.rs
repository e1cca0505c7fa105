//! Catalog (list) view controller

use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::domain::aggregates::{group_frames, Badge, FilterOptions, FilterState, FrameGroup};
use crate::domain::events::{CatalogEvent, DomainEvent};
use crate::domain::value_objects::ImageDir;
use crate::navigation::detail_link;
use crate::{Catalog, SkuRecord};

/// One card of the thumbnail grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThumbnailCard {
    pub frame_name: String,
    pub image: PathBuf,
    pub alt: String,
    pub link: String,
    pub badge: Option<Badge>,
    pub sku_count: usize,
}

impl ThumbnailCard {
    fn from_group(group: &FrameGroup<'_>, images: &ImageDir) -> Self {
        Self {
            frame_name: group.frame_name().to_string(),
            image: images.path_of(group.representative_image()),
            alt: group.frame_name().to_string(),
            link: detail_link(group.frame_name()),
            badge: group.badge(),
            sku_count: group.skus().len(),
        }
    }
}

pub struct CatalogView {
    catalog: Catalog,
    images: ImageDir,
    options: FilterOptions,
    state: FilterState,
    events: Vec<DomainEvent>,
}

impl CatalogView {
    /// Options come from the active records only.
    pub fn new(catalog: Catalog, images: ImageDir) -> Self {
        let options = FilterOptions::extract(catalog.active());
        Self { catalog, images, options, state: FilterState::new(), events: vec![] }
    }

    pub fn options(&self) -> &FilterOptions { &self.options }
    pub fn state(&self) -> &FilterState { &self.state }

    /// Active records passing the current filter state.
    pub fn matching(&self) -> Vec<&SkuRecord> { self.state.apply(self.catalog.active()) }

    pub fn groups(&self) -> Vec<FrameGroup<'_>> { group_frames(self.matching()) }

    pub fn thumbnails(&self) -> Vec<ThumbnailCard> {
        self.groups().iter().map(|g| ThumbnailCard::from_group(g, &self.images)).collect()
    }

    /// Replaces the filter state and returns the re-rendered grid. An empty
    /// grid is a valid outcome.
    pub fn apply_filters(&mut self, state: FilterState) -> Vec<ThumbnailCard> {
        self.state = state;
        let matched_skus = self.matching().len();
        let cards = self.thumbnails();
        debug!(dimensions = self.state.active_dimensions(), matched_skus, frames = cards.len(), "filters applied");
        self.raise_event(DomainEvent::Catalog(CatalogEvent::FiltersApplied { matched_skus, frames: cards.len() }));
        cards
    }

    pub fn clear_filters(&mut self) -> Vec<ThumbnailCard> {
        self.state = FilterState::new();
        let cards = self.thumbnails();
        self.raise_event(DomainEvent::Catalog(CatalogEvent::FiltersCleared { frames: cards.len() }));
        cards
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}
