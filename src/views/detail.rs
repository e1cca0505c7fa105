//! Detail view controller: variant selectors, main image, gallery and the
//! SKU specification table for one frame.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::domain::aggregates::{Gallery, MainImage, MainImageSlot, ProbeTicket, VariantSelector};
use crate::domain::events::{DetailEvent, DomainEvent};
use crate::domain::value_objects::ImageDir;
use crate::navigation::frame_from_link;
use crate::probe::ImageProbe;
use crate::{Catalog, CatalogError, Result, SkuRecord};

/// One row of the specification table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkuRow {
    pub sku: String,
    pub color: String,
    pub eye_size: i32,
    pub b: i32,
    pub frame_pd: i32,
    pub temple: i32,
    pub back_ordered: &'static str,
}

impl From<&SkuRecord> for SkuRow {
    fn from(r: &SkuRecord) -> Self {
        Self {
            sku: r.sku.to_string(),
            color: r.color.clone(),
            eye_size: r.eye_size,
            b: r.b,
            frame_pd: r.frame_pd,
            temple: r.temple,
            back_ordered: if r.back_ordered { "Yes" } else { "No" },
        }
    }
}

pub struct DetailView {
    frame_name: String,
    skus: Vec<SkuRecord>,
    images: ImageDir,
    selector: VariantSelector,
    main_image: MainImageSlot,
    gallery: Gallery,
    pending: Option<ProbeTicket>,
    events: Vec<DomainEvent>,
}

impl DetailView {
    /// Opens the view for an exact frame name. Fails when no active SKU
    /// carries that name.
    pub fn open(catalog: &Catalog, frame_name: &str, images: ImageDir) -> Result<Self> {
        let skus = catalog.frame(frame_name);
        if skus.is_empty() {
            return Err(CatalogError::FrameNotFound { frame: frame_name.to_string() });
        }
        info!(frame = frame_name, skus = skus.len(), "opening detail view");
        let selector = VariantSelector::new(&skus);
        let mut view = Self {
            frame_name: frame_name.to_string(),
            skus,
            images,
            selector,
            main_image: MainImageSlot::new(),
            gallery: Gallery::default(),
            pending: None,
            events: vec![],
        };
        view.refresh();
        Ok(view)
    }

    /// Opens the view from a `details.html?frame=...` link.
    pub fn open_link(catalog: &Catalog, link: &str, images: ImageDir) -> Result<Self> {
        Self::open(catalog, &frame_from_link(link)?, images)
    }

    pub fn frame_name(&self) -> &str { &self.frame_name }
    pub fn skus(&self) -> &[SkuRecord] { &self.skus }
    pub fn selector(&self) -> &VariantSelector { &self.selector }
    pub fn gallery(&self) -> &Gallery { &self.gallery }
    pub fn main_image(&self) -> &MainImage { self.main_image.current() }
    pub fn main_image_path(&self) -> PathBuf { self.images.path_of(&self.main_image().source) }
    pub fn active_variant(&self) -> Option<&SkuRecord> { self.selector.active(&self.skus) }

    /// All SKUs of the frame, in member order, regardless of selection.
    pub fn sku_table(&self) -> Vec<SkuRow> { self.skus.iter().map(SkuRow::from).collect() }

    pub fn select_color(&mut self, color: &str) -> Result<()> {
        self.selector.select_color(&self.skus, color)?;
        self.refresh();
        Ok(())
    }

    pub fn select_eye_size(&mut self, eye_size: i32) -> Result<()> {
        self.selector.select_eye_size(&self.skus, eye_size)?;
        self.refresh();
        Ok(())
    }

    /// Swaps the main image to gallery thumbnail `index`. The file goes
    /// through the same existence probe as the hero image.
    pub fn select_thumb(&mut self, index: usize) -> Result<()> {
        let back_ordered = self.active_variant().is_some_and(|v| v.back_ordered);
        let filename = match self.gallery.select(index) {
            Some(thumb) => thumb.filename().to_string(),
            None => return Err(CatalogError::InvalidSelection { dimension: "gallery view", value: index.to_string() }),
        };
        self.raise_event(DomainEvent::Detail(DetailEvent::GalleryThumbSelected { index }));
        self.pending = self.main_image.request(Some(filename.as_str()), back_ordered);
        Ok(())
    }

    /// Re-resolves the variant after a selection change.
    fn refresh(&mut self) {
        let key = self.selector.key();
        match self.selector.active(&self.skus) {
            Some(variant) => {
                debug!(frame = %self.frame_name, sku = %variant.sku, "variant selected");
                let hero = variant.hero_image().map(str::to_string);
                let (back_ordered, thumbs) = (variant.back_ordered, variant.images.clone());
                self.gallery = Gallery::new(thumbs);
                self.pending = self.main_image.request(hero.as_deref(), back_ordered);
            }
            None => {
                debug!(frame = %self.frame_name, ?key, "no variant for selection");
                self.gallery.clear();
                self.pending = None;
                self.main_image.show_placeholder();
            }
        }
    }

    /// Hands out the outstanding probe, if any. The caller reports the
    /// result through [`DetailView::complete_probe`].
    pub fn take_pending_probe(&mut self) -> Option<ProbeTicket> { self.pending.take() }

    /// Returns false when the result belonged to an outdated selection.
    pub fn complete_probe(&mut self, ticket: ProbeTicket, exists: bool) -> bool {
        self.main_image.complete(ticket, exists)
    }

    /// Runs the outstanding probe to completion.
    pub async fn settle(&mut self, probe: &dyn ImageProbe) {
        if let Some(ticket) = self.take_pending_probe() {
            let exists = probe.exists(ticket.filename()).await;
            self.complete_probe(ticket, exists);
        }
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        let mut events = self.selector.take_events();
        events.append(&mut self.events);
        events.extend(self.main_image.take_events());
        events
    }

    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}
