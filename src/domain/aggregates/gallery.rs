//! Main image resolution, back-order overlay and extra-view gallery

use serde::Serialize;

use crate::domain::events::{DetailEvent, DomainEvent};
use crate::domain::value_objects::{ImageRef, ImageSource};

pub const PLACEHOLDER_ALT: &str = "Image coming soon";
pub const MAIN_IMAGE_ALT: &str = "Frame Image";

/// What the main image slot currently shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MainImage {
    pub source: ImageSource,
    pub overlay_visible: bool,
}

impl MainImage {
    pub fn placeholder() -> Self { Self { source: ImageSource::Placeholder, overlay_visible: false } }

    pub fn alt(&self) -> &'static str {
        if self.source.is_placeholder() { PLACEHOLDER_ALT } else { MAIN_IMAGE_ALT }
    }
}

impl Default for MainImage { fn default() -> Self { Self::placeholder() } }

/// An outstanding existence probe. Only the most recently issued ticket
/// may change the main image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeTicket {
    generation: u64,
    filename: String,
    back_ordered: bool,
}

impl ProbeTicket {
    pub fn generation(&self) -> u64 { self.generation }
    pub fn filename(&self) -> &str { &self.filename }
}

#[derive(Clone, Debug, Default)]
pub struct MainImageSlot {
    current: MainImage,
    generation: u64,
    events: Vec<DomainEvent>,
}

impl MainImageSlot {
    pub fn new() -> Self { Self::default() }
    pub fn current(&self) -> &MainImage { &self.current }

    /// Starts resolving `filename`. An empty filename shows the placeholder
    /// right away and no probe is needed.
    pub fn request(&mut self, filename: Option<&str>, back_ordered: bool) -> Option<ProbeTicket> {
        self.generation += 1;
        match ImageSource::from_filename(filename) {
            ImageSource::Placeholder => {
                self.set(MainImage::placeholder());
                None
            }
            ImageSource::Asset(filename) => Some(ProbeTicket { generation: self.generation, filename, back_ordered }),
        }
    }

    /// Shows the placeholder and invalidates any probe still in flight.
    pub fn show_placeholder(&mut self) {
        self.generation += 1;
        self.set(MainImage::placeholder());
    }

    /// Applies a probe result. Returns false when the ticket is stale.
    pub fn complete(&mut self, ticket: ProbeTicket, exists: bool) -> bool {
        if ticket.generation != self.generation {
            self.raise_event(DomainEvent::Detail(DetailEvent::StaleProbeDiscarded { generation: ticket.generation }));
            return false;
        }
        // A missing file never keeps the back-order overlay.
        let image = if exists {
            MainImage { source: ImageSource::Asset(ticket.filename), overlay_visible: ticket.back_ordered }
        } else {
            MainImage::placeholder()
        };
        self.set(image);
        true
    }

    fn set(&mut self, image: MainImage) {
        self.raise_event(DomainEvent::Detail(DetailEvent::MainImageResolved {
            source: image.source.clone(), overlay_visible: image.overlay_visible,
        }));
        self.current = image;
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

/// Extra-view thumbnails of the active variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Gallery {
    thumbs: Vec<ImageRef>,
    selected: Option<usize>,
}

impl Gallery {
    pub fn new(thumbs: Vec<ImageRef>) -> Self { Self { thumbs, selected: None } }
    pub fn thumbs(&self) -> &[ImageRef] { &self.thumbs }
    pub fn selected(&self) -> Option<usize> { self.selected }
    pub fn is_empty(&self) -> bool { self.thumbs.is_empty() }

    pub fn clear(&mut self) { self.thumbs.clear(); self.selected = None; }

    /// Marks thumbnail `index` selected, clearing any prior mark.
    pub fn select(&mut self, index: usize) -> Option<&ImageRef> {
        let thumb = self.thumbs.get(index)?;
        self.selected = Some(index);
        Some(thumb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_immediate_placeholder() {
        let mut slot = MainImageSlot::new();
        assert!(slot.request(Some(""), true).is_none());
        assert_eq!(slot.current(), &MainImage::placeholder());
        assert_eq!(slot.current().alt(), PLACEHOLDER_ALT);
    }

    #[test]
    fn test_found_image_shows_overlay_when_back_ordered() {
        let mut slot = MainImageSlot::new();
        let ticket = slot.request(Some("av-gold.jpg"), true).unwrap();
        assert!(slot.complete(ticket, true));
        assert_eq!(slot.current().source, ImageSource::Asset("av-gold.jpg".into()));
        assert!(slot.current().overlay_visible);
        assert_eq!(slot.current().alt(), MAIN_IMAGE_ALT);
    }

    #[test]
    fn test_missing_image_hides_overlay() {
        let mut slot = MainImageSlot::new();
        let ticket = slot.request(Some("gone.jpg"), true).unwrap();
        assert!(slot.complete(ticket, false));
        assert_eq!(slot.current(), &MainImage::placeholder());
    }

    #[test]
    fn test_stale_probe_discarded() {
        let mut slot = MainImageSlot::new();
        let old = slot.request(Some("old.jpg"), false).unwrap();
        let new = slot.request(Some("new.jpg"), false).unwrap();
        assert!(slot.complete(new, true));
        assert!(!slot.complete(old, true));
        assert_eq!(slot.current().source, ImageSource::Asset("new.jpg".into()));
        let events = slot.take_events();
        assert!(matches!(events.last(), Some(DomainEvent::Detail(DetailEvent::StaleProbeDiscarded { generation: 1 }))));
    }

    #[test]
    fn test_placeholder_invalidates_pending_probe() {
        let mut slot = MainImageSlot::new();
        let ticket = slot.request(Some("a.jpg"), false).unwrap();
        slot.show_placeholder();
        assert!(!slot.complete(ticket, true));
        assert!(slot.current().source.is_placeholder());
    }

    #[test]
    fn test_gallery_selection_moves() {
        let mut gallery = Gallery::new(vec![ImageRef::new("a.jpg", None), ImageRef::new("b.jpg", Some("Side".into()))]);
        assert_eq!(gallery.selected(), None);
        assert_eq!(gallery.select(1).map(|t| t.filename()), Some("b.jpg"));
        assert_eq!(gallery.select(0).map(|t| t.filename()), Some("a.jpg"));
        assert_eq!(gallery.selected(), Some(0));
        assert!(gallery.select(5).is_none());
        assert_eq!(gallery.selected(), Some(0));
        gallery.clear();
        assert!(gallery.is_empty());
        assert_eq!(gallery.selected(), None);
    }
}
