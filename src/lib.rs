//! Frame Catalog
//!
//! Browser core for a static eyewear-frame catalog.
//!
//! ## Features
//! - Dataset loading with `ColorTags`/gallery shape normalization
//! - Filter option extraction and the filter/search predicate
//! - Grouping of SKUs into frame thumbnail cards
//! - Detail view variant selection (color x eye size)
//! - Main image resolution with back-order overlay and gallery

pub mod config;
pub mod domain;
pub mod loader;
pub mod navigation;
pub mod probe;
pub mod render;
pub mod views;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::{ColorTags, ImageRef, Sku, SkuError};

pub use config::CatalogConfig;
pub use loader::{load_catalog, Catalog};
pub use views::{CatalogView, DetailView};

// =============================================================================
// Core Types
// =============================================================================

/// One row of the catalog dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSkuRecord")]
pub struct SkuRecord {
    #[serde(rename = "FrameName")]
    pub frame_name: String,
    #[serde(rename = "SKU")]
    pub sku: Sku,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "ColorTags")]
    pub color_tags: ColorTags,
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(rename = "EyeSize")]
    pub eye_size: i32,
    #[serde(rename = "B")]
    pub b: i32,
    #[serde(rename = "FramePD")]
    pub frame_pd: i32,
    #[serde(rename = "Temple")]
    pub temple: i32,
    #[serde(rename = "Discontinued")]
    pub discontinued: bool,
    #[serde(rename = "BackOrdered")]
    pub back_ordered: bool,
    #[serde(rename = "HeroImage")]
    pub hero_image: Option<String>,
    #[serde(rename = "Images")]
    pub images: Vec<ImageRef>,
}

impl SkuRecord {
    /// Hero image filename, with an empty string treated as absent.
    pub fn hero_image(&self) -> Option<&str> {
        self.hero_image.as_deref().map(str::trim).filter(|f| !f.is_empty())
    }

    pub fn is_active(&self) -> bool { !self.discontinued }

    pub fn has_material(&self, material: &str) -> bool { self.material == material }
}

/// Wire shape of a dataset row before normalization.
#[derive(Deserialize)]
struct RawSkuRecord {
    #[serde(rename = "FrameName")]
    frame_name: String,
    #[serde(rename = "SKU")]
    sku: String,
    #[serde(rename = "Color", default)]
    color: Option<String>,
    #[serde(rename = "ColorTags", default)]
    color_tags: ColorTags,
    #[serde(rename = "Material", default)]
    material: Option<String>,
    #[serde(rename = "EyeSize")]
    eye_size: i32,
    #[serde(rename = "B")]
    b: i32,
    #[serde(rename = "FramePD")]
    frame_pd: i32,
    #[serde(rename = "Temple")]
    temple: i32,
    #[serde(rename = "Discontinued", default)]
    discontinued: bool,
    #[serde(rename = "BackOrdered", default)]
    back_ordered: bool,
    #[serde(rename = "HeroImage", default)]
    hero_image: Option<String>,
    #[serde(rename = "Images", default)]
    images: Option<Vec<RawImage>>,
    #[serde(rename = "ExtraImages", default)]
    extra_images: Option<Vec<RawImage>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawImage {
    Bare(String),
    Described {
        filename: String,
        #[serde(default, alias = "label")]
        view: Option<String>,
    },
}

impl From<RawImage> for ImageRef {
    fn from(raw: RawImage) -> Self {
        match raw {
            RawImage::Bare(filename) => ImageRef::new(filename, None),
            RawImage::Described { filename, view } => ImageRef::new(filename, view),
        }
    }
}

impl TryFrom<RawSkuRecord> for SkuRecord {
    type Error = SkuError;

    fn try_from(raw: RawSkuRecord) -> std::result::Result<Self, Self::Error> {
        let images = raw
            .images
            .into_iter()
            .flatten()
            .chain(raw.extra_images.into_iter().flatten())
            .map(ImageRef::from)
            .collect();
        Ok(Self {
            frame_name: raw.frame_name,
            sku: Sku::new(raw.sku)?,
            color: raw.color.unwrap_or_default(),
            color_tags: raw.color_tags,
            material: raw.material.unwrap_or_default(),
            eye_size: raw.eye_size,
            b: raw.b,
            frame_pd: raw.frame_pd,
            temple: raw.temple,
            discontinued: raw.discontinued,
            back_ordered: raw.back_ordered,
            hero_image: raw.hero_image,
            images,
        })
    }
}

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to load catalog: {0}")]
    Load(#[from] LoadError),

    #[error("Frame not found: {frame}")]
    FrameNotFound { frame: String },

    #[error("No frame specified")]
    MissingFrameParam,

    #[error("Invalid {dimension} selection: {value}")]
    InvalidSelection { dimension: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::SkuRecord;
    use serde_json::json;

    /// Builds a record through the JSON wire shape.
    pub fn sku(value: serde_json::Value) -> SkuRecord {
        let mut base = json!({
            "FrameName": "Aviator", "SKU": "AV-1", "Color": "Black", "ColorTags": ["Black"],
            "Material": "Metal", "EyeSize": 52, "B": 40, "FramePD": 70, "Temple": 140,
            "Discontinued": false, "BackOrdered": false, "HeroImage": "av-black.jpg"
        });
        if let (Some(base), Some(patch)) = (base.as_object_mut(), value.as_object()) {
            for (k, v) in patch { base.insert(k.clone(), v.clone()); }
        }
        serde_json::from_value(base).unwrap()
    }
}
