//! Runtime configuration, read from the environment (and `.env`).

use std::path::PathBuf;

use crate::domain::value_objects::ImageDir;

pub const DEFAULT_DATA_PATH: &str = "data/frames.json";
pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_PLACEHOLDER: &str = "coming-soon.jpg";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_path: PathBuf,
    pub image_dir: PathBuf,
    pub placeholder: String,
}

impl CatalogConfig {
    /// Reads `CATALOG_DATA_PATH`, `CATALOG_IMAGE_DIR` and
    /// `CATALOG_PLACEHOLDER_IMAGE`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_string());
        Self {
            data_path: var("CATALOG_DATA_PATH", DEFAULT_DATA_PATH).into(),
            image_dir: var("CATALOG_IMAGE_DIR", DEFAULT_IMAGE_DIR).into(),
            placeholder: var("CATALOG_PLACEHOLDER_IMAGE", DEFAULT_PLACEHOLDER),
        }
    }

    pub fn images(&self) -> ImageDir { ImageDir::new(&self.image_dir, &self.placeholder) }
}

impl Default for CatalogConfig {
    fn default() -> Self { Self::from_lookup(|_| None) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.data_path, PathBuf::from("data/frames.json"));
        assert_eq!(cfg.images(), ImageDir::default());
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let env: HashMap<&str, &str> = [("CATALOG_IMAGE_DIR", "/srv/img"), ("CATALOG_PLACEHOLDER_IMAGE", " ")].into();
        let cfg = CatalogConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.image_dir, PathBuf::from("/srv/img"));
        assert_eq!(cfg.placeholder, DEFAULT_PLACEHOLDER);
    }
}
