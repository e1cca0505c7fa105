//! Dataset loading.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::{LoadError, SkuRecord};

/// The loaded dataset. Immutable for the rest of the session and cheap to
/// share between views.
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Arc<[SkuRecord]>,
}

impl Catalog {
    pub fn new(records: Vec<SkuRecord>) -> Self { Self { records: records.into() } }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let records: Vec<SkuRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Non-discontinued records, in dataset order.
    pub fn active(&self) -> impl Iterator<Item = &SkuRecord> {
        self.records.iter().filter(|r| r.is_active())
    }

    /// Active records of one frame, matched by exact name.
    pub fn frame(&self, frame_name: &str) -> Vec<SkuRecord> {
        self.active().filter(|r| r.frame_name == frame_name).cloned().collect()
    }
}

/// Reads and parses the dataset file. No retry on failure.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading catalog");
    let json = tokio::fs::read_to_string(path).await.map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = Catalog::from_json_str(&json)?;
    info!(
        path = %path.display(),
        records = catalog.len(),
        active = catalog.active().count(),
        "catalog loaded"
    );
    Ok(catalog)
}
