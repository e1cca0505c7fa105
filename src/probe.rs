//! Image existence probing.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::value_objects::{ImageDir, ImageSource};

/// Answers whether an image file can be displayed.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn exists(&self, filename: &str) -> bool;
}

/// Probes files under the configured image directory.
#[derive(Clone, Debug)]
pub struct FsImageProbe {
    images: ImageDir,
}

impl FsImageProbe {
    pub fn new(images: ImageDir) -> Self { Self { images } }
}

#[async_trait]
impl ImageProbe for FsImageProbe {
    async fn exists(&self, filename: &str) -> bool {
        let path = self.images.path_of(&ImageSource::Asset(filename.to_string()));
        match tokio::fs::metadata(&path).await {
            Ok(meta) => meta.is_file(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "image missing, using placeholder");
                false
            }
        }
    }
}
