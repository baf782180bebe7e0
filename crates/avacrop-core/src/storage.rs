use std::path::PathBuf;

use tracing::info;

use crate::error::{CropError, Result};

/// Destination for finished avatar exports. Takes encoded PNG bytes plus a
/// destination key and returns a publicly resolvable URL.
///
/// Implementations own the transport entirely; failures come back as an
/// opaque message and are not retried or interpreted here.
pub trait AvatarStore {
    fn put(&self, key: &str, png: &[u8]) -> Result<String>;
}

/// Filesystem-backed store: writes `<root>/<key>.png` and returns a
/// `file://` URL. The root directory must already exist.
#[derive(Clone, Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AvatarStore for DirStore {
    fn put(&self, key: &str, png: &[u8]) -> Result<String> {
        let path = self.root.join(format!("{key}.png"));
        std::fs::write(&path, png)
            .map_err(|e| CropError::Storage(format!("write {}: {e}", path.display())))?;
        info!("stored avatar '{key}' ({} bytes)", png.len());
        Ok(format!("file://{}", path.display()))
    }
}
