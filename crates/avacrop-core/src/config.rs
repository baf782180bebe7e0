use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_EXPORT_SIZE, DEFAULT_VIEWPORT_SIZE};
use crate::error::{CropError, Result};

/// Crop framing configuration.
///
/// The preview geometry is computed against `viewport_size` and the export
/// resamples the identical source square at `export_size`, so the two may be
/// changed independently without altering the framing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropConfig {
    /// Side of the interactive viewport square, logical pixels.
    #[serde(default = "default_viewport_size")]
    pub viewport_size: u32,
    /// Side of the exported avatar square, pixels.
    #[serde(default = "default_export_size")]
    pub export_size: u32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            viewport_size: DEFAULT_VIEWPORT_SIZE,
            export_size: DEFAULT_EXPORT_SIZE,
        }
    }
}

fn default_viewport_size() -> u32 {
    DEFAULT_VIEWPORT_SIZE
}

fn default_export_size() -> u32 {
    DEFAULT_EXPORT_SIZE
}

impl CropConfig {
    pub fn validate(&self) -> Result<()> {
        if self.viewport_size == 0 {
            return Err(CropError::InvalidConfig(
                "viewport_size must be > 0".into(),
            ));
        }
        if self.export_size == 0 {
            return Err(CropError::InvalidConfig("export_size must be > 0".into()));
        }
        Ok(())
    }
}
