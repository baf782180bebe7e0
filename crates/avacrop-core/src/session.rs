use image::RgbImage;
use tracing::debug;

use crate::config::CropConfig;
use crate::error::{CropError, Result};
use crate::geometry::{clamp_offset, min_scale, source_window, Offset, SourceWindow};
use crate::render::render_crop;

/// Lifecycle phase of a session holding a decoded source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropPhase {
    /// Source just loaded, state at defaults.
    Ready,
    /// User has panned or zoomed at least once.
    Interacting,
    /// A final export was produced; the state remains adjustable.
    Committed,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Empty,
    Loading,
    Active(ActiveCrop),
}

#[derive(Debug)]
struct ActiveCrop {
    source: RgbImage,
    natural_w: u32,
    natural_h: u32,
    min_scale: f64,
    scale: f64,
    offset: Offset,
    phase: CropPhase,
}

/// A single interactive crop session over one source image.
///
/// Owns the pan/zoom state and keeps it within bounds: the scale never drops
/// below the minimum that covers the viewport, and the offset is reclamped
/// after every change so no viewport pixel samples outside the source.
/// Operations invoked before a source is loaded are no-ops.
#[derive(Debug)]
pub struct CropSession {
    config: CropConfig,
    state: State,
}

impl CropSession {
    pub fn new(config: CropConfig) -> Self {
        Self {
            config,
            state: State::Empty,
        }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn viewport_size(&self) -> u32 {
        self.config.viewport_size
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, State::Loading)
    }

    pub fn phase(&self) -> Option<CropPhase> {
        self.active().map(|a| a.phase)
    }

    /// Mark the session as waiting for a source to finish decoding.
    /// Geometry operations stay no-ops until [`source_ready`] is called.
    ///
    /// [`source_ready`]: CropSession::source_ready
    pub fn begin_load(&mut self) {
        self.state = State::Loading;
    }

    /// Install a decoded source, replacing any previous one. Resets scale to
    /// the minimum covering scale and the offset to center.
    pub fn source_ready(&mut self, source: RgbImage) -> Result<()> {
        let (w, h) = source.dimensions();
        if w == 0 || h == 0 {
            return Err(CropError::InvalidDimensions {
                width: w,
                height: h,
            });
        }

        let min = min_scale(w, h, self.config.viewport_size);
        debug!("source ready: {w}x{h}, min scale {min:.4}");
        self.state = State::Active(ActiveCrop {
            source,
            natural_w: w,
            natural_h: h,
            min_scale: min,
            scale: min,
            offset: Offset::ZERO,
            phase: CropPhase::Ready,
        });
        Ok(())
    }

    /// Drop the source and return to the empty state.
    pub fn clear(&mut self) {
        self.state = State::Empty;
    }

    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.active().map(|a| (a.natural_w, a.natural_h))
    }

    pub fn min_scale(&self) -> Option<f64> {
        self.active().map(|a| a.min_scale)
    }

    pub fn scale(&self) -> Option<f64> {
        self.active().map(|a| a.scale)
    }

    pub fn offset(&self) -> Option<Offset> {
        self.active().map(|a| a.offset)
    }

    /// Set the zoom scale, clamped to the minimum covering scale, then
    /// reclamp the offset against the new (possibly smaller) pan bounds.
    /// No-op while no source is loaded.
    pub fn set_scale(&mut self, scale: f64) {
        let viewport = self.config.viewport_size;
        if let Some(a) = self.active_mut() {
            a.scale = if scale.is_finite() {
                scale.max(a.min_scale)
            } else {
                a.min_scale
            };
            a.offset = clamp_offset(a.offset, a.scale, a.natural_w, a.natural_h, viewport);
            a.phase = CropPhase::Interacting;
        }
    }

    /// Pan to the proposed offset, clamped to the current bounds.
    /// No-op while no source is loaded.
    pub fn pan_to(&mut self, offset: Offset) {
        let viewport = self.config.viewport_size;
        if let Some(a) = self.active_mut() {
            a.offset = clamp_offset(offset, a.scale, a.natural_w, a.natural_h, viewport);
            a.phase = CropPhase::Interacting;
        }
    }

    /// Source-space square the viewport currently frames.
    pub fn source_window(&self) -> Option<SourceWindow> {
        let viewport = self.config.viewport_size;
        self.active()
            .map(|a| source_window(a.scale, a.offset, a.natural_w, a.natural_h, viewport))
    }

    /// Render the live preview at viewport resolution. `None` while no
    /// source is loaded.
    pub fn preview(&self) -> Option<RgbImage> {
        let a = self.active()?;
        render_crop(
            &a.source,
            a.scale,
            a.offset,
            self.config.viewport_size,
            self.config.viewport_size,
        )
    }

    /// Render the final export at the configured export resolution. The
    /// session stays adjustable afterwards; only the phase moves to
    /// `Committed`. `None` while no source is loaded.
    pub fn export(&mut self) -> Option<RgbImage> {
        let viewport = self.config.viewport_size;
        let export_size = self.config.export_size;
        let a = self.active_mut()?;
        let out = render_crop(&a.source, a.scale, a.offset, viewport, export_size)?;
        a.phase = CropPhase::Committed;
        debug!(
            "exported {export_size}x{export_size} crop at scale {:.4}",
            a.scale
        );
        Some(out)
    }

    fn active(&self) -> Option<&ActiveCrop> {
        match &self.state {
            State::Active(a) => Some(a),
            _ => None,
        }
    }

    fn active_mut(&mut self) -> Option<&mut ActiveCrop> {
        match &mut self.state {
            State::Active(a) => Some(a),
            _ => None,
        }
    }
}
