use crate::geometry::Offset;

/// Pointer position in viewport-local logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug)]
struct Anchor {
    start: PointerPos,
    offset_at_start: Offset,
}

/// Pan-gesture bookkeeping: a begin event captures the starting pointer
/// position and the offset at that moment; each move event yields the
/// candidate offset `offset_at_start + (pointer - start)`.
///
/// Candidates are unclamped; feed them through `CropSession::pan_to` so the
/// clamp runs against the current scale. Works on plain coordinates, so
/// gestures can be driven without a real pointer device.
#[derive(Debug, Default)]
pub struct DragTracker {
    anchor: Option<Anchor>,
}

impl DragTracker {
    pub fn begin(&mut self, pointer: PointerPos, current_offset: Offset) {
        self.anchor = Some(Anchor {
            start: pointer,
            offset_at_start: current_offset,
        });
    }

    /// Candidate offset for the current pointer position, or `None` when no
    /// drag is in progress.
    pub fn update(&self, pointer: PointerPos) -> Option<Offset> {
        let anchor = self.anchor.as_ref()?;
        Some(Offset {
            x: anchor.offset_at_start.x + (pointer.x - anchor.start.x),
            y: anchor.offset_at_start.y + (pointer.y - anchor.start.y),
        })
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
