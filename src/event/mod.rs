//! Pointer event dispatch for hover-driven widgets.
//!
//! Hover is the sole disclosure trigger (keyboard and focus handling are
//! deliberately absent). A [`HoverTracker`] turns a stream of pointer
//! positions into at most one [`HoverChange`] edge per boundary crossing,
//! the same old-state/new-state diff the mouse-move path uses: no edge
//! while the pointer stays on one side, exactly one when it crosses.

use crate::geom::{Point, Rect};

/// Inbound pointer events. Movement is the only event class that drives
/// disclosure; press/release belong to the host application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
}

/// An edge produced when the pointer crosses the composite-region boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    Enter,
    Leave,
}

/// Tracks whether the pointer is inside a region and reports crossings.
#[derive(Debug, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last observed position was inside the region.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Observe a pointer position against `region`.
    ///
    /// Returns `Some(Enter)` or `Some(Leave)` only when the containment
    /// state actually changed.
    pub fn observe(&mut self, pos: Point, region: Rect) -> Option<HoverChange> {
        let now_inside = region.contains(pos);
        if now_inside == self.inside {
            return None;
        }
        self.inside = now_inside;
        let change = if now_inside { HoverChange::Enter } else { HoverChange::Leave };
        tracing::debug!(?change, x = pos.x, y = pos.y, "hover boundary crossed");
        Some(change)
    }

    /// Observe an event; positions are the only variant today.
    pub fn handle(&mut self, event: PointerEvent, region: Rect) -> Option<HoverChange> {
        match event {
            PointerEvent::Moved(pos) => self.observe(pos, region),
        }
    }
}
