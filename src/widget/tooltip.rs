//! The hover-disclosure tooltip primitive.
//!
//! A tooltip wraps a trigger element and a content panel. The panel's
//! visibility is a two-state machine driven purely by pointer containment
//! in the *composite* region (trigger plus panel treated as one hover
//! target), so moving onto the panel itself keeps it visible. Hover is the
//! only trigger; there are no timers and no keyboard path.

use super::{next_widget_id, Element, PanelAnchor};
use crate::event::{HoverChange, HoverTracker};
use crate::geom::{Point, Rect};

/// Panel visibility state. `Hidden` is initial; `Enter` and `Leave` on the
/// composite region are the only transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Hidden,
    Visible,
}

impl HoverState {
    pub fn apply(self, change: HoverChange) -> HoverState {
        match change {
            HoverChange::Enter => HoverState::Visible,
            HoverChange::Leave => HoverState::Hidden,
        }
    }
}

/// A hover-disclosure tooltip: trigger element plus content panel.
///
/// Stateless beyond the two-state hover machine — no validation, no side
/// effects. Either slot may be [`Element::Empty`] and renders as an empty
/// region.
#[derive(Debug)]
pub struct Tooltip {
    id: u64,
    trigger: Element,
    content: Element,
    anchor: PanelAnchor,
    state: HoverState,
    tracker: HoverTracker,
}

impl Tooltip {
    pub fn new(trigger: Element, content: Element) -> Self {
        Self {
            id: next_widget_id(),
            trigger,
            content,
            anchor: PanelAnchor::default(),
            state: HoverState::Hidden,
            tracker: HoverTracker::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn trigger(&self) -> &Element {
        &self.trigger
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn anchor(&self) -> PanelAnchor {
        self.anchor
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn panel_visible(&self) -> bool {
        self.state == HoverState::Visible
    }

    /// Explicit pointer-enter edge on the composite region.
    pub fn pointer_enter(&mut self) {
        self.transition(HoverChange::Enter);
    }

    /// Explicit pointer-leave edge on the composite region.
    pub fn pointer_leave(&mut self) {
        self.transition(HoverChange::Leave);
    }

    /// Hit-test a pointer position against the composite region and apply
    /// the resulting edge, if any.
    ///
    /// `region` is the union of the resolved trigger and panel rectangles
    /// (see `render::layout`), so a pointer resting on the panel keeps the
    /// panel visible.
    pub fn handle_pointer(&mut self, pos: Point, region: Rect) -> Option<HoverChange> {
        let change = self.tracker.observe(pos, region)?;
        self.transition(change);
        Some(change)
    }

    fn transition(&mut self, change: HoverChange) {
        let next = self.state.apply(change);
        if next != self.state {
            tracing::debug!(id = self.id, from = ?self.state, to = ?next, "tooltip state change");
            self.state = next;
        }
    }
}
