//! Panel placement relative to the trigger.

use crate::geom::Rect;

/// Default horizontal gap between trigger and panel, in layout units.
pub const PANEL_GAP: f32 = 8.0;

/// Placement rule for the disclosure panel: immediately to the right of
/// the trigger, vertically centered on it, offset by a fixed gap.
#[derive(Debug, Clone, Copy)]
pub struct PanelAnchor {
    pub gap: f32,
}

impl Default for PanelAnchor {
    fn default() -> Self {
        Self { gap: PANEL_GAP }
    }
}

impl PanelAnchor {
    /// Resolve the panel rectangle for a trigger rectangle and a measured
    /// panel size.
    pub fn resolve(&self, trigger: Rect, panel_width: f32, panel_height: f32) -> Rect {
        Rect::new(
            trigger.right() + self.gap,
            trigger.center_y() - panel_height / 2.0,
            panel_width,
            panel_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_right_of_trigger_and_centered() {
        let trigger = Rect::new(100.0, 200.0, 60.0, 24.0);
        let panel = PanelAnchor::default().resolve(trigger, 120.0, 40.0);

        assert_eq!(panel.x, 160.0 + PANEL_GAP, "panel starts a gap past the trigger's right edge");
        assert_eq!(panel.center_y(), trigger.center_y(), "panel is vertically centered on the trigger");
        assert_eq!(panel.width, 120.0);
        assert_eq!(panel.height, 40.0);
    }
}
