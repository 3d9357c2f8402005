//! Tests for the hover-disclosure tooltip: state machine, render-tree
//! shape, and the composite hover region.

use recipe_ui::geom::{Point, Rect};
use recipe_ui::render::{self, DisplayCommand, PanelTheme, TRANSITION_MS};
use recipe_ui::widget::{Element, HoverState, Tooltip};

const TRIGGER: Rect = Rect { x: 100.0, y: 100.0, width: 60.0, height: 24.0 };

fn panel_text(commands: &[DisplayCommand]) -> Option<&str> {
    commands.iter().find_map(|c| match c {
        DisplayCommand::Text { text, .. } => Some(text.as_str()),
        _ => None,
    })
}

// ============================================================================
// Render-tree shape
// ============================================================================

#[test]
fn one_trigger_and_one_panel_in_both_states() {
    let theme = PanelTheme::default();
    let mut tip = Tooltip::new(Element::button("Info"), Element::text("details"));

    let hidden = render::render(&tip, TRIGGER, &theme);
    assert!(!hidden.panel.commands.is_empty(), "panel must be emitted while hidden");
    assert_eq!(hidden.panel_style.opacity, 0.0);
    assert!(!hidden.panel_style.interactive);

    tip.pointer_enter();
    let visible = render::render(&tip, TRIGGER, &theme);
    assert_eq!(visible.panel_style.opacity, 1.0);
    assert!(visible.panel_style.interactive);

    // Same regions, same bounds — only the style toggles.
    assert_eq!(hidden.panel.bounds, visible.panel.bounds, "panel bounds must not change on reveal");
    assert_eq!(hidden.trigger.bounds, visible.trigger.bounds);
}

#[test]
fn empty_slots_render_empty_regions() {
    let theme = PanelTheme::default();
    let tip = Tooltip::new(Element::Empty, Element::Empty);
    let out = render::render(&tip, TRIGGER, &theme);

    assert!(out.trigger.commands.is_empty(), "empty trigger draws nothing");
    // The panel chrome is still present; there is just no text.
    assert_eq!(out.panel.commands.len(), 2, "empty panel is background + border only");
    assert!(panel_text(&out.panel.commands).is_none());
}

#[test]
fn panel_sits_right_of_trigger_vertically_centered() {
    let theme = PanelTheme::default();
    let tip = Tooltip::new(Element::button("Info"), Element::text("details"));
    let layout = render::layout(&tip, TRIGGER, &theme);

    assert!(layout.panel.x > TRIGGER.x + TRIGGER.width, "panel starts past the trigger's right edge");
    let offset = layout.panel.x - (TRIGGER.x + TRIGGER.width);
    assert_eq!(offset, 8.0, "fixed horizontal gap");
    assert!(
        (layout.panel.center_y() - TRIGGER.center_y()).abs() < 0.001,
        "panel is vertically centered on the trigger"
    );
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn hover_enter_and_leave_toggle_visibility() {
    let theme = PanelTheme::default();
    let mut tip = Tooltip::new(Element::button("Info"), Element::text("details"));
    assert_eq!(tip.state(), HoverState::Hidden, "initial state is Hidden");

    let inside = Point::new(TRIGGER.x + 5.0, TRIGGER.y + 5.0);
    let outside = Point::new(500.0, 400.0);

    let _ = render::observe_pointer(&mut tip, inside, TRIGGER, &theme);
    assert_eq!(tip.state(), HoverState::Visible);

    let _ = render::observe_pointer(&mut tip, outside, TRIGGER, &theme);
    assert_eq!(tip.state(), HoverState::Hidden);
}

#[test]
fn pointer_on_panel_keeps_it_visible() {
    let theme = PanelTheme::default();
    let mut tip = Tooltip::new(Element::button("Info"), Element::text("some panel content"));

    // Enter through the trigger.
    let _ = render::observe_pointer(&mut tip, Point::new(TRIGGER.x + 1.0, TRIGGER.y + 1.0), TRIGGER, &theme);
    assert!(tip.panel_visible());

    // Move onto the panel itself: still inside the composite region.
    let panel = render::layout(&tip, TRIGGER, &theme).panel;
    let on_panel = Point::new(panel.x + panel.width / 2.0, panel.center_y());
    let change = render::observe_pointer(&mut tip, on_panel, TRIGGER, &theme);
    assert!(change.is_none(), "moving onto the panel must not produce a Leave edge");
    assert!(tip.panel_visible(), "panel stays visible while hovered");
}

#[test]
fn transition_duration_is_fixed() {
    let tip = Tooltip::new(Element::Empty, Element::text("x"));
    let out = render::render(&tip, TRIGGER, &PanelTheme::default());
    assert_eq!(out.panel_style.transition_ms, TRANSITION_MS);
    assert_eq!(TRANSITION_MS, 300);
}

// ============================================================================
// No-wrap growth
// ============================================================================

#[test]
fn long_content_grows_panel_instead_of_wrapping() {
    let theme = PanelTheme::default();
    let long: String = "x".repeat(200);

    let short_tip = Tooltip::new(Element::Empty, Element::text("short"));
    let long_tip = Tooltip::new(Element::Empty, Element::text(long));

    let short = render::layout(&short_tip, TRIGGER, &theme);
    let wide = render::layout(&long_tip, TRIGGER, &theme);

    assert!(wide.panel.width > short.panel.width, "panel width grows with content length");
    assert_eq!(wide.panel.height, short.panel.height, "height stays one line — no wrapping");

    let out = render::render(&long_tip, TRIGGER, &theme);
    let wraps = out.panel.commands.iter().any(|c| matches!(c, DisplayCommand::Text { wrap: true, .. }));
    assert!(!wraps, "panel text is never emitted with wrapping enabled");
    assert!(!out.panel_style.wrap);
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn info_button_reveals_calorie_text_on_hover() {
    let theme = PanelTheme::default();
    let mut tip = Tooltip::new(Element::button("Info"), Element::text("Contains 320 calories"));

    // Initial: panel hidden.
    let out = render::render(&tip, TRIGGER, &theme);
    assert_eq!(out.panel_style.opacity, 0.0, "panel starts hidden");

    // Pointer enters the button.
    let _ = render::observe_pointer(&mut tip, Point::new(TRIGGER.x + 10.0, TRIGGER.y + 10.0), TRIGGER, &theme);
    let out = render::render(&tip, TRIGGER, &theme);
    assert_eq!(out.panel_style.opacity, 1.0);
    assert_eq!(panel_text(&out.panel.commands), Some("Contains 320 calories"));
    assert!(out.panel.bounds.x > TRIGGER.x + TRIGGER.width, "text appears beside the button");

    // Pointer leaves: hidden again.
    let _ = render::observe_pointer(&mut tip, Point::new(0.0, 0.0), TRIGGER, &theme);
    let out = render::render(&tip, TRIGGER, &theme);
    assert_eq!(out.panel_style.opacity, 0.0, "panel hides on pointer leave");
    assert!(!out.panel.commands.is_empty(), "panel remains in the tree while hidden");
}
