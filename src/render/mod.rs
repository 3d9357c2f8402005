//! Presentation layer: style derivation, measurement, and display-command
//! emission for the tooltip.
//!
//! Emits a toolkit-agnostic command list rather than driving any GUI
//! framework directly, so hover behavior stays testable without a render
//! loop. The panel is emitted in *both* hover states — hidden means
//! opacity 0 and non-interactive, not absent — so revealing it never
//! reflows the surrounding layout.

mod theme;

pub use theme::{Color, PanelTheme};

use crate::geom::{Point, Rect};
use crate::widget::{Element, HoverState, Tooltip};

/// Duration of the reveal/conceal transition in milliseconds. Fixed "fast
/// UI transition", not user-configurable.
pub const TRANSITION_MS: u32 = 300;

/// Approximate glyph advance as a fraction of font size, used for
/// single-line width estimates without a font system.
const CHAR_ADVANCE: f32 = 0.6;

/// Line height factor, matching the tooltip line metric used elsewhere.
const LINE_HEIGHT: f32 = 1.2;

/// The two-point style toggle applied to the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub opacity: f32,
    pub interactive: bool,
    pub transition_ms: u32,
    /// Panel text never wraps; the panel grows horizontally instead.
    pub wrap: bool,
}

impl PanelStyle {
    pub fn for_state(state: HoverState) -> Self {
        let (opacity, interactive) = match state {
            HoverState::Hidden => (0.0, false),
            HoverState::Visible => (1.0, true),
        };
        Self { opacity, interactive, transition_ms: TRANSITION_MS, wrap: false }
    }
}

/// A flat drawing instruction for the host toolkit.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    Rect {
        bounds: Rect,
        color: Color,
    },
    Border {
        bounds: Rect,
        width: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        font_size: f32,
        wrap: bool,
    },
}

/// Resolved trigger and panel rectangles for one tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    pub trigger: Rect,
    pub panel: Rect,
}

impl TooltipLayout {
    /// The composite hover region: trigger and panel treated as a single
    /// pointer target, so hovering the panel itself keeps it visible.
    pub fn composite(&self) -> Rect {
        self.trigger.union(self.panel)
    }
}

/// One rendered region (trigger or panel): bounds plus draw commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub bounds: Rect,
    pub commands: Vec<DisplayCommand>,
}

/// The full render result: exactly one trigger region and one panel
/// region, panel present regardless of hover state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTooltip {
    pub trigger: Region,
    pub panel: Region,
    pub panel_style: PanelStyle,
}

/// Measure the panel for `content`: single line, width grows with text
/// length, no wrapping.
pub fn measure_panel(content: &Element, theme: &PanelTheme) -> (f32, f32) {
    let text_width = content
        .label()
        .map(|s| s.chars().count() as f32 * theme.font_size * CHAR_ADVANCE)
        .unwrap_or(0.0);
    let line_height = (theme.font_size * LINE_HEIGHT).ceil();
    (
        text_width + theme.padding * 2.0,
        line_height + theme.padding * 2.0,
    )
}

/// Resolve trigger and panel rectangles. The trigger rectangle comes from
/// the host's own layout; the panel sits to its right, vertically
/// centered, offset by the anchor gap.
pub fn layout(tooltip: &Tooltip, trigger: Rect, theme: &PanelTheme) -> TooltipLayout {
    let (w, h) = measure_panel(tooltip.content(), theme);
    let panel = tooltip.anchor().resolve(trigger, w, h);
    TooltipLayout { trigger, panel }
}

/// Render a tooltip into its two regions.
pub fn render(tooltip: &Tooltip, trigger_rect: Rect, theme: &PanelTheme) -> RenderedTooltip {
    let layout = layout(tooltip, trigger_rect, theme);
    let style = PanelStyle::for_state(tooltip.state());

    RenderedTooltip {
        trigger: Region {
            bounds: layout.trigger,
            commands: element_commands(tooltip.trigger(), layout.trigger, theme, 1.0),
        },
        panel: Region {
            bounds: layout.panel,
            commands: panel_commands(tooltip.content(), layout.panel, theme, style.opacity),
        },
        panel_style: style,
    }
}

/// Emit commands for a trigger slot inside its rectangle.
fn element_commands(element: &Element, bounds: Rect, theme: &PanelTheme, alpha: f32) -> Vec<DisplayCommand> {
    let mut commands = Vec::new();
    match element {
        Element::Empty => {}
        Element::Text(text) => {
            commands.push(text_command(text, bounds, theme, alpha));
        }
        Element::Button { label } => {
            commands.push(DisplayCommand::Rect {
                bounds,
                color: theme.background.faded(alpha),
            });
            commands.push(DisplayCommand::Border {
                bounds,
                width: theme.border_width,
                color: theme.border.faded(alpha),
            });
            commands.push(text_command(label, bounds, theme, alpha));
        }
        Element::Image { url } => {
            commands.push(DisplayCommand::Rect {
                bounds,
                color: theme.background.faded(alpha),
            });
            commands.push(DisplayCommand::Text {
                text: url.clone(),
                x: bounds.x,
                y: bounds.y,
                color: theme.text.faded(alpha),
                font_size: theme.font_size,
                wrap: false,
            });
        }
    }
    commands
}

/// Emit commands for the panel: background, then border, then text. The
/// panel draws in both states; `alpha` carries the hover opacity.
fn panel_commands(content: &Element, bounds: Rect, theme: &PanelTheme, alpha: f32) -> Vec<DisplayCommand> {
    let mut commands = vec![
        DisplayCommand::Rect {
            bounds,
            color: theme.background.faded(alpha),
        },
        DisplayCommand::Border {
            bounds,
            width: theme.border_width,
            color: theme.border.faded(alpha),
        },
    ];
    commands.extend(
        content
            .label()
            .map(|text| text_command(text, bounds, theme, alpha)),
    );
    commands
}

fn text_command(text: &str, bounds: Rect, theme: &PanelTheme, alpha: f32) -> DisplayCommand {
    let line_height = (theme.font_size * LINE_HEIGHT).ceil();
    DisplayCommand::Text {
        text: text.to_string(),
        x: bounds.x + theme.padding,
        y: bounds.center_y() - line_height / 2.0,
        color: theme.text.faded(alpha),
        font_size: theme.font_size,
        wrap: false,
    }
}

/// Convenience for hosts: resolve the composite region and feed a pointer
/// position through the tooltip's state machine in one call.
pub fn observe_pointer(
    tooltip: &mut Tooltip,
    pos: Point,
    trigger_rect: Rect,
    theme: &PanelTheme,
) -> Option<crate::event::HoverChange> {
    let region = layout(tooltip, trigger_rect, theme).composite();
    tooltip.handle_pointer(pos, region)
}
