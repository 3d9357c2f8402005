use tracing_subscriber::EnvFilter;

use recipe_ui::geom::{Point, Rect};
use recipe_ui::render::{self, PanelTheme};
use recipe_ui::widget::{Element, Tooltip};
use recipe_ui::Recipe;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A recipe as the fetch layer would deliver it: full category objects,
    // optional fields present or absent.
    let recipe: Recipe = serde_json::from_str(
        r#"{
            "id": 42,
            "title": "Shakshuka",
            "description": "Eggs poached in spiced tomato sauce",
            "calories": 320,
            "cook_time": 25,
            "image_url": "https://example.com/shakshuka.jpg",
            "rating": 4.6,
            "difficulty": "Easy",
            "categories": [
                { "id": 1, "name": "Breakfast", "image_url": "https://example.com/breakfast.jpg" },
                { "id": 7, "name": "Vegetarian", "image_url": "https://example.com/veg.jpg" }
            ]
        }"#,
    )?;
    tracing::info!(title = %recipe.title, categories = recipe.categories.len(), "loaded recipe");

    let mut tooltip = Tooltip::new(
        Element::button("Info"),
        Element::text(format!("Contains {} calories", recipe.calories)),
    );
    let trigger_rect = Rect::new(100.0, 100.0, 60.0, 24.0);
    let theme = PanelTheme::default();

    // Walk the pointer across the trigger, onto the panel, then away.
    let panel = render::layout(&tooltip, trigger_rect, &theme).panel;
    let path = [
        Point::new(10.0, 10.0),
        Point::new(120.0, 110.0),
        Point::new(panel.x + 5.0, panel.center_y()),
        Point::new(500.0, 400.0),
    ];

    for pos in path {
        if let Some(change) = render::observe_pointer(&mut tooltip, pos, trigger_rect, &theme) {
            tracing::info!(?change, visible = tooltip.panel_visible(), "pointer edge");
        }
        let out = render::render(&tooltip, trigger_rect, &theme);
        tracing::info!(
            opacity = out.panel_style.opacity,
            interactive = out.panel_style.interactive,
            commands = out.panel.commands.len(),
            "panel frame"
        );
    }

    Ok(())
}
