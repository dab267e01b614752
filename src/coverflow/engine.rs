use raylib::prelude::*;

use crate::engine::*;
use crate::texture_loader::TextureCache;
use crate::view::{HeroView, PlacedSlide};

const CARD_HEIGHT_RATIO: f32 = 0.58; // Focused card height relative to the window
const CARD_ASPECT: f32 = 0.68;       // Poster width / height
const CARD_CENTER_Y: f32 = 0.42;     // Vertical centre of the cards relative to the window

pub struct CoverflowEngine;

impl Engine for CoverflowEngine {
    fn new() -> Self {
        Self
    }

    fn render_frame(&mut self, view: &HeroView<'_>, textures: &TextureCache, d: &mut RaylibDrawHandle) {
        let screen = Vector2::new(d.get_screen_width() as f32, d.get_screen_height() as f32);
        d.clear_background(BACKGROUND);

        // Back to front, the presenter already sorted by z-order
        for placed in view.slides.iter() {
            let dest = self.slide_rect(placed, screen);
            draw_artwork(d, placed, textures, dest);
        }

        if let Some(focused) = view.focused() {
            let card = self.slide_rect(focused, screen);
            if focused.slide.premium {
                draw_premium_badge(d, card.x as i32 + 10, card.y as i32 + 10);
            }

            let caption_y = (card.y + card.height + 24.0) as i32;
            let title_width = measure_text(focused.slide.title, 32);
            d.draw_text(focused.slide.title, (screen.x as i32 - title_width) / 2, caption_y, 32, Color::WHITE);

            let caption = focused.slide.caption();
            let caption_width = measure_text(&caption, 18);
            d.draw_text(&caption, (screen.x as i32 - caption_width) / 2, caption_y + 40, 18, Color::LIGHTGRAY);
        }

        draw_dots(d, &view.dots, screen.x * 0.5, screen.y - 30.0);
        if view.paused {
            draw_pause_badge(d, screen);
        }
    }

    fn slide_rect(&self, placed: &PlacedSlide<'_>, screen: Vector2) -> Rectangle {
        let transform = &placed.transform;
        let height = screen.y * CARD_HEIGHT_RATIO * transform.scale;
        // Rotation around the vertical axis, drawn as horizontal foreshortening
        let width = screen.y * CARD_HEIGHT_RATIO * CARD_ASPECT * transform.scale * transform.rotation.to_radians().cos();
        let center_x = screen.x * 0.5 + transform.offset;
        let center_y = screen.y * CARD_CENTER_Y;
        Rectangle::new(center_x - width * 0.5, center_y - height * 0.5, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use crate::presenter::Presenter;
    use crate::actions::NoActions;
    use crate::slide::{Details, Slide};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn presenter(n: usize) -> Presenter<NoActions> {
        let items: Arc<[Slide]> = (0..n)
            .map(|i| Slide::Podcast {
                details: Details {
                    id: format!("p{}", i),
                    title: format!("Episode {}", i),
                    description: String::new(),
                    image: PathBuf::from("missing.jpg"),
                    premium: false,
                },
                host: None,
                length_minutes: None,
            })
            .collect();
        Presenter::new(items, Layout::default(), NoActions)
    }

    #[test]
    fn focused_card_is_centered_and_largest() {
        let p = presenter(5);
        let view = p.view(1280.0).unwrap();
        let screen = Vector2::new(1280.0, 720.0);
        let engine = CoverflowEngine::new();
        let focused = engine.slide_rect(view.focused().unwrap(), screen);
        assert!((focused.x + focused.width * 0.5 - 640.0).abs() < 1e-3);
        for placed in view.slides.iter().filter(|s| s.index != view.current) {
            let rect = engine.slide_rect(placed, screen);
            assert!(rect.height < focused.height);
            assert!(rect.width < focused.width);
        }
    }

    #[test]
    fn clicks_hit_the_front_most_card() {
        let p = presenter(5);
        let view = p.view(1280.0).unwrap();
        let screen = Vector2::new(1280.0, 720.0);
        let engine = CoverflowEngine::new();
        assert_eq!(engine.hit_test(&view, Vector2::new(640.0, 300.0), screen), Some(0));
        assert_eq!(engine.hit_test(&view, Vector2::new(640.0 + 280.0, 300.0), screen), Some(1));
        assert_eq!(engine.hit_test(&view, Vector2::new(640.0 - 280.0, 300.0), screen), Some(4));
        assert_eq!(engine.hit_test(&view, Vector2::new(5.0, 5.0), screen), None);
    }
}
