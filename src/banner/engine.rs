use raylib::prelude::*;

use crate::engine::*;
use crate::texture_loader::TextureCache;
use crate::view::{HeroView, PlacedSlide};

const OVERLAY_HEIGHT: f32 = 0.38; // Text overlay height relative to the window
const TEXT_MARGIN: i32 = 48;

pub struct BannerEngine;

impl Engine for BannerEngine {
    fn new() -> Self {
        Self
    }

    fn render_frame(&mut self, view: &HeroView<'_>, textures: &TextureCache, d: &mut RaylibDrawHandle) {
        let screen = Vector2::new(d.get_screen_width() as f32, d.get_screen_height() as f32);
        d.clear_background(BACKGROUND);

        let Some(focused) = view.focused() else {
            return;
        };
        draw_artwork(d, focused, textures, self.slide_rect(focused, screen));

        let overlay_top = screen.y * (1.0 - OVERLAY_HEIGHT);
        d.draw_rectangle(
            0,
            overlay_top as i32,
            screen.x as i32,
            (screen.y * OVERLAY_HEIGHT) as i32,
            with_opacity(Color::BLACK, 0.65),
        );

        let mut y = overlay_top as i32 + 24;
        if focused.slide.premium {
            draw_premium_badge(d, TEXT_MARGIN, y);
            y += 34;
        }
        if let Some(subtitle) = focused.slide.subtitle {
            d.draw_text(subtitle, TEXT_MARGIN, y, 20, Color::LIGHTGRAY);
            y += 28;
        }
        d.draw_text(focused.slide.title, TEXT_MARGIN, y, 40, Color::WHITE);
        y += 50;
        d.draw_text(&focused.slide.caption(), TEXT_MARGIN, y, 18, Color::LIGHTGRAY);
        y += 30;

        let max_chars = ((screen.x as i32 - TEXT_MARGIN * 2) / 10).max(20) as usize;
        for line in wrap(focused.slide.description, max_chars).iter().take(3) {
            d.draw_text(line, TEXT_MARGIN, y, 18, Color::RAYWHITE);
            y += 24;
        }

        draw_dots(d, &view.dots, screen.x * 0.5, screen.y - 24.0);
        if view.paused {
            draw_pause_badge(d, screen);
        }
    }

    fn slide_rect(&self, _placed: &PlacedSlide<'_>, screen: Vector2) -> Rectangle {
        Rectangle::new(0.0, 0.0, screen.x, screen.y)
    }
}

/// Greedy word wrap at `max_chars` characters per line.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap("a lighthouse keeper finds a map", 12);
        assert_eq!(lines, vec!["a lighthouse", "keeper finds", "a map"]);
    }

    #[test]
    fn empty_description_has_no_lines() {
        assert!(wrap("   ", 40).is_empty());
    }
}
