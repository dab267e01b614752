use raylib::prelude::*;

use crate::texture_loader::TextureCache;
use crate::view::{Dot, HeroView, PlacedSlide};

pub const BACKGROUND: Color = Color::new(12, 12, 18, 255);
pub const ACCENT: Color = Color::new(229, 9, 20, 255);
const PLACEHOLDER: Color = Color::new(40, 44, 58, 255);

pub trait Engine {
    fn new() -> Self
    where
        Self: Sized;

    fn render_frame(&mut self, view: &HeroView<'_>, textures: &TextureCache, d: &mut RaylibDrawHandle);

    /// Screen-space rectangle of a placed slide.
    fn slide_rect(&self, placed: &PlacedSlide<'_>, screen: Vector2) -> Rectangle;

    /// Front-most visible slide under `point`.
    fn hit_test(&self, view: &HeroView<'_>, point: Vector2, screen: Vector2) -> Option<usize> {
        view.slides
            .iter()
            .rev()
            .find(|placed| self.slide_rect(placed, screen).check_collision_point_rec(point))
            .map(|placed| placed.index)
    }
}

pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8,
    )
}

/// Draws the slide artwork cropped to fill `dest`, or a placeholder card
/// with the title when no texture is available.
pub fn draw_artwork(d: &mut RaylibDrawHandle, placed: &PlacedSlide<'_>, textures: &TextureCache, dest: Rectangle) {
    let opacity = placed.transform.opacity;

    match textures.get(placed.slide.id) {
        Some(texture) => {
            let tex_width = texture.width() as f32;
            let tex_height = texture.height() as f32;
            let source = cover_source(tex_width, tex_height, dest.width / dest.height);
            d.draw_texture_pro(
                texture,
                source,
                dest,
                Vector2::new(0.0, 0.0),
                0.0,
                with_opacity(Color::WHITE, opacity),
            );
        }
        None => {
            d.draw_rectangle_rec(dest, with_opacity(PLACEHOLDER, opacity));
            d.draw_text(
                placed.slide.title,
                (dest.x + 12.0) as i32,
                (dest.y + dest.height - 36.0) as i32,
                20,
                with_opacity(Color::LIGHTGRAY, opacity),
            );
        }
    }
}

/// Source rectangle that crops a `tex_width` x `tex_height` texture to `aspect`.
pub fn cover_source(tex_width: f32, tex_height: f32, aspect: f32) -> Rectangle {
    if tex_width / tex_height > aspect {
        let width = tex_height * aspect;
        Rectangle::new((tex_width - width) * 0.5, 0.0, width, tex_height)
    } else {
        let height = tex_width / aspect;
        Rectangle::new(0.0, (tex_height - height) * 0.5, tex_width, height)
    }
}

pub fn draw_dots(d: &mut RaylibDrawHandle, dots: &[Dot], center_x: f32, y: f32) {
    const SPACING: f32 = 18.0;
    let start = center_x - (dots.len().saturating_sub(1) as f32 * SPACING) * 0.5;
    for dot in dots {
        let x = start + dot.index as f32 * SPACING;
        let (radius, color) = if dot.active { (6.0, ACCENT) } else { (4.0, Color::GRAY) };
        d.draw_circle(x as i32, y as i32, radius, color);
    }
}

pub fn draw_pause_badge(d: &mut RaylibDrawHandle, screen: Vector2) {
    let x = screen.x as i32 - 110;
    d.draw_rectangle(x, 20, 90, 30, with_opacity(Color::BLACK, 0.6));
    d.draw_text("PAUSED", x + 12, 26, 18, Color::WHITE);
}

pub fn draw_premium_badge(d: &mut RaylibDrawHandle, x: i32, y: i32) {
    d.draw_rectangle(x, y, 86, 24, Color::GOLD);
    d.draw_text("PREMIUM", x + 8, y + 5, 14, Color::BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_crops_wide_textures_horizontally() {
        let source = cover_source(2000.0, 1000.0, 1.0);
        assert_eq!(source.width, 1000.0);
        assert_eq!(source.height, 1000.0);
        assert_eq!(source.x, 500.0);
        assert_eq!(source.y, 0.0);
    }

    #[test]
    fn cover_crops_tall_textures_vertically() {
        let source = cover_source(1000.0, 3000.0, 0.5);
        assert_eq!(source.width, 1000.0);
        assert_eq!(source.height, 2000.0);
        assert_eq!(source.y, 500.0);
    }

    #[test]
    fn opacity_scales_alpha() {
        assert_eq!(with_opacity(Color::WHITE, 0.0).a, 0);
        assert_eq!(with_opacity(Color::WHITE, 1.0).a, 255);
        assert_eq!(with_opacity(Color::WHITE, 2.0).a, 255);
        assert_eq!(with_opacity(Color::new(0, 0, 0, 200), 0.5).a, 100);
    }
}
