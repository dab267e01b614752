use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

use crate::slide::Slide;

// --- Read EXIF orientation (JPEG only) ---
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&orientation) = values.first() {
                        return orientation;
                    }
                }
            }
            1
        }
        Err(e) => {
            // Non-critical: draw the image as stored
            log::warn!("could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read image {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1 // Default: no rotation
    };

    // Provide extension hint for loading from memory
    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode image {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are drawn as stored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        log::debug!("applied EXIF orientation {} to {}", orientation, image_path.display());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}

/// Slide artwork keyed by slide id.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<String, Texture2D>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads artwork for every slide not cached yet. Slides whose image
    /// can't be loaded are skipped and drawn as placeholders.
    pub fn load_missing(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, slides: &[Slide]) {
        for slide in slides {
            if self.textures.contains_key(slide.id()) {
                continue;
            }
            let path = &slide.details().image;
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => {
                    self.textures.insert(slide.id().to_string(), texture);
                }
                Err(e) => log::warn!("slide {}: {:#}", slide.id(), e),
            }
        }
        log::debug!("{} of {} slide textures loaded", self.textures.len(), slides.len());
    }

    pub fn get(&self, id: &str) -> Option<&Texture2D> {
        self.textures.get(id)
    }
}
