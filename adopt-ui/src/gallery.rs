use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use eframe::egui;

/// Resolves a record's opaque photo handle to a texture.
///
/// No image assets ship with the application; each handle gets a
/// deterministic placeholder tile, uploaded once and cached, so the same dog
/// always shows the same portrait.
#[derive(Default)]
pub struct Gallery {
    cache: HashMap<String, egui::TextureHandle>,
}

impl Gallery {
    pub fn texture(&mut self, ctx: &egui::Context, handle: &str) -> egui::TextureHandle {
        if let Some(texture) = self.cache.get(handle) {
            return texture.clone();
        }

        let image = placeholder_image(handle);
        let texture = ctx.load_texture(
            format!("photo-{handle}"),
            image,
            egui::TextureOptions::LINEAR,
        );
        self.cache.insert(handle.to_string(), texture.clone());
        log::debug!("gallery now caches {} photo(s)", self.cache.len());
        texture
    }
}

/// Placeholder portrait tile: diagonal two-tone banding in colors derived
/// from the handle.
pub fn placeholder_image(handle: &str) -> egui::ColorImage {
    const SIDE: usize = 64;

    let (base, accent) = placeholder_colors(handle);
    let mut pixels = Vec::with_capacity(SIDE * SIDE);
    for y in 0..SIDE {
        for x in 0..SIDE {
            let band = (x + y) / 8 % 2 == 0;
            pixels.push(if band { base } else { accent });
        }
    }

    egui::ColorImage {
        size: [SIDE, SIDE],
        pixels,
    }
}

/// Two mid-tone colors derived from the handle. Same handle, same colors.
pub fn placeholder_colors(handle: &str) -> (egui::Color32, egui::Color32) {
    let mut hasher = DefaultHasher::new();
    handle.hash(&mut hasher);
    let seed = hasher.finish();

    let r = (seed >> 16) as u8;
    let g = (seed >> 8) as u8;
    let b = seed as u8;

    let base = egui::Color32::from_rgb(r / 2 + 64, g / 2 + 64, b / 2 + 64);
    let accent = egui::Color32::from_rgb(r / 2 + 96, g / 2 + 96, b / 2 + 96);
    (base, accent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_handle_same_colors() {
        assert_eq!(placeholder_colors("jaycee"), placeholder_colors("jaycee"));
        assert_ne!(placeholder_colors("jaycee"), placeholder_colors("james"));
    }

    #[test]
    fn test_placeholder_image_dimensions() {
        let image = placeholder_image("jamie");
        assert_eq!(image.size, [64, 64]);
        assert_eq!(image.pixels.len(), 64 * 64);
    }

    #[test]
    fn test_texture_cached_per_handle() {
        let ctx = egui::Context::default();
        let mut gallery = Gallery::default();

        let first = gallery.texture(&ctx, "jaycee");
        let second = gallery.texture(&ctx, "jaycee");
        assert_eq!(first.id(), second.id());

        let other = gallery.texture(&ctx, "james");
        assert_ne!(first.id(), other.id());
    }
}
