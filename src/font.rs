//! Font loading, glyph rasterization, and atlas management
//!
//! One font, one R8 atlas, one cache. The crate ships no font binary, so the
//! font comes from an explicit path or from a scan of well-known system
//! locations.

use fontdue::layout::{CoordinateSystem, Layout, TextStyle};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Candidate monospace fonts checked by [`FontSystem::discover`].
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
    "/Library/Fonts/SF-Mono-Regular.otf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse font {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
    #[error("no usable monospace font found in the standard system locations")]
    NotFound,
}

/// A positioned glyph ready for instancing, in font-layout pixels.
#[derive(Clone, Debug)]
pub struct PositionedGlyph {
    pub char: char,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Texture coordinates in the atlas: [u0, v0, u1, v1].
    pub tex_coords: [f32; 4],
}

/// Layout result for one run of text.
pub struct TextLayout {
    pub glyphs: Vec<PositionedGlyph>,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug)]
struct GlyphEntry {
    tex_coords: [f32; 4],
    width: f32,
    height: f32,
    advance: f32,
}

/// Rasterizes glyphs into a single-channel atlas with a row-cursor packer.
pub struct FontSystem {
    font: fontdue::Font,
    layout: Layout,
    atlas_data: Vec<u8>,
    atlas_size: (u32, u32),
    /// (char, size in px) -> atlas entry
    glyph_cache: HashMap<(char, u32), GlyphEntry>,
    next_x: u32,
    next_y: u32,
    row_height: u32,
}

impl std::fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSystem")
            .field("atlas_size", &self.atlas_size)
            .field("glyph_cache", &self.glyph_cache)
            .field("next_x", &self.next_x)
            .field("next_y", &self.next_y)
            .field("row_height", &self.row_height)
            .finish_non_exhaustive()
    }
}

impl FontSystem {
    pub fn from_bytes(bytes: &[u8], origin: &Path) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(
            |reason| FontError::Parse {
                path: origin.to_path_buf(),
                reason: reason.to_string(),
            },
        )?;

        let atlas_size = (2048, 2048);
        Ok(Self {
            font,
            layout: Layout::new(CoordinateSystem::PositiveYDown),
            atlas_data: vec![0; (atlas_size.0 * atlas_size.1) as usize],
            atlas_size,
            glyph_cache: HashMap::new(),
            next_x: 0,
            next_y: 0,
            row_height: 0,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, path)
    }

    /// Try the well-known system font locations in order.
    pub fn discover() -> Result<Self, FontError> {
        for candidate in SYSTEM_FONT_PATHS {
            let path = Path::new(candidate);
            if path.exists() {
                match Self::from_path(path) {
                    Ok(fonts) => {
                        log::info!("using font {}", path.display());
                        return Ok(fonts);
                    }
                    Err(err) => log::warn!("skipping font {}: {}", path.display(), err),
                }
            }
        }
        Err(FontError::NotFound)
    }

    /// Lay out one run of text at a pixel size. Positions come back in
    /// layout pixels at that size; the caller applies any entity offset.
    pub fn layout_text(&mut self, text: &str, font_size_px: f32) -> TextLayout {
        self.layout.clear();
        self.layout
            .append(&[&self.font], &TextStyle::new(text, font_size_px, 0));

        let glyph_info: Vec<_> = self
            .layout
            .glyphs()
            .iter()
            .map(|g| (g.parent, g.x, g.y))
            .collect();

        let mut glyphs = Vec::with_capacity(glyph_info.len());
        let mut max_x = 0.0f32;
        let mut max_y = 0.0f32;

        for (ch, x, y) in glyph_info {
            if ch.is_control() {
                continue;
            }
            let entry = self.get_or_rasterize(ch, font_size_px as u32);
            glyphs.push(PositionedGlyph {
                char: ch,
                x,
                y,
                width: entry.width,
                height: entry.height,
                tex_coords: entry.tex_coords,
            });
            max_x = max_x.max(x + entry.advance);
            max_y = max_y.max(y + entry.height);
        }

        TextLayout {
            glyphs,
            width: max_x,
            height: max_y,
        }
    }

    fn get_or_rasterize(&mut self, ch: char, size_px: u32) -> GlyphEntry {
        let key = (ch, size_px);
        if let Some(&entry) = self.glyph_cache.get(&key) {
            return entry;
        }

        let (metrics, bitmap) = self.font.rasterize(ch, size_px as f32);

        // Wrap to the next atlas row when the current one is full.
        if self.next_x + metrics.width as u32 > self.atlas_size.0 {
            self.next_x = 0;
            self.next_y += self.row_height;
            self.row_height = 0;
        }

        // Atlas exhausted: draw nothing for this glyph but keep advancing.
        if self.next_y + metrics.height as u32 > self.atlas_size.1 {
            log::warn!("glyph atlas full, dropping {:?}@{}px", ch, size_px);
            return GlyphEntry {
                tex_coords: [0.0, 0.0, 0.0, 0.0],
                width: 0.0,
                height: 0.0,
                advance: metrics.advance_width,
            };
        }

        for y in 0..metrics.height {
            for x in 0..metrics.width {
                let atlas_idx = ((self.next_y + y as u32) * self.atlas_size.0
                    + (self.next_x + x as u32)) as usize;
                let bitmap_idx = y * metrics.width + x;
                if atlas_idx < self.atlas_data.len() && bitmap_idx < bitmap.len() {
                    self.atlas_data[atlas_idx] = bitmap[bitmap_idx];
                }
            }
        }

        let u0 = self.next_x as f32 / self.atlas_size.0 as f32;
        let v0 = self.next_y as f32 / self.atlas_size.1 as f32;
        let u1 = (self.next_x + metrics.width as u32) as f32 / self.atlas_size.0 as f32;
        let v1 = (self.next_y + metrics.height as u32) as f32 / self.atlas_size.1 as f32;

        let entry = GlyphEntry {
            tex_coords: [u0, v0, u1, v1],
            width: metrics.width as f32,
            height: metrics.height as f32,
            advance: metrics.advance_width,
        };

        // 1px padding between atlas slots
        self.next_x += metrics.width as u32 + 1;
        self.row_height = self.row_height.max(metrics.height as u32 + 1);

        self.glyph_cache.insert(key, entry);
        entry
    }

    /// Warm the cache with printable ASCII at a pixel size.
    pub fn prerasterize_ascii(&mut self, font_size_px: f32) {
        for ch in ' '..='~' {
            self.get_or_rasterize(ch, font_size_px as u32);
        }
    }

    pub fn atlas_data(&self) -> &[u8] {
        &self.atlas_data
    }

    pub fn atlas_size(&self) -> (u32, u32) {
        self.atlas_size
    }
}

/// Thread-safe wrapper shared between the renderer and the app shell.
pub struct SharedFontSystem {
    inner: Arc<Mutex<FontSystem>>,
}

impl SharedFontSystem {
    pub fn new(fonts: FontSystem) -> Self {
        Self {
            inner: Arc::new(Mutex::new(fonts)),
        }
    }

    /// Lay out text at a logical size for a given scale factor. Glyph
    /// positions come back in physical pixels.
    pub fn layout_text_scaled(
        &self,
        text: &str,
        logical_font_size: f32,
        scale_factor: f32,
    ) -> TextLayout {
        self.inner
            .lock()
            .layout_text(text, logical_font_size * scale_factor)
    }

    pub fn prerasterize_ascii(&self, font_size_px: f32) {
        self.inner.lock().prerasterize_ascii(font_size_px);
    }

    pub fn atlas_data(&self) -> Vec<u8> {
        self.inner.lock().atlas_data.clone()
    }

    pub fn atlas_size(&self) -> (u32, u32) {
        self.inner.lock().atlas_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Font-backed tests only run where a system font can be found; the
    // crate bundles none.
    fn discovered() -> Option<FontSystem> {
        FontSystem::discover().ok()
    }

    #[test]
    fn missing_font_file_is_a_read_error() {
        let err = FontSystem::from_path(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = FontSystem::from_bytes(&[0u8; 16], Path::new("garbage.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }));
    }

    #[test]
    fn layout_positions_one_glyph_per_character() {
        let Some(mut fonts) = discovered() else {
            return;
        };
        let layout = fonts.layout_text("A1B", 14.0);
        assert_eq!(layout.glyphs.len(), 3);
        assert_eq!(layout.glyphs[0].char, 'A');
        assert!(layout.width > 0.0);
        // Later glyphs sit further right.
        assert!(layout.glyphs[2].x > layout.glyphs[0].x);
    }

    #[test]
    fn rasterized_glyphs_land_in_the_atlas() {
        let Some(mut fonts) = discovered() else {
            return;
        };
        fonts.layout_text("W", 28.0);
        let non_zero = fonts.atlas_data().iter().filter(|&&p| p > 0).count();
        assert!(non_zero > 0);
        assert_eq!(fonts.atlas_size(), (2048, 2048));
    }

    #[test]
    fn glyph_cache_is_stable_across_layouts() {
        let Some(mut fonts) = discovered() else {
            return;
        };
        let first = fonts.layout_text("Z", 14.0);
        let second = fonts.layout_text("Z", 14.0);
        assert_eq!(
            first.glyphs[0].tex_coords,
            second.glyphs[0].tex_coords
        );
    }
}
