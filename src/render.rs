//! CPU render pass - turns stage state into GPU-ready batches

use crate::font::SharedFontSystem;
use crate::stage::Stage;
use std::sync::Arc;

/// Logical viewport plus the window scale factor.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    pub fn physical_size(&self) -> (f32, f32) {
        (self.width * self.scale_factor, self.height * self.scale_factor)
    }
}

/// One glyph quad, in physical pixels.
#[derive(Clone, Copy, Debug)]
pub struct GlyphInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Packed RGBA, 0xRRGGBBAA.
    pub color: u32,
    /// [u0, v0, u1, v1] in the atlas.
    pub tex_coords: [f32; 4],
}

/// Batched draw call for the GPU layer.
pub enum BatchedDraw {
    GlyphBatch { instances: Vec<GlyphInstance> },
}

pub const TEXT_COLOR: u32 = 0xFFFFFFFF;

/// Lays out every entity's text and positions the glyphs on the viewport.
pub struct Renderer {
    font_system: Arc<SharedFontSystem>,
    viewport: Viewport,
    font_size: f32,
}

impl Renderer {
    pub fn new(font_system: Arc<SharedFontSystem>, viewport: Viewport, font_size: f32) -> Self {
        Self {
            font_system,
            viewport,
            font_size,
        }
    }

    pub fn update_viewport(&mut self, width: f32, height: f32, scale_factor: f32) {
        self.viewport = Viewport::new(width, height, scale_factor);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Produce the draw batches for the current stage state.
    pub fn render(&self, stage: &Stage) -> Vec<BatchedDraw> {
        let scale = self.viewport.scale_factor;
        let mut instances = Vec::new();

        for ((x, y), text) in stage.text_items() {
            if text.is_empty() {
                continue;
            }
            let layout = self
                .font_system
                .layout_text_scaled(text, self.font_size, scale);
            // Layout positions are physical; the entity offset is logical.
            for glyph in &layout.glyphs {
                instances.push(GlyphInstance {
                    x: x * scale + glyph.x,
                    y: y * scale + glyph.y,
                    width: glyph.width,
                    height: glyph.height,
                    color: TEXT_COLOR,
                    tex_coords: glyph.tex_coords,
                });
            }
        }

        if instances.is_empty() {
            Vec::new()
        } else {
            vec![BatchedDraw::GlyphBatch { instances }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_scales_to_physical() {
        let viewport = Viewport::new(500.0, 350.0, 2.0);
        assert_eq!(viewport.physical_size(), (1000.0, 700.0));
    }

    #[test]
    fn empty_stage_renders_no_batches() {
        let Ok(fonts) = crate::font::FontSystem::discover() else {
            return;
        };
        let fonts = Arc::new(SharedFontSystem::new(fonts));
        let renderer = Renderer::new(fonts, Viewport::new(500.0, 350.0, 1.0), 14.0);

        let stage = Stage::new(500.0, 350.0);
        assert!(renderer.render(&stage).is_empty());
    }

    #[test]
    fn typed_text_produces_offset_glyph_instances() {
        let Ok(fonts) = crate::font::FontSystem::discover() else {
            return;
        };
        let fonts = Arc::new(SharedFontSystem::new(fonts));
        let renderer = Renderer::new(fonts, Viewport::new(500.0, 350.0, 1.0), 14.0);

        let mut stage = Stage::new(500.0, 350.0);
        stage.spawn_text(100.0, 100.0);
        stage.dispatch_key_down(crate::keys::A);
        stage.dispatch_key_down(crate::keys::B);

        let batches = renderer.render(&stage);
        assert_eq!(batches.len(), 1);
        let BatchedDraw::GlyphBatch { instances } = &batches[0];
        assert_eq!(instances.len(), 2);
        // Entity offset applies to every glyph.
        assert!(instances.iter().all(|g| g.x >= 100.0 && g.y >= 100.0));
        assert!(instances[1].x > instances[0].x);
    }
}
