//! Winit application shell
//!
//! Owns the window, GPU renderer, and font system; routes key-down events
//! into the stage and redraws when the stage reports a change.

use crate::{
    font::{FontSystem, SharedFontSystem},
    gpu::GpuRenderer,
    input,
    render::{Renderer, Viewport},
    stage::Stage,
};
use std::path::PathBuf;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

pub struct App {
    // Winit/GPU infrastructure, created lazily in `resumed`
    window: Option<Arc<Window>>,
    gpu_renderer: Option<GpuRenderer>,
    font_system: Option<Arc<SharedFontSystem>>,
    renderer: Option<Renderer>,

    stage: Stage,

    // Settings
    window_title: String,
    font_size: f32,
    font_path: Option<PathBuf>,
}

impl App {
    /// Wrap a stage built by the bootstrap. The window takes the stage's
    /// canvas size.
    pub fn new(stage: Stage) -> Self {
        Self {
            window: None,
            gpu_renderer: None,
            font_system: None,
            renderer: None,
            stage,
            window_title: "typebox".to_string(),
            font_size: 14.0,
            font_path: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Use a specific font file instead of scanning system locations.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        // The font does not need a window; load it up front so setup
        // failures surface here instead of inside the event loop.
        let fonts = match &self.font_path {
            Some(path) => FontSystem::from_path(path)?,
            None => FontSystem::discover()?,
        };
        self.font_system = Some(Arc::new(SharedFontSystem::new(fonts)));

        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn render_frame(&mut self) {
        let (Some(window), Some(gpu_renderer), Some(renderer), Some(font_system)) = (
            &self.window,
            &mut self.gpu_renderer,
            &mut self.renderer,
            &self.font_system,
        ) else {
            return;
        };

        let size = window.inner_size();
        let scale_factor = window.scale_factor() as f32;
        let logical_width = size.width as f32 / scale_factor;
        let logical_height = size.height as f32 / scale_factor;
        renderer.update_viewport(logical_width, logical_height, scale_factor);

        let batches = renderer.render(&self.stage);

        // Re-upload in case layout rasterized new glyphs.
        let atlas_data = font_system.atlas_data();
        let (atlas_width, atlas_height) = font_system.atlas_size();
        gpu_renderer.upload_font_atlas(&atlas_data, atlas_width, atlas_height);

        gpu_renderer.render(&batches, (size.width as f32, size.height as f32));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (stage_width, stage_height) = self.stage.size();
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(&self.window_title)
                        .with_inner_size(winit::dpi::LogicalSize::new(stage_width, stage_height)),
                )
                .expect("failed to create window"),
        );

        let gpu_renderer = pollster::block_on(GpuRenderer::new(window.clone()))
            .expect("failed to initialize GPU renderer");

        let scale_factor = window.scale_factor() as f32;
        let font_system = self
            .font_system
            .clone()
            .expect("font system is loaded before the event loop runs");
        font_system.prerasterize_ascii(self.font_size * scale_factor);

        let atlas_data = font_system.atlas_data();
        let (atlas_width, atlas_height) = font_system.atlas_size();
        gpu_renderer.upload_font_atlas(&atlas_data, atlas_width, atlas_height);

        let renderer = Renderer::new(
            font_system,
            Viewport::new(stage_width, stage_height, scale_factor),
            self.font_size,
        );

        log::info!(
            "window up: {}x{} logical, scale {}",
            stage_width,
            stage_height,
            scale_factor
        );

        self.window = Some(window);
        self.gpu_renderer = Some(gpu_renderer);
        self.renderer = Some(renderer);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    // Auto-repeat accumulates too; the DOM host delivered
                    // repeated keydown events the same way.
                    if let Some(code) = input::key_code_of(&event.logical_key) {
                        if self.stage.dispatch_key_down(code) {
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(gpu_renderer) = &mut self.gpu_renderer {
                    gpu_renderer.resize(new_size);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
