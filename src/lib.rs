#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod app;
pub mod entity;
pub mod font;
pub mod gpu;
pub mod input;
pub mod keys;
pub mod render;
pub mod stage;

// Re-export core types
pub use app::App;
pub use entity::{KeyInput, Position2d, TextDisplay, TextEntity};
pub use font::{FontError, FontSystem, SharedFontSystem};
pub use render::{Renderer, Viewport};
pub use stage::{EntityId, Stage};
