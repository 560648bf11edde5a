//! Typing canvas - main entry point
//!
//! Builds the stage explicitly and hands it to the app shell; there is no
//! ambient engine state.

use typebox::{App, Stage};

const CANVAS_WIDTH: f32 = 500.0;
const CANVAS_HEIGHT: f32 = 350.0;
const TEXT_X: f32 = 100.0;
const TEXT_Y: f32 = 100.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut stage = Stage::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    stage.spawn_text(TEXT_X, TEXT_Y);

    App::new(stage).with_title("typebox").run()
}
