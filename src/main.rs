mod app;
mod core;
mod error;
mod input;
mod rendering;
mod state;
mod ui;

use macroquad::prelude::*;

use crate::core::{CANVAS_HEIGHT, CANVAS_WIDTH, PALETTE_STRIP_WIDTH};

fn window_conf() -> Conf {
    Conf {
        window_title: "tilemapper".to_owned(),
        window_width: CANVAS_WIDTH + PALETTE_STRIP_WIDTH as i32,
        window_height: CANVAS_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = app::run().await {
        error!("fatal: {}", err);
    }
}
