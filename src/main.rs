mod app;
mod engine;
mod logging;
mod renderer;

use std::path::PathBuf;

use anyhow::Context;
use app::LanderApp;
use clap::Parser;
use engine::window::GameWindow;

const WINDOW_TITLE: &str = "Lunar Lander!";
const BASE_WIDTH: u32 = 640;
const BASE_HEIGHT: u32 = 480;

#[derive(Parser)]
#[command(name = "lander", about = "Steer the witch onto the rocky platform")]
struct Args {
    /// Directory holding the sprite images
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Print debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Multiply the 640x480 window size
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=4))]
    window_scale: u32,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let sdl = sdl2::init()
        .map_err(anyhow::Error::msg)
        .context("failed to init SDL2")?;
    let window = GameWindow::new(
        &sdl,
        WINDOW_TITLE,
        BASE_WIDTH * args.window_scale,
        BASE_HEIGHT * args.window_scale,
    )
    .context("failed to create window")?;

    let mut app = LanderApp::new(&args.assets)?;
    app.run(&sdl, &window)
}
