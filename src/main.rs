use anyhow::{Context, Result};
use clap::Parser;

use torus_snake::app::App;
use torus_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Classic snake on a wrapping grid, in your terminal")]
struct Cli {
    /// Playfield width in pixels; the grid is the screen size over the cell size
    #[arg(long, default_value = "640")]
    screen_width: u32,

    /// Playfield height in pixels
    #[arg(long, default_value = "480")]
    screen_height: u32,

    /// Side length of one grid cell in pixels
    #[arg(long, default_value = "20")]
    cell_size: u32,

    /// Game speed in ticks per second
    #[arg(long, default_value = "20")]
    tick_rate: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.screen_width, cli.screen_height, cli.cell_size, cli.tick_rate);
    config.validate().context("invalid configuration")?;

    App::new(config).run().await
}
