use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use rocket_lander::{GameConfig, GamePlugin, LevelOverride};

/// 2D rocket lander built on Bevy + Rapier.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Level id to start at (falls back to LEVEL_ID, then the config default).
    #[arg(long)]
    level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = GameConfig::load_from_file("assets/config/game.ron")
        .map_err(anyhow::Error::msg)
        .context("loading assets/config/game.ron")?;

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(LevelOverride(cli.level))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
