// Desktop entry point for the adoption browser
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod browse;
mod gallery;
mod toast;

use std::fs;
use std::path::PathBuf;

use adopt_core::Roster;
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Browse adoptable dogs")]
struct Cli {
    /// Load the dog roster from a JSON file instead of the built-in sample.
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let roster = load_roster(&cli)?;
    log::info!("roster loaded with {} dog(s)", roster.len());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Adopt a Dog"),
        ..Default::default()
    };

    eframe::run_native(
        "Adopt a Dog",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app::AdoptApp::new(cc, roster)))
        }),
    )
    .map_err(|error| anyhow::anyhow!("failed to run the desktop UI: {error}"))
}

fn load_roster(cli: &Cli) -> Result<Roster> {
    match &cli.roster {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read roster file {}", path.display()))?;
            Roster::from_json_str(&json)
                .with_context(|| format!("failed to parse roster file {}", path.display()))
        }
        None => Ok(Roster::sample()),
    }
}
