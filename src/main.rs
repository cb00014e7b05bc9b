use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use boxlink::config::EditorConfig;
use boxlink::egui_app::EditorApp;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive node-link diagram editor", long_about = None)]
struct Cli {
    /// Initial field width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Initial field height in pixels
    #[arg(long)]
    height: Option<i32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = EditorConfig::default();
    if let Some(width) = cli.width {
        config.field_max_width = width;
    }
    if let Some(height) = cli.height {
        config.field_max_height = height;
    }

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title("World of Rectangles")
        .with_position(eframe::egui::pos2(
            config.window_x as f32,
            config.window_y as f32,
        ))
        .with_inner_size(eframe::egui::vec2(
            config.field_max_width as f32,
            config.field_max_height as f32,
        ))
        .with_min_inner_size(eframe::egui::vec2(
            config.field_min_width as f32,
            config.field_min_height as f32,
        ))
        .with_max_inner_size(eframe::egui::vec2(
            config.field_max_width as f32,
            config.field_max_height as f32,
        ));
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "World of Rectangles",
        options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new(config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start editor: {err}"))
}
