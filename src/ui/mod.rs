//! GUI implementation with egui/eframe
//!
//! This module provides the desktop user interface for the recipe workspace.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::RecipeApp;
pub use state::{AppState, Notice, NoticeLevel};
pub use theme::Theme;

use crate::config::AppConfig;

/// Run the recipe workspace window until it is closed
pub fn run(config: &AppConfig, state: AppState) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    let thumbnail_size = config.thumbnail_size as f32;
    eframe::run_native(
        "Recipe Workspace",
        options,
        Box::new(move |cc| Ok(Box::new(RecipeApp::new(cc, state, thumbnail_size)))),
    )
}
