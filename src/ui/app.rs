//! Main application struct and eframe integration
//!
//! This module contains the RecipeApp that implements eframe::App.

use crate::ui::components::{FavoritesWindow, NoticePopup, RecipeView, SearchBar};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};
use std::time::Duration;
use tracing::info;

/// How often to check for provider events while a request is in flight
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main recipe workspace application
pub struct RecipeApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Thumbnail edge length in points
    thumbnail_size: f32,
}

impl RecipeApp {
    /// Create a new recipe application
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, thumbnail_size: f32) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        Self {
            state,
            theme,
            thumbnail_size,
        }
    }

    /// Show the top bar with the title and search controls
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(self.theme.bg_primary).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Recipe Workspace")
                        .size(20.0)
                        .strong()
                        .color(self.theme.accent),
                );
                ui.add_space(self.theme.spacing_sm);
                SearchBar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    /// Show the main content area (current recipe)
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                RecipeView::new(&self.state, &self.theme)
                    .thumbnail_size(self.thumbnail_size)
                    .show(ui);
            });
    }
}

impl eframe::App for RecipeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll backend events
        self.state.poll_events();
        self.state.upload_thumbnail(ctx);

        // Render UI
        self.show_header(ctx);
        self.show_content(ctx);
        FavoritesWindow::new(&mut self.state, &self.theme).show(ctx);
        NoticePopup::new(&mut self.state, &self.theme).show(ctx);

        // Events arrive from another thread, keep polling until the answer is in
        if self.state.needs_polling() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Recipe workspace shutting down");
        self.state.shutdown();
    }
}
