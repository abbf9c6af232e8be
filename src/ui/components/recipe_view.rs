//! Recipe display component
//!
//! Shows the current recipe's title, category and area, instructions, and
//! its thumbnail to the right.

use crate::recipes::Recipe;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, load::SizedTexture, RichText, Vec2};

pub struct RecipeView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
    thumbnail_size: f32,
}

impl<'a> RecipeView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            thumbnail_size: 220.0,
        }
    }

    pub fn thumbnail_size(mut self, size: f32) -> Self {
        self.thumbnail_size = size;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_primary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| match &self.state.current_recipe {
                Some(recipe) => {
                    ui.horizontal_top(|ui| {
                        let text_width = (ui.available_width() - self.thumbnail_size - self.theme.spacing).max(0.0);
                        ui.allocate_ui(Vec2::new(text_width, ui.available_height()), |ui| {
                            self.show_text(ui, recipe);
                        });
                        ui.add_space(self.theme.spacing_sm);
                        self.show_thumbnail(ui);
                    });
                }
                None => self.show_empty_state(ui),
            });
    }

    fn show_text(&self, ui: &mut egui::Ui, recipe: &Recipe) {
        egui::ScrollArea::vertical()
            .id_salt("recipe_text")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let title = ui.label(
                    RichText::new(recipe.name.to_uppercase())
                        .size(16.0)
                        .strong()
                        .color(self.theme.accent),
                );
                title.widget_info(|| {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Label,
                        true,
                        format!("Recipe: {}", recipe.name),
                    )
                });

                ui.label(
                    RichText::new(recipe.subtitle())
                        .size(12.0)
                        .color(self.theme.text_primary),
                );

                ui.add_space(self.theme.spacing_sm);

                ui.label(
                    RichText::new("INSTRUCTIONS:")
                        .size(13.0)
                        .strong()
                        .color(self.theme.accent),
                );
                ui.label(
                    RichText::new(&recipe.instructions)
                        .size(12.0)
                        .color(self.theme.text_primary),
                );
            });
    }

    fn show_thumbnail(&self, ui: &mut egui::Ui) {
        let size = Vec2::splat(self.thumbnail_size);
        match &self.state.thumbnail {
            Some(texture) => {
                ui.image(SizedTexture::new(texture.id(), size));
            }
            None => {
                // Keep the layout stable while the image loads or when there is none
                ui.allocate_space(size);
            }
        }
    }

    fn show_empty_state(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(self.theme.spacing_lg * 3.0);
            ui.label(
                RichText::new("Search by name or press RANDOM to get started.")
                    .size(14.0)
                    .color(self.theme.text_muted)
                    .italics(),
            );
        });
    }
}
