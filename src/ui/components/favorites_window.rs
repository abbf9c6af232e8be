//! Favorites window
//!
//! Lists saved recipe names. Click selects, double-click loads the recipe,
//! and the remove button deletes the selection.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Color32, RichText};

/// What the user did in the window this frame
enum FavoritesAction {
    Select(usize),
    Load(usize),
    RemoveSelected,
}

pub struct FavoritesWindow<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> FavoritesWindow<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        if !self.state.show_favorites {
            return;
        }

        let mut open = true;
        let mut action = None;
        let favorites = &self.state.favorites;
        let selected = self.state.selected_favorite;
        let theme = self.theme;

        egui::Window::new("My Favorites")
            .open(&mut open)
            .default_size([300.0, 450.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Double-click to load recipe")
                            .size(11.0)
                            .color(theme.accent),
                    );
                });

                egui::Frame::none()
                    .fill(theme.bg_secondary)
                    .rounding(theme.card_rounding)
                    .inner_margin(theme.spacing_sm)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("favorites_list")
                            .max_height(340.0)
                            .auto_shrink([false, true])
                            .show(ui, |ui| {
                                if favorites.is_empty() {
                                    ui.label(
                                        RichText::new("No favorites yet.")
                                            .italics()
                                            .color(theme.text_muted),
                                    );
                                }
                                for (i, name) in favorites.iter().enumerate() {
                                    let response = ui.selectable_label(selected == Some(i), name.as_str());
                                    if response.double_clicked() {
                                        action = Some(FavoritesAction::Load(i));
                                    } else if response.clicked() {
                                        action = Some(FavoritesAction::Select(i));
                                    }
                                }
                            });
                    });

                ui.add_space(theme.spacing_sm);

                let remove = egui::Button::new(
                    RichText::new("REMOVE SELECTED").strong().color(Color32::WHITE),
                )
                .fill(theme.danger)
                .rounding(theme.button_rounding)
                .min_size(egui::vec2(ui.available_width(), 28.0));

                if ui.add_enabled(selected.is_some(), remove).clicked() {
                    action = Some(FavoritesAction::RemoveSelected);
                }
            });

        if !open {
            self.state.show_favorites = false;
            self.state.selected_favorite = None;
        }

        match action {
            Some(FavoritesAction::Select(i)) => self.state.selected_favorite = Some(i),
            Some(FavoritesAction::Load(i)) => self.state.load_favorite(i),
            Some(FavoritesAction::RemoveSelected) => self.state.remove_selected_favorite(),
            None => {}
        }
    }
}
