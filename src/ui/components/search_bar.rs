//! Search bar component
//!
//! Provides the name search box, the category dropdown and the action
//! buttons along the top of the window.

use crate::recipes::Category;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Color32, Key, RichText, Vec2};

const BUTTON_SIZE: Vec2 = Vec2::new(72.0, 24.0);

/// Which fill a toolbar button uses when idle
#[derive(Clone, Copy)]
enum ButtonStyle {
    Plain,
    Accent,
    Gray,
}

/// Search bar component for recipe lookups
pub struct SearchBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.show_search_input(ui);
            self.show_category_picker(ui);

            ui.add_space(self.theme.spacing_sm);

            if self.button(ui, "SEARCH", ButtonStyle::Plain, true).clicked() {
                self.state.run_search();
            }
            if self.button(ui, "RANDOM", ButtonStyle::Plain, true).clicked() {
                self.state.run_random();
            }
            if self.button(ui, "FILTER", ButtonStyle::Accent, true).clicked() {
                self.state.run_filter();
            }
            if self.button(ui, "MY LIST", ButtonStyle::Gray, true).clicked() {
                self.state.open_favorites();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let can_save = self.state.current_recipe.is_some();
            if self.button(ui, "SAVE", ButtonStyle::Accent, can_save).clicked() {
                self.state.save_favorite();
            }

            if self.state.is_loading() {
                ui.spinner();
                ui.label(
                    RichText::new("Fetching recipe...")
                        .size(11.0)
                        .color(self.theme.text_muted),
                );
            }
        });
    }

    fn show_search_input(&mut self, ui: &mut egui::Ui) {
        let text_edit = egui::TextEdit::singleline(&mut self.state.search_text)
            .hint_text("Food name")
            .desired_width(140.0)
            .text_color(Color32::WHITE)
            .id(egui::Id::new("search_input"));

        let response = ui.add(text_edit);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Search recipes")
        });

        // Enter in the box runs the search
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            self.state.run_search();
        }
    }

    fn show_category_picker(&mut self, ui: &mut egui::Ui) {
        let selected_text = self
            .state
            .selected_category
            .map(|c| c.as_str())
            .unwrap_or("Select Category");

        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(selected_text)
            .width(120.0)
            .show_ui(ui, |ui| {
                for category in Category::ALL {
                    ui.selectable_value(
                        &mut self.state.selected_category,
                        Some(category),
                        category.as_str(),
                    );
                }
            });
    }

    fn button(&self, ui: &mut egui::Ui, text: &str, style: ButtonStyle, enabled: bool) -> egui::Response {
        let fill = match style {
            ButtonStyle::Plain => self.theme.bg_tertiary,
            ButtonStyle::Accent => self.theme.accent,
            ButtonStyle::Gray => self.theme.bg_secondary,
        };

        // Only the idle fill changes; hovered buttons use the theme's hover colors
        ui.scope(|ui| {
            let widgets = &mut ui.visuals_mut().widgets;
            widgets.inactive.bg_fill = fill;
            widgets.inactive.weak_bg_fill = fill;

            let button = egui::Button::new(RichText::new(text).strong())
                .min_size(BUTTON_SIZE)
                .rounding(self.theme.button_rounding);

            ui.add_enabled(enabled, button)
                .on_hover_cursor(egui::CursorIcon::PointingHand)
        })
        .inner
    }
}
