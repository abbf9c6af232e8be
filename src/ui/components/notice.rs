//! Notice popup
//!
//! A small centered window for informational, warning and error messages.

use crate::ui::state::{AppState, NoticeLevel};
use crate::ui::theme::Theme;
use egui::{self, Align2, Color32, RichText};

pub struct NoticePopup<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> NoticePopup<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let Some(notice) = &self.state.notice else {
            return;
        };

        let (icon, color) = match notice.level {
            NoticeLevel::Info => ("ℹ", self.theme.accent),
            NoticeLevel::Warning => ("⚠", self.theme.warning),
            NoticeLevel::Error => ("✖", self.theme.danger),
        };

        let mut dismissed = false;

        egui::Window::new(RichText::new(&notice.title).strong())
            .id(egui::Id::new("notice_popup"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(20.0).color(color));
                    let body = ui.label(RichText::new(&notice.body).color(self.theme.text_primary));
                    body.widget_info(|| {
                        egui::WidgetInfo::labeled(
                            egui::WidgetType::Label,
                            true,
                            format!("Notice: {}", notice.body),
                        )
                    });
                });

                ui.add_space(self.theme.spacing_sm);

                ui.vertical_centered(|ui| {
                    let ok = egui::Button::new(RichText::new("OK").color(Color32::WHITE))
                        .fill(color)
                        .rounding(self.theme.button_rounding)
                        .min_size(egui::vec2(64.0, 24.0));
                    if ui.add(ok).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.state.dismiss_notice();
        }
    }
}
