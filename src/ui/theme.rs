//! Theme and styling for the recipe workspace
//!
//! Dark charcoal panels with a teal accent.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Accent color (filter/save buttons, headings)
    pub accent: Color32,
    /// Hovered button fill
    pub hover: Color32,
    /// Destructive actions and error notices
    pub danger: Color32,
    /// Warning notices
    pub warning: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_muted: Color32,
    /// Text on hovered buttons
    pub text_on_hover: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards/panels
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(0x00, 0xAD, 0xB5), // Teal
            hover: Color32::from_rgb(0x00, 0xFF, 0xF5),  // Cyan
            danger: Color32::from_rgb(0xE9, 0x45, 0x60), // Rose
            warning: Color32::from_rgb(234, 179, 8),     // Yellow

            bg_primary: Color32::from_rgb(0x1A, 0x1A, 0x1A),
            bg_secondary: Color32::from_rgb(0x33, 0x33, 0x33),
            bg_tertiary: Color32::from_rgb(0x44, 0x44, 0x44),

            text_primary: Color32::from_rgb(0xEE, 0xEE, 0xEE),
            text_muted: Color32::from_rgb(156, 163, 175),
            text_on_hover: Color32::BLACK,

            button_rounding: Rounding::same(2.0),
            card_rounding: Rounding::same(8.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        // Panel backgrounds
        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_primary;
        visuals.extreme_bg_color = self.bg_secondary;

        // Widget colors
        visuals.widgets.noninteractive.bg_fill = self.bg_primary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.weak_bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::WHITE);

        // Buttons light up and switch to dark text on hover
        visuals.widgets.hovered.bg_fill = self.hover;
        visuals.widgets.hovered.weak_bg_fill = self.hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_on_hover);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.weak_bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_on_hover);

        // Text selection
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);

        visuals.hyperlink_color = self.accent;

        // Window styling
        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.bg_tertiary);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing_sm, 4.0);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(18.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(13.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(11.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(11.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}
