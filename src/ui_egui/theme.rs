//! Theme module for the egui picker view
//!
//! Maps the configured accent colour onto the handful of colours the popup
//! and day cells are drawn with.

use egui::Color32;

use crate::models::settings::ThemeColor;

#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Fill of the range start/end cells
    pub accent: Color32,

    /// Fill of days strictly inside the range
    pub range_fill: Color32,

    /// Text drawn on the accent fill
    pub endpoint_text: Color32,

    /// Outline of today's cell
    pub today_border: Color32,

    pub popup_background: Color32,
    pub app_background: Color32,
    pub text_primary: Color32,

    /// Days outside the month or the allowed bounds
    pub text_muted: Color32,
}

impl PickerTheme {
    pub fn for_color(color: ThemeColor) -> Self {
        let accent = Self::accent_color(color);
        Self {
            accent,
            range_fill: Self::lighten(accent, 0.75),
            endpoint_text: Color32::WHITE,
            today_border: Self::darken(accent, 0.3),
            popup_background: Color32::from_rgb(255, 255, 255),
            app_background: Color32::from_rgb(245, 245, 245),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_muted: Color32::from_rgb(170, 170, 170),
        }
    }

    pub fn accent_color(color: ThemeColor) -> Color32 {
        match color {
            ThemeColor::Green => Color32::from_rgb(64, 192, 87),
            ThemeColor::Teal => Color32::from_rgb(18, 184, 134),
            ThemeColor::Grape => Color32::from_rgb(190, 75, 219),
            ThemeColor::Red => Color32::from_rgb(250, 82, 82),
            ThemeColor::Gray => Color32::from_rgb(134, 142, 150),
        }
    }

    /// Mix towards white by `amount` (0.0 keeps the colour, 1.0 is white)
    pub fn lighten(color: Color32, amount: f32) -> Color32 {
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round().min(255.0) as u8;
        Color32::from_rgb(mix(color.r()), mix(color.g()), mix(color.b()))
    }

    /// Mix towards black by `amount`
    pub fn darken(color: Color32, amount: f32) -> Color32 {
        let mix = |c: u8| (c as f32 * (1.0 - amount)).round().max(0.0) as u8;
        Color32::from_rgb(mix(color.r()), mix(color.g()), mix(color.b()))
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = self.popup_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = egui::Stroke::new(1.0, self.endpoint_text);
        visuals.widgets.hovered.bg_fill = self.range_fill;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self::for_color(ThemeColor::default())
    }
}
