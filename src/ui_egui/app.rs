use std::cell::RefCell;
use std::rc::Rc;

use crate::models::range::DateRange;
use crate::models::settings::{PickerOptions, ThemeColor, WeekStart};
use crate::services::picker::{DateRangePicker, PickerEvent};
use crate::services::settings::SettingsService;
use crate::ui_egui::picker_view::show_range_picker;
use crate::ui_egui::theme::PickerTheme;

/// Demo host for the range picker.
///
/// Owns the picker, mirrors its emitted range into a status line and lets
/// the user change and save the accent colour and week start.
pub struct RangePickerApp {
    picker: DateRangePicker,
    theme: PickerTheme,
    settings: Option<SettingsService>,
    /// Last range reported by the picker's change events
    reported: Rc<RefCell<DateRange>>,
    status: Option<String>,
}

impl eframe::App for RangePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Date range");
            ui.add_space(8.0);
            show_range_picker(ui, &mut self.picker, &self.theme);

            ui.add_space(16.0);
            ui.separator();
            self.render_options(ui);
            ui.separator();
            self.render_status(ui);
        });
    }
}

impl RangePickerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        options: PickerOptions,
        settings: Option<SettingsService>,
    ) -> Self {
        let theme = PickerTheme::for_color(options.theme_color);
        theme.apply_to_context(&cc.egui_ctx);

        let mut picker = DateRangePicker::new(None, None, Some(options));
        let reported = Rc::new(RefCell::new(picker.range()));
        let sink = Rc::clone(&reported);
        picker.subscribe(move |event| {
            let mut range = sink.borrow_mut();
            match *event {
                PickerEvent::RangeChanged(changed) => *range = changed,
                PickerEvent::FromChanged(from) => range.from = from,
                PickerEvent::ToChanged(to) => range.to = to,
            }
            log::info!("Range changed to {:?}..{:?}", range.from, range.to);
        });

        Self {
            picker,
            theme,
            settings,
            reported,
            status: None,
        }
    }

    fn render_options(&mut self, ui: &mut egui::Ui) {
        let mut options = self.picker.options().clone();
        let before = options.clone();

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Accent")
                .selected_text(options.theme_color.name())
                .show_ui(ui, |ui| {
                    for color in ThemeColor::all() {
                        ui.selectable_value(&mut options.theme_color, *color, color.name());
                    }
                });

            ui.label("Week starts on");
            ui.selectable_value(&mut options.week_start, WeekStart::Sunday, "Sunday");
            ui.selectable_value(&mut options.week_start, WeekStart::Monday, "Monday");
        });

        if options != before {
            if options.theme_color != before.theme_color {
                self.theme = PickerTheme::for_color(options.theme_color);
                self.theme.apply_to_context(ui.ctx());
            }
            self.picker.set_options(options);
        }

        if let Some(settings) = &self.settings {
            if ui.button("Save options").clicked() {
                self.status = Some(match settings.save(self.picker.options()) {
                    Ok(()) => format!("Saved to {}", settings.path().display()),
                    Err(e) => {
                        log::error!("Failed to save options: {:#}", e);
                        format!("Save failed: {}", e)
                    }
                });
            }
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let range = *self.reported.borrow();
        let text = match (range.from, range.to, range.num_days()) {
            (Some(from), Some(to), Some(days)) => format!(
                "Selected {} to {} ({} day{})",
                from,
                to,
                days,
                if days == 1 { "" } else { "s" }
            ),
            (Some(from), None, _) => format!("Selected from {}, pick an end date", from),
            (None, Some(to), _) => format!("Selected until {}, pick a start date", to),
            _ => "No range selected".to_string(),
        };
        ui.label(text);

        if let Some(status) = &self.status {
            ui.label(egui::RichText::new(status).small().weak());
        }
    }
}
