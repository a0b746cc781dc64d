//! Range picker widget.
//!
//! Preset shortcuts, the two endpoint buttons and a floating month popup.
//! All date logic stays in `DateRangePicker`; this file only draws
//! `DayCell`s and forwards clicks.

use chrono::{Datelike, NaiveDate};
use egui::{Color32, Pos2, Rect, RichText, Stroke, Vec2};

use crate::models::preset::PresetRange;
use crate::models::ui::OpenState;
use crate::services::picker::{DateRangePicker, DayCell, DAYS_PER_WEEK};
use crate::ui_egui::theme::PickerTheme;

const DAY_CELL_SIZE: Vec2 = Vec2::new(30.0, 24.0);

/// Draw the picker and handle clicks outside of it
pub fn show_range_picker(ui: &mut egui::Ui, picker: &mut DateRangePicker, theme: &PickerTheme) {
    let widget = ui.vertical(|ui| {
        render_presets(ui, picker);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            render_endpoint_button(ui, picker, OpenState::EditingFrom);
            ui.label("→");
            render_endpoint_button(ui, picker, OpenState::EditingTo);
        });
    });
    let widget_rect = widget.response.rect;

    let mut popup_rect: Option<Rect> = None;
    let mut day_clicked = false;
    if picker.open_state().is_open() {
        let anchor = widget_rect.left_bottom() + Vec2::new(0.0, 4.0);
        let (rect, clicked) = render_popup(ui.ctx(), anchor, picker, theme);
        popup_rect = Some(rect);
        day_clicked = clicked;
    }

    let clicked_at: Option<Pos2> = ui.ctx().input(|i| {
        if i.pointer.primary_clicked() {
            i.pointer.interact_pos()
        } else {
            None
        }
    });
    if let Some(pos) = clicked_at {
        let inside = widget_rect.contains(pos) || popup_rect.map_or(false, |r| r.contains(pos));
        if picker.handle_outside_interaction(inside, day_clicked) {
            log::debug!("Closed picker after click at {:?}", pos);
        }
    }
}

fn render_presets(ui: &mut egui::Ui, picker: &mut DateRangePicker) {
    ui.horizontal_wrapped(|ui| {
        for preset in PresetRange::all() {
            let label = preset.label(picker.texts()).to_string();
            let selected = picker.active_preset() == Some(*preset);
            if ui.selectable_label(selected, label).clicked() {
                picker.select_preset(*preset);
            }
        }
    });
}

fn render_endpoint_button(ui: &mut egui::Ui, picker: &mut DateRangePicker, target: OpenState) {
    let (label, date) = match target {
        OpenState::EditingTo => (picker.texts().end_label.clone(), picker.to()),
        _ => (picker.texts().start_label.clone(), picker.from()),
    };
    let text = format!("{}: {}", label, format_endpoint(date));
    let active = picker.open_state() == target;

    if ui.selectable_label(active, text).clicked() {
        picker.toggle_open(target);
    }
}

fn format_endpoint(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "...".to_string())
}

/// Returns the popup rect and whether a day cell was clicked
fn render_popup(
    ctx: &egui::Context,
    anchor: Pos2,
    picker: &mut DateRangePicker,
    theme: &PickerTheme,
) -> (Rect, bool) {
    let mut day_clicked = false;
    let area = egui::Area::new(egui::Id::new("date_range_popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme.popup_background)
                .show(ui, |ui| {
                    render_month_header(ui, picker);
                    ui.separator();
                    day_clicked = render_day_grid(ui, picker, theme);
                });
        });
    (area.response.rect, day_clicked)
}

fn render_month_header(ui: &mut egui::Ui, picker: &mut DateRangePicker) {
    ui.horizontal(|ui| {
        if ui
            .small_button("◀")
            .on_hover_text("Previous month")
            .clicked()
        {
            picker.prev_month();
        }

        let header = picker.display_month().format("%B %Y").to_string();
        ui.label(RichText::new(header).strong());

        if ui
            .small_button("▶")
            .on_hover_text("Next month")
            .clicked()
        {
            picker.next_month();
        }
    });
}

/// Day-of-week headers and the 6-row grid. Returns whether a day was picked.
fn render_day_grid(ui: &mut egui::Ui, picker: &mut DateRangePicker, theme: &PickerTheme) -> bool {
    let day_names: Vec<String> = picker.day_names().iter().map(|s| s.to_string()).collect();
    let cells = picker.day_cells();
    let mut clicked: Option<NaiveDate> = None;

    egui::Grid::new("date_range_grid")
        .num_columns(DAYS_PER_WEEK)
        .spacing([2.0, 2.0])
        .min_col_width(DAY_CELL_SIZE.x)
        .show(ui, |ui| {
            for name in &day_names {
                ui.label(RichText::new(name).small().strong());
            }
            ui.end_row();

            for week in cells.chunks(DAYS_PER_WEEK) {
                for cell in week {
                    if render_day_cell(ui, cell, theme).clicked() {
                        clicked = Some(cell.date);
                    }
                }
                ui.end_row();
            }
        });

    match clicked {
        Some(date) => picker.select_date(date),
        None => false,
    }
}

fn render_day_cell(ui: &mut egui::Ui, cell: &DayCell, theme: &PickerTheme) -> egui::Response {
    let is_endpoint = cell.is_range_start || cell.is_range_end;

    let text = RichText::new(cell.date.day().to_string());
    let text = if is_endpoint {
        text.strong().color(theme.endpoint_text)
    } else if cell.out_of_focus {
        text.color(theme.text_muted)
    } else {
        text.color(theme.text_primary)
    };

    let fill = if is_endpoint {
        theme.accent
    } else if cell.in_range {
        theme.range_fill
    } else {
        Color32::TRANSPARENT
    };
    let stroke = if cell.is_today {
        Stroke::new(1.0, theme.today_border)
    } else {
        Stroke::NONE
    };

    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .stroke(stroke)
            .min_size(DAY_CELL_SIZE),
    )
}
