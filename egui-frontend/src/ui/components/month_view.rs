//! # Month View Module
//!
//! The overview grid: a Sunday-first month layout where each day cell
//! shows the day number and the count of appointments that survive the
//! current filter at full weight. Individual events are not drawn in this
//! view; clicking a day switches to the detail grid for that date.

use chrono::{Datelike, NaiveDate};
use eframe::egui;

use super::theme;
use crate::backend::domain::{filters, formatting};
use crate::ui::app_state::SchedulerApp;

/// One renderable day cell.
struct DayCell {
    date: NaiveDate,
    count: usize,
    is_today: bool,
}

impl SchedulerApp {
    /// Render the month overview for the established range.
    pub fn render_month_view(&mut self, ui: &mut egui::Ui) {
        let Some(range) = self.view.current_range else {
            ui.spinner();
            return;
        };

        let weeks = self.build_month_cells(range.start.date(), range.end.date());
        let mut clicked_day: Option<NaiveDate> = None;

        // Weekday header, Sunday first
        ui.columns(7, |columns| {
            for (column, name) in columns
                .iter_mut()
                .zip(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"])
            {
                column.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(name).strong());
                });
            }
        });

        let cell_height = (ui.available_height() / weeks.len() as f32).max(48.0);

        for week in &weeks {
            ui.columns(7, |columns| {
                for (day_index, cell) in week.iter().enumerate() {
                    let column = &mut columns[day_index];
                    match cell {
                        Some(cell) => {
                            if render_day_cell(column, cell, cell_height) {
                                clicked_day = Some(cell.date);
                            }
                        }
                        None => {
                            // Padding cell outside the month
                            column.allocate_space(egui::vec2(column.available_width(), cell_height));
                        }
                    }
                }
            });
        }

        if let Some(date) = clicked_day {
            if let Some(change) = self.view.switch_to_detail(Some(date)) {
                self.apply_range_change(change);
            }
        }
    }

    /// Lay the month's days out into Sunday-first weeks with leading and
    /// trailing padding, annotated with the filtered per-day counts.
    fn build_month_cells(&self, first: NaiveDate, next_month: NaiveDate) -> Vec<Vec<Option<DayCell>>> {
        let today = chrono::Local::now().date_naive();
        let days_in_month = (next_month - first).num_days();
        let leading = first.weekday().num_days_from_sunday() as i64;

        let mut weeks = Vec::new();
        let mut week: Vec<Option<DayCell>> = Vec::with_capacity(7);

        for _ in 0..leading {
            week.push(None);
        }

        for offset in 0..days_in_month {
            let date = first + chrono::Days::new(offset as u64);
            week.push(Some(DayCell {
                date,
                count: filters::visible_count_for_day(self.projection.events(), &self.filters, date),
                is_today: date == today,
            }));
            if week.len() == 7 {
                weeks.push(week);
                week = Vec::with_capacity(7);
            }
        }

        if !week.is_empty() {
            while week.len() < 7 {
                week.push(None);
            }
            weeks.push(week);
        }

        weeks
    }
}

/// Render one day cell; returns true when it was clicked.
fn render_day_cell(ui: &mut egui::Ui, cell: &DayCell, height: f32) -> bool {
    let mut label = cell.date.day().to_string();
    if cell.count > 0 {
        label.push('\n');
        label.push_str(&formatting::day_count_label(cell.count));
    }

    let mut rich = egui::RichText::new(label).color(if cell.count > 0 {
        theme::colors::DAY_COUNT_TEXT
    } else {
        egui::Color32::GRAY
    });
    if cell.is_today {
        rich = rich.strong();
    }

    let mut button = egui::Button::new(rich)
        .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 20))
        .rounding(egui::Rounding::same(4.0));

    if cell.is_today {
        button = button.stroke(egui::Stroke::new(1.5, theme::colors::DAY_COUNT_TEXT));
    }

    ui.add_sized(egui::vec2(ui.available_width(), height), button)
        .clicked()
}
