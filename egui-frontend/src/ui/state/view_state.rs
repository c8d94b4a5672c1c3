//! # View State Module
//!
//! The view/range controller: which calendar view is active (month
//! overview or per-room day grid), which date window is visible, and the
//! navigation transitions between them.
//!
//! The controller is collaborator-agnostic. Every transition that changes
//! the visible window returns a [`RangeChange`] describing the new window,
//! exactly the way the calendar grid's dates-set callback would report it;
//! the app layer feeds it back through [`ViewState::dates_set`] and runs
//! the projection. Tests drive the transitions directly with synthetic
//! dates and never need a widget.

use chrono::{Datelike, Days, NaiveDate};
use log::info;
use shared::ViewRange;

use crate::backend::domain::formatting;

/// Calendar views available in the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Month-style aggregate view with per-day appointment counts.
    Overview,
    /// Single day split into per-room columns.
    Detail,
}

/// A freshly computed visible window plus the grid's own label for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeChange {
    pub range: ViewRange,
    pub label: String,
}

/// View-mode, navigation, and title state for the calendar header.
#[derive(Debug)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Anchor date for navigation. `None` until the calendar has mounted;
    /// all navigation is a silent no-op before that.
    pub focus: Option<NaiveDate>,
    /// The established visible range, set only by `dates_set`.
    pub current_range: Option<ViewRange>,
    /// Header title. In detail view this is the two-line
    /// weekday/date composite, joined with a newline.
    pub title_text: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Overview,
            focus: None,
            current_range: None,
            title_text: String::new(),
        }
    }

    /// Initial mount: anchor the calendar on today and report the first
    /// visible window.
    pub fn mount(&mut self, today: NaiveDate) -> RangeChange {
        self.focus = Some(today);
        self.window(today)
    }

    /// Page backwards (previous month in overview, previous day in detail).
    pub fn go_previous(&mut self) -> Option<RangeChange> {
        let focus = self.focus?;
        let new_focus = match self.mode {
            ViewMode::Overview => previous_month_anchor(focus),
            ViewMode::Detail => focus - Days::new(1),
        };
        self.focus = Some(new_focus);
        info!("📅 Navigated back to {}", new_focus);
        Some(self.window(new_focus))
    }

    /// Page forwards (next month in overview, next day in detail).
    pub fn go_next(&mut self) -> Option<RangeChange> {
        let focus = self.focus?;
        let new_focus = match self.mode {
            ViewMode::Overview => next_month_anchor(focus),
            ViewMode::Detail => focus + Days::new(1),
        };
        self.focus = Some(new_focus);
        info!("📅 Navigated forward to {}", new_focus);
        Some(self.window(new_focus))
    }

    /// Switch to the month overview, keeping the current anchor date.
    pub fn switch_to_overview(&mut self) -> Option<RangeChange> {
        self.mode = ViewMode::Overview;
        let focus = self.focus?;
        Some(self.window(focus))
    }

    /// Switch to the per-room day grid. A supplied target date (from
    /// clicking a day in the overview) also jumps the grid to that date.
    pub fn switch_to_detail(&mut self, date: Option<NaiveDate>) -> Option<RangeChange> {
        self.mode = ViewMode::Detail;
        if let Some(target) = date {
            self.focus = Some(target);
        }
        let focus = self.focus?;
        Some(self.window(focus))
    }

    /// The dates-set callback: store the new range and derive the header
    /// title. Overview keeps the grid's supplied label verbatim; detail
    /// composes the two-line weekday/date label from the range start.
    pub fn dates_set(&mut self, range: ViewRange, label: &str) {
        self.current_range = Some(range);
        self.title_text = match self.mode {
            ViewMode::Overview => label.to_string(),
            ViewMode::Detail => {
                let (weekday, date_line) = formatting::detail_title(range.start.date());
                format!("{}\n{}", weekday, date_line)
            }
        };
    }

    /// Compute the visible window around `focus` for the active mode.
    fn window(&self, focus: NaiveDate) -> RangeChange {
        match self.mode {
            ViewMode::Overview => {
                let start = first_of_month(focus);
                let end = next_month_anchor(focus);
                RangeChange {
                    range: ViewRange {
                        start: start.and_hms_opt(0, 0, 0).unwrap(),
                        end: end.and_hms_opt(0, 0, 0).unwrap(),
                    },
                    label: formatting::month_label(focus.year(), focus.month()),
                }
            }
            ViewMode::Detail => {
                let end = focus + Days::new(1);
                let (_, date_line) = formatting::detail_title(focus);
                RangeChange {
                    range: ViewRange {
                        start: focus.and_hms_opt(0, 0, 0).unwrap(),
                        end: end.and_hms_opt(0, 0, 0).unwrap(),
                    },
                    label: date_line,
                }
            }
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// First day of the month containing `date`.
fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 of an already-valid month always exists.
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// First day of the month after the one containing `date`.
fn next_month_anchor(date: NaiveDate) -> NaiveDate {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1).unwrap()
    }
}

/// First day of the month before the one containing `date`.
fn previous_month_anchor(date: NaiveDate) -> NaiveDate {
    if date.month() == 1 {
        NaiveDate::from_ymd_opt(date.year() - 1, 12, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() - 1, 1).unwrap()
    }
}
