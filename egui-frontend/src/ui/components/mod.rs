//! UI components for the scheduler: header navigation, the two calendar
//! views, the side drawers, and the appointment popup.

pub mod appointment_popup;
pub mod day_view;
pub mod drawers;
pub mod header;
pub mod month_view;
pub mod theme;
