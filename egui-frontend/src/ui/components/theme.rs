//! Color scheme for the calendar views.

use eframe::egui;
use shared::VisibilityWeight;

pub mod colors {
    use eframe::egui::Color32;

    // Urgency palette for event boxes
    pub const URGENCY_ROUTINE: Color32 = Color32::from_rgb(0x5E, 0xDC, 0x74); // green
    pub const URGENCY_ELEVATED: Color32 = Color32::from_rgb(0xFF, 0xC9, 0x43); // yellow
    pub const URGENCY_URGENT: Color32 = Color32::from_rgb(0xDC, 0x6D, 0x5E); // red
    pub const URGENCY_FALLBACK: Color32 = Color32::from_rgb(0xD0, 0xF0, 0xFF);

    pub const EVENT_BORDER: Color32 = Color32::from_rgb(0x79, 0x74, 0x7E);
    pub const DAY_COUNT_TEXT: Color32 = Color32::from_rgb(0x2E, 0x5A, 0xAC);
    pub const FILTER_APPLIED: Color32 = Color32::from_rgb(0xBB, 0xDE, 0xFB);
}

/// Fill color for an event box by urgency level.
pub fn urgency_fill(urgency: u8) -> egui::Color32 {
    match urgency {
        1 => colors::URGENCY_ROUTINE,
        2 => colors::URGENCY_ELEVATED,
        3 => colors::URGENCY_URGENT,
        _ => colors::URGENCY_FALLBACK,
    }
}

/// Apply the visibility weight to a fill color. Dimmed events render at
/// reduced opacity but are never removed from the grid.
pub fn weighted_fill(color: egui::Color32, weight: VisibilityWeight) -> egui::Color32 {
    match weight {
        VisibilityWeight::Full => color,
        VisibilityWeight::Dimmed => {
            egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 77)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_palette() {
        assert_eq!(urgency_fill(1), colors::URGENCY_ROUTINE);
        assert_eq!(urgency_fill(2), colors::URGENCY_ELEVATED);
        assert_eq!(urgency_fill(3), colors::URGENCY_URGENT);
        assert_eq!(urgency_fill(9), colors::URGENCY_FALLBACK);
    }

    #[test]
    fn test_dimmed_fill_keeps_hue_reduces_alpha() {
        let dimmed = weighted_fill(colors::URGENCY_ROUTINE, VisibilityWeight::Dimmed);
        assert_eq!(dimmed.r(), colors::URGENCY_ROUTINE.r());
        assert!(dimmed.a() < 255);

        let full = weighted_fill(colors::URGENCY_ROUTINE, VisibilityWeight::Full);
        assert_eq!(full, colors::URGENCY_ROUTINE);
    }
}
