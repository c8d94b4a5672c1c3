//! # Input Command Router
//!
//! Keyboard dispatch for the calendar, modeled as a pure routing table
//! behind a focus gate rather than a mutable global listener. The egui
//! adapter in the app coordinator reads the pressed keys each frame and
//! feeds them through [`route_key`]; because egui is immediate-mode, the
//! "listener" exists only for the duration of a frame and teardown is
//! automatic.
//!
//! Gating rules:
//! - an open drawer (filter or profiles) owns focus and swallows every key,
//!   including Escape;
//! - a pending slot (popup open) swallows everything except Escape, which
//!   dismisses the popup;
//! - otherwise the navigation table applies.

use eframe::egui;

/// Commands the keyboard can issue to the view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    PreviousPage,
    NextPage,
    OverviewView,
    DetailView,
    OpenFilterDrawer,
    OpenProfilesDrawer,
    DismissPopup,
}

/// Snapshot of the modal state relevant to keyboard gating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputGate {
    pub drawer_open: bool,
    pub popup_open: bool,
}

/// Map a pressed key to a command under the current gate. Unrecognized
/// keys are no-ops. egui key identities are case-insensitive, matching the
/// letter bindings.
pub fn route_key(key: egui::Key, gate: InputGate) -> Option<NavCommand> {
    if gate.drawer_open {
        return None;
    }

    if gate.popup_open {
        return match key {
            egui::Key::Escape => Some(NavCommand::DismissPopup),
            _ => None,
        };
    }

    match key {
        egui::Key::ArrowLeft => Some(NavCommand::PreviousPage),
        egui::Key::ArrowRight => Some(NavCommand::NextPage),
        egui::Key::M => Some(NavCommand::OverviewView),
        egui::Key::D => Some(NavCommand::DetailView),
        egui::Key::F => Some(NavCommand::OpenFilterDrawer),
        egui::Key::P => Some(NavCommand::OpenProfilesDrawer),
        _ => None,
    }
}

/// The keys the router listens for; the adapter polls exactly this set.
pub const ROUTED_KEYS: [egui::Key; 7] = [
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::M,
    egui::Key::D,
    egui::Key::F,
    egui::Key::P,
    egui::Key::Escape,
];
