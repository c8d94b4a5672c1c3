//! Modular state for the scheduler UI: view/range navigation, modal and
//! drawer visibility, and keyboard command routing.

pub mod input_router;
pub mod modal_state;
pub mod view_state;

pub use input_router::{route_key, InputGate, NavCommand, ROUTED_KEYS};
pub use modal_state::{AppointmentFormState, FilterDraftState, ModalState};
pub use view_state::{RangeChange, ViewMode, ViewState};
