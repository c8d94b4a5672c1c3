//! # Domain Module
//!
//! Calendar business logic for the scheduler: event projection, the
//! participant filter engine, and the pure label formatting helpers. The UI
//! only handles presentation concerns; every computation it displays comes
//! from here.

pub mod filters;
pub mod formatting;
pub mod projection;

pub use projection::{ProjectionEngine, ProjectionTicket};
