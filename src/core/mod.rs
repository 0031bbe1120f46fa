//! Core identifier and callback types.
//!
//! This module contains the building blocks shared by both machine flavors:
//! - State and trigger identifiers via the `State` and `Trigger` traits
//! - Optional entry/exit callbacks via `Action`

mod action;
mod state;

pub use action::{Action, Callback};
pub use state::{State, Trigger};
