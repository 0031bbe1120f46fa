//! Fluent per-state configuration.
//!
//! A machine hands out one canonical [`StateConfiguration`] per state; every
//! setter mutates that record in place and returns it for chaining. The
//! [`Timing`] parameter decides whether entry/exit delays are available.

pub mod configuration;
pub mod macros;
pub mod timing;

pub use configuration::StateConfiguration;
pub use timing::{Delayed, Immediate, Timing};
