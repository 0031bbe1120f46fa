//! Fluidstate: a fluent finite state machine builder
//!
//! Declare states, the triggers each state permits, where each trigger
//! leads, and optional entry/exit actions. Then fire triggers: the machine
//! validates the transition, runs the old state's exit action, switches
//! state, and runs the new state's entry action.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: any `Clone + Eq + Hash + Display` type, usually an
//!   enum declared with [`fsm_enum!`]
//! - **StateConfiguration**: one per state, holding transitions and actions
//! - **StateMachine**: synchronous machine fired with `fire`
//! - **AsyncStateMachine**: delay-aware machine fired with `fire_async`
//!
//! # Features
//!
//! - `async` (default): enables [`AsyncStateMachine::fire_async`] and the
//!   async action runners, backed by `tokio`'s timer
//!
//! # Logging
//!
//! The crate emits `tracing` events (transitions at `debug`, ignored
//! triggers at `warn`) and never installs a subscriber.
//!
//! # Example
//!
//! ```rust
//! use fluidstate::{fsm_enum, StateMachine};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! fsm_enum! {
//!     enum States { Off, On }
//! }
//! fsm_enum! {
//!     enum Events { PowerOn, PowerOff }
//! }
//!
//! let entered = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&entered);
//!
//! let mut machine = StateMachine::new(States::Off);
//! machine.configure(States::Off).permit(Events::PowerOn, States::On);
//! machine
//!     .configure(States::On)
//!     .permit(Events::PowerOff, States::Off)
//!     .on_entry(move || flag.store(true, Ordering::SeqCst));
//!
//! machine.fire(Events::PowerOn).unwrap();
//!
//! assert_eq!(machine.current_state(), &States::On);
//! assert!(entered.load(Ordering::SeqCst));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{Delayed, Immediate, StateConfiguration, Timing};
pub use core::{Action, State, Trigger};
pub use machine::{AsyncStateMachine, Machine, StateMachine, TransitionError};
