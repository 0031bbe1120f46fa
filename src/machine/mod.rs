//! State machines that fire triggers against configured states.
//!
//! Two flavors share one generic [`Machine`]:
//!
//! - [`StateMachine`]: synchronous, actions run immediately via `fire`
//! - [`AsyncStateMachine`]: delay-aware, actions may wait via `fire_async`
//!   (requires the `async` feature)
//!
//! # Example
//!
//! ```rust
//! use fluidstate::{fsm_enum, StateMachine, TransitionError};
//!
//! fsm_enum! {
//!     enum Power { Off, On }
//! }
//! fsm_enum! {
//!     enum Button { Press, Hold }
//! }
//!
//! let mut machine = StateMachine::new(Power::Off);
//! machine.configure(Power::Off).permit(Button::Press, Power::On);
//! machine.configure(Power::On).permit(Button::Press, Power::Off);
//!
//! machine.fire(Button::Press)?;
//! assert_eq!(machine.current_state(), &Power::On);
//!
//! let error = machine.fire(Button::Hold).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "No transition defined from state On using trigger Hold"
//! );
//! # Ok::<(), TransitionError>(())
//! ```

#[cfg(feature = "async")]
mod delayed;
mod error;
mod state_machine;

pub use error::TransitionError;
pub use state_machine::{AsyncStateMachine, Machine, StateMachine};
