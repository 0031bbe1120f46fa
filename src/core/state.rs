//! Identifier traits for machine states and triggers.
//!
//! Both traits are blanket-implemented: any type with the listed bounds is a
//! valid state or trigger. Simple enums get the bounds via [`fsm_enum!`].
//!
//! [`fsm_enum!`]: crate::fsm_enum

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier of a machine state.
///
/// States are used as map keys, so they must be `Eq + Hash`. `Display` is
/// used to render the state in error messages and log events.
///
/// # Required Traits
///
/// - `Clone`: the current state is copied out of transition tables
/// - `Eq` + `Hash`: states key the configuration map
/// - `Debug` + `Display`: states are rendered for diagnostics
/// - `Send` + `Sync`: machines can be moved into async tasks
///
/// # Example
///
/// ```rust
/// use fluidstate::core::State;
/// use std::fmt;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl fmt::Display for Door {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         fmt::Debug::fmt(self, f)
///     }
/// }
///
/// fn assert_state<S: State>(_: S) {}
/// assert_state(Door::Open);
/// ```
pub trait State: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

impl<S> State for S where S: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

/// Identifier of an event that may cause a transition.
///
/// Same bounds as [`State`], kept as a separate trait so signatures read
/// clearly and the two type parameters of a machine cannot be confused.
pub trait Trigger: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

impl<T> Trigger for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}
