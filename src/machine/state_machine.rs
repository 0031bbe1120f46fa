//! State machine owning the current state and all state configurations.

use crate::builder::{Delayed, Immediate, StateConfiguration, Timing};
use crate::core::{State, Trigger};
use crate::machine::error::TransitionError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Synchronous machine: actions run immediately, `fire` never suspends.
pub type StateMachine<S, T> = Machine<S, T, Immediate>;

/// Delay-aware machine: entry/exit actions may wait, fired with `fire_async`.
pub type AsyncStateMachine<S, T> = Machine<S, T, Delayed>;

/// Finite state machine over states `S` and triggers `T`.
///
/// Usually named through [`StateMachine`] or [`AsyncStateMachine`]. The
/// machine holds no lock; mutation goes through `&mut self`, so callers
/// sharing a machine across tasks must serialize access themselves.
#[derive(Debug)]
pub struct Machine<S: State, T: Trigger, D: Timing> {
    pub(super) current: S,
    pub(super) configurations: HashMap<S, StateConfiguration<S, T, D>>,
}

impl<S: State, T: Trigger, D: Timing> Machine<S, T, D> {
    /// Create a machine in `initial` with no configured states.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            configurations: HashMap::new(),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Whether `state` has a configuration (pure)
    pub fn is_configured(&self, state: &S) -> bool {
        self.configurations.contains_key(state)
    }

    /// Configuration for `state`, created empty on first request.
    ///
    /// Repeated calls return the same record, so separate chains of
    /// declarations for one state accumulate.
    pub fn configure(&mut self, state: S) -> &mut StateConfiguration<S, T, D> {
        match self.configurations.entry(state) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(state = %entry.key(), "configuring new state");
                let configuration = StateConfiguration::new(entry.key().clone());
                entry.insert(configuration)
            }
        }
    }

    /// Resolve `trigger` against the current state.
    ///
    /// `Ok(None)` when the current state has no configuration at all; that
    /// case is deliberately a no-op for callers.
    pub(crate) fn resolve(&self, trigger: &T) -> Result<Option<S>, TransitionError> {
        let Some(configuration) = self.configurations.get(&self.current) else {
            warn!(
                state = %self.current,
                trigger = %trigger,
                "current state is not configured; ignoring trigger"
            );
            return Ok(None);
        };

        match configuration.try_get_transition(trigger) {
            Some(destination) => Ok(Some(destination)),
            None => {
                debug!(state = %self.current, trigger = %trigger, "no transition for trigger");
                Err(TransitionError::invalid_transition(&self.current, trigger))
            }
        }
    }
}

impl<S: State, T: Trigger> Machine<S, T, Immediate> {
    /// Fire `trigger` against the current state.
    ///
    /// Runs the current state's exit action, switches to the destination,
    /// then runs the destination's entry action if the destination is
    /// configured. Firing from an unconfigured state does nothing.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidTransition`] when the current state is
    /// configured but does not permit `trigger`; the state is unchanged.
    pub fn fire(&mut self, trigger: T) -> Result<(), TransitionError> {
        let Some(destination) = self.resolve(&trigger)? else {
            return Ok(());
        };

        if let Some(source) = self.configurations.get_mut(&self.current) {
            source.run_exit_action();
        }

        let from = std::mem::replace(&mut self.current, destination);

        if let Some(target) = self.configurations.get_mut(&self.current) {
            target.run_entry_action();
        }

        debug!(from = %from, trigger = %trigger, to = %self.current, "transitioned");
        Ok(())
    }
}
