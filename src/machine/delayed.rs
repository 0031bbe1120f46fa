//! Asynchronous firing for delay-aware machines.

use crate::builder::Delayed;
use crate::core::{State, Trigger};
use crate::machine::error::TransitionError;
use crate::machine::state_machine::Machine;
use tracing::debug;

impl<S: State, T: Trigger> Machine<S, T, Delayed> {
    /// Fire `trigger`, waiting out exit and entry delays.
    ///
    /// Same branching as the synchronous `fire`: the current state's exit
    /// delay elapses, its exit action runs, the state switches, then (only
    /// if the destination is configured) the entry delay elapses and the
    /// entry action runs. Waiting yields the task instead of blocking the
    /// worker. There is no cancellation; dropping the future abandons the
    /// transition wherever it was suspended.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidTransition`] when the current state is
    /// configured but does not permit `trigger`; the state is unchanged.
    pub async fn fire_async(&mut self, trigger: T) -> Result<(), TransitionError> {
        let Some(destination) = self.resolve(&trigger)? else {
            return Ok(());
        };

        if let Some(source) = self.configurations.get_mut(&self.current) {
            source.run_exit_action_async().await;
        }

        let from = std::mem::replace(&mut self.current, destination);

        if let Some(target) = self.configurations.get_mut(&self.current) {
            target.run_entry_action_async().await;
        }

        debug!(from = %from, trigger = %trigger, to = %self.current, "transitioned");
        Ok(())
    }
}
