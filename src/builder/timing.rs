//! Timing policies for entry/exit actions.
//!
//! A state configuration is parameterized by its timing policy. `Immediate`
//! carries nothing and runs actions straight away; `Delayed` carries an
//! entry and an exit delay that the async machine waits out before running
//! the corresponding action.

use std::fmt::Debug;
use std::time::Duration;

/// Timing policy attached to every state configuration.
pub trait Timing: Default + Debug + Send + 'static {}

/// Actions run as soon as the machine reaches them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Immediate;

impl Timing for Immediate {}

/// Actions run after a per-state delay.
///
/// Both delays default to zero, which means "run immediately".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Delayed {
    pub(crate) entry: Duration,
    pub(crate) exit: Duration,
}

impl Timing for Delayed {}

/// Suspend the calling task for `delay` without blocking the worker.
/// Zero delays return immediately.
#[cfg(feature = "async")]
pub(crate) async fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tracing::trace!(?delay, "delaying action");
    tokio::time::sleep(delay).await;
}
