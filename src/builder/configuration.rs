//! Per-state configuration with a fluent API.

use crate::builder::timing::{Delayed, Immediate, Timing};
use crate::core::{Action, State, Trigger};
use std::collections::HashMap;
use std::time::Duration;
use tracing::trace;

/// Transition table, entry/exit actions and timing for one state.
///
/// Configurations are obtained from a machine's `configure` method and
/// mutated in place. Every setter returns `&mut Self`, so declarations chain:
///
/// ```rust
/// use fluidstate::{fsm_enum, StateMachine};
///
/// fsm_enum! {
///     enum Light { Off, On }
/// }
/// fsm_enum! {
///     enum Switch { Flip }
/// }
///
/// let mut machine = StateMachine::new(Light::Off);
/// machine
///     .configure(Light::Off)
///     .permit(Switch::Flip, Light::On)
///     .on_exit(|| println!("leaving Off"));
///
/// let off = machine.configure(Light::Off);
/// assert_eq!(off.try_get_transition(&Switch::Flip), Some(Light::On));
/// ```
#[derive(Debug)]
pub struct StateConfiguration<S: State, T: Trigger, D: Timing = Immediate> {
    state: S,
    transitions: HashMap<T, S>,
    entry: Action,
    exit: Action,
    timing: D,
}

impl<S: State, T: Trigger, D: Timing> StateConfiguration<S, T, D> {
    /// Create an empty configuration for `state`.
    pub fn new(state: S) -> Self {
        Self {
            state,
            transitions: HashMap::new(),
            entry: Action::empty(),
            exit: Action::empty(),
            timing: D::default(),
        }
    }

    /// The state this configuration describes.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Allow `trigger` to move the machine from this state to `destination`.
    ///
    /// Declaring the same trigger again replaces the earlier destination.
    /// The destination does not need to be configured.
    pub fn permit(&mut self, trigger: T, destination: S) -> &mut Self {
        if let Some(previous) = self.transitions.insert(trigger, destination) {
            trace!(
                state = %self.state,
                replaced = %previous,
                "permit replaced an existing transition"
            );
        }
        self
    }

    /// Set the action run when this state is entered, replacing any previous one.
    pub fn on_entry<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut() + Send + 'static,
    {
        self.entry.set(action);
        self
    }

    /// Set the action run when this state is exited, replacing any previous one.
    pub fn on_exit<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut() + Send + 'static,
    {
        self.exit.set(action);
        self
    }

    /// Destination for `trigger`, if one was permitted (pure).
    pub fn try_get_transition(&self, trigger: &T) -> Option<S> {
        self.transitions.get(trigger).cloned()
    }

    /// Triggers permitted from this state, in no particular order.
    pub fn permitted_triggers(&self) -> impl Iterator<Item = &T> {
        self.transitions.keys()
    }

    /// Run the entry action now, ignoring any configured delay.
    pub fn run_entry_action(&mut self) {
        self.entry.run();
    }

    /// Run the exit action now, ignoring any configured delay.
    pub fn run_exit_action(&mut self) {
        self.exit.run();
    }
}

impl<S: State, T: Trigger> StateConfiguration<S, T, Delayed> {
    /// Wait `delay` before running the entry action. Zero means no wait.
    pub fn with_entry_delay(&mut self, delay: Duration) -> &mut Self {
        self.timing.entry = delay;
        self
    }

    /// Wait `delay` before running the exit action. Zero means no wait.
    pub fn with_exit_delay(&mut self, delay: Duration) -> &mut Self {
        self.timing.exit = delay;
        self
    }

    pub fn entry_delay(&self) -> Duration {
        self.timing.entry
    }

    pub fn exit_delay(&self) -> Duration {
        self.timing.exit
    }

    /// Wait out the entry delay, then run the entry action if one is set.
    ///
    /// The delay is honored even when no action is set.
    #[cfg(feature = "async")]
    pub async fn run_entry_action_async(&mut self) {
        crate::builder::timing::pause(self.timing.entry).await;
        self.entry.run();
    }

    /// Wait out the exit delay, then run the exit action if one is set.
    ///
    /// The delay is honored even when no action is set.
    #[cfg(feature = "async")]
    pub async fn run_exit_action_async(&mut self) {
        crate::builder::timing::pause(self.timing.exit).await;
        self.exit.run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    crate::fsm_enum! {
        enum TestState {
            Off,
            On,
            Heating,
        }
    }

    crate::fsm_enum! {
        enum TestTrigger {
            PowerOn,
            PowerOff,
            StartHeating,
        }
    }

    type Config = StateConfiguration<TestState, TestTrigger>;

    #[test]
    fn new_configuration_is_empty() {
        let config = Config::new(TestState::Off);

        assert_eq!(config.state(), &TestState::Off);
        assert_eq!(config.permitted_triggers().count(), 0);
        assert_eq!(config.try_get_transition(&TestTrigger::PowerOn), None);
    }

    #[test]
    fn permit_registers_transition() {
        let mut config = Config::new(TestState::Off);
        config.permit(TestTrigger::PowerOn, TestState::On);

        assert_eq!(
            config.try_get_transition(&TestTrigger::PowerOn),
            Some(TestState::On)
        );
        assert_eq!(config.try_get_transition(&TestTrigger::PowerOff), None);
    }

    #[test]
    fn permit_last_write_wins() {
        let mut config = Config::new(TestState::On);
        config
            .permit(TestTrigger::StartHeating, TestState::Off)
            .permit(TestTrigger::StartHeating, TestState::Heating);

        assert_eq!(
            config.try_get_transition(&TestTrigger::StartHeating),
            Some(TestState::Heating)
        );
        assert_eq!(config.permitted_triggers().count(), 1);
    }

    #[test]
    fn chained_declarations_accumulate() {
        let mut config = Config::new(TestState::On);
        config
            .permit(TestTrigger::PowerOff, TestState::Off)
            .permit(TestTrigger::StartHeating, TestState::Heating)
            .on_entry(|| {})
            .on_exit(|| {});

        let mut triggers: Vec<_> = config.permitted_triggers().copied().collect();
        triggers.sort_by_key(|t| t.to_string());
        assert_eq!(
            triggers,
            vec![TestTrigger::PowerOff, TestTrigger::StartHeating]
        );
        assert!(config.entry.is_set());
        assert!(config.exit.is_set());
    }

    #[test]
    fn entry_and_exit_actions_run_independently() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut config = Config::new(TestState::On);

        let entry_log = Arc::clone(&log);
        let exit_log = Arc::clone(&log);
        config
            .on_entry(move || entry_log.lock().unwrap().push("entry"))
            .on_exit(move || exit_log.lock().unwrap().push("exit"));

        config.run_exit_action();
        config.run_entry_action();

        assert_eq!(*log.lock().unwrap(), vec!["exit", "entry"]);
    }

    #[test]
    fn on_entry_overwrites_previous_action() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut config = Config::new(TestState::On);

        let f = Arc::clone(&first);
        let s = Arc::clone(&second);
        config
            .on_entry(move || {
                f.fetch_add(1, Ordering::SeqCst);
            })
            .on_entry(move || {
                s.fetch_add(1, Ordering::SeqCst);
            });
        config.run_entry_action();

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn running_absent_actions_is_a_no_op() {
        let mut config = Config::new(TestState::Off);
        config.run_entry_action();
        config.run_exit_action();
    }

    #[test]
    fn sync_run_ignores_delays() {
        let ran = Arc::new(AtomicUsize::new(0));
        let mut config = StateConfiguration::<TestState, TestTrigger, Delayed>::new(TestState::On);

        let counter = Arc::clone(&ran);
        config
            .with_entry_delay(Duration::from_secs(60))
            .on_entry(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let started = std::time::Instant::now();
        config.run_entry_action();

        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn delays_default_to_zero_and_can_be_set() {
        let mut config = StateConfiguration::<TestState, TestTrigger, Delayed>::new(TestState::Off);
        assert_eq!(config.entry_delay(), Duration::ZERO);
        assert_eq!(config.exit_delay(), Duration::ZERO);

        config
            .with_entry_delay(Duration::from_millis(250))
            .with_exit_delay(Duration::from_millis(500))
            .permit(TestTrigger::PowerOn, TestState::On);

        assert_eq!(config.entry_delay(), Duration::from_millis(250));
        assert_eq!(config.exit_delay(), Duration::from_millis(500));
        assert_eq!(
            config.try_get_transition(&TestTrigger::PowerOn),
            Some(TestState::On)
        );
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn async_entry_waits_before_running() {
        let ran = Arc::new(AtomicUsize::new(0));
        let mut config = StateConfiguration::<TestState, TestTrigger, Delayed>::new(TestState::On);

        let counter = Arc::clone(&ran);
        config
            .with_entry_delay(Duration::from_millis(40))
            .on_entry(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let started = tokio::time::Instant::now();
        config.run_entry_action_async().await;

        assert!(started.elapsed() >= Duration::from_millis(40));
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn async_exit_waits_even_without_action() {
        let mut config = StateConfiguration::<TestState, TestTrigger, Delayed>::new(TestState::Off);
        config.with_exit_delay(Duration::from_millis(40));

        let started = tokio::time::Instant::now();
        config.run_exit_action_async().await;

        assert!(started.elapsed() >= Duration::from_millis(40));
    }
}
