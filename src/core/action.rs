//! Optional entry/exit callbacks.
//!
//! An action slot holds at most one callback. Setting a new callback
//! replaces the previous one; running an empty slot does nothing.

use std::fmt;

/// Boxed side-effect run when a state is entered or exited.
pub type Callback = Box<dyn FnMut() + Send>;

/// A slot holding an optional zero-argument callback.
///
/// # Example
///
/// ```rust
/// use fluidstate::core::Action;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let count = Arc::new(AtomicUsize::new(0));
/// let mut action = Action::empty();
///
/// // Running an empty slot is a no-op
/// action.run();
///
/// let counter = Arc::clone(&count);
/// action.set(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// action.run();
///
/// assert_eq!(count.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct Action {
    callback: Option<Callback>,
}

impl Action {
    /// Create an empty slot.
    pub fn empty() -> Self {
        Self { callback: None }
    }

    /// Store `callback`, replacing any previous one.
    pub fn set<F>(&mut self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Whether a callback is stored.
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the stored callback, if any.
    pub fn run(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("set", &self.is_set())
            .finish()
    }
}
