//! Event channels for presentation lifecycle events
//!
//! A [`Signal`] is an append-only, ordered list of observers plus a synchronous
//! fan-out [`Signal::fire`]. It decouples producers (display-service callbacks)
//! from consumers (handlers registered by the caller).
//!
//! Guarantees:
//! - Observers run in registration order, each with the same payload.
//! - No replay: an observer never sees payloads fired before it subscribed.
//! - Fires on one signal never interleave. A fire snapshots the observer list,
//!   so an observer subscribed during a traversal is picked up by the next fire.
//! - A panicking observer is logged and skipped; the rest of the traversal runs.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use toastline_core::signal::Signal;
//!
//! let signal = Signal::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! signal.subscribe(move |value: &i32| sink.lock().push(*value));
//!
//! signal.fire(1);
//! signal.fire(2);
//! assert_eq!(*seen.lock(), vec![1, 2]);
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, ReentrantMutex};
use tracing::error;

/// Observer callback registered on a [`Signal`]
pub type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Thread-safe fan-out channel for a single payload type
pub struct Signal<T> {
    name: &'static str,
    observers: Mutex<Vec<Observer<T>>>,
    /// Serialises traversals. Reentrant so an observer may fire the same
    /// signal from within its callback without deadlocking.
    firing: ReentrantMutex<()>,
    fire_count: AtomicU64,
}

impl<T> Signal<T> {
    /// Create an unnamed signal
    pub fn new() -> Self {
        Self::named("signal")
    }

    /// Create a signal whose name shows up in diagnostics
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            observers: Mutex::new(Vec::new()),
            firing: ReentrantMutex::new(()),
            fire_count: AtomicU64::new(0),
        }
    }

    /// Append an observer. It receives every payload fired from now on.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.observers.lock().push(Arc::new(observer));
    }

    /// Invoke every registered observer, in registration order, with `payload`.
    ///
    /// Returns the number of observers the payload was delivered to.
    pub fn fire(&self, payload: T) -> usize {
        let _traversal = self.firing.lock();
        let snapshot: Vec<Observer<T>> = self.observers.lock().clone();
        self.fire_count.fetch_add(1, Ordering::Relaxed);

        for (index, observer) in snapshot.iter().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| observer(&payload)));
            if let Err(panic) = outcome {
                error!(
                    signal = self.name,
                    observer = index,
                    reason = panic_message(panic.as_ref()),
                    "Observer panicked, continuing with the remaining observers"
                );
            }
        }

        snapshot.len()
    }

    /// Get the number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }

    /// Get the number of times this signal has fired
    pub fn fire_count(&self) -> u64 {
        self.fire_count.load(Ordering::Relaxed)
    }

    /// Get the diagnostic name of this signal
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("observers", &self.observer_count())
            .field("fire_count", &self.fire_count())
            .finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests;
