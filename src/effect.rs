//! Opt-in synchronized execution for side-effecting procedures.
//!
//! The cursor/accumulator core is single-threaded by design. This wrapper
//! is the one thread-safety primitive offered at the boundary: it
//! serializes calls to a side-effecting closure under a mutex so the
//! closure can be shared across threads.

use std::fmt;
use std::sync::Mutex;

/// A side-effecting procedure callable through a shared reference.
///
/// ```
/// use penelope::effect::SharedEffect;
///
/// let mut log = Vec::new();
/// let effect = SharedEffect::new(|value: i32| log.push(value));
/// effect.call(1);
/// effect.call(2);
/// drop(effect);
/// assert_eq!(log, vec![1, 2]);
/// ```
pub struct SharedEffect<F> {
    inner: Mutex<F>,
}

impl<F> SharedEffect<F> {
    /// Wrap a procedure for serialized shared execution.
    pub fn new(effect: F) -> Self {
        Self {
            inner: Mutex::new(effect),
        }
    }

    /// Invoke the procedure with `value`, holding the lock for the
    /// duration of the call.
    pub fn call<T>(&self, value: T)
    where
        F: FnMut(T),
    {
        let mut effect = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        effect(value);
    }

    /// Unwrap the procedure.
    pub fn into_inner(self) -> F {
        self.inner
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<F> fmt::Debug for SharedEffect<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedEffect").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn calls_are_serialized_across_threads() {
        let total = AtomicUsize::new(0);
        let effect = SharedEffect::new(|value: usize| {
            total.fetch_add(value, Ordering::Relaxed);
        });

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for value in 1..=10 {
                        effect.call(value);
                    }
                });
            }
        });

        assert_eq!(total.load(Ordering::Relaxed), 4 * 55);
    }
}
