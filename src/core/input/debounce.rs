//! Debounced input handling
//!
//! Form fields fire change events on every keystroke; pushing each one at
//! the store would churn derived state for no benefit. [`Debouncer`] wraps
//! a handler in a delayed, coalesced call: each new value cancels the
//! pending one, so the handler only ever sees the latest value, once the
//! input goes quiet.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default delay applied when a field does not configure its own
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Delays and coalesces calls to a handler
///
/// Each debouncer owns exactly one pending timer slot. `call` aborts the
/// pending invocation (if any) and schedules a fresh one, so at most one
/// invocation is outstanding and the handler is never invoked with a value
/// older than the most recent call. Dropping the debouncer aborts the
/// pending slot, which keeps a discarded field from writing into a store
/// nobody is observing anymore.
///
/// A zero delay still defers execution to a spawned task rather than
/// invoking the handler synchronously, so calls made in the same dispatch
/// still coalesce.
///
/// # Panics
///
/// `call` panics if invoked outside a Tokio runtime.
///
/// # Examples
///
/// ```no_run
/// use clinedit::core::input::{Debouncer, DEFAULT_DEBOUNCE};
///
/// # async fn example() {
/// let mut debouncer = Debouncer::new(|value: String| println!("{value}"), DEFAULT_DEBOUNCE);
/// debouncer.call("h".to_string());
/// debouncer.call("hi".to_string());
/// // only "hi" is delivered, 300ms after the second call
/// # }
/// ```
pub struct Debouncer<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer invoking `handler` after `delay`
    pub fn new(handler: impl Fn(T) + Send + Sync + 'static, delay: Duration) -> Self {
        Self {
            handler: Arc::new(handler),
            delay,
            pending: None,
        }
    }

    /// Creates a debouncer with the default delay
    pub fn with_default_delay(handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::new(handler, DEFAULT_DEBOUNCE)
    }

    /// Schedules `handler(value)` after the delay, superseding any pending
    /// invocation
    pub fn call(&mut self, value: T) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        let handler = Arc::clone(&self.handler);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            handler(value);
        }));
    }

    /// Aborts the pending invocation, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// Whether an invocation is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().unwrap().push(value))
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_to_last_value() {
        let (seen, handler) = recorder();
        let mut debouncer = Debouncer::new(handler, Duration::from_millis(300));

        for value in 1..=5 {
            debouncer.call(value);
        }
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_within_window_restarts_timer() {
        let (seen, handler) = recorder();
        let mut debouncer = Debouncer::new(handler, Duration::from_millis(300));

        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.call(2);
        tokio::time::sleep(Duration::from_millis(200)).await;

        // first timer was superseded, second has not elapsed yet
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiet_gaps_deliver_each_value() {
        let (seen, handler) = recorder();
        let mut debouncer = Debouncer::new(handler, Duration::from_millis(300));

        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(350)).await;
        debouncer.call(2);
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_invocation() {
        let (seen, handler) = recorder();
        let mut debouncer = Debouncer::new(handler, Duration::from_millis(300));

        debouncer.call(1);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_invocation() {
        let (seen, handler) = recorder();
        {
            let mut debouncer = Debouncer::new(handler, Duration::from_millis(300));
            debouncer.call(1);
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_still_defers() {
        let (seen, handler) = recorder();
        let mut debouncer = Debouncer::new(handler, Duration::ZERO);

        debouncer.call(1);
        debouncer.call(2);
        // nothing has run yet: execution is deferred to the spawned task
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_instances_are_independent() {
        let (seen_a, handler_a) = recorder();
        let (seen_b, handler_b) = recorder();
        let mut field_a = Debouncer::new(handler_a, Duration::from_millis(300));
        let mut field_b = Debouncer::new(handler_b, Duration::from_millis(100));

        field_a.call(1);
        field_b.call(2);
        field_a.call(3);

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(*seen_a.lock().unwrap(), vec![3]);
        assert_eq!(*seen_b.lock().unwrap(), vec![2]);
    }
}
