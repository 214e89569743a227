//! Trailing-edge debouncer.
//!
//! `schedule` may be called as often as input arrives; the wrapped work runs
//! once per quiet period, with the arguments of the last call. The pending
//! timer is a spawned tokio task owned by the debouncer: rescheduling,
//! `cancel` and drop all abort it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

type Work<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    work: Work<T>,
    /// Bumped on every schedule/cancel. A timer only runs the work if the
    /// generation it was armed with is still current when it fires.
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, work: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            work: Arc::new(work),
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        }
    }

    /// Arm the timer for `args`, replacing any pending invocation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, args: T) {
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let armed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let work = Arc::clone(&self.work);
        let delay = self.delay;

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == armed {
                work(args);
            }
        }));
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }

    /// Whether a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
