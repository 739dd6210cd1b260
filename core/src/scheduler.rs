//! Timer ownership for a playback.
//!
//! Every timer a playback arms lives in its [`Scheduler`] as an abortable
//! future. Cancelling aborts one; dropping the scheduler drops them all, so
//! nothing can fire after teardown.

use std::collections::HashMap;
use std::time::Duration;

use futures::StreamExt;
use futures::future::{AbortHandle, Abortable, Aborted, LocalBoxFuture};
use futures::stream::FuturesUnordered;
use tracing::trace;

use crate::timeline::TimerId;

/// Host timer primitive.
///
/// Native hosts use [`TokioSleeper`]; the browser build supplies one backed by
/// `setTimeout`.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Sleeper backed by `tokio::time`. Honours a paused test clock.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[cfg(feature = "tokio")]
impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

type PendingTimer = Abortable<LocalBoxFuture<'static, TimerId>>;

/// Armed timers of one playback, at most one per [`TimerId`].
pub struct Scheduler<S> {
    sleeper: S,
    armed: HashMap<TimerId, AbortHandle>,
    pending: FuturesUnordered<PendingTimer>,
}

impl<S: Sleeper> Scheduler<S> {
    pub fn new(sleeper: S) -> Self {
        Self {
            sleeper,
            armed: HashMap::new(),
            pending: FuturesUnordered::new(),
        }
    }

    /// Arm `id` to fire after `after`, replacing a timer already armed under
    /// the same id.
    pub fn arm(&mut self, id: TimerId, after: Duration) {
        self.cancel(id);

        let (handle, registration) = AbortHandle::new_pair();
        let sleep = self.sleeper.sleep(after);
        let timer: LocalBoxFuture<'static, TimerId> = Box::pin(async move {
            sleep.await;
            id
        });

        trace!(?id, after_ms = after.as_millis() as u64, "timer armed");
        self.pending.push(Abortable::new(timer, registration));
        self.armed.insert(id, handle);
    }

    /// Cancel `id`. Returns whether it was armed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.armed.remove(&id) {
            Some(handle) => {
                handle.abort();
                trace!(?id, "timer cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancel every armed timer matching `pred`.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&TimerId) -> bool) {
        self.armed.retain(|id, handle| {
            if pred(id) {
                handle.abort();
                false
            } else {
                true
            }
        });
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.armed.drain() {
            handle.abort();
        }
    }

    /// Number of armed timers.
    pub fn armed(&self) -> usize {
        self.armed.len()
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.armed.contains_key(&id)
    }

    /// Wait for the next armed timer to fire.
    ///
    /// Cancelled timers are skipped. Returns `None` once nothing is armed.
    pub async fn next_fired(&mut self) -> Option<TimerId> {
        while let Some(result) = self.pending.next().await {
            match result {
                Ok(id) => {
                    self.armed.remove(&id);
                    return Some(id);
                }
                Err(Aborted) => continue,
            }
        }
        None
    }
}

impl<S> Drop for Scheduler<S> {
    fn drop(&mut self) {
        if !self.armed.is_empty() {
            trace!(pending = self.armed.len(), "scheduler dropped with armed timers");
        }
        for (_, handle) in self.armed.drain() {
            handle.abort();
        }
    }
}

#[cfg(all(test, feature = "tokio"))]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Paused-clock deadlines land on millisecond ticks; allow rounding.
    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed <= expected + ms(2),
            "elapsed {elapsed:?}, expected {expected:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_in_deadline_order() {
        let mut scheduler = Scheduler::new(TokioSleeper);
        let start = Instant::now();
        scheduler.arm(TimerId::Advance, ms(300));
        scheduler.arm(TimerId::PressRelease, ms(100));
        assert_eq!(scheduler.armed(), 2);

        assert_eq!(scheduler.next_fired().await, Some(TimerId::PressRelease));
        assert_elapsed(start, ms(100));
        assert_eq!(scheduler.next_fired().await, Some(TimerId::Advance));
        assert_elapsed(start, ms(300));
        assert_eq!(scheduler.armed(), 0);
        assert_eq!(scheduler.next_fired().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let mut scheduler = Scheduler::new(TokioSleeper);
        scheduler.arm(TimerId::TypingFallback, ms(100));
        scheduler.arm(TimerId::Advance, ms(200));
        assert!(scheduler.cancel(TimerId::TypingFallback));
        assert!(!scheduler.cancel(TimerId::TypingFallback));

        assert_eq!(scheduler.next_fired().await, Some(TimerId::Advance));
        assert_eq!(scheduler.next_fired().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_previous() {
        let mut scheduler = Scheduler::new(TokioSleeper);
        let start = Instant::now();
        scheduler.arm(TimerId::Advance, ms(100));
        scheduler.arm(TimerId::Advance, ms(400));
        assert_eq!(scheduler.armed(), 1);

        assert_eq!(scheduler.next_fired().await, Some(TimerId::Advance));
        assert_elapsed(start, ms(400));
        assert_eq!(scheduler.next_fired().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_where_and_cancel_all() {
        let mut scheduler = Scheduler::new(TokioSleeper);
        scheduler.arm(TimerId::Advance, ms(100));
        scheduler.arm(TimerId::TypingFallback, ms(100));
        scheduler.arm(TimerId::PressRelease, ms(100));

        scheduler.cancel_where(|id| *id != TimerId::Advance);
        assert!(scheduler.is_armed(TimerId::Advance));
        assert_eq!(scheduler.armed(), 1);

        scheduler.cancel_all();
        assert_eq!(scheduler.armed(), 0);
        assert_eq!(scheduler.next_fired().await, None);
    }
}
