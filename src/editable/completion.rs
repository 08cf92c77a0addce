//! One-shot completion signal for an edit session.
//!
//! Every [`Completion`] obtained from `wait()` resolves exactly once: `true`
//! when the session is concluded, `false` when it is cancelled. Waiters
//! registered before the same conclude/cancel are all resolved with that
//! outcome, in registration order. A waiter whose field is dropped first
//! resolves `false`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::FutureExt;

/// Future resolving with the outcome of the current edit session.
#[derive(Debug)]
#[must_use = "a completion does nothing unless awaited"]
pub struct Completion {
    receiver: oneshot::Receiver<bool>,
}

impl Future for Completion {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        self.receiver
            .poll_unpin(cx)
            .map(|outcome| outcome.unwrap_or(false))
    }
}

/// Pending resolvers of a field.
#[derive(Debug, Default)]
pub(crate) struct Conclusion {
    pending: Vec<oneshot::Sender<bool>>,
}

impl Conclusion {
    /// Register a new waiter. Waiters whose `Completion` was dropped are
    /// discarded first.
    pub(crate) fn wait(&mut self) -> Completion {
        self.pending.retain(|sender| !sender.is_canceled());
        let (sender, receiver) = oneshot::channel();
        self.pending.push(sender);
        Completion { receiver }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.iter().any(|sender| !sender.is_canceled())
    }

    /// Resolve every pending waiter with `outcome`. Returns how many waiters
    /// were still listening.
    pub(crate) fn resolve(&mut self, outcome: bool) -> usize {
        self.pending
            .drain(..)
            .filter_map(|sender| sender.send(outcome).ok())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_resolves_once_with_outcome() {
        let mut conclusion = Conclusion::default();
        let waiter = conclusion.wait();
        assert!(conclusion.is_pending());
        assert_eq!(conclusion.resolve(true), 1);
        assert!(!conclusion.is_pending());
        assert!(block_on(waiter));

        // Nothing left to resolve
        assert_eq!(conclusion.resolve(false), 0);
    }

    #[test]
    fn test_pending_until_resolved() {
        let mut conclusion = Conclusion::default();
        let mut waiter = conclusion.wait();
        assert_eq!((&mut waiter).now_or_never(), None);
        conclusion.resolve(false);
        assert_eq!(waiter.now_or_never(), Some(false));
    }

    #[test]
    fn test_all_waiters_resolved() {
        let mut conclusion = Conclusion::default();
        let first = conclusion.wait();
        let second = conclusion.wait();
        assert_eq!(conclusion.resolve(false), 2);
        assert!(!block_on(first));
        assert!(!block_on(second));
    }

    #[test]
    fn test_dropped_waiter_is_skipped() {
        let mut conclusion = Conclusion::default();
        drop(conclusion.wait());
        let kept = conclusion.wait();
        assert_eq!(conclusion.resolve(true), 1);
        assert!(block_on(kept));
    }

    #[test]
    fn test_abandoned_waiters_do_not_accumulate() {
        let mut conclusion = Conclusion::default();
        for _ in 0..10_000 {
            drop(conclusion.wait());
        }
        assert!(conclusion.pending.len() <= 1);

        let kept = conclusion.wait();
        drop(conclusion.wait());
        let _ = conclusion.wait();
        assert_eq!(conclusion.pending.len(), 2);
        assert_eq!(conclusion.resolve(true), 1);
        assert!(block_on(kept));
    }

    #[test]
    fn test_dropped_field_resolves_false() {
        let mut conclusion = Conclusion::default();
        let waiter = conclusion.wait();
        drop(conclusion);
        assert!(!block_on(waiter));
    }
}
