//! A cooperative cancellation signal for a single `run_and_prove` call,
//! checked at the two points that may suspend for a long time: the subset
//! and full prover invocations.

use tokio::sync::watch;

/// A cloneable handle observing whether the run it was issued for should
/// stop early.
#[derive(Clone)]
pub struct CancellationToken {
    receiver: watch::Receiver<bool>,
}

impl CancellationToken {
    /// Creates a linked sender/token pair. Sending `true` on the sender
    /// requests cancellation; the token observes it from any clone.
    #[must_use]
    pub fn new() -> (watch::Sender<bool>, Self) {
        let (tx, rx) = watch::channel(false);
        (tx, CancellationToken { receiver: rx })
    }

    /// `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once cancellation is requested.
    pub async fn cancelled(&mut self) {
        while !*self.receiver.borrow() {
            if self.receiver.changed().await.is_err() {
                break;
            }
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        let (_, rx) = watch::channel(false);
        CancellationToken { receiver: rx }
    }
}
