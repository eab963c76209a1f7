// SPDX-License-Identifier: MPL-2.0
//! Timer-driven rotation on top of [`super::queue::Queue`].
//!
//! `FlashService` owns the queue behind a shared handle and schedules a
//! one-shot display timeout whenever a message takes the displayed slot.
//! Scheduling bumps an epoch counter; a timer that wakes up to a newer epoch
//! was superseded and exits without touching the queue, so at most one timer
//! is ever live for the displayed message.

use super::message::Message;
use super::queue::{PushOutcome, Queue};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Shared {
    queue: Queue,
    /// Bumped every time the displayed slot changes. Timer tasks carry the
    /// epoch they were scheduled under and stand down on mismatch.
    epoch: u64,
}

/// Shared handle to a flash-message queue with automatic rotation.
///
/// Constructed once per page session and cloned into whichever controller
/// needs to surface messages. All mutation goes through the internal lock, so
/// pushes and rotations never interleave mid-operation.
#[derive(Debug, Clone)]
pub struct FlashService {
    shared: Arc<Mutex<Shared>>,
    display_timeout: Duration,
}

impl FlashService {
    /// Creates a service rotating after the given display timeout.
    #[must_use]
    pub fn new(display_timeout: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            display_timeout,
        }
    }

    /// Creates a service using the configured display timeout.
    #[must_use]
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.display_timeout())
    }

    /// Pushes a message, scheduling a display timeout if it got displayed.
    pub async fn push(&self, message: Message) -> PushOutcome {
        let mut shared = self.shared.lock().await;
        let outcome = shared.queue.push(message);
        if outcome == PushOutcome::Displayed {
            shared.epoch += 1;
            let epoch = shared.epoch;
            drop(shared);
            self.spawn_rotation(epoch);
        }
        outcome
    }

    /// Discards the displayed message immediately and promotes the backlog
    /// head, as when the hosting layer dismisses the banner by hand.
    ///
    /// Supersedes the outstanding timer; if another message got promoted, a
    /// fresh timeout is scheduled for it.
    pub async fn force_display(&self) {
        let mut shared = self.shared.lock().await;
        shared.epoch += 1;
        if shared.queue.advance().is_some() {
            let epoch = shared.epoch;
            drop(shared);
            self.spawn_rotation(epoch);
        }
    }

    /// Returns the text of the displayed message, if any.
    pub async fn text(&self) -> Option<String> {
        let shared = self.shared.lock().await;
        shared.queue.text().map(str::to_owned)
    }

    /// Returns a snapshot of the pending texts in display order.
    pub async fn pending_texts(&self) -> Vec<String> {
        let shared = self.shared.lock().await;
        shared.queue.pending().map(|m| m.text().to_owned()).collect()
    }

    /// Returns the number of pending messages.
    pub async fn pending_count(&self) -> usize {
        let shared = self.shared.lock().await;
        shared.queue.pending_count()
    }

    /// Returns whether nothing is displayed and the backlog is empty.
    pub async fn is_empty(&self) -> bool {
        let shared = self.shared.lock().await;
        shared.queue.is_empty()
    }

    /// Drops the displayed message and the backlog, superseding any timer.
    pub async fn clear(&self) {
        let mut shared = self.shared.lock().await;
        shared.epoch += 1;
        shared.queue.clear();
    }

    /// Spawns the rotation task for the message displayed under `epoch`.
    ///
    /// The task keeps rotating through the backlog, one timeout per promoted
    /// message, until the queue drains or a newer epoch supersedes it.
    fn spawn_rotation(&self, mut epoch: u64) {
        let shared = Arc::clone(&self.shared);
        let timeout = self.display_timeout;
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(timeout).await;
                let mut guard = shared.lock().await;
                if guard.epoch != epoch {
                    // Superseded by a manual rotation or a clear.
                    return;
                }
                guard.epoch += 1;
                if guard.queue.advance().is_some() {
                    epoch = guard.epoch;
                } else {
                    log::debug!("queue drained, no timeout scheduled");
                    return;
                }
            }
        });
    }
}
