// SPDX-License-Identifier: MPL-2.0
//! Flash-message queue state machine.
//!
//! The `Queue` holds at most one displayed message plus a priority-ordered
//! backlog. It is purely synchronous; timed rotation lives in
//! [`super::service`].

use super::message::Message;
use std::collections::VecDeque;

/// What happened to a pushed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The slot was empty; the message is now displayed.
    Displayed,
    /// Another message is displayed; this one joined the backlog.
    Enqueued,
    /// The text matched the displayed message; the push was a no-op.
    DroppedDuplicate,
}

/// Manages the displayed message and the pending backlog.
///
/// Invariants:
/// - At most one message is displayed.
/// - A push whose text equals the displayed text is dropped. The backlog is
///   not consulted, so duplicate texts can coexist in `pending`.
/// - `pending` is always ordered high-priority first, FIFO within a band.
#[derive(Debug, Default)]
pub struct Queue {
    /// The message currently visible to the user, if any.
    displayed: Option<Message>,
    /// Messages waiting for the displayed slot, priority-ordered.
    pending: VecDeque<Message>,
}

impl Queue {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new message.
    ///
    /// If nothing is displayed, the message takes the displayed slot
    /// immediately. A message whose text equals the displayed text is dropped
    /// silently. Everything else joins the backlog, which is re-sorted so
    /// high-priority entries sit ahead of low-priority ones while arrival
    /// order is preserved within each band.
    pub fn push(&mut self, message: Message) -> PushOutcome {
        match &self.displayed {
            None => {
                log::debug!("displaying \"{}\"", message.text());
                self.displayed = Some(message);
                PushOutcome::Displayed
            }
            Some(current) if current.text() == message.text() => {
                log::debug!("dropping duplicate of displayed \"{}\"", message.text());
                PushOutcome::DroppedDuplicate
            }
            Some(_) => {
                log::debug!("enqueueing \"{}\"", message.text());
                self.pending.push_back(message);
                // Stable sort keeps FIFO order within each priority band.
                self.pending
                    .make_contiguous()
                    .sort_by_key(|m| m.priority().rank());
                PushOutcome::Enqueued
            }
        }
    }

    /// Discards the displayed message and promotes the backlog head.
    ///
    /// Called when the display timeout fires or when rotation is forced
    /// manually. Returns the newly displayed message, or `None` if the
    /// backlog was empty and the queue is now idle.
    pub fn advance(&mut self) -> Option<&Message> {
        self.displayed = self.pending.pop_front();
        if let Some(message) = &self.displayed {
            log::debug!("rotated to \"{}\"", message.text());
        }
        self.displayed.as_ref()
    }

    /// Returns the text of the displayed message, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.displayed.as_ref().map(Message::text)
    }

    /// Returns the displayed message, if any.
    #[must_use]
    pub fn displayed(&self) -> Option<&Message> {
        self.displayed.as_ref()
    }

    /// Returns the pending messages in display order.
    pub fn pending(&self) -> impl Iterator<Item = &Message> {
        self.pending.iter()
    }

    /// Returns the number of pending messages.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether nothing is displayed and the backlog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.displayed.is_none() && self.pending.is_empty()
    }

    /// Clears the displayed message and the backlog.
    pub fn clear(&mut self) {
        self.displayed = None;
        self.pending.clear();
    }
}
