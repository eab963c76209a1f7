// SPDX-License-Identifier: MPL-2.0
//! Core flash-message data structures.
//!
//! This module defines the `Message` struct and the `Status` and `Priority`
//! enums used throughout the engine.

/// Whether a message reports a successful or a failed operation.
///
/// The hosting layer styles the banner by status; the queue itself only
/// carries it along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Operation failed and the user should be told.
    Error,
}

/// Display priority band.
///
/// High-priority messages surface before low-priority ones regardless of
/// arrival order; within a band, arrival order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    High,
    /// Messages without an explicit priority default to `Low`.
    #[default]
    Low,
}

impl Priority {
    /// Sort rank within the backlog. Lower ranks surface first.
    pub(crate) fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Low => 1,
        }
    }
}

/// A transient message to be displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Human-readable banner content.
    text: String,
    /// Success or error, for styling by the hosting layer.
    status: Status,
    /// Display priority band.
    priority: Priority,
}

impl Message {
    /// Creates a new message with the given status and text.
    ///
    /// Priority defaults to [`Priority::Low`].
    pub fn new(status: Status, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status,
            priority: Priority::default(),
        }
    }

    /// Creates a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Status::Success, text)
    }

    /// Creates an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Status::Error, text)
    }

    /// Sets the priority band, overriding the `Low` default.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the banner text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the priority band.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_correct_status() {
        assert_eq!(Message::success("").status(), Status::Success);
        assert_eq!(Message::error("").status(), Status::Error);
    }

    #[test]
    fn priority_defaults_to_low() {
        assert_eq!(Message::error("oops").priority(), Priority::Low);
    }

    #[test]
    fn with_priority_overrides_default() {
        let message = Message::success("saved").with_priority(Priority::High);
        assert_eq!(message.priority(), Priority::High);
    }

    #[test]
    fn high_priority_ranks_ahead_of_low() {
        assert!(Priority::High.rank() < Priority::Low.rank());
    }
}
