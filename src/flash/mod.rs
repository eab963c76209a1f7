// SPDX-License-Identifier: MPL-2.0
//! Flash-message queue engine.
//!
//! Flash messages are transient success/error banners surfaced to the user
//! after server responses. At most one message is displayed at a time; the
//! rest wait in a priority-ordered backlog and rotate in on a display
//! timeout.
//!
//! # Components
//!
//! - [`message`] - Core `Message` struct with status and priority
//! - [`queue`] - `Queue`, the synchronous displayed-slot + backlog state machine
//! - [`service`] - `FlashService`, timer-driven rotation on a tokio runtime
//!
//! # Usage
//!
//! ```
//! use flashbar::flash::{Message, Priority, Queue};
//!
//! let mut queue = Queue::new();
//! queue.push(Message::error("Lost connection to the server."));
//! queue.push(Message::success("Waterfall saved.").with_priority(Priority::High));
//!
//! assert_eq!(queue.text(), Some("Lost connection to the server."));
//! queue.advance();
//! assert_eq!(queue.text(), Some("Waterfall saved."));
//! ```

mod message;
mod queue;
mod service;

pub use message::{Message, Priority, Status};
pub use queue::{PushOutcome, Queue};
pub use service::FlashService;
