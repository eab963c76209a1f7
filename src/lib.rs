// SPDX-License-Identifier: MPL-2.0
//! `flashbar` is the flash-message engine of an ad-mediation admin console.
//!
//! It manages a single "currently displayed" banner plus a priority-ordered
//! backlog, deduplicates repeats of the visible message, and rotates to the
//! next pending message on a display timeout. Rendering and transport are the
//! hosting layer's job; this crate only answers "what should the user see
//! right now".

pub mod config;
pub mod error;
pub mod flash;
