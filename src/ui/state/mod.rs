// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the widgets that render it, so it can be
//! driven and tested without a window.

pub mod gesture;
pub mod transform;

// Re-export commonly used types for convenience
pub use gesture::GestureTracker;
pub use transform::{GestureSample, Scale, TransformState};
