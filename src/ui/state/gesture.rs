// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition state
//!
//! Turns raw pointer input into [`GestureSample`]s:
//! - touch: the pan is the movement of the fingers' centroid and the zoom is
//!   the ratio of the fingers' average distance to that centroid, so a
//!   two-finger pinch zooms and a drag with any number of fingers pans
//! - mouse: a left-button drag pans, the wheel zooms

use super::transform::GestureSample;
use crate::app::config::PIXELS_PER_WHEEL_LINE;
use iced::mouse::ScrollDelta;
use iced::{Point, Vector};

/// Spreads smaller than this (in logical pixels) are too unstable to derive
/// a zoom ratio from.
const MIN_SPREAD: f32 = 1.0;

/// Tracks active pointers between events.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    /// Active touch points, in press order.
    fingers: Vec<(u64, Point)>,

    /// Last cursor position while the left button is held on the surface.
    drag_position: Option<Point>,
}

impl GestureTracker {
    /// Registers a finger touching the surface.
    pub fn finger_pressed(&mut self, id: u64, position: Point) {
        if let Some(finger) = self.fingers.iter_mut().find(|(f, _)| *f == id) {
            finger.1 = position;
        } else {
            self.fingers.push((id, position));
        }
    }

    /// Moves a tracked finger and returns the resulting sample, if any.
    ///
    /// Movement of a finger that was never pressed on the surface is ignored.
    pub fn finger_moved(&mut self, id: u64, position: Point) -> Option<GestureSample> {
        let index = self.fingers.iter().position(|(f, _)| *f == id)?;

        let before = self.geometry();
        self.fingers[index].1 = position;
        let after = self.geometry();

        let (old_centroid, old_spread) = before?;
        let (new_centroid, new_spread) = after?;

        let pan = new_centroid - old_centroid;
        let zoom = if self.fingers.len() >= 2 && old_spread >= MIN_SPREAD && new_spread >= MIN_SPREAD
        {
            new_spread / old_spread
        } else {
            1.0
        };

        let sample = GestureSample::new(pan, zoom);
        (sample != GestureSample::IDENTITY).then_some(sample)
    }

    /// Forgets a finger that left the surface or was cancelled.
    pub fn finger_lifted(&mut self, id: u64) {
        self.fingers.retain(|(f, _)| *f != id);
    }

    /// Starts a mouse drag at `position`.
    pub fn mouse_pressed(&mut self, position: Point) {
        self.drag_position = Some(position);
    }

    /// Continues a mouse drag; returns a pan-only sample while dragging.
    pub fn mouse_moved(&mut self, position: Point) -> Option<GestureSample> {
        let last = self.drag_position?;
        self.drag_position = Some(position);

        let delta = position - last;
        (delta != Vector::ZERO).then(|| GestureSample::new(delta, 1.0))
    }

    /// Ends the mouse drag.
    pub fn mouse_released(&mut self) {
        self.drag_position = None;
    }

    /// Whether a mouse drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_position.is_some()
    }

    /// Centroid of the active fingers and their mean distance to it.
    fn geometry(&self) -> Option<(Point, f32)> {
        if self.fingers.is_empty() {
            return None;
        }
        let count = self.fingers.len() as f32;
        let (sum_x, sum_y) = self
            .fingers
            .iter()
            .fold((0.0, 0.0), |(x, y), (_, p)| (x + p.x, y + p.y));
        let centroid = Point::new(sum_x / count, sum_y / count);

        let spread = self
            .fingers
            .iter()
            .map(|(_, p)| p.distance(centroid))
            .sum::<f32>()
            / count;

        Some((centroid, spread))
    }
}

/// Converts a wheel movement into a zoom-only sample.
///
/// Each line up multiplies the scale by `factor`, each line down divides it.
#[must_use]
pub fn wheel_sample(delta: ScrollDelta, factor: f32) -> Option<GestureSample> {
    let lines = match delta {
        ScrollDelta::Lines { y, .. } => y,
        ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_WHEEL_LINE,
    };
    if lines == 0.0 || !lines.is_finite() {
        return None;
    }
    Some(GestureSample::zoom(factor.powf(lines)))
}
