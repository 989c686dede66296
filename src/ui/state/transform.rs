// SPDX-License-Identifier: MPL-2.0
//! Image transform state
//!
//! Holds the scale factor and translation applied to the displayed artwork,
//! updated one gesture sample at a time:
//! - the scale is multiplied by the sample's zoom factor and clamped to 1×–5×
//! - the pan is multiplied by the *new* scale before being added to the offset

pub use crate::app::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};

use iced::Vector;

/// Scale factor, guaranteed to be within valid range (1×–5×).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// NaN maps to the default scale; infinities clamp like any other value.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Multiplies by `zoom` and clamps.
    ///
    /// Zero, negative and infinite factors clamp to the nearest bound. Only a
    /// NaN product leaves the scale unchanged.
    #[must_use]
    pub fn zoomed(self, zoom: f32) -> Self {
        let product = self.0 * zoom;
        if product.is_nan() {
            self
        } else {
            Self::new(product)
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// One increment reported by a transform gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Translation since the previous sample, in logical pixels.
    pub pan: Vector,
    /// Zoom multiplier since the previous sample (1.0 = unchanged).
    pub zoom: f32,
}

impl GestureSample {
    /// A sample that moves nothing and zooms nothing.
    pub const IDENTITY: Self = Self {
        pan: Vector::ZERO,
        zoom: 1.0,
    };

    #[must_use]
    pub fn new(pan: Vector, zoom: f32) -> Self {
        Self { pan, zoom }
    }

    /// A pan-only sample.
    #[must_use]
    pub fn pan(dx: f32, dy: f32) -> Self {
        Self::new(Vector::new(dx, dy), 1.0)
    }

    /// A zoom-only sample.
    #[must_use]
    pub fn zoom(factor: f32) -> Self {
        Self::new(Vector::ZERO, factor)
    }
}

/// Manages the scale and offset applied to the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformState {
    scale: Scale,
    offset: Vector,
}

impl TransformState {
    /// Applies one gesture sample.
    ///
    /// The scale is updated first; the pan is then multiplied by the updated
    /// scale and accumulated into the offset. Non-finite pan components count
    /// as zero. The offset itself is unbounded.
    pub fn apply_gesture(&mut self, sample: GestureSample) {
        let scale = self.scale.zoomed(sample.zoom);
        let pan = Vector::new(finite_or_zero(sample.pan.x), finite_or_zero(sample.pan.y));

        self.scale = scale;
        self.offset = self.offset + pan * scale.value();
    }

    /// Returns to the initial state (1×, no offset).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Returns whether the transform is the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_min() && self.offset == Vector::ZERO
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(scale: f32, x: f32, y: f32) -> TransformState {
        TransformState {
            scale: Scale::new(scale),
            offset: Vector::new(x, y),
        }
    }

    #[test]
    fn default_transform_is_identity() {
        let transform = TransformState::default();
        assert_eq!(transform.scale(), 1.0);
        assert_eq!(transform.offset(), Vector::ZERO);
        assert!(transform.is_identity());
    }

    #[test]
    fn pan_is_multiplied_by_post_zoom_scale() {
        let mut transform = TransformState::default();

        transform.apply_gesture(GestureSample::new(Vector::new(10.0, 0.0), 2.0));
        assert_eq!(transform.scale(), 2.0);
        assert_eq!(transform.offset(), Vector::new(20.0, 0.0));

        transform.apply_gesture(GestureSample::new(Vector::new(0.0, 5.0), 3.0));
        assert_eq!(transform.scale(), 5.0);
        assert_eq!(transform.offset(), Vector::new(20.0, 25.0));
    }

    #[test]
    fn identity_sample_is_a_no_op() {
        for start in [state(1.0, 0.0, 0.0), state(3.5, -12.0, 40.0), state(5.0, 1e6, -1e6)] {
            let mut transform = start;
            transform.apply_gesture(GestureSample::IDENTITY);
            assert_eq!(transform, start);
        }
    }

    #[test]
    fn zero_zoom_clamps_to_minimum() {
        let mut transform = TransformState::default();
        transform.apply_gesture(GestureSample::zoom(3.0));
        transform.apply_gesture(GestureSample::zoom(0.0));
        assert_eq!(transform.scale(), MIN_SCALE);
    }

    #[test]
    fn negative_zoom_clamps_to_minimum() {
        let mut transform = TransformState::default();
        transform.apply_gesture(GestureSample::zoom(4.0));
        transform.apply_gesture(GestureSample::zoom(-2.0));
        assert_eq!(transform.scale(), MIN_SCALE);

        let mut transform = state(3.0, 0.0, 0.0);
        transform.apply_gesture(GestureSample::zoom(f32::NEG_INFINITY));
        assert_eq!(transform.scale(), MIN_SCALE);
    }

    #[test]
    fn infinite_zoom_clamps_to_maximum_before_panning() {
        let mut transform = TransformState::default();
        transform.apply_gesture(GestureSample::new(Vector::new(1.0, 0.0), f32::INFINITY));
        assert_eq!(transform.scale(), MAX_SCALE);
        assert_eq!(transform.offset(), Vector::new(5.0, 0.0));
    }

    #[test]
    fn huge_and_tiny_zoom_clamp_exactly() {
        let mut transform = state(2.0, 0.0, 0.0);
        transform.apply_gesture(GestureSample::zoom(f32::MAX));
        assert_eq!(transform.scale(), MAX_SCALE);
        transform.apply_gesture(GestureSample::zoom(f32::MIN_POSITIVE));
        assert_eq!(transform.scale(), MIN_SCALE);
        transform.apply_gesture(GestureSample::zoom(1e9));
        assert_eq!(transform.scale(), MAX_SCALE);
        transform.apply_gesture(GestureSample::zoom(0.5));
        assert_eq!(transform.scale(), 2.5);
    }

    #[test]
    fn zoom_below_minimum_clamps_to_one() {
        let mut transform = state(2.0, 0.0, 0.0);
        transform.apply_gesture(GestureSample::zoom(0.1));
        assert_eq!(transform.scale(), MIN_SCALE);
    }

    #[test]
    fn nan_zoom_keeps_scale_but_applies_pan() {
        let mut transform = state(2.0, 0.0, 0.0);
        transform.apply_gesture(GestureSample::new(Vector::new(3.0, 0.0), f32::NAN));
        assert_eq!(transform.scale(), 2.0);
        assert_eq!(transform.offset(), Vector::new(6.0, 0.0));
    }

    #[test]
    fn non_finite_pan_is_ignored() {
        let mut transform = state(1.0, 4.0, 4.0);
        transform.apply_gesture(GestureSample::new(Vector::new(f32::NAN, f32::INFINITY), 1.0));
        assert_eq!(transform.offset(), Vector::new(4.0, 4.0));
    }

    #[test]
    fn offset_accumulates_without_bound() {
        let mut transform = state(5.0, 0.0, 0.0);
        for _ in 0..1000 {
            transform.apply_gesture(GestureSample::pan(100.0, 0.0));
        }
        assert_eq!(transform.offset().x, 500_000.0);
    }

    #[test]
    fn reset_restores_identity() {
        let mut transform = state(4.0, 10.0, -3.0);
        transform.reset();
        assert!(transform.is_identity());
    }

    #[test]
    fn scale_new_clamps_and_handles_nan() {
        assert_eq!(Scale::new(0.5).value(), MIN_SCALE);
        assert_eq!(Scale::new(9.0).value(), MAX_SCALE);
        assert_eq!(Scale::new(f32::NAN).value(), DEFAULT_SCALE);
        assert_eq!(Scale::new(f32::INFINITY).value(), MAX_SCALE);
        assert_eq!(Scale::new(f32::NEG_INFINITY).value(), MIN_SCALE);
    }
}
