// SPDX-License-Identifier: MPL-2.0
//! Bounds and defaults for the transform and the `[viewer]` settings.

/// Smallest scale factor the image transform may hold (no zoom).
pub const MIN_SCALE: f32 = 1.0;

/// Largest scale factor the image transform may hold.
pub const MAX_SCALE: f32 = 5.0;

/// Scale factor at session start.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default zoom multiplier applied per mouse-wheel line (and per `+`/`-` key).
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Minimum wheel zoom multiplier.
pub const MIN_WHEEL_ZOOM_FACTOR: f32 = 1.01;

/// Maximum wheel zoom multiplier.
pub const MAX_WHEEL_ZOOM_FACTOR: f32 = 2.0;

/// Pixels of precise (touchpad) scrolling counted as one wheel line.
pub const PIXELS_PER_WHEEL_LINE: f32 = 60.0;

/// Default pan distance in logical pixels per Shift+arrow press.
pub const DEFAULT_KEYBOARD_PAN_STEP: f32 = 40.0;

/// Minimum keyboard pan step.
pub const MIN_KEYBOARD_PAN_STEP: f32 = 1.0;

/// Maximum keyboard pan step.
pub const MAX_KEYBOARD_PAN_STEP: f32 = 400.0;

/// Whether navigating to another piece resets zoom and pan.
pub const DEFAULT_RESET_TRANSFORM_ON_NAVIGATE: bool = false;


const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < MAX_SCALE);
    assert!(DEFAULT_SCALE >= MIN_SCALE && DEFAULT_SCALE <= MAX_SCALE);

    assert!(MIN_WHEEL_ZOOM_FACTOR > 1.0);
    assert!(MIN_WHEEL_ZOOM_FACTOR < MAX_WHEEL_ZOOM_FACTOR);
    assert!(DEFAULT_WHEEL_ZOOM_FACTOR >= MIN_WHEEL_ZOOM_FACTOR);
    assert!(DEFAULT_WHEEL_ZOOM_FACTOR <= MAX_WHEEL_ZOOM_FACTOR);
    assert!(PIXELS_PER_WHEEL_LINE > 0.0);

    assert!(MIN_KEYBOARD_PAN_STEP > 0.0);
    assert!(DEFAULT_KEYBOARD_PAN_STEP >= MIN_KEYBOARD_PAN_STEP);
    assert!(DEFAULT_KEYBOARD_PAN_STEP <= MAX_KEYBOARD_PAN_STEP);
};
