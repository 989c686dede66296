// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation and gesture application.
//!
//! Measures the performance of:
//! - Navigation operations (next/previous) around the bundled gallery
//! - Applying a stream of gesture samples to the transform
//! - Gesture recognition from raw two-finger touch input

use art_space::gallery::{default_gallery, GalleryNavigator};
use art_space::ui::state::{GestureSample, GestureTracker, TransformState};
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Vector};
use std::hint::black_box;

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("navigate_next", |b| {
        let mut navigator = GalleryNavigator::new(default_gallery());
        b.iter(|| black_box(navigator.next()));
    });

    group.bench_function("navigate_previous", |b| {
        let mut navigator = GalleryNavigator::new(default_gallery());
        b.iter(|| black_box(navigator.previous()));
    });

    group.finish();
}

/// A pinch that zooms in and out while drifting, 120 samples long.
fn gesture_stream() -> Vec<GestureSample> {
    (0..120)
        .map(|i| {
            let zoom = if i % 2 == 0 { 1.05 } else { 0.97 };
            GestureSample::new(Vector::new(1.5, -0.5), zoom)
        })
        .collect()
}

fn bench_apply_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let samples = gesture_stream();

    group.bench_function("apply_gesture_stream", |b| {
        b.iter(|| {
            let mut transform = TransformState::default();
            for sample in &samples {
                transform.apply_gesture(*sample);
            }
            black_box(transform);
        });
    });

    group.finish();
}

fn bench_recognize_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("recognize_pinch", |b| {
        b.iter(|| {
            let mut tracker = GestureTracker::default();
            tracker.finger_pressed(1, Point::new(100.0, 100.0));
            tracker.finger_pressed(2, Point::new(200.0, 100.0));
            let mut transform = TransformState::default();
            for step in 1..=60 {
                let x = 200.0 + step as f32 * 2.0;
                if let Some(sample) = tracker.finger_moved(2, Point::new(x, 100.0)) {
                    transform.apply_gesture(sample);
                }
            }
            black_box(transform);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_navigate,
    bench_apply_gesture,
    bench_recognize_pinch
);
criterion_main!(benches);
