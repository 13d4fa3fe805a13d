//! Benchmarks for gesture and movement recognition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hand_gesture_recognition::{
    gesture::GestureRecognizer,
    hand_tracker::{HandId, HandTrackers},
    landmarks::{Landmark, NormalizedRect},
    motion_tracker::MotionTracker,
    recording::HandFrame,
};

/// Open hand with a little detector noise on every point
fn noisy_hand(noise: f32) -> Vec<Landmark> {
    let mut points = vec![Landmark::new(0.5, 0.9)];
    for finger in 0..5 {
        let x = 0.38 + 0.07 * finger as f32;
        for joint in 0..4 {
            let y = 0.75 - 0.08 * joint as f32;
            let jitter_x = noise * (rand::random::<f32>() - 0.5);
            let jitter_y = noise * (rand::random::<f32>() - 0.5);
            points.push(Landmark::new(x + jitter_x, y + jitter_y));
        }
    }
    points
}

/// Hand drifting right while slowly growing
fn moving_hand(len: usize) -> Vec<(Vec<Landmark>, NormalizedRect)> {
    (0..len)
        .map(|i| {
            let t = i as f32 / len as f32;
            let rect = NormalizedRect::new(0.2 + 0.6 * t, 0.5, 0.3, 0.3 + 0.2 * t);
            (noisy_hand(0.01), rect)
        })
        .collect()
}

fn benchmark_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    let recognizer = GestureRecognizer::new();
    let rect = NormalizedRect::new(0.5, 0.5, 0.3, 0.4);

    for noise in [0.0, 0.02, 0.1] {
        let points = noisy_hand(noise);
        group.bench_with_input(BenchmarkId::new("recognize", noise), &points, |b, points| {
            b.iter(|| black_box(recognizer.recognize(black_box(points), black_box(&rect))));
        });
    }

    let small = NormalizedRect::new(0.5, 0.5, 0.005, 0.005);
    let points = noisy_hand(0.0);
    group.bench_function("no_hand", |b| {
        b.iter(|| black_box(recognizer.recognize(black_box(&points), black_box(&small))));
    });

    group.finish();
}

fn benchmark_motion(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion");

    for len in [10, 100] {
        let frames = moving_hand(len);
        group.bench_with_input(BenchmarkId::new("sequence", len), &frames, |b, frames| {
            b.iter(|| {
                let mut tracker = MotionTracker::new();
                for (points, rect) in frames {
                    black_box(tracker.update(black_box(points), black_box(rect)).ok());
                }
            });
        });
    }

    group.finish();
}

fn benchmark_trackers(c: &mut Criterion) {
    let frames: Vec<HandFrame> = moving_hand(100)
        .into_iter()
        .enumerate()
        .map(|(i, (landmarks, rect))| HandFrame {
            timestamp: (i / 2) as i64,
            hand: HandId((i % 2) as u32),
            rect,
            landmarks,
        })
        .collect();

    c.bench_function("trackers/two_hands_100", |b| {
        b.iter(|| {
            let mut trackers = HandTrackers::default();
            for frame in &frames {
                black_box(trackers.process(black_box(frame)).ok());
            }
        });
    });
}

criterion_group!(benches, benchmark_gesture, benchmark_motion, benchmark_trackers);
criterion_main!(benches);
