//! Benchmark suite for animation playback and set loading
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{hint::black_box, sync::Arc};

use animset_benches::{generate_definition_text, sizes};
use animset_types::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Benchmark playlist construction for even and uneven frame spreads
fn bench_timeline_build(c: &mut Criterion) {
	let mut group = c.benchmark_group("timeline_build");

	for (frames, duration) in [(4u16, 16u16), (7, 60), (24, 600), (13, 1000)] {
		group.throughput(Throughput::Elements(u64::from(duration)));
		group.bench_with_input(
			BenchmarkId::new("build", format!("{frames}x{duration}")),
			&(frames, duration),
			|b, &(frames, duration)| {
				b.iter(|| black_box(Timeline::build(black_box(frames), black_box(duration), PlaybackStyle::Looped)));
			},
		);
	}

	group.finish();
}

/// Benchmark advancing many instances sharing one template, as a crowded scene does
fn bench_advance(c: &mut Criterion) {
	let mut group = c.benchmark_group("advance");

	for style in [PlaybackStyle::Looped, PlaybackStyle::BackForth, PlaybackStyle::PlayOnce] {
		let mut template = AnimationTemplate::new("walk", style, RenderStyle::OPAQUE, 8, 48, 8);
		template.set_active_frames(&ActiveFrames::List(vec![3, 7]));
		let template = Arc::new(template);

		let instances = 1000;
		group.throughput(Throughput::Elements(instances));
		group.bench_function(BenchmarkId::new("instances", style), |b| {
			let mut animations = (0..instances).map(|_| Animation::new(Arc::clone(&template))).collect::<Vec<_>>();
			b.iter(|| {
				let mut events = 0u32;
				for animation in &mut animations {
					animation.advance();
					if animation.is_active_frame() {
						events += 1;
					}
				}
				black_box(events)
			});
		});
	}

	group.finish();
}

/// Benchmark resolving the renderable of the current frame
fn bench_current_frame(c: &mut Criterion) {
	let mut group = c.benchmark_group("current_frame");

	let text = generate_definition_text(1, 8, 8, false);
	let mut images = ImageCache::new();
	let mut ctx = LoadContext::new(&mut images);
	let Ok(set) = AnimationSet::from_text("bench.txt", &text, &mut ctx) else {
		eprintln!("Warning: Could not load the synthetic definition");
		return;
	};
	let mut animation = set.default_animation();

	group.bench_function("all_kinds", |b| {
		b.iter(|| {
			animation.advance();
			for kind in 0..8 {
				black_box(animation.current_frame(black_box(kind)));
			}
		});
	});

	group.finish();
}

/// Benchmark loading whole definitions
fn bench_set_load(c: &mut Criterion) {
	let mut group = c.benchmark_group("set_load");

	for (label, sections) in [("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)] {
		for compressed in [false, true] {
			let text = generate_definition_text(sections, 8, 8, compressed);
			let layout = if compressed {
				"compressed"
			} else {
				"uncompressed"
			};

			group.throughput(Throughput::Bytes(text.len() as u64));
			group.bench_with_input(BenchmarkId::new(layout, label), &text, |b, text| {
				b.iter(|| {
					let mut images = ImageCache::new();
					let mut ctx = LoadContext::new(&mut images);
					let result = AnimationSet::from_text("bench.txt", black_box(text), &mut ctx);
					black_box(result)
				});
			});
		}
	}

	group.finish();
}

criterion_group!(benches, bench_timeline_build, bench_advance, bench_current_frame, bench_set_load,);

criterion_main!(benches);
