//! Playback behavior of animation instances

use std::sync::Arc;

use animset_rs::prelude::*;
use animset_rs::animset_types::timeline::{build_playlist, resolve_active_frames};

use crate::template;

#[test]
fn test_even_playlist() {
	let timeline = Timeline::build(4, 8, PlaybackStyle::Looped);
	assert_eq!(timeline.playlist(), [0, 0, 1, 1, 2, 2, 3, 3]);
	assert_eq!(timeline.number_frames(), 4);
}

#[test]
fn test_uneven_playlist() {
	let playlist = build_playlist(3, 7);
	assert_eq!(playlist.len(), 7);
	assert!(playlist.windows(2).all(|pair| pair[0] <= pair[1]));
	for frame in 0..3 {
		assert!(playlist.contains(&frame));
	}
	assert_eq!(playlist.first(), Some(&0));
	assert_eq!(playlist.last(), Some(&2));
}

#[test]
fn test_zero_frames_is_safe() {
	let mut animation = Animation::new(template(PlaybackStyle::Looped, 0, 10));
	assert!(animation.playlist().is_empty());

	for expected in 1..=3 {
		animation.advance();
		assert_eq!(animation.tick(), 0);
		assert_eq!(animation.times_played(), expected);
	}
	assert!(animation.current_frame(0).is_none());
	assert!(!animation.is_last_frame());
	assert!(!animation.is_active_frame());
}

#[test]
fn test_play_once_completes() {
	let mut animation = Animation::new(template(PlaybackStyle::PlayOnce, 2, 4));
	for _ in 0..10 {
		animation.advance();
	}
	assert_eq!(animation.times_played(), 1);
	assert!(animation.is_completed());
	assert!(animation.is_last_frame());
	assert_eq!(animation.tick(), 3);
}

#[test]
fn test_looped_wraps() {
	let mut animation = Animation::new(template(PlaybackStyle::Looped, 2, 4));
	for _ in 0..4 {
		animation.advance();
	}
	assert_eq!(animation.tick(), 0);
	assert_eq!(animation.times_played(), 1);

	for _ in 0..4 {
		animation.advance();
	}
	assert_eq!(animation.times_played(), 2);
	assert!(!animation.is_completed());
}

#[test]
fn test_back_forth_cycle() {
	let mut animation = Animation::new(template(PlaybackStyle::BackForth, 3, 3));
	assert_eq!(animation.number_frames(), 6);

	let mut frames = Vec::new();
	for _ in 0..6 {
		animation.advance();
		frames.push(animation.current_display_frame());
	}
	assert_eq!(frames, [1, 2, 2, 1, 0, 0]);
	assert_eq!(animation.times_played(), 1);
	assert_eq!(animation.direction(), Some(Direction::Forward));
	assert!(animation.is_first_frame());
}

#[test_log::test]
fn test_active_frame_repair() {
	let repaired = resolve_active_frames(&ActiveFrames::List(vec![2, 9]), 5);
	assert_eq!(repaired, [2, 4]);

	let repaired = resolve_active_frames(&ActiveFrames::List(vec![4, 9]), 5);
	assert_eq!(repaired, [4]);
}

#[test_log::test]
fn test_sync_to_shorter_animation() {
	let mut source = Animation::new(template(PlaybackStyle::Looped, 10, 10));
	for _ in 0..7 {
		source.advance();
	}

	let mut target = Animation::new(template(PlaybackStyle::Looped, 3, 3));
	assert!(!target.sync_to(&source));
	assert_eq!(target.tick(), 2);
	assert_eq!(target.current_display_frame(), 2);

	target.advance();
	assert_eq!(target.tick(), 0);
	assert_eq!(target.times_played(), 1);
}

#[test]
fn test_sync_to_layer() {
	let body = template(PlaybackStyle::BackForth, 4, 8);
	let mut base = Animation::new(Arc::clone(&body));
	for _ in 0..9 {
		base.advance();
	}
	assert_eq!(base.direction(), Some(Direction::Backward));

	let mut layer = Animation::new(template(PlaybackStyle::BackForth, 4, 8));
	assert!(layer.sync_to(&base));
	assert_eq!(layer.tick(), base.tick());
	assert_eq!(layer.direction(), Some(Direction::Backward));
	assert_eq!(layer.current_display_frame(), base.current_display_frame());
}

#[test]
fn test_clone_independence() {
	let mut original = Animation::new(template(PlaybackStyle::Looped, 4, 8));
	original.advance();

	let mut copy = original.clone();
	assert_eq!(copy.tick(), 1);

	copy.advance();
	assert_eq!(copy.tick(), 2);
	assert_eq!(original.tick(), 1);

	original.advance();
	original.advance();
	assert_eq!(original.tick(), 3);
	assert_eq!(copy.tick(), 2);
}

#[test]
fn test_half_speed() {
	let mut animation = Animation::new(template(PlaybackStyle::Looped, 4, 4));
	animation.set_speed(50.0);

	animation.advance();
	assert_eq!(animation.tick(), 0);
	animation.advance();
	assert_eq!(animation.tick(), 1);
	assert_eq!(animation.elapsed_frames(), 1);
}

#[test]
fn test_current_frame_renderable() {
	let mut animation = Animation::new(template(PlaybackStyle::Looped, 4, 4));
	animation.advance();

	let renderable = animation.current_frame(2).unwrap();
	assert_eq!(renderable.src, Rect::new(32, 64, 32, 32));
	assert_eq!(renderable.offset, Point::new(16, 16));
	assert_eq!(renderable.alpha_mod, 255);
	assert!(renderable.image.is_none());
	assert!(animation.current_frame(8).is_none());
}
