//! Mutable playback state of an animation instance.

use super::style::{Direction, PlaybackStyle};

/// Playback position and counters of one animation instance.
///
/// This is the only part of an [`Animation`](super::Animation) that changes while
/// it plays. Copying an instance copies the cursor by value; the template stays
/// shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackCursor {
	/// Integer tick index into the frame playlist
	pub(crate) tick: usize,
	/// Fractional tick index, advanced by `speed` every tick
	pub(crate) tick_f: f32,
	/// Display frame at `tick`
	pub(crate) frame: u16,
	/// Travel direction, only tracked for back-and-forth playback
	pub(crate) direction: Option<Direction>,
	/// Completed plays
	pub(crate) times_played: u32,
	/// Ticks during which the display frame changed
	pub(crate) elapsed_frames: u32,
	/// Play-once latch for the active frame trigger
	pub(crate) active_triggered: bool,
	/// Ticks advanced per call, 1.0 is nominal speed
	pub(crate) speed: f32,
}

impl PlaybackCursor {
	/// Creates a cursor at tick zero for the given style and playlist.
	pub(crate) fn new(style: PlaybackStyle, playlist: &[u16]) -> Self {
		Self {
			tick: 0,
			tick_f: 0.0,
			frame: playlist.first().copied().unwrap_or(0),
			direction: style.initial_direction(),
			times_played: 0,
			elapsed_frames: 0,
			active_triggered: false,
			speed: 1.0,
		}
	}

	/// Moves the playhead forward by `speed`.
	pub(crate) fn step_forward(&mut self) {
		self.tick_f += self.speed;
		self.tick = self.tick_f as usize;
	}

	/// Moves the playhead backward by `speed`, never below tick zero.
	pub(crate) fn step_backward(&mut self) {
		self.tick_f = (self.tick_f - self.speed).max(0.0);
		self.tick = self.tick_f as usize;
	}

	/// Returns true when the playhead sits exactly on a tick boundary.
	///
	/// The comparison is exact on purpose: with a fractional speed the playhead
	/// can pass through a tick without landing on it, and such a pass must not
	/// trigger active frame events.
	#[allow(clippy::float_cmp)]
	pub(crate) fn on_tick_boundary(&self) -> bool {
		self.tick_f == self.tick as f32
	}

	/// Moves the playhead to `tick`, dropping any fractional part.
	pub(crate) fn seek(&mut self, tick: usize) {
		self.tick = tick;
		self.tick_f = tick as f32;
	}
}
