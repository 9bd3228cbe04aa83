//! Animation instances and their playback state machine.
//!
//! An [`Animation`] pairs a shared, immutable [`AnimationTemplate`] with a small
//! [`PlaybackCursor`] that is owned by one game object. The owner calls
//! [`Animation::advance`] once per logic tick and queries the result.
//!
//! # Playback styles
//!
//! ```text
//! PlayOnce   0 1 2 3 3 3 ...        times_played becomes 1 at the end and stays
//! Looped     0 1 2 3 0 1 2 3 ...    times_played +1 on every wrap
//! BackForth  0 1 2 3 3 2 1 0 0 1 .. times_played +1 after the backward pass
//! ```
//!
//! Each boundary costs one extra tick: the call that finds the playhead on the
//! last (or, backwards, first) tick performs the transition instead of moving.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use animset_types::animation::{Animation, PlaybackStyle};
//! use animset_types::template::{AnimationTemplate, RenderStyle};
//!
//! let template = AnimationTemplate::new("run", PlaybackStyle::Looped, RenderStyle::OPAQUE, 4, 8, 8);
//! let mut run = Animation::new(Arc::new(template));
//!
//! for _ in 0..8 {
//!     run.advance();
//! }
//! assert_eq!(run.times_played(), 1);
//! assert_eq!(run.tick(), 0);
//!
//! // Copies share the template but not the playhead.
//! let mut copy = run.clone();
//! copy.advance();
//! assert_eq!(run.tick(), 0);
//! assert_eq!(copy.tick(), 1);
//! ```

mod cursor;
mod style;

use std::{fmt::Formatter, sync::Arc};

use log::warn;

use crate::{render::Renderable, template::AnimationTemplate};

pub use self::cursor::PlaybackCursor;
pub use self::style::{Direction, PlaybackStyle};

/// A playing instance of an animation template.
///
/// Cloning an animation is the deep copy used to give a new owner its own player:
/// the template (playlist, active frames, atlas lookups, images) is shared, while
/// the playback cursor is copied exactly as it is.
#[derive(Debug, Clone)]
pub struct Animation {
	template: Arc<AnimationTemplate>,
	cursor: PlaybackCursor,
}

impl Animation {
	/// Creates an instance positioned at tick zero.
	pub fn new(template: Arc<AnimationTemplate>) -> Self {
		let cursor = PlaybackCursor::new(template.style(), template.playlist());
		Self {
			template,
			cursor,
		}
	}

	/// Advances playback by one logic tick.
	pub fn advance(&mut self) {
		let playlist = self.template.playlist();
		let cursor = &mut self.cursor;

		if playlist.is_empty() {
			cursor.seek(0);
			cursor.times_played += 1;
			return;
		}

		let last = playlist.len() - 1;
		match self.template.style() {
			PlaybackStyle::PlayOnce => {
				if cursor.tick < last {
					cursor.step_forward();
				} else {
					cursor.times_played = 1;
				}
			}
			PlaybackStyle::Looped => {
				if cursor.tick < last {
					cursor.step_forward();
				} else {
					cursor.seek(0);
					cursor.times_played += 1;
				}
			}
			PlaybackStyle::BackForth => {
				if cursor.direction == Some(Direction::Backward) {
					if cursor.tick > 0 {
						cursor.step_backward();
					} else {
						cursor.direction = Some(Direction::Forward);
						cursor.times_played += 1;
					}
				} else if cursor.tick < last {
					cursor.step_forward();
				} else {
					cursor.direction = Some(Direction::Backward);
				}
			}
		}

		// fractional speeds can overshoot the end
		if cursor.tick > last {
			cursor.seek(last);
		}

		let frame = playlist[cursor.tick];
		if frame != cursor.frame {
			cursor.elapsed_frames += 1;
		}
		cursor.frame = frame;
	}

	/// Resolves what to draw for direction variant `kind`.
	///
	/// Returns `None` when there are no frames, `kind` is out of range, or the
	/// compressed layout never filled this cell.
	pub fn current_frame(&self, kind: u16) -> Option<Renderable> {
		if self.template.playlist().is_empty() {
			return None;
		}
		self.template.renderable(self.cursor.frame, kind)
	}

	/// Returns the canonical playlist index for a display frame value.
	///
	/// A value usually spans several ticks; the canonical position is the last of
	/// them, or the first one while a back-and-forth animation travels backward.
	/// Values that do not occur map to the last index.
	pub fn last_frame_index(&self, frame: u16) -> usize {
		let playlist = self.template.playlist();
		if playlist.is_empty() {
			return 0;
		}

		let found = if self.is_reversing() {
			playlist.iter().position(|&f| f == frame)
		} else {
			playlist.iter().rposition(|&f| f == frame)
		};
		found.unwrap_or(playlist.len() - 1)
	}

	/// Returns true on tick zero.
	pub fn is_first_frame(&self) -> bool {
		self.cursor.tick == 0
	}

	/// Returns true when the playhead settled on the final display frame.
	pub fn is_last_frame(&self) -> bool {
		match self.template.playlist().last() {
			Some(&last) => self.cursor.tick == self.last_frame_index(last),
			None => false,
		}
	}

	/// Returns true when the playhead settled on the display frame before the final one.
	pub fn is_second_last_frame(&self) -> bool {
		match self.template.playlist().last() {
			Some(&last) if last > 0 => self.cursor.tick == self.last_frame_index(last - 1),
			_ => false,
		}
	}

	/// Returns true when the current tick should fire the animation's game event.
	///
	/// The event fires when the display frame is active, the playhead landed
	/// exactly on a tick boundary, and the tick is the canonical position of that
	/// frame. Play-once animations latch the event so it fires once per play; if
	/// none of their active frames was hit, it fires once on the last frame.
	pub fn is_active_frame(&mut self) -> bool {
		if self.template.playlist().is_empty() {
			return false;
		}

		let frame = self.cursor.frame;
		let play_once = self.template.style() == PlaybackStyle::PlayOnce;

		if self.template.is_active(frame)
			&& self.cursor.on_tick_boundary()
			&& self.cursor.tick == self.last_frame_index(frame)
		{
			if play_once {
				if self.cursor.active_triggered {
					return false;
				}
				self.cursor.active_triggered = true;
			}
			return true;
		}

		if play_once
			&& !self.template.active_frames().is_empty()
			&& !self.cursor.active_triggered
			&& self.is_last_frame()
		{
			self.cursor.active_triggered = true;
			return true;
		}

		false
	}

	/// Returns true once a play-once animation has finished.
	pub fn is_completed(&self) -> bool {
		self.template.style() == PlaybackStyle::PlayOnce && self.cursor.times_played > 0
	}

	/// Copies playback progress from `other`, which may have a different playlist.
	///
	/// Tick position, times played, elapsed frames and (between two back-and-forth
	/// animations) the direction are copied. When the copied tick does not fit this
	/// animation's playlist the cursor is clamped (or reset when there are no
	/// frames) and false is returned; the animation stays playable either way.
	pub fn sync_to(&mut self, other: &Animation) -> bool {
		let source = other.cursor;
		let cursor = &mut self.cursor;

		cursor.tick = source.tick;
		cursor.tick_f = source.tick_f;
		cursor.times_played = source.times_played;
		cursor.elapsed_frames = source.elapsed_frames;
		if cursor.direction.is_some() {
			cursor.direction = Some(source.direction.unwrap_or(Direction::Forward));
		}

		let playlist = self.template.playlist();
		let in_range = source.tick < playlist.len();
		if !in_range {
			if playlist.is_empty() {
				warn!("Animation '{}' has no frames to sync to", self.template.name());
				cursor.seek(0);
			} else {
				warn!(
					"Animation '{}' has {} ticks, but '{}' is at tick {}",
					self.template.name(),
					playlist.len(),
					other.template.name(),
					source.tick
				);
				cursor.seek(playlist.len() - 1);
			}
		}

		cursor.frame = playlist.get(cursor.tick).copied().unwrap_or(0);
		in_range
	}

	/// Rewinds to tick zero and clears every counter.
	pub fn reset(&mut self) {
		let speed = self.cursor.speed;
		self.cursor = PlaybackCursor::new(self.template.style(), self.template.playlist());
		self.cursor.speed = speed;
	}

	/// Sets the playback speed in percent of nominal speed (100 = one tick per call).
	///
	/// Negative values are treated as zero.
	pub fn set_speed(&mut self, percent: f32) {
		self.cursor.speed = (percent / 100.0).max(0.0);
	}

	/// Returns the playback speed as ticks per call.
	pub fn speed(&self) -> f32 {
		self.cursor.speed
	}

	/// Returns the number of completed plays.
	pub fn times_played(&self) -> u32 {
		self.cursor.times_played
	}

	/// Overrides the number of completed plays.
	pub fn set_times_played(&mut self, times_played: u32) {
		self.cursor.times_played = times_played;
	}

	/// Returns the integer tick index.
	pub fn tick(&self) -> usize {
		self.cursor.tick
	}

	/// Returns the fractional tick index.
	pub fn tick_f(&self) -> f32 {
		self.cursor.tick_f
	}

	/// Returns the display frame at the current tick.
	pub fn current_display_frame(&self) -> u16 {
		self.cursor.frame
	}

	/// Returns the number of ticks during which the display frame changed.
	pub fn elapsed_frames(&self) -> u32 {
		self.cursor.elapsed_frames
	}

	/// Returns the travel direction of a back-and-forth animation.
	pub fn direction(&self) -> Option<Direction> {
		self.cursor.direction
	}

	/// Returns the playback cursor.
	pub fn cursor(&self) -> &PlaybackCursor {
		&self.cursor
	}

	/// Returns the shared template.
	pub fn template(&self) -> &Arc<AnimationTemplate> {
		&self.template
	}

	/// Returns the animation name.
	pub fn name(&self) -> &str {
		self.template.name()
	}

	/// Returns the playback style.
	pub fn style(&self) -> PlaybackStyle {
		self.template.style()
	}

	/// Returns the nominal duration in ticks.
	pub fn duration(&self) -> u16 {
		self.template.duration()
	}

	/// Returns the declared frame count of one cycle.
	pub fn frame_count(&self) -> u16 {
		self.template.frame_count()
	}

	/// Returns the number of display frames, doubled for back-and-forth playback.
	pub fn number_frames(&self) -> u32 {
		self.template.number_frames()
	}

	/// Returns the frame playlist.
	pub fn playlist(&self) -> &[u16] {
		self.template.playlist()
	}

	/// Returns the resolved active frames.
	pub fn active_frames(&self) -> &[u32] {
		self.template.active_frames()
	}

	fn is_reversing(&self) -> bool {
		self.cursor.direction == Some(Direction::Backward)
	}
}

impl std::fmt::Display for Animation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} @ tick {}/{} (frame {}, played {})",
			self.template.name(),
			self.cursor.tick,
			self.template.playlist().len(),
			self.cursor.frame,
			self.cursor.times_played
		)
	}
}
