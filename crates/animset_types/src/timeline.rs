//! Frame timeline construction.
//!
//! A timeline maps every logic tick of an animation's nominal duration to the
//! display frame shown during that tick (the *frame playlist*), and resolves the
//! set of display frames that trigger game events (the *active frames*).
//!
//! # Distributing frames over ticks
//!
//! When the duration is a multiple of the frame count every frame is held for the
//! same number of ticks:
//!
//! ```text
//! frames=3, duration=12  ->  0 0 0 0 1 1 1 1 2 2 2 2
//! ```
//!
//! Otherwise the frames are spread with a digital line walk from
//! `(tick 0, frame 0)` to `(tick duration-1, frame frames-1)`, which keeps the
//! playlist monotonic and as even as possible:
//!
//! ```text
//! frames=3, duration=7   ->  0 0 1 1 1 2 2
//! ```
//!
//! # Examples
//!
//! ```
//! use animset_types::animation::PlaybackStyle;
//! use animset_types::timeline::Timeline;
//!
//! let timeline = Timeline::build(4, 8, PlaybackStyle::Looped);
//! assert_eq!(timeline.playlist(), &[0, 0, 1, 1, 2, 2, 3, 3]);
//! assert_eq!(timeline.number_frames(), 4);
//!
//! let timeline = Timeline::build(3, 3, PlaybackStyle::BackForth);
//! assert_eq!(timeline.number_frames(), 6);
//! ```

use std::fmt::Formatter;

use log::warn;

use crate::animation::PlaybackStyle;

/// Frames that trigger game events, as requested by a definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveFrames {
	/// Every display frame is active
	All,
	/// Explicit, possibly unsorted and out of range, list of display frames
	List(Vec<i32>),
	/// No active frame was requested
	#[default]
	None,
}

impl ActiveFrames {
	/// Returns true when nothing was requested.
	pub fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}
}

/// Tick to frame mapping of one animation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Timeline {
	playlist: Vec<u16>,
	number_frames: u32,
}

impl Timeline {
	/// Builds the timeline for `frame_count` frames spread over `duration` ticks.
	///
	/// For [`PlaybackStyle::BackForth`] the reported number of frames is doubled,
	/// counting the forward and the backward pass.
	///
	/// # Arguments
	///
	/// * `frame_count` - Distinct display frames in one cycle
	/// * `duration` - Ticks one cycle should occupy
	/// * `style` - Playback style of the animation
	pub fn build(frame_count: u16, duration: u16, style: PlaybackStyle) -> Self {
		let playlist = build_playlist(frame_count, duration);
		let mut number_frames = playlist.last().map_or(0, |&last| u32::from(last) + 1);
		if style == PlaybackStyle::BackForth {
			number_frames *= 2;
		}

		Self {
			playlist,
			number_frames,
		}
	}

	/// Returns the frame playlist, one display frame per tick.
	pub fn playlist(&self) -> &[u16] {
		&self.playlist
	}

	/// Returns the number of display frames, doubled for back-and-forth playback.
	pub fn number_frames(&self) -> u32 {
		self.number_frames
	}

	/// Returns the number of ticks in the playlist.
	pub fn len(&self) -> usize {
		self.playlist.len()
	}

	/// Returns true if the playlist has no tick.
	pub fn is_empty(&self) -> bool {
		self.playlist.is_empty()
	}

	/// Resolves requested active frames against this timeline.
	///
	/// See [`resolve_active_frames`].
	pub fn resolve_active_frames(&self, requested: &ActiveFrames) -> Vec<u32> {
		resolve_active_frames(requested, self.number_frames)
	}
}

impl std::fmt::Display for Timeline {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Timeline({} ticks, {} frames)", self.playlist.len(), self.number_frames)
	}
}

/// Builds the frame playlist for `frame_count` frames over `duration` ticks.
///
/// The playlist is empty when `frame_count` or `duration` is zero. When
/// `duration < frame_count` the trailing frames are never reached.
///
/// ```
/// use animset_types::timeline::build_playlist;
///
/// assert_eq!(build_playlist(3, 12), vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);
/// assert_eq!(build_playlist(3, 7), vec![0, 0, 1, 1, 1, 2, 2]);
/// assert!(build_playlist(0, 10).is_empty());
/// ```
pub fn build_playlist(frame_count: u16, duration: u16) -> Vec<u16> {
	if frame_count == 0 {
		return Vec::new();
	}

	if duration % frame_count == 0 {
		let hold = usize::from(duration / frame_count);
		return (0..frame_count)
			.flat_map(|frame| std::iter::repeat_n(frame, hold))
			.collect();
	}

	let dx = i32::from(duration) - 1;
	let dy = i32::from(frame_count) - 1;
	let mut d = 2 * dy - dx;
	let mut frame = 0u16;

	let mut playlist = Vec::with_capacity(usize::from(duration));
	playlist.push(frame);
	for _ in 1..duration {
		if d > 0 {
			frame += 1;
			d += 2 * dy - 2 * dx;
		} else {
			d += 2 * dy;
		}
		playlist.push(frame);
	}
	playlist
}

/// Resolves requested active frames into a sorted list of valid display frames.
///
/// - [`ActiveFrames::All`] expands to every frame in `0..number_frames`.
/// - An explicit list is sorted and deduplicated. Negative entries are dropped.
///   Entries `>= number_frames` are repaired: the first one becomes the last frame
///   unless the last frame is already listed, every other one is dropped.
///
/// Repairs are logged, never reported as errors.
///
/// ```
/// use animset_types::timeline::{ActiveFrames, resolve_active_frames};
///
/// assert_eq!(resolve_active_frames(&ActiveFrames::List(vec![2, 9]), 5), vec![2, 4]);
/// assert_eq!(resolve_active_frames(&ActiveFrames::List(vec![4, 9]), 5), vec![4]);
/// assert_eq!(resolve_active_frames(&ActiveFrames::All, 3), vec![0, 1, 2]);
/// ```
pub fn resolve_active_frames(requested: &ActiveFrames, number_frames: u32) -> Vec<u32> {
	let list = match requested {
		ActiveFrames::None => return Vec::new(),
		ActiveFrames::All => return (0..number_frames).collect(),
		ActiveFrames::List(list) => list,
	};

	let mut sorted = list.clone();
	sorted.sort_unstable();
	sorted.dedup();

	let last = number_frames.checked_sub(1);
	let mut have_last = last.is_some_and(|last| sorted.contains(&(last as i32)));
	let mut resolved = Vec::with_capacity(sorted.len());

	for frame in sorted {
		let Ok(index) = u32::try_from(frame) else {
			warn!("Active frame {frame} is negative, dropping it");
			continue;
		};

		if index < number_frames {
			resolved.push(index);
			continue;
		}

		match last {
			Some(last) if !have_last => {
				warn!("Active frame {index} is out of range, using last frame {last}");
				resolved.push(last);
				have_last = true;
			}
			_ => {
				warn!("Active frame {index} is out of range, dropping it");
			}
		}
	}

	resolved
}
