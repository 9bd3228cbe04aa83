//! Playback styles and travel direction.

use std::{fmt::Formatter, str::FromStr};

use crate::error::AnimationError;

/// How an animation behaves once it reaches the end of its frame playlist.
///
/// The style is fixed when the template is built and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackStyle {
	/// Play through once and hold the last frame
	PlayOnce,
	/// Restart from the first frame after the last one
	Looped,
	/// Play forward, then backward; one full play is a forward and a backward pass
	BackForth,
}

impl PlaybackStyle {
	/// Returns the token used for this style in definition files.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::PlayOnce => "play_once",
			Self::Looped => "looped",
			Self::BackForth => "back_forth",
		}
	}

	/// Returns the direction an instance of this style starts with.
	///
	/// Only [`PlaybackStyle::BackForth`] tracks a direction.
	pub fn initial_direction(self) -> Option<Direction> {
		match self {
			Self::BackForth => Some(Direction::Forward),
			Self::PlayOnce | Self::Looped => None,
		}
	}
}

impl FromStr for PlaybackStyle {
	type Err = AnimationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"play_once" => Ok(Self::PlayOnce),
			"looped" => Ok(Self::Looped),
			"back_forth" => Ok(Self::BackForth),
			_ => Err(AnimationError::UnknownPlaybackStyle(s.to_string())),
		}
	}
}

impl std::fmt::Display for PlaybackStyle {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Travel direction of a back-and-forth animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Moving towards the last tick
	Forward,
	/// Moving back towards tick zero
	Backward,
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Forward => write!(f, "Forward"),
			Self::Backward => write!(f, "Backward"),
		}
	}
}
