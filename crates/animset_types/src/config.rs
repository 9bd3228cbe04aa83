//! Loader configuration.
//!
//! This module provides the options that control how animation definitions are
//! interpreted: the logic tick rate used to convert `ms`/`s` durations, the number
//! of direction variants per frame, and whether a missing definition is an error.

use serde::Deserialize;

/// Configuration for loading animation sets.
///
/// # Presets
///
/// - `default()`: 60 ticks per second, 8 directions, missing definitions are empty sets
/// - `strict()`: same as default, but a missing definition is an error
///
/// # Examples
///
/// ```
/// use animset_types::config::LoaderConfig;
///
/// let config = LoaderConfig::default();
/// assert_eq!(config.ticks_per_second, 60);
/// assert!(config.optional);
///
/// let config = LoaderConfig::strict();
/// assert!(!config.optional);
///
/// let config = LoaderConfig::new(30, 4);
/// assert_eq!(config.direction_kinds, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
	/// Logic ticks per second, used to convert `ms` and `s` durations into ticks
	pub ticks_per_second: u32,
	/// Number of direction variants (facings) stored for every frame
	pub direction_kinds: u16,
	/// Treat a missing definition resource as a set without animations
	pub optional: bool,
}

impl Default for LoaderConfig {
	fn default() -> Self {
		Self {
			ticks_per_second: 60,
			direction_kinds: 8,
			optional: true,
		}
	}
}

impl LoaderConfig {
	/// Create a new configuration with custom tick rate and direction count.
	///
	/// # Arguments
	/// * `ticks_per_second` - Logic tick rate
	/// * `direction_kinds` - Direction variants per frame
	pub fn new(ticks_per_second: u32, direction_kinds: u16) -> Self {
		Self {
			ticks_per_second,
			direction_kinds,
			..Self::default()
		}
	}

	/// Create a strict configuration where a missing definition is an error.
	pub fn strict() -> Self {
		Self {
			optional: false,
			..Self::default()
		}
	}

	/// Converts a duration in milliseconds into logic ticks.
	///
	/// The result is rounded to the nearest tick; any non-zero duration lasts at
	/// least one tick.
	///
	/// ```
	/// use animset_types::config::LoaderConfig;
	///
	/// let config = LoaderConfig::default();
	/// assert_eq!(config.ms_to_ticks(1000), 60);
	/// assert_eq!(config.ms_to_ticks(250), 15);
	/// assert_eq!(config.ms_to_ticks(1), 1);
	/// assert_eq!(config.ms_to_ticks(0), 0);
	/// ```
	pub fn ms_to_ticks(&self, ms: u32) -> u32 {
		let ticks = (f64::from(ms) * f64::from(self.ticks_per_second) / 1000.0).round() as u32;
		if ms > 0 && ticks == 0 {
			1
		} else {
			ticks
		}
	}
}
