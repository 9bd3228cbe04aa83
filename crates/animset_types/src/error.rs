//! Error types for animation definition loading.

use thiserror::Error;

/// Errors that can occur when loading an animation set definition.
///
/// Only structural problems end up here. Data-quality issues coming from mod
/// content (frame count mismatches, out of range active frames, compressed
/// frames outside the declared grid) are logged and repaired in place.
#[derive(Debug, Error)]
pub enum AnimationError {
	/// Line that is neither a section header, a comment nor a `key=value` pair
	#[error("Syntax error at line {line}: {message}")]
	Syntax {
		/// Line number (1-based) in the definition text
		line: usize,
		/// Description of the problem
		message: String,
	},

	/// Key that is not part of the definition format
	#[error("Unknown key '{key}' in section '{section}' at line {line}")]
	UnknownKey {
		/// Section the key appeared in (empty for the top level)
		section: String,
		/// The offending key
		key: String,
		/// Line number (1-based) in the definition text
		line: usize,
	},

	/// Value that cannot be interpreted for its key
	#[error("Invalid value '{value}' for key '{key}' at line {line}: {message}")]
	InvalidValue {
		/// Key the value belongs to
		key: String,
		/// Raw value as written in the definition
		value: String,
		/// Line number (1-based) in the definition text
		line: usize,
		/// Description of the problem
		message: String,
	},

	/// A section ended without declaring a key it needs
	#[error("Section '{section}' is missing required key '{key}'")]
	MissingKey {
		/// Section that is incomplete
		section: String,
		/// Key that was never declared
		key: &'static str,
	},

	/// Unrecognized playback style token
	#[error("Unknown playback style '{0}' (expected play_once, looped or back_forth)")]
	UnknownPlaybackStyle(String),

	/// Unrecognized blend mode token
	#[error("Unknown blend mode '{0}' (expected normal or add)")]
	UnknownBlendMode(String),

	/// Required definition resource does not exist
	#[error("Animation definition '{0}' not found")]
	DefinitionNotFound(String),

	/// Image collaborator failed to provide an image
	#[error("Failed to load image '{path}': {message}")]
	ImageLoad {
		/// Path of the image as written in the definition
		path: String,
		/// Description of the failure
		message: String,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
