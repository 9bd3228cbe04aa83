//! Definition text cursor.
//!
//! Animation sets are described in a small INI-like text format. The set loader
//! does not read text directly; it walks a [`DefinitionCursor`] that yields one
//! `key=value` pair at a time together with the section it belongs to.
//!
//! # Format
//!
//! ```text
//! # comment            ; also a comment
//! image=images/body.png
//!
//! [stance]             section header, starts a new section
//! frames=4
//! duration=12
//! ```
//!
//! - Blank lines and lines starting with `#` or `;` are ignored
//! - Keys and values are trimmed; values may contain `=`
//! - Repeated keys are preserved in order
//! - Pairs before the first header belong to the top-level section `""`

use std::collections::HashMap;

use crate::error::AnimationError;

/// Cursor over the key/value pairs of a definition.
pub trait DefinitionCursor {
	/// Moves to the next pair. Returns `Ok(false)` when the input is exhausted.
	///
	/// # Errors
	///
	/// Returns an error when the underlying text is malformed.
	fn next_pair(&mut self) -> Result<bool, AnimationError>;

	/// Name of the current section, empty for the top level.
	fn section(&self) -> &str;

	/// Current key.
	fn key(&self) -> &str;

	/// Current raw value.
	fn value(&self) -> &str;

	/// Returns true when the current pair is the first one of a new section.
	fn is_new_section(&self) -> bool;

	/// Line number (1-based) of the current pair, for diagnostics.
	fn line(&self) -> usize;
}

/// Provider of definition texts by resource name.
pub trait DefinitionSource {
	/// Reads the definition named `name`.
	///
	/// Returns `Ok(None)` when the resource does not exist.
	///
	/// # Errors
	///
	/// Returns an error when the resource exists but cannot be read.
	fn read_definition(&self, name: &str) -> Result<Option<String>, AnimationError>;
}

impl DefinitionSource for HashMap<String, String> {
	fn read_definition(&self, name: &str) -> Result<Option<String>, AnimationError> {
		Ok(self.get(name).cloned())
	}
}

/// [`DefinitionCursor`] over definition text held in memory.
///
/// # Examples
///
/// ```
/// use animset_types::definition::{DefinitionCursor, IniCursor};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut cursor = IniCursor::new("image=body.png\n[stance]\nframes=4\n");
///
/// assert!(cursor.next_pair()?);
/// assert_eq!((cursor.section(), cursor.key(), cursor.value()), ("", "image", "body.png"));
///
/// assert!(cursor.next_pair()?);
/// assert!(cursor.is_new_section());
/// assert_eq!((cursor.section(), cursor.key(), cursor.value()), ("stance", "frames", "4"));
///
/// assert!(!cursor.next_pair()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct IniCursor<'a> {
	lines: std::iter::Enumerate<std::str::Lines<'a>>,
	section: String,
	key: &'a str,
	value: &'a str,
	line: usize,
	new_section: bool,
	pending_section: bool,
}

impl<'a> IniCursor<'a> {
	/// Creates a cursor over `text`.
	pub fn new(text: &'a str) -> Self {
		Self {
			lines: text.lines().enumerate(),
			section: String::new(),
			key: "",
			value: "",
			line: 0,
			new_section: false,
			pending_section: false,
		}
	}
}

impl DefinitionCursor for IniCursor<'_> {
	fn next_pair(&mut self) -> Result<bool, AnimationError> {
		for (index, raw) in self.lines.by_ref() {
			let line = index + 1;
			let trimmed = raw.trim();
			if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
				continue;
			}

			if let Some(header) = trimmed.strip_prefix('[') {
				let Some(name) = header.strip_suffix(']') else {
					return Err(AnimationError::Syntax {
						line,
						message: format!("unterminated section header '{trimmed}'"),
					});
				};
				let name = name.trim();
				if name.is_empty() {
					return Err(AnimationError::Syntax {
						line,
						message: "empty section name".to_string(),
					});
				}
				self.section = name.to_string();
				self.pending_section = true;
				continue;
			}

			let Some((key, value)) = trimmed.split_once('=') else {
				return Err(AnimationError::Syntax {
					line,
					message: format!("expected 'key=value', got '{trimmed}'"),
				});
			};
			let key = key.trim();
			if key.is_empty() {
				return Err(AnimationError::Syntax {
					line,
					message: "empty key".to_string(),
				});
			}

			self.key = key;
			self.value = value.trim();
			self.line = line;
			self.new_section = self.pending_section;
			self.pending_section = false;
			return Ok(true);
		}

		Ok(false)
	}

	fn section(&self) -> &str {
		&self.section
	}

	fn key(&self) -> &str {
		self.key
	}

	fn value(&self) -> &str {
		self.value
	}

	fn is_new_section(&self) -> bool {
		self.new_section
	}

	fn line(&self) -> usize {
		self.line
	}
}
