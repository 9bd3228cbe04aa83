//! Geometry and render descriptor types.
//!
//! The rendering device is not part of this crate. An [`Animation`] only resolves
//! which part of which atlas image should be drawn for the current frame and hands
//! it over as a [`Renderable`].
//!
//! [`Animation`]: crate::animation::Animation

use std::{fmt::Formatter, str::FromStr};

use crate::{atlas::ImageHandle, error::AnimationError};

/// A 2D integer point, used for render sizes and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
	/// Horizontal component
	pub x: i32,
	/// Vertical component
	pub y: i32,
}

impl Point {
	/// Creates a new point.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// A source rectangle within an atlas image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
	/// Left edge
	pub x: i32,
	/// Top edge
	pub y: i32,
	/// Width
	pub w: i32,
	/// Height
	pub h: i32,
}

impl Rect {
	/// Creates a new rectangle.
	pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}
}

/// RGB color modulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
}

impl Color {
	/// No modulation.
	pub const WHITE: Self = Self::new(255, 255, 255);

	/// Creates a new color.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::WHITE
	}
}

/// Blend mode used when drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
	/// Regular alpha blending
	#[default]
	Normal,
	/// Additive blending
	Add,
}

impl FromStr for BlendMode {
	type Err = AnimationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"normal" => Ok(Self::Normal),
			"add" => Ok(Self::Add),
			_ => Err(AnimationError::UnknownBlendMode(s.to_string())),
		}
	}
}

impl std::fmt::Display for BlendMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Normal => write!(f, "normal"),
			Self::Add => write!(f, "add"),
		}
	}
}

/// Fully resolved description of what to draw for one frame and direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderable {
	/// Atlas image to crop from, `None` when the atlas has no image for the slot
	pub image: Option<ImageHandle>,
	/// Source rectangle within the image
	pub src: Rect,
	/// Offset from the entity position to the top-left corner of the frame
	pub offset: Point,
	/// Blend mode
	pub blend_mode: BlendMode,
	/// Alpha modulation (255 = opaque)
	pub alpha_mod: u8,
	/// Color modulation
	pub color_mod: Color,
}
