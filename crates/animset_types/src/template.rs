//! Immutable animation templates.
//!
//! A template is everything an animation instance needs that never changes during
//! playback: name, style, render modifiers, timeline, active frames and the atlas
//! lookup table. Templates are built by the set loader and then frozen behind an
//! `Arc`, so any number of instances can share one template while each keeps its
//! own playback cursor.
//!
//! # Atlas lookup table
//!
//! The table holds one cell per `(display frame, direction kind)` pair, stored
//! row-major by frame:
//!
//! ```text
//! index = frame * kinds + kind
//! ```
//!
//! The uncompressed layout fills every cell from a regular grid; the compressed
//! layout fills cells one by one and may leave some empty.

use std::{fmt::Formatter, sync::Arc};

use log::warn;

use crate::{
	animation::PlaybackStyle,
	atlas::SpriteAtlas,
	render::{BlendMode, Color, Point, Rect, Renderable},
	timeline::{ActiveFrames, Timeline},
};

/// Render modifiers applied to every frame of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
	/// Blend mode
	pub blend_mode: BlendMode,
	/// Alpha modulation
	pub alpha_mod: u8,
	/// Color modulation
	pub color_mod: Color,
}

impl RenderStyle {
	/// Opaque, unmodulated, normal blending.
	pub const OPAQUE: Self = Self {
		blend_mode: BlendMode::Normal,
		alpha_mod: 255,
		color_mod: Color::WHITE,
	};
}

impl Default for RenderStyle {
	fn default() -> Self {
		Self::OPAQUE
	}
}

/// One atlas lookup: which image slot, which part of it, drawn where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
	/// Atlas slot of the image
	pub slot: usize,
	/// Source rectangle within the image
	pub src: Rect,
	/// Render offset
	pub offset: Point,
}

/// Immutable definition of one named animation.
#[derive(Debug, Clone)]
pub struct AnimationTemplate {
	name: String,
	style: PlaybackStyle,
	render_style: RenderStyle,
	duration: u16,
	frame_count: u16,
	kinds: u16,
	timeline: Timeline,
	active_frames: Vec<u32>,
	cells: Vec<Option<FrameCell>>,
	atlas: Arc<SpriteAtlas>,
}

impl AnimationTemplate {
	/// Creates a template with an empty lookup table.
	///
	/// # Arguments
	///
	/// * `name` - Animation name
	/// * `style` - Playback style
	/// * `render_style` - Render modifiers
	/// * `frame_count` - Distinct display frames in one cycle
	/// * `duration` - Ticks one cycle occupies
	/// * `kinds` - Direction variants per frame
	pub fn new(
		name: impl Into<String>,
		style: PlaybackStyle,
		render_style: RenderStyle,
		frame_count: u16,
		duration: u16,
		kinds: u16,
	) -> Self {
		Self {
			name: name.into(),
			style,
			render_style,
			duration,
			frame_count,
			kinds,
			timeline: Timeline::build(frame_count, duration, style),
			active_frames: Vec::new(),
			cells: vec![None; usize::from(frame_count) * usize::from(kinds)],
			atlas: Arc::default(),
		}
	}

	/// Creates the built-in fallback template used before any animation is loaded.
	///
	/// It has a single frame, no duration, and therefore an empty playlist.
	pub fn placeholder(kinds: u16) -> Self {
		let mut template = Self::new(
			"default",
			PlaybackStyle::PlayOnce,
			RenderStyle::OPAQUE,
			1,
			0,
			kinds,
		);
		template.fill_grid(Point::default(), Point::default(), 0);
		template
	}

	/// Fills every cell from a regular grid.
	///
	/// Frames advance along the x axis starting at column `position`, direction
	/// kinds advance along the y axis. Coordinates that do not fit an `i32` are
	/// clamped to its range and logged.
	pub fn fill_grid(&mut self, render_size: Point, render_offset: Point, position: u16) {
		let kinds = usize::from(self.kinds);
		let mut overflowed = false;
		let mut scale = |size: i32, index: i32| {
			size.checked_mul(index).unwrap_or_else(|| {
				overflowed = true;
				size.saturating_mul(index)
			})
		};

		for frame in 0..self.frame_count {
			let column = i32::from(position) + i32::from(frame);
			for kind in 0..self.kinds {
				let cell = FrameCell {
					slot: 0,
					src: Rect::new(
						scale(render_size.x, column),
						scale(render_size.y, i32::from(kind)),
						render_size.x,
						render_size.y,
					),
					offset: render_offset,
				};
				self.cells[usize::from(frame) * kinds + usize::from(kind)] = Some(cell);
			}
		}

		if overflowed {
			warn!(
				"Animation '{}': render size {}x{} at column {} is outside the image coordinate range, clamping",
				self.name, render_size.x, render_size.y, position
			);
		}
	}

	/// Stores a single cell of the lookup table.
	///
	/// Returns false, after logging, when the frame or kind is outside the
	/// declared grid.
	pub fn set_cell(&mut self, frame: u16, kind: u16, cell: FrameCell) -> bool {
		if frame >= self.frame_count {
			warn!(
				"Animation '{}': frame {} is out of range (frame count {}), ignoring it",
				self.name, frame, self.frame_count
			);
			return false;
		}
		if kind >= self.kinds {
			warn!(
				"Animation '{}': direction {} is out of range ({} directions), ignoring it",
				self.name, kind, self.kinds
			);
			return false;
		}

		let index = usize::from(frame) * usize::from(self.kinds) + usize::from(kind);
		self.cells[index] = Some(cell);
		true
	}

	/// Resolves and stores the active frames.
	pub fn set_active_frames(&mut self, requested: &ActiveFrames) {
		self.active_frames = self.timeline.resolve_active_frames(requested);
	}

	/// Attaches the shared atlas.
	pub fn with_atlas(mut self, atlas: Arc<SpriteAtlas>) -> Self {
		self.atlas = atlas;
		self
	}

	/// Returns the animation name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the playback style.
	pub fn style(&self) -> PlaybackStyle {
		self.style
	}

	/// Returns the render modifiers.
	pub fn render_style(&self) -> RenderStyle {
		self.render_style
	}

	/// Returns the nominal duration in ticks.
	pub fn duration(&self) -> u16 {
		self.duration
	}

	/// Returns the declared frame count of one cycle.
	pub fn frame_count(&self) -> u16 {
		self.frame_count
	}

	/// Returns the number of direction variants.
	pub fn kinds(&self) -> u16 {
		self.kinds
	}

	/// Returns the timeline.
	pub fn timeline(&self) -> &Timeline {
		&self.timeline
	}

	/// Returns the frame playlist.
	pub fn playlist(&self) -> &[u16] {
		self.timeline.playlist()
	}

	/// Returns the number of display frames, doubled for back-and-forth playback.
	pub fn number_frames(&self) -> u32 {
		self.timeline.number_frames()
	}

	/// Returns the resolved active frames, sorted ascending.
	pub fn active_frames(&self) -> &[u32] {
		&self.active_frames
	}

	/// Returns true if `frame` is an active frame.
	pub fn is_active(&self, frame: u16) -> bool {
		self.active_frames.binary_search(&u32::from(frame)).is_ok()
	}

	/// Returns the shared atlas.
	pub fn atlas(&self) -> &Arc<SpriteAtlas> {
		&self.atlas
	}

	/// Returns the lookup cell for a display frame and direction kind.
	pub fn cell(&self, frame: u16, kind: u16) -> Option<&FrameCell> {
		if frame >= self.frame_count || kind >= self.kinds {
			return None;
		}
		let index = usize::from(frame) * usize::from(self.kinds) + usize::from(kind);
		self.cells.get(index).and_then(Option::as_ref)
	}

	/// Resolves the renderable for a display frame and direction kind.
	pub fn renderable(&self, frame: u16, kind: u16) -> Option<Renderable> {
		let cell = self.cell(frame, kind)?;
		Some(Renderable {
			image: self.atlas.image(cell.slot).cloned(),
			src: cell.src,
			offset: cell.offset,
			blend_mode: self.render_style.blend_mode,
			alpha_mod: self.render_style.alpha_mod,
			color_mod: self.render_style.color_mod,
		})
	}
}

impl std::fmt::Display for AnimationTemplate {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} ({}, {} frames, {} ticks)",
			self.name, self.style, self.frame_count, self.duration
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::atlas::ImageHandle;

	#[test]
	fn test_fill_grid() {
		let mut template =
			AnimationTemplate::new("run", PlaybackStyle::Looped, RenderStyle::OPAQUE, 3, 6, 8);
		template.fill_grid(Point::new(64, 32), Point::new(32, 28), 2);

		let cell = template.cell(1, 3).unwrap();
		assert_eq!(cell.src, Rect::new(64 * 3, 32 * 3, 64, 32));
		assert_eq!(cell.offset, Point::new(32, 28));
		assert_eq!(cell.slot, 0);
		assert!(template.cell(3, 0).is_none());
		assert!(template.cell(0, 8).is_none());
	}

	#[test_log::test]
	fn test_fill_grid_clamps_overflow() {
		let mut template =
			AnimationTemplate::new("wide", PlaybackStyle::Looped, RenderStyle::OPAQUE, 2, 2, 2);
		template.fill_grid(Point::new(i32::MAX, -70000), Point::default(), 1);

		assert_eq!(template.cell(0, 0).unwrap().src.x, i32::MAX);
		assert_eq!(template.cell(1, 1).unwrap().src.x, i32::MAX);
		assert_eq!(template.cell(1, 1).unwrap().src.y, -70000);
	}

	#[test_log::test]
	fn test_set_cell_bounds() {
		let mut template =
			AnimationTemplate::new("hit", PlaybackStyle::PlayOnce, RenderStyle::OPAQUE, 2, 4, 2);
		let cell = FrameCell {
			slot: 0,
			src: Rect::new(1, 2, 3, 4),
			offset: Point::new(5, 6),
		};

		assert!(template.set_cell(1, 1, cell));
		assert!(!template.set_cell(2, 0, cell));
		assert!(!template.set_cell(0, 2, cell));
		assert_eq!(template.cell(1, 1), Some(&cell));
		assert!(template.cell(0, 0).is_none());
	}

	#[test]
	fn test_placeholder_is_empty() {
		let template = AnimationTemplate::placeholder(8);
		assert_eq!(template.name(), "default");
		assert!(template.playlist().is_empty());
		assert_eq!(template.number_frames(), 0);
	}

	#[test]
	fn test_renderable_uses_atlas() {
		let mut atlas = SpriteAtlas::new();
		let image = ImageHandle::new("sheet.png");
		atlas.insert("", image.clone());

		let style = RenderStyle {
			blend_mode: BlendMode::Add,
			alpha_mod: 128,
			color_mod: Color::new(255, 0, 0),
		};
		let mut template = AnimationTemplate::new("glow", PlaybackStyle::Looped, style, 1, 1, 1);
		template.fill_grid(Point::new(16, 16), Point::new(8, 8), 0);
		let template = template.with_atlas(Arc::new(atlas));

		let renderable = template.renderable(0, 0).unwrap();
		assert_eq!(renderable.image, Some(image));
		assert_eq!(renderable.blend_mode, BlendMode::Add);
		assert_eq!(renderable.alpha_mod, 128);
		assert_eq!(renderable.color_mod, Color::new(255, 0, 0));
	}

	#[test]
	fn test_is_active() {
		let mut template =
			AnimationTemplate::new("swing", PlaybackStyle::PlayOnce, RenderStyle::OPAQUE, 4, 8, 1);
		template.set_active_frames(&ActiveFrames::List(vec![2]));
		assert!(template.is_active(2));
		assert!(!template.is_active(3));
	}
}
