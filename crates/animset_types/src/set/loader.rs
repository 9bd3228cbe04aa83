//! Section-based loader turning definition pairs into animation templates.

use std::{collections::HashSet, mem, str::FromStr, sync::Arc};

use log::{debug, warn};

use super::{AnimationSet, LoadContext};
use crate::{
	animation::PlaybackStyle,
	atlas::SpriteAtlas,
	definition::DefinitionCursor,
	error::AnimationError,
	render::{BlendMode, Color, Point, Rect},
	template::{AnimationTemplate, FrameCell, RenderStyle},
	timeline::ActiveFrames,
};

/// Parameters declared so far. They carry over from one section to the next,
/// except `active_frames` which belongs to the current section only.
#[derive(Debug, Default)]
struct SectionParams {
	position: u16,
	frames: u16,
	duration: u16,
	style: Option<PlaybackStyle>,
	render_size: Point,
	render_offset: Point,
	render_style: RenderStyle,
	active_frames: ActiveFrames,
}

/// Key/value pair being applied, kept for error context.
struct Pair<'p> {
	section: &'p str,
	key: &'p str,
	value: &'p str,
	line: usize,
}

impl Pair<'_> {
	fn invalid(&self, message: impl Into<String>) -> AnimationError {
		AnimationError::InvalidValue {
			key: self.key.to_string(),
			value: self.value.to_string(),
			line: self.line,
			message: message.into(),
		}
	}

	fn number<T: FromStr>(&self, raw: &str) -> Result<T, AnimationError> {
		raw.trim().parse().map_err(|_| self.invalid(format!("'{}' is not a valid number", raw.trim())))
	}

	fn numbers<T: FromStr>(&self, expected: usize) -> Result<Vec<T>, AnimationError> {
		let fields = self.value.split(',').collect::<Vec<_>>();
		if fields.len() != expected {
			return Err(self.invalid(format!("expected {expected} values, got {}", fields.len())));
		}
		fields.into_iter().map(|field| self.number(field)).collect()
	}

	fn point(&self) -> Result<Point, AnimationError> {
		let values = self.numbers::<i32>(2)?;
		Ok(Point::new(values[0], values[1]))
	}
}

/// Loader state for one definition.
pub(super) struct SetLoader<'c, 'i> {
	ctx: &'c mut LoadContext<'i>,
	atlas: SpriteAtlas,
	templates: Vec<AnimationTemplate>,
	params: SectionParams,
	section: Option<String>,
	/// Index of the template allocated by the first `frame` key of the current section
	compressed: Option<usize>,
	starting: Option<String>,
}

impl<'c, 'i> SetLoader<'c, 'i> {
	pub(super) fn new(ctx: &'c mut LoadContext<'i>) -> Self {
		Self {
			ctx,
			atlas: SpriteAtlas::new(),
			templates: Vec::new(),
			params: SectionParams::default(),
			section: None,
			compressed: None,
			starting: None,
		}
	}

	pub(super) fn run(
		mut self,
		name: &str,
		cursor: &mut dyn DefinitionCursor,
	) -> Result<AnimationSet, AnimationError> {
		while cursor.next_pair()? {
			if cursor.is_new_section() {
				self.begin_section(cursor.section())?;
			}
			let pair = Pair {
				section: cursor.section(),
				key: cursor.key(),
				value: cursor.value(),
				line: cursor.line(),
			};
			self.apply(&pair)?;
		}
		self.finish_section()?;
		Ok(self.into_set(name))
	}

	fn begin_section(&mut self, section: &str) -> Result<(), AnimationError> {
		self.finish_section()?;
		if self.starting.is_none() {
			self.starting = Some(section.to_string());
		}
		self.section = Some(section.to_string());
		Ok(())
	}

	/// Builds the template of the current section unless it was compressed.
	fn finish_section(&mut self) -> Result<(), AnimationError> {
		let Some(section) = self.section.take() else {
			return Ok(());
		};
		if self.compressed.take().is_none() {
			let mut template = self.build_template(&section)?;
			template.fill_grid(self.params.render_size, self.params.render_offset, self.params.position);
			self.templates.push(template);
		}
		self.params.active_frames = ActiveFrames::None;
		Ok(())
	}

	fn build_template(&mut self, section: &str) -> Result<AnimationTemplate, AnimationError> {
		let Some(style) = self.params.style else {
			return Err(AnimationError::MissingKey {
				section: section.to_string(),
				key: "type",
			});
		};

		let mut frames = self.params.frames;
		if let Some(parent_frames) =
			self.ctx.parent.as_ref().and_then(|parent| parent.frame_count(section))
			&& parent_frames != frames
		{
			warn!(
				"Animation '{section}' declares {frames} frames but its parent has {parent_frames}, using the parent's count"
			);
			frames = parent_frames;
		}

		let mut template = AnimationTemplate::new(
			section,
			style,
			self.params.render_style,
			frames,
			self.params.duration,
			self.ctx.config.direction_kinds,
		);
		template.set_active_frames(&self.params.active_frames);
		Ok(template)
	}

	fn apply(&mut self, pair: &Pair<'_>) -> Result<(), AnimationError> {
		match pair.key {
			"image" => self.add_image(pair)?,
			"position" => self.params.position = pair.number(pair.value)?,
			"frames" => self.params.frames = pair.number(pair.value)?,
			"duration" => self.params.duration = self.parse_duration(pair)?,
			"type" => self.params.style = Some(pair.value.parse()?),
			"render_size" => self.params.render_size = pair.point()?,
			"render_offset" => self.params.render_offset = pair.point()?,
			"blend_mode" => self.params.render_style.blend_mode = BlendMode::from_str(pair.value)?,
			"alpha_mod" => self.params.render_style.alpha_mod = pair.number(pair.value)?,
			"color_mod" => {
				let rgb = pair.numbers::<u8>(3)?;
				self.params.render_style.color_mod = Color::new(rgb[0], rgb[1], rgb[2]);
			}
			"active_frame" => self.add_active_frames(pair)?,
			"frame" => self.add_frame(pair)?,
			_ => {
				return Err(AnimationError::UnknownKey {
					section: pair.section.to_string(),
					key: pair.key.to_string(),
					line: pair.line,
				});
			}
		}
		Ok(())
	}

	/// `path[,tag]`
	fn add_image(&mut self, pair: &Pair<'_>) -> Result<(), AnimationError> {
		let (path, tag) = match pair.value.split_once(',') {
			Some((path, tag)) => (path.trim(), tag.trim()),
			None => (pair.value, ""),
		};
		let image = self.ctx.images.load_image(path)?;
		let slot = self.atlas.insert(tag, image);
		debug!("Image '{path}' tagged '{tag}' in slot {slot}");
		Ok(())
	}

	/// Plain ticks, or a time ending in `ms` or `s`.
	fn parse_duration(&self, pair: &Pair<'_>) -> Result<u16, AnimationError> {
		let ticks = if let Some(ms) = pair.value.strip_suffix("ms") {
			self.ctx.config.ms_to_ticks(pair.number(ms)?)
		} else if let Some(seconds) = pair.value.strip_suffix('s') {
			let seconds: u32 = pair.number(seconds)?;
			let ms = seconds.checked_mul(1000).ok_or_else(|| pair.invalid("duration is too long"))?;
			self.ctx.config.ms_to_ticks(ms)
		} else {
			pair.number(pair.value)?
		};
		u16::try_from(ticks)
			.map_err(|_| pair.invalid(format!("{ticks} ticks exceed the maximum of {}", u16::MAX)))
	}

	fn add_active_frames(&mut self, pair: &Pair<'_>) -> Result<(), AnimationError> {
		if self.section.is_none() {
			return Err(pair.invalid("active frames must be declared inside a section"));
		}

		let requested = if pair.value.eq_ignore_ascii_case("all") {
			ActiveFrames::All
		} else {
			let frames = pair
				.value
				.split(',')
				.map(|field| pair.number::<i32>(field))
				.collect::<Result<Vec<_>, _>>()?;
			ActiveFrames::List(frames)
		};

		self.params.active_frames = match (mem::take(&mut self.params.active_frames), requested) {
			(ActiveFrames::All, _) | (_, ActiveFrames::All) => ActiveFrames::All,
			(ActiveFrames::List(mut old), ActiveFrames::List(new)) => {
				old.extend(new);
				ActiveFrames::List(old)
			}
			(ActiveFrames::None, requested) => requested,
			(old, ActiveFrames::None) => old,
		};

		// a compressed template already exists, resolve it again from the merged request
		if let Some(index) = self.compressed {
			self.templates[index].set_active_frames(&self.params.active_frames);
		}
		Ok(())
	}

	/// `index,kind,x,y,w,h,ox,oy[,tag]`
	fn add_frame(&mut self, pair: &Pair<'_>) -> Result<(), AnimationError> {
		let Some(section) = self.section.clone() else {
			return Err(pair.invalid("frames must be declared inside a section"));
		};

		let fields = pair.value.split(',').map(str::trim).collect::<Vec<_>>();
		if fields.len() != 8 && fields.len() != 9 {
			return Err(pair.invalid(format!("expected 8 or 9 values, got {}", fields.len())));
		}
		let index: u16 = pair.number(fields[0])?;
		let kind: u16 = pair.number(fields[1])?;
		let mut geometry = [0i32; 6];
		for (value, field) in geometry.iter_mut().zip(&fields[2..8]) {
			*value = pair.number(field)?;
		}
		let slot = fields.get(8).map_or(0, |tag| self.atlas.slot_for(tag));

		let template_index = match self.compressed {
			Some(template_index) => template_index,
			None => {
				let template = self.build_template(&section)?;
				self.templates.push(template);
				let template_index = self.templates.len() - 1;
				self.compressed = Some(template_index);
				template_index
			}
		};

		let cell = FrameCell {
			slot,
			src: Rect::new(geometry[0], geometry[1], geometry[2], geometry[3]),
			offset: Point::new(geometry[4], geometry[5]),
		};
		self.templates[template_index].set_cell(index, kind, cell);
		Ok(())
	}

	fn into_set(self, name: &str) -> AnimationSet {
		let atlas = Arc::new(self.atlas);

		let mut seen = HashSet::new();
		let mut templates = Vec::with_capacity(self.templates.len());
		for template in self.templates {
			if !seen.insert(template.name().to_string()) {
				warn!("Animation '{}' is defined more than once in '{name}', keeping the first", template.name());
				continue;
			}
			templates.push(Arc::new(template.with_atlas(Arc::clone(&atlas))));
		}

		let default = self
			.starting
			.as_deref()
			.and_then(|starting| templates.iter().find(|template| template.name() == starting))
			.cloned()
			.unwrap_or_else(|| {
				Arc::new(
					AnimationTemplate::placeholder(self.ctx.config.direction_kinds)
						.with_atlas(Arc::clone(&atlas)),
				)
			});

		debug!("Loaded {} animations from '{name}' ({} images)", templates.len(), atlas.len());

		AnimationSet {
			name: name.to_string(),
			templates,
			default,
			atlas,
			parent: self.ctx.parent.clone(),
		}
	}
}
