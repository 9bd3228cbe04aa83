//! Animation sets.
//!
//! An [`AnimationSet`] is the loaded form of one animation definition: a list of
//! named, immutable [`AnimationTemplate`]s sharing one [`SpriteAtlas`], plus a
//! default template. Game objects never play templates directly; they ask the set
//! for an [`Animation`], which is a fresh copy with its own playback cursor.
//!
//! # Loading
//!
//! ```
//! use animset_types::atlas::ImageCache;
//! use animset_types::set::{AnimationSet, LoadContext};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "\
//! image=images/hero.png
//! render_size=64,64
//! render_offset=32,56
//!
//! [stance]
//! position=0
//! frames=4
//! duration=400ms
//! type=back_forth
//!
//! [swing]
//! position=4
//! frames=3
//! duration=9
//! type=play_once
//! active_frame=2
//! ";
//!
//! let mut images = ImageCache::new();
//! let mut ctx = LoadContext::new(&mut images);
//! let set = AnimationSet::from_text("animations/hero.txt", text, &mut ctx)?;
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.default_animation().name(), "stance");
//!
//! let mut swing = set.get_animation("swing").expect("swing is defined");
//! swing.advance();
//! assert!(set.get_animation("fly").is_none());
//! # Ok(())
//! # }
//! ```
//!
//! # Parent sets
//!
//! Equipment layers are drawn on top of a base body and must stay frame-locked
//! with it. A set loaded with a parent overrides any `frames` value that differs
//! from the parent's animation of the same name, logging the mismatch.

mod loader;


use std::{fmt::Formatter, sync::Arc};

use log::debug;

use crate::{
	animation::Animation,
	atlas::{ImageLoader, SpriteAtlas},
	config::LoaderConfig,
	definition::{DefinitionCursor, DefinitionSource, IniCursor},
	error::AnimationError,
	template::AnimationTemplate,
};

use self::loader::SetLoader;

/// Everything a set needs from its surroundings while loading.
pub struct LoadContext<'a> {
	/// Loader configuration
	pub config: LoaderConfig,
	/// Image collaborator used for `image` keys
	pub images: &'a mut dyn ImageLoader,
	/// Set whose frame counts this set must match
	pub parent: Option<Arc<AnimationSet>>,
}

impl<'a> LoadContext<'a> {
	/// Creates a context with the default configuration and no parent.
	pub fn new(images: &'a mut dyn ImageLoader) -> Self {
		Self {
			config: LoaderConfig::default(),
			images,
			parent: None,
		}
	}

	/// Replaces the configuration.
	pub fn with_config(mut self, config: LoaderConfig) -> Self {
		self.config = config;
		self
	}

	/// Sets the parent set.
	pub fn with_parent(mut self, parent: Arc<AnimationSet>) -> Self {
		self.parent = Some(parent);
		self
	}
}

/// Result of a lookup that falls back to the default animation.
#[derive(Debug, Clone)]
pub enum AnimationLookup {
	/// The requested animation exists
	Found(Animation),
	/// The requested animation does not exist; this is the set's default
	Fallback(Animation),
}

impl AnimationLookup {
	/// Returns true if the default animation was substituted.
	pub fn is_fallback(&self) -> bool {
		matches!(self, Self::Fallback(_))
	}

	/// Returns a reference to the animation, whichever it is.
	pub fn animation(&self) -> &Animation {
		match self {
			Self::Found(animation) | Self::Fallback(animation) => animation,
		}
	}

	/// Returns the animation, whichever it is.
	pub fn into_animation(self) -> Animation {
		match self {
			Self::Found(animation) | Self::Fallback(animation) => animation,
		}
	}
}

/// Collection of named animation templates sharing one sprite atlas.
#[derive(Debug, Clone)]
pub struct AnimationSet {
	name: String,
	templates: Vec<Arc<AnimationTemplate>>,
	default: Arc<AnimationTemplate>,
	atlas: Arc<SpriteAtlas>,
	parent: Option<Arc<AnimationSet>>,
}

impl AnimationSet {
	/// Creates a set without animations; its default is the built-in placeholder.
	pub fn empty(name: impl Into<String>, kinds: u16) -> Self {
		let atlas = Arc::new(SpriteAtlas::new());
		Self {
			name: name.into(),
			templates: Vec::new(),
			default: Arc::new(AnimationTemplate::placeholder(kinds).with_atlas(Arc::clone(&atlas))),
			atlas,
			parent: None,
		}
	}

	/// Loads the definition `name` from `source`.
	///
	/// A missing definition yields an empty set when `ctx.config.optional` is set.
	///
	/// # Errors
	///
	/// Returns an error if the definition is missing and required, cannot be read,
	/// or is malformed. No partially built set is ever returned.
	pub fn load(
		name: &str,
		source: &dyn DefinitionSource,
		ctx: &mut LoadContext<'_>,
	) -> Result<Self, AnimationError> {
		match source.read_definition(name)? {
			Some(text) => Self::from_text(name, &text, ctx),
			None if ctx.config.optional => {
				debug!("Animation definition '{name}' not found, using an empty set");
				let mut set = Self::empty(name, ctx.config.direction_kinds);
				set.parent = ctx.parent.clone();
				Ok(set)
			}
			None => Err(AnimationError::DefinitionNotFound(name.to_string())),
		}
	}

	/// Loads a set from definition text.
	///
	/// # Errors
	///
	/// Returns an error if the text is malformed.
	pub fn from_text(
		name: &str,
		text: &str,
		ctx: &mut LoadContext<'_>,
	) -> Result<Self, AnimationError> {
		let mut cursor = IniCursor::new(text);
		Self::from_cursor(name, &mut cursor, ctx)
	}

	/// Loads a set by walking a definition cursor.
	///
	/// # Errors
	///
	/// Returns an error on unknown keys, malformed values, unknown playback styles
	/// or blend modes, sections without a playback style, and image failures.
	pub fn from_cursor(
		name: &str,
		cursor: &mut dyn DefinitionCursor,
		ctx: &mut LoadContext<'_>,
	) -> Result<Self, AnimationError> {
		SetLoader::new(ctx).run(name, cursor)
	}

	/// Returns the set name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the number of animations.
	pub fn len(&self) -> usize {
		self.templates.len()
	}

	/// Returns true if the set has no animation.
	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}

	/// Returns true if an animation named `name` exists.
	pub fn contains(&self, name: &str) -> bool {
		self.template(name).is_some()
	}

	/// Returns the animation names in definition order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.templates.iter().map(|template| template.name())
	}

	/// Returns all templates in definition order.
	pub fn templates(&self) -> &[Arc<AnimationTemplate>] {
		&self.templates
	}

	/// Returns the template named `name`.
	pub fn template(&self, name: &str) -> Option<&Arc<AnimationTemplate>> {
		self.templates.iter().find(|template| template.name() == name)
	}

	/// Returns the declared frame count of the animation named `name`.
	pub fn frame_count(&self, name: &str) -> Option<u16> {
		self.template(name).map(|template| template.frame_count())
	}

	/// Returns a new instance of the animation named `name`.
	pub fn get_animation(&self, name: &str) -> Option<Animation> {
		self.template(name).map(|template| Animation::new(Arc::clone(template)))
	}

	/// Returns a new instance of the default animation.
	pub fn default_animation(&self) -> Animation {
		Animation::new(Arc::clone(&self.default))
	}

	/// Returns the animation named `name`, or the default one when it does not exist.
	pub fn get_animation_or_default(&self, name: &str) -> AnimationLookup {
		match self.get_animation(name) {
			Some(animation) => AnimationLookup::Found(animation),
			None => {
				debug!("Animation '{name}' not found in '{}', using the default", self.name);
				AnimationLookup::Fallback(self.default_animation())
			}
		}
	}

	/// Returns the default template.
	pub fn default_template(&self) -> &Arc<AnimationTemplate> {
		&self.default
	}

	/// Returns the shared atlas.
	pub fn atlas(&self) -> &Arc<SpriteAtlas> {
		&self.atlas
	}

	/// Returns the parent set.
	pub fn parent(&self) -> Option<&Arc<AnimationSet>> {
		self.parent.as_ref()
	}
}

impl std::fmt::Display for AnimationSet {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "AnimationSet '{}':", self.name)?;
		writeln!(f, "  Images: {}", self.atlas.len())?;
		writeln!(f, "  Default: {}", self.default.name())?;
		for template in &self.templates {
			writeln!(f, "  {template}")?;
		}
		Ok(())
	}
}
