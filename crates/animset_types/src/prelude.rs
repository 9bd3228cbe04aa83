//! Prelude module for `animset_types`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```
//! use animset_types::prelude::*;
//!
//! let set = AnimationSet::empty("animations/none.txt", 8);
//! let animation = set.default_animation();
//! assert_eq!(animation.style(), PlaybackStyle::PlayOnce);
//! ```

#[doc(inline)]
pub use crate::animation::{Animation, Direction, PlaybackCursor, PlaybackStyle};

#[doc(inline)]
pub use crate::atlas::{ImageCache, ImageHandle, ImageLoader, SpriteAtlas};

#[doc(inline)]
pub use crate::config::LoaderConfig;

#[doc(inline)]
pub use crate::definition::{DefinitionCursor, DefinitionSource, IniCursor};

#[doc(inline)]
pub use crate::error::AnimationError;

#[doc(inline)]
pub use crate::render::{BlendMode, Color, Point, Rect, Renderable};

#[doc(inline)]
pub use crate::set::{AnimationLookup, AnimationSet, LoadContext};

#[doc(inline)]
pub use crate::template::{AnimationTemplate, FrameCell, RenderStyle};

#[doc(inline)]
pub use crate::timeline::{ActiveFrames, Timeline};
