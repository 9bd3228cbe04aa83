//! This crate provides the core types of the `animset-rs` sprite animation engine.
//!
//! # Overview
//!
//! - **Timeline**: converts a frame count and a duration in ticks into a per-tick frame playlist
//! - **Animation**: playback state machine for one instance (`PlayOnce`, `Looped`, `BackForth`)
//! - **Template**: immutable, shared definition of one named animation
//! - **Atlas**: tagged images shared by all animations of a set
//! - **Set**: named templates loaded from an INI-like definition, with a default fallback
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use animset_types::prelude::*;
//!
//! # fn main() -> Result<(), AnimationError> {
//! let text = "[idle]\nframes=2\nduration=4\ntype=looped\nrender_size=32,32\n";
//!
//! let mut images = ImageCache::new();
//! let mut ctx = LoadContext::new(&mut images);
//! let set = AnimationSet::from_text("animations/slime.txt", text, &mut ctx)?;
//!
//! let mut idle = set.default_animation();
//! for _ in 0..4 {
//! 	idle.advance();
//! }
//! assert_eq!(idle.times_played(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use animset_types::timeline::build_playlist;
//!
//! assert_eq!(build_playlist(3, 6), [0, 0, 1, 1, 2, 2]);
//! ```

pub mod animation;
pub mod atlas;
pub mod config;
pub mod definition;
pub mod error;
pub mod render;
pub mod set;
pub mod template;
pub mod timeline;

/// `use animset_types::prelude::*;` to import commonly used items.
pub mod prelude;
