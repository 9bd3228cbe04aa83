#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `animset-rs` plays frame-based sprite animations and loads them from text definitions.
//!
//! A definition describes a set of named animations sharing one sprite atlas. Each
//! animation is turned into a per-tick frame playlist once; game objects then get
//! cheap copies that advance independently, can be frame-locked to each other, and
//! report the frames that should trigger gameplay events.
//!
//! ```
//! use animset_rs::prelude::*;
//!
//! let text = "\
//! image=images/hero.png
//! render_size=64,64
//!
//! [swing]
//! frames=4
//! duration=8
//! type=play_once
//! active_frame=2
//! ";
//!
//! let mut images = ImageCache::new();
//! let mut ctx = LoadContext::new(&mut images);
//! let set = AnimationSet::from_text("animations/hero.txt", text, &mut ctx).unwrap();
//!
//! let mut swing = set.get_animation_or_default("swing").into_animation();
//! let mut hits = 0;
//! while !swing.is_completed() {
//! 	swing.advance();
//! 	if swing.is_active_frame() {
//! 		hits += 1;
//! 	}
//! }
//! assert_eq!(hits, 1);
//! ```
pub use animset_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use animset_dylib;
