//! Prelude module for `animset_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use animset_internal::prelude::*;
//!
//! let mods = ModFs::with_mods(["mods/default"]);
//! let set = AnimationSet::empty("animations/none.txt", 8);
//!
//! let mut animation = set.default_animation();
//! animation.advance();
//! assert!(animation.is_completed());
//! assert_eq!(mods.roots().len(), 1);
//! ```

// Re-export everything from animset_types::prelude
#[doc(inline)]
pub use animset_types::prelude::*;

#[doc(inline)]
pub use animset_vfs::ModFs;

// Re-export the entire animset_types module for advanced usage
#[doc(inline)]
pub use animset_types;
