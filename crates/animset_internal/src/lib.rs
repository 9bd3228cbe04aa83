//! This module is separated into its own crate to enable simple dynamic linking for `animset-rs`, and should not be used directly.

/// `use animset_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use animset_types;
pub use animset_vfs;

// Re-export commonly used types at crate root
pub use animset_types::{
	animation::Animation, error::AnimationError, set::AnimationSet, set::LoadContext,
};
pub use animset_vfs::ModFs;
