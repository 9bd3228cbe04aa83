//! Sprite atlas and image handle types.
//!
//! Image decoding and texture upload belong to the host engine. This module only
//! defines the boundary: an [`ImageLoader`] hands out reference-counted
//! [`ImageHandle`]s, and a [`SpriteAtlas`] keeps the handles a set needs under
//! their tags.
//!
//! Every template and every animation instance created from one set shares the
//! same atlas through an `Arc`; copying an instance never copies image data.

use std::{collections::HashMap, fmt::Formatter, sync::Arc};

use crate::error::AnimationError;

#[derive(Debug, PartialEq, Eq)]
struct ImageInfo {
	path: String,
}

/// Reference-counted handle to an image owned by the host engine.
///
/// Cloning a handle is cheap and never duplicates the image. Two handles are equal
/// when they point to the same image.
#[derive(Debug, Clone)]
pub struct ImageHandle(Arc<ImageInfo>);

impl ImageHandle {
	/// Creates a new handle for the image at `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self(Arc::new(ImageInfo {
			path: path.into(),
		}))
	}

	/// Returns the path the image was loaded from.
	pub fn path(&self) -> &str {
		&self.0.path
	}

	/// Returns the number of live handles to this image.
	pub fn ref_count(&self) -> usize {
		Arc::strong_count(&self.0)
	}
}

impl PartialEq for ImageHandle {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for ImageHandle {}

impl std::fmt::Display for ImageHandle {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Image({})", self.0.path)
	}
}

/// Source of images for animation sets.
pub trait ImageLoader {
	/// Loads (or returns an already loaded) image for `path`.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::ImageLoad`] when the image is not available.
	fn load_image(&mut self, path: &str) -> Result<ImageHandle, AnimationError>;
}

/// Simple [`ImageLoader`] that caches one handle per path.
///
/// The cache does not decode anything; it only guarantees that every set asking
/// for the same path receives the same handle.
///
/// # Examples
///
/// ```
/// use animset_types::atlas::{ImageCache, ImageLoader};
///
/// let mut cache = ImageCache::new();
/// let a = cache.load_image("images/body.png").unwrap();
/// let b = cache.load_image("images/body.png").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(cache.len(), 1);
///
/// cache.release_all();
/// assert!(cache.is_empty());
/// assert_eq!(a.ref_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ImageCache {
	images: HashMap<String, ImageHandle>,
}

impl ImageCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of cached images.
	pub fn len(&self) -> usize {
		self.images.len()
	}

	/// Returns true if nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.images.is_empty()
	}

	/// Drops every reference held by the cache.
	///
	/// Handles already given out stay valid until their owners drop them.
	pub fn release_all(&mut self) {
		self.images.clear();
	}
}

impl ImageLoader for ImageCache {
	fn load_image(&mut self, path: &str) -> Result<ImageHandle, AnimationError> {
		if path.is_empty() {
			return Err(AnimationError::ImageLoad {
				path: path.to_string(),
				message: "empty image path".to_string(),
			});
		}

		let handle =
			self.images.entry(path.to_string()).or_insert_with(|| ImageHandle::new(path));
		Ok(handle.clone())
	}
}

/// Tagged collection of images shared by all animations of a set.
///
/// Slot 0 is the first image that was added; lookups for unknown tags fall back to
/// it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteAtlas {
	slots: Vec<(String, ImageHandle)>,
}

impl SpriteAtlas {
	/// Creates an empty atlas.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an image under `tag` and returns its slot.
	///
	/// Adding a tag that already exists replaces the image in that slot.
	pub fn insert(&mut self, tag: impl Into<String>, image: ImageHandle) -> usize {
		let tag = tag.into();
		if let Some(slot) = self.slots.iter().position(|(t, _)| *t == tag) {
			self.slots[slot].1 = image;
			return slot;
		}
		self.slots.push((tag, image));
		self.slots.len() - 1
	}

	/// Returns the slot for `tag`, falling back to slot 0 when the tag is unknown.
	pub fn slot_for(&self, tag: &str) -> usize {
		self.slots.iter().position(|(t, _)| t == tag).unwrap_or(0)
	}

	/// Returns the image stored in `slot`.
	pub fn image(&self, slot: usize) -> Option<&ImageHandle> {
		self.slots.get(slot).map(|(_, image)| image)
	}

	/// Looks up an image by tag, falling back to the first image.
	pub fn lookup(&self, tag: &str) -> Option<&ImageHandle> {
		self.image(self.slot_for(tag))
	}

	/// Returns the number of images.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Returns true if the atlas holds no image.
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Returns an iterator over `(tag, image)` pairs in slot order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ImageHandle)> {
		self.slots.iter().map(|(tag, image)| (tag.as_str(), image))
	}
}
