//! Integration tests for `animset-rs`

use animset_rs::prelude::*;

mod loading;
mod playback;

/// Loads `text` with the default configuration and a fresh image cache.
fn load(name: &str, text: &str) -> AnimationSet {
	let mut images = ImageCache::new();
	let mut ctx = LoadContext::new(&mut images);
	match AnimationSet::from_text(name, text, &mut ctx) {
		Ok(set) => set,
		Err(err) => panic!("Failed to load {name}: {err}"),
	}
}

/// Builds a template directly, without going through a definition.
fn template(style: PlaybackStyle, frames: u16, duration: u16) -> std::sync::Arc<AnimationTemplate> {
	let mut template = AnimationTemplate::new("test", style, RenderStyle::OPAQUE, frames, duration, 8);
	template.fill_grid(Point::new(32, 32), Point::new(16, 16), 0);
	std::sync::Arc::new(template)
}
