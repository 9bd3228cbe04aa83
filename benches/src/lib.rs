//! Benchmark helper utilities for animset-rs
//!
//! This module generates synthetic animation definitions so loader benchmarks do
//! not depend on game content.

use std::fmt::Write;

/// Generates a definition with `sections` animations of `frames` frames each.
///
/// Styles rotate through looped, back-and-forth and play-once. With `compressed`
/// every section lists its cells explicitly (`kinds` directions per frame) instead
/// of relying on the uncompressed grid.
pub fn generate_definition_text(sections: usize, frames: u16, kinds: u16, compressed: bool) -> String {
	let mut text = String::new();
	text.push_str("image=images/bench.png\nimage=images/bench_fx.png,fx\n");
	text.push_str("render_size=64,64\nrender_offset=32,48\n");

	for section in 0..sections {
		let style = match section % 3 {
			0 => "looped",
			1 => "back_forth",
			_ => "play_once",
		};
		let _ = write!(
			text,
			"\n[anim_{section}]\nposition={}\nframes={frames}\nduration={}\ntype={style}\nactive_frame={}\n",
			section * usize::from(frames),
			u32::from(frames) * 3,
			frames / 2
		);

		if compressed {
			for frame in 0..frames {
				for kind in 0..kinds {
					let x = i32::from(frame) * 64;
					let y = i32::from(kind) * 64;
					let tag = if frame % 2 == 0 {
						""
					} else {
						",fx"
					};
					let _ = writeln!(text, "frame={frame},{kind},{x},{y},64,64,32,48{tag}");
				}
			}
		}
	}

	text
}

/// Common benchmark sizes for synthetic definitions
pub mod sizes {
	/// A single creature: 8 animations
	pub const SMALL: usize = 8;
	/// A player body with all actions: 32 animations
	pub const MEDIUM: usize = 32;
	/// A large shared set: 128 animations
	pub const LARGE: usize = 128;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_uncompressed() {
		let text = generate_definition_text(3, 4, 8, false);
		assert!(text.contains("[anim_2]"));
		assert!(text.contains("type=play_once"));
		assert!(!text.contains("\nframe="));
	}

	#[test]
	fn test_generate_compressed() {
		let text = generate_definition_text(1, 2, 2, true);
		assert_eq!(text.matches("\nframe=").count(), 4);
		assert!(text.contains("frame=1,1,64,64,64,64,32,48,fx"));
	}
}
