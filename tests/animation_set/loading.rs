//! Loading sets from definitions and mod directories

use std::{fs, path::PathBuf, sync::Arc};

use animset_rs::prelude::*;

use crate::load;

const BODY: &str = "\
image=images/body.png
render_size=128,128
render_offset=64,96

[stance]
position=0
frames=4
duration=12
type=back_forth

[run]
position=4
frames=8
duration=24
type=looped
";

#[test]
fn test_two_uncompressed_sections() {
	let set = load("animations/body.txt", BODY);

	assert_eq!(set.len(), 2);
	assert_eq!(set.default_animation().name(), "stance");

	let run = set.get_animation("run").unwrap();
	assert_eq!(run.frame_count(), 8);
	assert_eq!(run.duration(), 24);

	let cell = set.template("run").unwrap().cell(7, 7).unwrap();
	assert_eq!(cell.src, Rect::new(128 * 11, 128 * 7, 128, 128));
	assert_eq!(cell.offset, Point::new(64, 96));
}

#[test]
fn test_uncompressed_then_compressed() {
	let text = "\
image=images/slime.png
render_size=32,32

[stance]
frames=2
duration=8
type=looped

[die]
frames=3
duration=9
type=play_once
frame=0,0,0,64,32,32,16,28
frame=1,0,32,64,48,32,24,28
frame=2,0,80,64,48,16,24,12
";
	let set = load("animations/slime.txt", text);
	assert_eq!(set.names().collect::<Vec<_>>(), ["stance", "die"]);

	let die = set.get_animation("die").unwrap();
	let expected = [
		(Rect::new(0, 64, 32, 32), Point::new(16, 28)),
		(Rect::new(32, 64, 48, 32), Point::new(24, 28)),
		(Rect::new(80, 64, 48, 16), Point::new(24, 12)),
	];
	for (frame, (src, offset)) in expected.into_iter().enumerate() {
		let cell = die.template().cell(frame as u16, 0).unwrap();
		assert_eq!(cell.src, src);
		assert_eq!(cell.offset, offset);
	}
	assert!(die.template().cell(0, 1).is_none());
}

#[test]
fn test_active_frame_fires_once_per_play() {
	let text = "\
[attack]
frames=4
duration=8
type=play_once
active_frame=1
";
	let set = load("animations/wolf.txt", text);
	let mut attack = set.default_animation();

	let mut fired = Vec::new();
	for _ in 0..12 {
		attack.advance();
		if attack.is_active_frame() {
			fired.push(attack.tick());
		}
	}
	assert_eq!(fired, [3]);
	assert!(attack.is_completed());

	attack.reset();
	assert!(!attack.is_completed());
	for _ in 0..3 {
		attack.advance();
	}
	assert!(attack.is_active_frame());
}

fn scratch_dir(test: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("animset_it_{test}_{}", std::process::id()));
	if dir.exists() {
		fs::remove_dir_all(&dir).unwrap();
	}
	fs::create_dir_all(dir.join("base/animations")).unwrap();
	fs::create_dir_all(dir.join("armor/animations")).unwrap();
	dir
}

#[test_log::test]
fn test_mod_stack_with_parent() {
	let dir = scratch_dir("mod_stack");
	fs::write(dir.join("base/animations/body.txt"), BODY).unwrap();
	fs::write(
		dir.join("base/animations/plate.txt"),
		"image=images/plate.png\n[stance]\nframes=2\nduration=12\ntype=back_forth\n",
	)
	.unwrap();
	fs::write(
		dir.join("armor/animations/plate.txt"),
		"image=images/plate_hd.png\n[stance]\nframes=3\nduration=12\ntype=back_forth\n[run]\nframes=8\nduration=24\ntype=looped\n",
	)
	.unwrap();

	let mods = ModFs::with_mods([dir.join("base"), dir.join("armor")]);
	let mut images = ImageCache::new();

	let mut ctx = LoadContext::new(&mut images).with_config(LoaderConfig::strict());
	let body = Arc::new(AnimationSet::load("animations/body.txt", &mods, &mut ctx).unwrap());

	let mut ctx = LoadContext::new(&mut images).with_parent(Arc::clone(&body));
	let plate = AnimationSet::load("animations/plate.txt", &mods, &mut ctx).unwrap();

	assert_eq!(plate.len(), 2);
	assert_eq!(plate.frame_count("stance"), Some(4));
	assert_eq!(plate.atlas().lookup("").map(|image| image.path()), Some("images/plate_hd.png"));
	assert_eq!(images.len(), 2);

	let mut base = body.get_animation("stance").unwrap();
	let mut layer = plate.get_animation("stance").unwrap();
	for _ in 0..5 {
		base.advance();
	}
	assert!(layer.sync_to(&base));
	assert_eq!(layer.current_display_frame(), base.current_display_frame());

	let mut ctx = LoadContext::new(&mut images).with_config(LoaderConfig::strict());
	assert!(matches!(
		AnimationSet::load("animations/ghost.txt", &mods, &mut ctx),
		Err(AnimationError::DefinitionNotFound(_))
	));

	fs::remove_dir_all(dir).unwrap();
}
