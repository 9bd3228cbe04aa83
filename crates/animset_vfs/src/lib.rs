//! Mod virtual file system for animation definitions.
//!
//! Game content is split into mods, each one a directory tree. Mods are stacked in
//! load order and a later mod overrides any file of an earlier one with the same
//! relative path, so `animations/hero.txt` resolves to the copy in the last mod
//! that provides it.
//!
//! # Examples
//!
//! ```no_run
//! use animset_types::prelude::*;
//! use animset_vfs::ModFs;
//!
//! # fn main() -> Result<(), AnimationError> {
//! let mut mods = ModFs::new();
//! mods.push_mod("mods/default");
//! mods.push_mod("mods/hd_sprites");
//!
//! let mut images = ImageCache::new();
//! let mut ctx = LoadContext::new(&mut images);
//! let hero = AnimationSet::load("animations/hero.txt", &mods, &mut ctx)?;
//! # Ok(())
//! # }
//! ```

use std::{
	collections::BTreeSet,
	fs,
	path::{Path, PathBuf},
};

use animset_types::{definition::DefinitionSource, error::AnimationError};
use log::debug;
use walkdir::WalkDir;

/// Ordered stack of mod directories.
#[derive(Debug, Clone, Default)]
pub struct ModFs {
	roots: Vec<PathBuf>,
}

impl ModFs {
	/// Creates an empty stack.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a stack from mod roots in load order.
	pub fn with_mods<I, P>(roots: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		Self {
			roots: roots.into_iter().map(Into::into).collect(),
		}
	}

	/// Adds a mod on top of the stack.
	pub fn push_mod(&mut self, root: impl Into<PathBuf>) {
		self.roots.push(root.into());
	}

	/// Returns the mod roots in load order.
	pub fn roots(&self) -> &[PathBuf] {
		&self.roots
	}

	/// Resolves a relative resource name to the file of the last mod providing it.
	pub fn locate(&self, name: &str) -> Option<PathBuf> {
		self.roots.iter().rev().map(|root| root.join(name)).find(|path| path.is_file())
	}

	/// Reads a resource as text.
	///
	/// # Errors
	///
	/// Returns an error if the resolved file cannot be read.
	pub fn read_to_string(&self, name: &str) -> Result<Option<String>, AnimationError> {
		let Some(path) = self.locate(name) else {
			return Ok(None);
		};
		debug!("Resolved '{name}' to {}", path.display());
		Ok(Some(fs::read_to_string(path)?))
	}

	/// Lists every resource under `dir` with extension `ext`, across all mods.
	///
	/// Names are relative to the mod roots, use `/` separators, and appear once even
	/// if several mods provide them.
	pub fn list(&self, dir: &str, ext: &str) -> Vec<String> {
		let mut names = BTreeSet::new();
		for root in &self.roots {
			let base = root.join(dir);
			if !base.is_dir() {
				continue;
			}

			for entry in WalkDir::new(&base).into_iter().filter_map(Result::ok) {
				if !entry.file_type().is_file() {
					continue;
				}
				if entry.path().extension().and_then(std::ffi::OsStr::to_str) != Some(ext) {
					continue;
				}
				if let Some(name) = relative_name(root, entry.path()) {
					names.insert(name);
				}
			}
		}
		names.into_iter().collect()
	}
}

impl DefinitionSource for ModFs {
	fn read_definition(&self, name: &str) -> Result<Option<String>, AnimationError> {
		self.read_to_string(name)
	}
}

fn relative_name(root: &Path, path: &Path) -> Option<String> {
	let relative = path.strip_prefix(root).ok()?;
	let parts = relative
		.components()
		.map(|component| component.as_os_str().to_str())
		.collect::<Option<Vec<_>>>()?;
	Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scratch_dir(test: &str) -> PathBuf {
		let dir = std::env::temp_dir().join(format!("animset_vfs_{test}_{}", std::process::id()));
		if dir.exists() {
			fs::remove_dir_all(&dir).unwrap();
		}
		fs::create_dir_all(&dir).unwrap();
		dir
	}

	fn write(root: &Path, name: &str, text: &str) {
		let path = root.join(name);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, text).unwrap();
	}

	#[test]
	fn test_later_mod_overrides() {
		let dir = scratch_dir("override");
		let base = dir.join("base");
		let hd = dir.join("hd");
		write(&base, "animations/hero.txt", "base");
		write(&base, "animations/slime.txt", "slime");
		write(&hd, "animations/hero.txt", "hd");

		let mods = ModFs::with_mods([&base, &hd]);
		assert_eq!(mods.read_to_string("animations/hero.txt").unwrap().as_deref(), Some("hd"));
		assert_eq!(mods.read_to_string("animations/slime.txt").unwrap().as_deref(), Some("slime"));
		assert!(mods.read_to_string("animations/ghost.txt").unwrap().is_none());
		assert_eq!(mods.locate("animations/hero.txt"), Some(hd.join("animations/hero.txt")));

		fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn test_list_merges_mods() {
		let dir = scratch_dir("list");
		let base = dir.join("base");
		let extra = dir.join("extra");
		write(&base, "animations/hero.txt", "");
		write(&base, "animations/enemies/slime.txt", "");
		write(&base, "animations/readme.md", "");
		write(&extra, "animations/hero.txt", "");
		write(&extra, "animations/wolf.txt", "");

		let mut mods = ModFs::new();
		mods.push_mod(&base);
		mods.push_mod(&extra);
		mods.push_mod(dir.join("missing"));

		assert_eq!(
			mods.list("animations", "txt"),
			[
				"animations/enemies/slime.txt",
				"animations/hero.txt",
				"animations/wolf.txt"
			]
		);

		fs::remove_dir_all(dir).unwrap();
	}
}
