//! Animation definition utility.
//!
//! Provides two subcommands:
//! - `validate`: load every definition found under a directory of the mod stack
//!   and report the ones that fail.
//! - `inspect`: load a single definition, list its animations and optionally
//!   simulate playback of one of them tick by tick.
//!
//! Loader options come from an optional TOML file (`--config`) and `ANIMSET_*`
//! environment variables, e.g. `ANIMSET_TICKS_PER_SECOND=30`.

use std::{path::PathBuf, sync::Arc};

use animset_rs::prelude::*;
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Validate(opts) => run_validate(opts),
		Command::Inspect(opts) => run_inspect(opts),
	}
}

#[derive(Parser)]
#[command(name = "anim_utils")]
#[command(author = "animset-rs project")]
#[command(version)]
#[command(about = "Validate and inspect animation definitions", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Validate every definition under a directory of the mod stack
	Validate(ValidateArgs),
	/// Inspect a single definition and optionally simulate one animation
	Inspect(InspectArgs),
}

#[derive(Args)]
struct ModArgs {
	/// Mod directories in load order; later mods override earlier ones
	#[arg(short, long = "mod", value_name = "DIR", default_value = "mods/default")]
	mods: Vec<PathBuf>,

	/// TOML file with loader options
	#[arg(short, long, value_name = "FILE", env = "ANIMSET_CONFIG")]
	config: Option<PathBuf>,

	/// Definition used as parent set for frame count validation
	#[arg(short, long, value_name = "NAME")]
	parent: Option<String>,

	/// Print machine-readable JSON instead of text
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct ValidateArgs {
	#[command(flatten)]
	common: ModArgs,

	/// Directory, relative to the mod roots, holding the definitions
	#[arg(short, long, value_name = "DIR", default_value = "animations")]
	dir: String,

	/// Extension of definition files
	#[arg(short, long, value_name = "EXT", default_value = "txt")]
	ext: String,
}

#[derive(Args)]
struct InspectArgs {
	#[command(flatten)]
	common: ModArgs,

	/// Definition name relative to the mod roots, e.g. `animations/hero.txt`
	#[arg(value_name = "NAME")]
	name: String,

	/// Animation to simulate
	#[arg(short, long, value_name = "ANIMATION")]
	animation: Option<String>,

	/// Number of ticks to simulate
	#[arg(short, long, value_name = "COUNT", default_value_t = 0)]
	ticks: usize,

	/// Playback speed in percent
	#[arg(short, long, value_name = "PERCENT", default_value_t = 100.0)]
	speed: f32,
}

fn load_config(args: &ModArgs) -> Result<LoaderConfig> {
	let mut builder = config::Config::builder();
	if let Some(path) = &args.config {
		if !path.is_file() {
			bail!("Config file {} does not exist", path.display());
		}
		builder = builder.add_source(config::File::from(path.as_path()));
	}

	let config = builder
		.add_source(config::Environment::with_prefix("ANIMSET").try_parsing(true))
		.build()
		.context("Failed to read loader configuration")?
		.try_deserialize::<LoaderConfig>()
		.context("Invalid loader configuration")?;

	if config.direction_kinds == 0 {
		bail!("direction_kinds must be greater than zero");
	}
	Ok(config)
}

fn load_parent(
	args: &ModArgs,
	mods: &ModFs,
	config: LoaderConfig,
	images: &mut ImageCache,
) -> Result<Option<Arc<AnimationSet>>> {
	let Some(name) = &args.parent else {
		return Ok(None);
	};
	let mut ctx = LoadContext::new(images).with_config(LoaderConfig {
		optional: false,
		..config
	});
	let parent = AnimationSet::load(name, mods, &mut ctx)
		.with_context(|| format!("Failed to load parent definition {name}"))?;
	Ok(Some(Arc::new(parent)))
}

#[derive(Serialize)]
struct ValidationEntry {
	name: String,
	animations: usize,
	error: Option<String>,
}

#[derive(Serialize)]
struct ValidationReport {
	mods: Vec<String>,
	ok: usize,
	failed: usize,
	entries: Vec<ValidationEntry>,
}

fn run_validate(args: ValidateArgs) -> Result<()> {
	let config = load_config(&args.common)?;
	let mods = ModFs::with_mods(args.common.mods.iter().cloned());
	for root in mods.roots() {
		if !root.is_dir() {
			bail!("Mod directory {} does not exist", root.display());
		}
	}

	let names = mods.list(&args.dir, &args.ext);
	if names.is_empty() {
		println!("No .{} definitions found under {}", args.ext, args.dir);
		return Ok(());
	}
	info!("Validating {} definitions from {} mods", names.len(), mods.roots().len());

	let mut images = ImageCache::new();
	let parent = load_parent(&args.common, &mods, config, &mut images)?;

	let mut report = ValidationReport {
		mods: mods.roots().iter().map(|root| root.display().to_string()).collect(),
		ok: 0,
		failed: 0,
		entries: Vec::with_capacity(names.len()),
	};

	for name in names {
		let mut ctx = LoadContext::new(&mut images).with_config(config);
		if let Some(parent) = &parent {
			ctx = ctx.with_parent(Arc::clone(parent));
		}

		let entry = match AnimationSet::load(&name, &mods, &mut ctx) {
			Ok(set) => {
				report.ok += 1;
				ValidationEntry {
					name,
					animations: set.len(),
					error: None,
				}
			}
			Err(err) => {
				report.failed += 1;
				ValidationEntry {
					name,
					animations: 0,
					error: Some(err.to_string()),
				}
			}
		};
		report.entries.push(entry);
	}

	if args.common.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		for entry in &report.entries {
			match &entry.error {
				None => println!("✅ {:<50} | {:3} animations", entry.name, entry.animations),
				Some(err) => println!("❌ {:<50} | {err}", entry.name),
			}
		}
		println!("\nSummary: files={} | ok={} err={}", report.entries.len(), report.ok, report.failed);
	}

	if report.failed > 0 {
		bail!("Validation finished with errors (see summary)");
	}
	Ok(())
}

#[derive(Serialize)]
struct AnimationSummary {
	name: String,
	style: String,
	frames: u16,
	duration: u16,
	number_frames: u32,
	active_frames: Vec<u32>,
	blend_mode: String,
	alpha_mod: u8,
}

#[derive(Serialize)]
struct TickSample {
	tick: usize,
	frame: u16,
	times_played: u32,
	direction: Option<String>,
	active: bool,
	last: bool,
	completed: bool,
}

#[derive(Serialize)]
struct InspectReport {
	name: String,
	images: Vec<String>,
	default: String,
	animations: Vec<AnimationSummary>,
	simulation: Vec<TickSample>,
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let config = load_config(&args.common)?;
	let mods = ModFs::with_mods(args.common.mods.iter().cloned());
	let Some(path) = mods.locate(&args.name) else {
		bail!("Definition {} not found in any mod", args.name);
	};
	info!("Inspecting {}", path.display());

	let mut images = ImageCache::new();
	let parent = load_parent(&args.common, &mods, config, &mut images)?;
	let mut ctx = LoadContext::new(&mut images).with_config(config);
	if let Some(parent) = parent {
		ctx = ctx.with_parent(parent);
	}
	let set = AnimationSet::load(&args.name, &mods, &mut ctx)
		.with_context(|| format!("Failed to load {}", args.name))?;

	let animations = set
		.templates()
		.iter()
		.map(|template| AnimationSummary {
			name: template.name().to_string(),
			style: template.style().to_string(),
			frames: template.frame_count(),
			duration: template.duration(),
			number_frames: template.number_frames(),
			active_frames: template.active_frames().to_vec(),
			blend_mode: template.render_style().blend_mode.to_string(),
			alpha_mod: template.render_style().alpha_mod,
		})
		.collect();

	let simulation = match &args.animation {
		Some(name) => simulate(&set, name, args.ticks, args.speed)?,
		None => Vec::new(),
	};

	let report = InspectReport {
		name: set.name().to_string(),
		images: set.atlas().iter().map(|(_, image)| image.path().to_string()).collect(),
		default: set.default_template().name().to_string(),
		animations,
		simulation,
	};

	if args.common.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	print!("{set}");
	for animation in &report.animations {
		println!(
			"  {:<20} {:<10} frames {:3} ticks {:4} active {:?}",
			animation.name, animation.style, animation.frames, animation.duration, animation.active_frames
		);
	}
	for sample in &report.simulation {
		println!(
			"  tick {:4} | frame {:3} | played {:2} | {:<8} |{}{}{}",
			sample.tick,
			sample.frame,
			sample.times_played,
			sample.direction.as_deref().unwrap_or("-"),
			if sample.active {
				" active"
			} else {
				""
			},
			if sample.last {
				" last"
			} else {
				""
			},
			if sample.completed {
				" completed"
			} else {
				""
			},
		);
	}

	Ok(())
}

fn simulate(set: &AnimationSet, name: &str, ticks: usize, speed: f32) -> Result<Vec<TickSample>> {
	let Some(mut animation) = set.get_animation(name) else {
		bail!("Animation {name} is not defined in {}", set.name());
	};
	animation.set_speed(speed);

	let mut samples = Vec::with_capacity(ticks);
	for _ in 0..ticks {
		animation.advance();
		samples.push(TickSample {
			tick: animation.tick(),
			frame: animation.current_display_frame(),
			times_played: animation.times_played(),
			direction: animation.direction().map(|direction| direction.to_string()),
			active: animation.is_active_frame(),
			last: animation.is_last_frame(),
			completed: animation.is_completed(),
		});
	}
	Ok(samples)
}
