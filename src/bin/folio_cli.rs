//! Headless preview of the portfolio content and particle field.
//!
//! Examples:
//!   folio-cli categories
//!   folio-cli skills --category DevOps
//!   folio-cli projects --json
//!   folio-cli particles --frames 120 --width 1280 --height 720 --seed 42
//!
//! Logs go to stderr; filter with `RUST_LOG` (default `info`).

use std::process;

use folio::error::{FolioError, Result};
use folio::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("folio-cli (headless preview of the portfolio site)");
    eprintln!("Usage: folio-cli <command> [options]\n");
    eprintln!("Commands:");
    eprintln!("  categories                       List skill categories");
    eprintln!("  skills [--category <label>] [--json]");
    eprintln!("                                   List skills, optionally filtered");
    eprintln!("  projects [--json]                List projects");
    eprintln!("  particles [--frames N] [--width W] [--height H] [--seed S]");
    eprintln!("            [--config file.json] [--json]");
    eprintln!("                                   Run the particle field offscreen");
    process::exit(1);
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    process::exit(1);
}

/// Options after the command word. Flags take a value unless listed in
/// `switches`.
struct Opts {
    pairs: Vec<(String, String)>,
    switches: Vec<String>,
}

impl Opts {
    fn parse(args: &[String], switches: &[&str]) -> Self {
        let mut pairs = Vec::new();
        let mut on = Vec::new();
        let mut it = args.iter();
        while let Some(arg) = it.next() {
            if !arg.starts_with("--") {
                fail(format!("unexpected argument {arg:?}"));
            }
            if switches.contains(&arg.as_str()) {
                on.push(arg.clone());
                continue;
            }
            match it.next() {
                Some(value) => pairs.push((arg.clone(), value.clone())),
                None => fail(format!("{arg} needs a value")),
            }
        }
        Self {
            pairs,
            switches: on,
        }
    }

    fn get(&self, flag: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == flag)
            .map(|(_, v)| v.as_str())
    }

    fn has(&self, switch: &str) -> bool {
        self.switches.iter().any(|s| s == switch)
    }

    fn number<T: std::str::FromStr>(&self, flag: &str, default: T) -> T {
        match self.get(flag) {
            None => default,
            Some(raw) => raw
                .parse()
                .unwrap_or_else(|_| fail(format!("{flag} must be a number, got {raw:?}"))),
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_categories() {
    let skills = skills();
    for category in CategorySet::derive(&skills).iter() {
        println!("{category}");
    }
}

fn cmd_skills(opts: &Opts) -> Result<()> {
    let skills = skills();
    let categories = CategorySet::derive(&skills);
    let selected = match opts.get("--category") {
        None => Category::All,
        Some(label) => categories
            .resolve(label)
            .ok_or_else(|| FolioError::UnknownCategory(label.to_string()))?,
    };
    let visible = filter_by_category(&skills, &selected);
    info!(category = %selected, count = visible.len(), "skills");

    if opts.has("--json") {
        return print_json(&visible);
    }
    for s in visible {
        println!("{:<18} {:<14} {:>3}%", s.name, s.category, s.level);
    }
    Ok(())
}

fn cmd_projects(opts: &Opts) -> Result<()> {
    let projects = projects();
    info!(count = projects.len(), "projects");
    if opts.has("--json") {
        return print_json(&projects);
    }
    for p in &projects {
        println!("{}. {} [{}]", p.id, p.title, p.tags.join(", "));
    }
    Ok(())
}

/// Fires frames back to back; there is no display to wait for.
#[derive(Default)]
struct Immediate {
    next: i32,
}

impl FrameScheduler for Immediate {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next = self.next.wrapping_add(1);
        Some(FrameHandle(self.next))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        debug!(handle = handle.0, "frame cancelled");
    }
}

#[derive(Serialize)]
struct FrameLine {
    frame: u64,
    particles: usize,
    links: usize,
}

fn cmd_particles(opts: &Opts) -> Result<()> {
    let cfg = match opts.get("--config") {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let frames: u64 = opts.number("--frames", 60);
    let width: f64 = opts.number("--width", 800.0);
    let height: f64 = opts.number("--height", 600.0);
    let seed: u64 = opts.number("--seed", 1);
    let json = opts.has("--json");

    let bounds = Bounds::new(width, height)
        .ok_or_else(|| FolioError::InvalidConfig(format!("bad size {width}x{height}")))?;
    let mut surface = RecordingSurface::new(bounds);
    let mut scheduler = Immediate::default();
    let mut anim = ParticleAnimation::new(cfg.field);

    info!(frames, width, height, seed, "particles");
    if !anim.start(Some(bounds), seed, &mut scheduler) {
        return Ok(());
    }

    let mut total_links = 0usize;
    for _ in 0..frames {
        let stats = match anim.on_frame(Some(&mut surface), &mut scheduler) {
            TickOutcome::Drawn(stats) => stats,
            TickOutcome::Stopped => break,
        };
        total_links += stats.links;
        let line = FrameLine {
            frame: anim.frames(),
            particles: stats.particles,
            links: stats.links,
        };
        if json {
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!(
                "frame={:<5} particles={:<4} links={}",
                line.frame, line.particles, line.links
            );
        }
    }
    anim.teardown(&mut scheduler);

    let drawn = anim.frames().max(1);
    info!(
        frames = anim.frames(),
        avg_links = total_links as f64 / drawn as f64,
        "done"
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((cmd, rest)) = args.split_first() else {
        usage();
    };

    let result = match cmd.as_str() {
        "categories" => {
            Opts::parse(rest, &[]);
            cmd_categories();
            Ok(())
        }
        "skills" => cmd_skills(&Opts::parse(rest, &["--json"])),
        "projects" => cmd_projects(&Opts::parse(rest, &["--json"])),
        "particles" => cmd_particles(&Opts::parse(rest, &["--json"])),
        "-h" | "--help" | "help" => usage(),
        _ => usage(),
    };

    if let Err(e) = result {
        fail(e);
    }
}
