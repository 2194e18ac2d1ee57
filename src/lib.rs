//! # folio
//!
//! Core logic for a single-page portfolio site: the static content catalog,
//! category filtering for the skills grid, and the particle field that
//! animates the skills background.
//!
//! Nothing in this crate touches the DOM. The browser app (`folio_web`)
//! adapts its canvas and `requestAnimationFrame` to the [`surface::Surface`]
//! and [`animation::FrameScheduler`] traits, which keeps everything here
//! testable on the host.
//!
//! ## Quick Start
//!
//! ```
//! use folio::prelude::*;
//!
//! let skills = skills();
//! let categories = CategorySet::derive(&skills);
//! let devops = categories.resolve("DevOps").unwrap();
//! let visible = filter_by_category(&skills, &devops);
//! assert!(visible.iter().all(|s| s.category == "DevOps"));
//!
//! let bounds = Bounds::new(640.0, 360.0).unwrap();
//! let mut field = ParticleField::spawn(FieldConfig::default(), bounds, &mut Prng::new(7));
//! let mut surface = RecordingSurface::new(bounds);
//! field.step();
//! let stats = field.render(&mut surface);
//! assert_eq!(stats.particles, 25);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialize/deserialize config and catalog types
//! - `cli` (default): Build the `folio-cli` binary
//!
//! ## Modules
//!
//! - [`catalog`]: Static site content
//! - [`filter`]: Category derivation and filtering
//! - [`particles`]: Particle field simulation and rendering
//! - [`animation`]: Frame-driven lifecycle around the particle field
//! - [`view_state`]: Per-section UI state driven by events
//! - [`motion`]: Pointer tilt, scroll reveal and stagger helpers

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/filter.rs"]
pub mod filter;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/surface.rs"]
pub mod surface;

#[path = "core/particles.rs"]
pub mod particles;

#[path = "core/animation.rs"]
pub mod animation;

#[path = "core/view_state.rs"]
pub mod view_state;

#[path = "core/motion.rs"]
pub mod motion;

pub mod config;
pub mod error;

/// Prelude module for convenient imports.
///
/// ```
/// use folio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{
        AnimationState, CancelToken, FrameHandle, FrameScheduler, ParticleAnimation, TickOutcome,
    };
    pub use crate::catalog::{
        contact_info, footer_columns, hero, nav_links, projects, skills, social_links, Project,
        Section, SkillIcon, SkillItem,
    };
    pub use crate::config::SiteConfig;
    pub use crate::error::FolioError;
    pub use crate::filter::{filter_by_category, Categorized, Category, CategorySet};
    pub use crate::motion::{tilt, Rect, RevealTrigger, Tilt};
    pub use crate::particles::{FieldConfig, FrameStats, Particle, ParticleField};
    pub use crate::prng::Prng;
    pub use crate::surface::{Bounds, DrawCommand, Point, RecordingSurface, Rgba, Surface};
    pub use crate::view_state::{NavEvent, NavState, ProjectHover, SkillsEvent, SkillsPanel};
}
