//! Particle field behind the skills grid.
//!
//! A fixed set of points drifts inside the drawing area, bounces off its
//! edges, and is linked by faint lines to every neighbour closer than
//! `link_distance`. There is no physics beyond constant velocity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prng::Prng;
use crate::surface::{Bounds, Point, Rgba, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    pub count: usize,
    /// Circle radius, in canvas units.
    pub radius: f64,
    /// Upper bound on each velocity component, in units per frame.
    pub max_speed: f64,
    pub link_distance: f64,
    /// Link opacity at distance zero.
    pub link_alpha: f64,
    pub link_width: f64,
    pub color: Rgba,
    pub fill_alpha: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 25,
            radius: 3.0,
            max_speed: 0.25,
            link_distance: 150.0,
            link_alpha: 0.15,
            link_width: 1.0,
            color: Rgba::rgb(0, 112, 160),
            fill_alpha: 0.3,
        }
    }
}

impl FieldConfig {
    /// Validate the configuration, returning an error message if invalid.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err("radius must be finite and > 0");
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err("max_speed must be finite and >= 0");
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return Err("link_distance must be finite and > 0");
        }
        if !(0.0..=1.0).contains(&self.link_alpha) {
            return Err("link_alpha must be in [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err("fill_alpha must be in [0, 1]");
        }
        if !self.link_width.is_finite() || self.link_width <= 0.0 {
            return Err("link_width must be finite and > 0");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Link between two particles, `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

/// Stroke opacity for a link of length `distance`: linear from `link_alpha`
/// at zero down to nothing at `link_distance`. `None` means no line.
pub fn link_opacity(distance: f64, cfg: &FieldConfig) -> Option<f64> {
    if distance < cfg.link_distance {
        Some(cfg.link_alpha * (1.0 - distance / cfg.link_distance))
    } else {
        None
    }
}

/// Reflect one velocity component so it points back into `[0, extent)`.
/// A particle leaving the area gets its component negated; one already
/// heading back is left alone, so nothing stranded outside after a resize
/// can flip back and forth forever.
#[inline]
fn reflect(pos: f64, vel: f64, extent: f64) -> f64 {
    if pos < 0.0 {
        vel.abs()
    } else if pos >= extent {
        -vel.abs()
    } else {
        vel
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    cfg: FieldConfig,
    bounds: Bounds,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Allocate `cfg.count` particles with uniform positions inside `bounds`
    /// and uniform velocity components in `[-max_speed, max_speed)`.
    pub fn spawn(cfg: FieldConfig, bounds: Bounds, rng: &mut Prng) -> Self {
        let particles = (0..cfg.count)
            .map(|_| Particle {
                x: rng.next_f64_01() * bounds.width,
                y: rng.next_f64_01() * bounds.height,
                vx: rng.gen_range_f64(-cfg.max_speed, cfg.max_speed),
                vy: rng.gen_range_f64(-cfg.max_speed, cfg.max_speed),
            })
            .collect();
        Self {
            cfg,
            bounds,
            particles,
        }
    }

    pub fn from_particles(cfg: FieldConfig, bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self {
            cfg,
            bounds,
            particles,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Positions are left untouched; anything now outside is turned around
    /// by the next [`step`](Self::step).
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Advance every particle by its velocity, then reflect per axis.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
        }
        let Bounds { width, height } = self.bounds;
        for p in &mut self.particles {
            p.vx = reflect(p.x, p.vx, width);
            p.vy = reflect(p.y, p.vy, height);
        }
    }

    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let d = a.position().distance(b.position());
                if let Some(opacity) = link_opacity(d, &self.cfg) {
                    out.push(Link {
                        a: i,
                        b: j,
                        distance: d,
                        opacity,
                    });
                }
            }
        }
        out
    }

    /// Clear the surface, draw every particle, then every link.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> FrameStats {
        surface.clear();

        let fill = self.cfg.color.with_alpha(self.cfg.fill_alpha);
        for p in &self.particles {
            surface.fill_circle(p.position(), self.cfg.radius, fill);
        }

        let links = self.links();
        for link in &links {
            let a = self.particles[link.a].position();
            let b = self.particles[link.b].position();
            surface.stroke_line(
                a,
                b,
                self.cfg.link_width,
                self.cfg.color.with_alpha(link.opacity),
            );
        }

        FrameStats {
            particles: self.particles.len(),
            links: links.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn bounds(w: f64, h: f64) -> Bounds {
        Bounds::new(w, h).unwrap()
    }

    fn single(x: f64, y: f64, vx: f64, vy: f64, b: Bounds) -> ParticleField {
        ParticleField::from_particles(
            FieldConfig::default(),
            b,
            vec![Particle { x, y, vx, vy }],
        )
    }

    #[test]
    fn spawn_respects_bounds_and_speed() {
        let cfg = FieldConfig::default();
        let b = bounds(800.0, 400.0);
        let field = ParticleField::spawn(cfg, b, &mut Prng::new(99));
        assert_eq!(field.particles().len(), 25);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..400.0).contains(&p.y));
            assert!((-0.25..0.25).contains(&p.vx));
            assert!((-0.25..0.25).contains(&p.vy));
        }
    }

    #[test]
    fn reflection_at_left_edge_flips_sign_and_returns() {
        let v = -0.2;
        let mut field = single(0.0, 50.0, v, 0.0, bounds(100.0, 100.0));

        field.step();
        let p = field.particles()[0];
        assert!(p.x < 0.0);
        assert_eq!(p.vx, -v);

        field.step();
        let p2 = field.particles()[0];
        assert!(p2.x > p.x, "must not keep moving out of bounds");
        assert_eq!(p2.vx, -v);
    }

    #[test]
    fn right_edge_is_exclusive() {
        let mut field = single(99.75, 10.0, 0.25, 0.0, bounds(100.0, 100.0));
        field.step();
        assert!(field.particles()[0].vx < 0.0);
    }

    #[test]
    fn axes_reflect_independently() {
        let mut field = single(50.0, 99.9, 0.1, 0.2, bounds(100.0, 100.0));
        field.step();
        let p = field.particles()[0];
        assert_eq!(p.vx, 0.1);
        assert_eq!(p.vy, -0.2);
    }

    #[test]
    fn stranded_particle_heads_back_after_shrink() {
        let mut field = single(500.0, 10.0, 0.25, 0.0, bounds(1000.0, 100.0));
        field.resize(bounds(300.0, 100.0));
        field.step();
        assert!(field.particles()[0].vx < 0.0);
        let mut last_x = field.particles()[0].x;
        for _ in 0..10 {
            field.step();
            let x = field.particles()[0].x;
            assert!(x < last_x);
            last_x = x;
        }
    }

    #[test]
    fn link_opacity_fades_to_threshold() {
        let cfg = FieldConfig::default();
        assert_eq!(link_opacity(0.0, &cfg), Some(0.15));
        let mid = link_opacity(75.0, &cfg).unwrap();
        assert!((mid - 0.075).abs() < 1e-12);
        assert_eq!(link_opacity(150.0, &cfg), None);
        assert_eq!(link_opacity(400.0, &cfg), None);
    }

    #[test]
    fn links_cover_unordered_pairs_once() {
        let cfg = FieldConfig::default();
        let field = ParticleField::from_particles(
            cfg,
            bounds(1000.0, 1000.0),
            vec![
                Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0 },
                Particle { x: 100.0, y: 0.0, vx: 0.0, vy: 0.0 },
                Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0 },
                Particle { x: 900.0, y: 900.0, vx: 0.0, vy: 0.0 },
            ],
        );
        let links = field.links();
        let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        let coincident = links.iter().find(|l| (l.a, l.b) == (0, 2)).unwrap();
        assert_eq!(coincident.opacity, 0.15);
    }

    #[test]
    fn render_clears_then_draws_circles_then_lines() {
        let b = bounds(300.0, 300.0);
        let field = ParticleField::from_particles(
            FieldConfig::default(),
            b,
            vec![
                Particle { x: 10.0, y: 10.0, vx: 0.0, vy: 0.0 },
                Particle { x: 20.0, y: 10.0, vx: 0.0, vy: 0.0 },
            ],
        );
        let mut surface = RecordingSurface::new(b);
        let stats = field.render(&mut surface);
        assert_eq!(stats, FrameStats { particles: 2, links: 1 });

        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCommand::Clear);
        match &cmds[1] {
            DrawCommand::Circle { radius, color, .. } => {
                assert_eq!(*radius, 3.0);
                assert_eq!(color.a, 0.3);
            }
            other => panic!("expected circle, got {other:?}"),
        }
        match &cmds[3] {
            DrawCommand::Line { width, color, .. } => {
                assert_eq!(*width, 1.0);
                assert!((color.a - 0.15 * (1.0 - 10.0 / 150.0)).abs() < 1e-12);
            }
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
        let bad = FieldConfig {
            link_distance: 0.0,
            ..FieldConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
