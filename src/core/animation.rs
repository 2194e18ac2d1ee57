//! Frame-driven lifecycle around a [`ParticleField`].
//!
//! The host provides a [`FrameScheduler`] ("run once on the next display
//! frame") and, on every fired frame, the drawing surface if it still exists.
//! The lifecycle guarantees:
//! - at most one frame is pending at any time;
//! - a fired frame checks the [`CancelToken`] before doing anything;
//! - after [`ParticleAnimation::teardown`] no frame draws again.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::particles::{FieldConfig, FrameStats, ParticleField};
use crate::prng::Prng;
use crate::surface::{Bounds, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Stopped,
    Running,
}

/// Opaque id of a scheduled frame (e.g. a `requestAnimationFrame` id).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Ask for one callback on the next display frame. `None` if the host
    /// cannot schedule frames.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Single-threaded cancellation flag shared with the frame callback.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The frame drew and the next one is scheduled.
    Drawn(FrameStats),
    /// Nothing drew; the animation is (now) stopped.
    Stopped,
}

#[derive(Debug)]
pub struct ParticleAnimation {
    cfg: FieldConfig,
    state: AnimationState,
    field: Option<ParticleField>,
    token: CancelToken,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl ParticleAnimation {
    pub fn new(cfg: FieldConfig) -> Self {
        Self {
            cfg,
            state: AnimationState::Stopped,
            field: None,
            token: CancelToken::new(),
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Token observed by the current run. A fresh token is issued on every
    /// start, so a cancelled run never leaks into the next one.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Start on a drawing area of `bounds`. `None` means the host has no
    /// usable surface: the animation stays stopped and returns `false`.
    pub fn start(
        &mut self,
        bounds: Option<Bounds>,
        seed: u64,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        if self.state == AnimationState::Running {
            return true;
        }
        let Some(bounds) = bounds else {
            debug!("particle field: no drawing surface, staying stopped");
            return false;
        };

        let mut rng = Prng::new(seed);
        self.field = Some(ParticleField::spawn(self.cfg, bounds, &mut rng));
        self.token = CancelToken::new();
        self.frames = 0;
        self.state = AnimationState::Running;
        debug!(
            count = self.cfg.count,
            width = bounds.width,
            height = bounds.height,
            "particle field started"
        );

        self.schedule(scheduler)
    }

    /// Run one tick. `surface` is `None` when the drawing area went away,
    /// which stops the animation.
    pub fn on_frame(
        &mut self,
        surface: Option<&mut dyn Surface>,
        scheduler: &mut dyn FrameScheduler,
    ) -> TickOutcome {
        // The handle that just fired is no longer pending.
        self.pending = None;

        if self.token.is_cancelled() || self.state != AnimationState::Running {
            return TickOutcome::Stopped;
        }
        let Some(surface) = surface else {
            debug!("particle field: surface unavailable, stopping");
            self.teardown(scheduler);
            return TickOutcome::Stopped;
        };
        let Some(field) = self.field.as_mut() else {
            self.teardown(scheduler);
            return TickOutcome::Stopped;
        };

        field.step();
        let stats = field.render(surface);
        self.frames += 1;

        if self.schedule(scheduler) {
            TickOutcome::Drawn(stats)
        } else {
            TickOutcome::Stopped
        }
    }

    pub fn resize(&mut self, bounds: Bounds) {
        if let Some(field) = self.field.as_mut() {
            debug!(
                width = bounds.width,
                height = bounds.height,
                "particle field resized"
            );
            field.resize(bounds);
        }
    }

    /// Cancel the pending frame, flip the token and drop the particles.
    pub fn teardown(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.token.cancel();
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        if self.state == AnimationState::Running {
            debug!(frames = self.frames, "particle field stopped");
        }
        self.state = AnimationState::Stopped;
        self.field = None;
    }

    fn schedule(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.pending.is_some() {
            return true;
        }
        match scheduler.request_frame() {
            Some(handle) => {
                self.pending = Some(handle);
                true
            }
            None => {
                debug!("particle field: frame scheduling unavailable, stopping");
                self.token.cancel();
                self.state = AnimationState::Stopped;
                self.field = None;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    /// Hands out increasing ids and remembers what is outstanding.
    #[derive(Default)]
    struct ManualScheduler {
        next: i32,
        outstanding: Vec<FrameHandle>,
        cancelled: Vec<FrameHandle>,
        refuse: bool,
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            if self.refuse {
                return None;
            }
            self.next += 1;
            let h = FrameHandle(self.next);
            self.outstanding.push(h);
            Some(h)
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.outstanding.retain(|h| *h != handle);
            self.cancelled.push(handle);
        }
    }

    impl ManualScheduler {
        /// Fire the oldest outstanding frame, like a display refresh.
        fn fire(&mut self) -> Option<FrameHandle> {
            if self.outstanding.is_empty() {
                None
            } else {
                Some(self.outstanding.remove(0))
            }
        }
    }

    fn bounds() -> Bounds {
        Bounds::new(400.0, 300.0).unwrap()
    }

    #[test]
    fn starts_stopped_and_runs_after_start() {
        let mut sched = ManualScheduler::default();
        let mut anim = ParticleAnimation::new(FieldConfig::default());
        assert_eq!(anim.state(), AnimationState::Stopped);

        assert!(anim.start(Some(bounds()), 1, &mut sched));
        assert_eq!(anim.state(), AnimationState::Running);
        assert_eq!(anim.field().map(|f| f.particles().len()), Some(25));
        assert_eq!(sched.outstanding.len(), 1);
    }

    #[test]
    fn missing_surface_is_a_silent_no_op() {
        let mut sched = ManualScheduler::default();
        let mut anim = ParticleAnimation::new(FieldConfig::default());
        assert!(!anim.start(None, 1, &mut sched));
        assert_eq!(anim.state(), AnimationState::Stopped);
        assert!(sched.outstanding.is_empty());
    }

    #[test]
    fn at_most_one_frame_pending() {
        let mut sched = ManualScheduler::default();
        let mut surface = RecordingSurface::new(bounds());
        let mut anim = ParticleAnimation::new(FieldConfig::default());
        anim.start(Some(bounds()), 3, &mut sched);
        // Starting twice does not double-schedule.
        anim.start(Some(bounds()), 3, &mut sched);
        assert_eq!(sched.outstanding.len(), 1);

        for _ in 0..5 {
            assert!(sched.fire().is_some());
            let out = anim.on_frame(Some(&mut surface), &mut sched);
            assert!(matches!(out, TickOutcome::Drawn(s) if s.particles == 25));
            assert_eq!(sched.outstanding.len(), 1);
        }
        assert_eq!(anim.frames(), 5);
    }

    #[test]
    fn teardown_cancels_pending_frame_and_blocks_late_ticks() {
        let mut sched = ManualScheduler::default();
        let mut surface = RecordingSurface::new(bounds());
        let mut anim = ParticleAnimation::new(FieldConfig::default());
        anim.start(Some(bounds()), 5, &mut sched);
        let token = anim.token();

        anim.teardown(&mut sched);
        assert!(token.is_cancelled());
        assert!(sched.outstanding.is_empty());
        assert_eq!(sched.cancelled, vec![FrameHandle(1)]);
        assert!(anim.field().is_none());

        // A callback that raced teardown must not draw.
        let out = anim.on_frame(Some(&mut surface), &mut sched);
        assert_eq!(out, TickOutcome::Stopped);
        assert!(surface.commands().is_empty());
        assert!(sched.outstanding.is_empty());
    }

    #[test]
    fn vanished_surface_stops_the_loop() {
        let mut sched = ManualScheduler::default();
        let mut anim = ParticleAnimation::new(FieldConfig::default());
        anim.start(Some(bounds()), 5, &mut sched);
        sched.fire();
        assert_eq!(anim.on_frame(None, &mut sched), TickOutcome::Stopped);
        assert_eq!(anim.state(), AnimationState::Stopped);
        assert!(sched.outstanding.is_empty());
    }

    #[test]
    fn restart_issues_a_fresh_token() {
        let mut sched = ManualScheduler::default();
        let mut anim = ParticleAnimation::new(FieldConfig::default());
        anim.start(Some(bounds()), 5, &mut sched);
        let first = anim.token();
        anim.teardown(&mut sched);

        anim.start(Some(bounds()), 6, &mut sched);
        assert!(first.is_cancelled());
        assert!(!anim.token().is_cancelled());
        assert_eq!(anim.state(), AnimationState::Running);
    }

    #[test]
    fn scheduler_refusal_stops_instead_of_spinning() {
        let mut sched = ManualScheduler {
            refuse: true,
            ..ManualScheduler::default()
        };
        let mut anim = ParticleAnimation::new(FieldConfig::default());
        assert!(!anim.start(Some(bounds()), 5, &mut sched));
        assert_eq!(anim.state(), AnimationState::Stopped);
    }

    #[test]
    fn resize_keeps_positions() {
        let mut sched = ManualScheduler::default();
        let mut anim = ParticleAnimation::new(FieldConfig::default());
        anim.start(Some(bounds()), 8, &mut sched);
        let before: Vec<_> = anim.field().unwrap().particles().to_vec();
        let smaller = Bounds::new(10.0, 10.0).unwrap();
        anim.resize(smaller);
        let field = anim.field().unwrap();
        assert_eq!(field.bounds(), smaller);
        assert_eq!(field.particles(), before.as_slice());
    }
}
