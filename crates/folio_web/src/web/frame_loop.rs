//! Drives a [`ParticleAnimation`] from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use folio::animation::{FrameHandle, FrameScheduler, ParticleAnimation, TickOutcome};
use folio::particles::FieldConfig;
use folio::surface::Surface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_time::{SystemTime, UNIX_EPOCH};

use super::canvas::CanvasSurface;

type RafClosure = Closure<dyn FnMut(f64)>;

/// [`FrameScheduler`] over `window.requestAnimationFrame`. Every request
/// re-registers the same callback.
struct RafScheduler {
    window: web_sys::Window,
    callback: Rc<RefCell<Option<RafClosure>>>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// A running particle background. Dropping it tears the loop down.
pub(super) struct ParticleLoop {
    window: web_sys::Window,
    anim: Rc<RefCell<ParticleAnimation>>,
    scheduler: Rc<RefCell<RafScheduler>>,
    callback: Rc<RefCell<Option<RafClosure>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

impl ParticleLoop {
    /// Start animating on `canvas`. A canvas without a 2D context leaves the
    /// animation stopped; that is logged, not reported.
    pub(super) fn start(canvas: web_sys::HtmlCanvasElement, cfg: FieldConfig) -> Option<Self> {
        let window = web_sys::window()?;

        let surface = match CanvasSurface::new(canvas) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!("{e}");
                None
            }
        };
        let bounds = surface.as_ref().map(CanvasSurface::fit_to_layout);
        let surface = Rc::new(RefCell::new(surface));

        let anim = Rc::new(RefCell::new(ParticleAnimation::new(cfg)));
        let callback: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
        let scheduler = Rc::new(RefCell::new(RafScheduler {
            window: window.clone(),
            callback: callback.clone(),
        }));

        {
            let anim = anim.clone();
            let surface = surface.clone();
            let scheduler = scheduler.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
                let mut surface = surface.borrow_mut();
                let live = surface
                    .as_mut()
                    .filter(|s| s.is_attached())
                    .map(|s| s as &mut dyn Surface);
                let out = anim
                    .borrow_mut()
                    .on_frame(live, &mut *scheduler.borrow_mut());
                if out == TickOutcome::Stopped {
                    tracing::debug!("particle loop idle");
                }
            }) as Box<dyn FnMut(f64)>));
        }

        let started =
            anim.borrow_mut()
                .start(bounds, wall_clock_seed(), &mut *scheduler.borrow_mut());
        if !started {
            callback.borrow_mut().take();
            return None;
        }

        let on_resize = {
            let anim = anim.clone();
            let surface = surface.clone();
            Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(s) = surface.borrow().as_ref() {
                    anim.borrow_mut().resize(s.fit_to_layout());
                }
            }))
        };
        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("particle loop: could not listen for resize");
        }

        Some(Self {
            window,
            anim,
            scheduler,
            callback,
            on_resize: Some(on_resize),
        })
    }

    /// Cancel the pending frame and release the callbacks. Idempotent.
    pub(super) fn stop(&mut self) {
        self.anim
            .borrow_mut()
            .teardown(&mut *self.scheduler.borrow_mut());
        if let Some(cb) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        // Breaks the closure -> scheduler -> closure cycle.
        self.callback.borrow_mut().take();
    }
}

impl Drop for ParticleLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
