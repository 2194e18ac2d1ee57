//! Pointer tilt, scroll reveal and stagger timing.
//!
//! These are the numbers behind the page's CSS transforms; the browser only
//! copies them into `style` attributes.

/// Divisor that maps pointer offset (px) to rotation (deg).
const TILT_DIVISOR: f64 = 20.0;
const TILT_PERSPECTIVE_PX: u32 = 1000;

/// Card rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn transform(&self) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt for a pointer at viewport position `(client_x, client_y)` over `rect`.
/// The card leans away from the pointer: below center tips the top back,
/// right of center turns it left.
pub fn tilt(client_x: f64, client_y: f64, rect: Rect) -> Tilt {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return Tilt::REST;
    }
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    Tilt {
        rotate_x: (y - rect.height / 2.0) / TILT_DIVISOR,
        rotate_y: (rect.width / 2.0 - x) / TILT_DIVISOR,
    }
}

/// Fires once an element's top edge scrolls above a fraction of the
/// viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    pub start_fraction: f64,
}

impl RevealTrigger {
    /// Section titles.
    pub const TITLE: RevealTrigger = RevealTrigger {
        start_fraction: 0.85,
    };
    /// Card grids.
    pub const GRID: RevealTrigger = RevealTrigger {
        start_fraction: 0.80,
    };

    pub fn is_triggered(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top < self.start_fraction * viewport_height
    }
}

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// One glyph per character; spaces become non-breaking so that an animated
/// inline span never collapses.
pub fn title_glyphs(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00A0}' } else { c })
        .map(String::from)
        .collect()
}
