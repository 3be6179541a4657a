#![forbid(unsafe_code)]

//! Grab-to-scroll with momentum for the board's horizontal container.
//!
//! Press-drag-release panning: while pressed, the scroll offset tracks the
//! pointer 1:1; on release, the captured pointer velocity is amplified and
//! decays per animation frame until it falls below a stop threshold. The
//! controller owns the offset — the host reads [`GrabScroll::scroll_left`]
//! after feeding events and frame ticks.
//!
//! Only presses that do not land on a card reach this controller (the
//! board routes those to the drag session instead).
//!
//! # Invariants
//!
//! 1. A release with zero captured velocity produces no post-release
//!    offset change.
//! 2. Per-frame glide displacement decays monotonically and the animation
//!    terminates (threshold or bound).
//! 3. A new press stops any in-flight glide before anything else moves.
//!
//! Friction compounds per animation frame, not per unit time, so glide
//! distance depends on the host's frame rate. That matches the behavior
//! this controller reimplements; see DESIGN.md.

use std::time::Instant;

use tracing::trace;

/// Tuning knobs for grab-to-scroll.
#[derive(Debug, Clone)]
pub struct GrabScrollConfig {
    /// Multiplier applied to the captured velocity on release (default: 15.0).
    pub release_gain: f32,
    /// Per-frame velocity decay factor (0.0 = instant stop, 1.0 = no
    /// friction; default: 0.92).
    pub friction: f32,
    /// Velocity magnitude below which the glide snaps to a stop
    /// (default: 0.5).
    pub stop_threshold: f32,
}

impl Default for GrabScrollConfig {
    fn default() -> Self {
        Self {
            release_gain: 15.0,
            friction: 0.92,
            stop_threshold: 0.5,
        }
    }
}

impl GrabScrollConfig {
    /// Set the release gain.
    #[must_use]
    pub fn with_release_gain(mut self, gain: f32) -> Self {
        self.release_gain = gain;
        self
    }

    /// Set the friction factor, clamped to `[0.0, 1.0)`.
    #[must_use]
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.clamp(0.0, 0.999);
        self
    }

    /// Set the stop threshold.
    #[must_use]
    pub fn with_stop_threshold(mut self, threshold: f32) -> Self {
        self.stop_threshold = threshold.abs();
        self
    }
}

/// An active press-pan.
#[derive(Debug, Clone)]
struct Pan {
    origin_x: f32,
    origin_scroll: f32,
    last_x: f32,
    last_at: Instant,
}

/// Momentum scroll controller for the board's horizontal scroll container.
#[derive(Debug, Clone)]
pub struct GrabScroll {
    config: GrabScrollConfig,
    scroll_left: f32,
    pan: Option<Pan>,
    /// Pointer velocity estimate in px/ms while panning; amplified glide
    /// velocity in px/frame after release.
    velocity: f32,
    gliding: bool,
}

impl GrabScroll {
    /// Create a controller with the given configuration.
    #[must_use]
    pub fn new(config: GrabScrollConfig) -> Self {
        Self {
            config,
            scroll_left: 0.0,
            pan: None,
            velocity: 0.0,
            gliding: false,
        }
    }

    /// Create a controller with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(GrabScrollConfig::default())
    }

    /// Current horizontal scroll offset.
    #[inline]
    #[must_use]
    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    /// Whether a press-pan is in progress.
    #[inline]
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Whether a post-release glide is animating.
    #[inline]
    #[must_use]
    pub fn is_gliding(&self) -> bool {
        self.gliding
    }

    /// Jump to an offset. Stops any pan or glide.
    pub fn jump_to(&mut self, offset: f32, max_scroll: f32) {
        self.scroll_left = offset.clamp(0.0, max_scroll.max(0.0));
        self.pan = None;
        self.velocity = 0.0;
        self.gliding = false;
    }

    /// Begin a pan: record the grab origin and stop any in-flight glide.
    pub fn press(&mut self, x: f32, now: Instant) {
        self.interrupt();
        trace!(x, scroll_left = self.scroll_left, "pan started");
        self.pan = Some(Pan {
            origin_x: x,
            origin_scroll: self.scroll_left,
            last_x: x,
            last_at: now,
        });
    }

    /// Track the pointer while pressed: 1:1 panning plus an instantaneous
    /// velocity estimate. No-op when not panning.
    pub fn motion(&mut self, x: f32, now: Instant, max_scroll: f32) {
        let Some(pan) = &mut self.pan else {
            return;
        };

        self.scroll_left =
            (pan.origin_scroll - (x - pan.origin_x)).clamp(0.0, max_scroll.max(0.0));

        let dt_ms = now.duration_since(pan.last_at).as_secs_f32() * 1000.0;
        if dt_ms > 0.0 {
            self.velocity = (x - pan.last_x) / dt_ms;
        }
        pan.last_x = x;
        pan.last_at = now;
    }

    /// End the pan: amplify the captured velocity and start the glide.
    ///
    /// A captured velocity already below the stop threshold (after gain)
    /// starts no glide at all.
    pub fn release(&mut self) {
        if self.pan.take().is_none() {
            return;
        }
        self.velocity *= self.config.release_gain;
        if self.velocity.abs() >= self.config.stop_threshold {
            self.gliding = true;
            trace!(velocity = self.velocity, "glide started");
        } else {
            self.velocity = 0.0;
        }
    }

    /// Stop any pan or glide with no further offset mutation.
    ///
    /// Called for pointer-cancel and for presses that start a drag instead
    /// of a pan.
    pub fn interrupt(&mut self) {
        if self.gliding {
            trace!(scroll_left = self.scroll_left, "glide interrupted");
        }
        self.pan = None;
        self.velocity = 0.0;
        self.gliding = false;
    }

    /// Advance one animation frame of the glide.
    ///
    /// Applies the displacement, then decays the velocity; stops below the
    /// threshold or at a scroll bound. Returns `true` while another frame
    /// is needed.
    pub fn tick(&mut self, max_scroll: f32) -> bool {
        if !self.gliding {
            return false;
        }

        let max_scroll = max_scroll.max(0.0);
        self.scroll_left = (self.scroll_left - self.velocity).clamp(0.0, max_scroll);
        self.velocity *= self.config.friction;

        let at_bound = self.scroll_left <= 0.0 || self.scroll_left >= max_scroll;
        if self.velocity.abs() < self.config.stop_threshold || at_bound {
            self.velocity = 0.0;
            self.gliding = false;
            return false;
        }
        true
    }
}
