//! Infinitely looping, auto-scrolling strip of items.
//!
//! The strip renders its item list twice back to back inside a horizontal
//! scroll container. Autoplay advances the scroll offset at a fixed pixel rate
//! and folds it back by one pass width (`half`) whenever it crosses that
//! boundary. Because the content at `half` is a copy of the content at `0`,
//! the fold is invisible.
//!
//! [`Marquee`] owns only runtime state: it never looks at the items, it only
//! knows how many there are. Rendering lives in [`view`].

mod clock;
mod drag;
mod geometry;
mod view;

use clock::FrameClock;
use drag::DragGesture;
use geometry::{Geometry, ResizeDebounce, wrap_offset};
pub use view::view;

use iced::widget::scrollable;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Tunables for a single marquee instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeSettings {
    /// Pixels of scroll per second. Zero keeps the strip static.
    pub speed: f32,
    pub max_frame_delta: Duration,
    pub resize_debounce: Duration,
}

impl Default for MarqueeSettings {
    fn default() -> Self {
        Self {
            speed: 40.0,
            max_frame_delta: Duration::from_millis(250),
            resize_debounce: Duration::from_millis(150),
        }
    }
}

/// Input emitted by the marquee's own widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarqueeInput {
    PointerEntered,
    PointerExited,
    PointerPressed,
    /// Reported by the scroll container whenever its bounds or position
    /// change, including wheel and trackpad scrolling.
    Measured {
        content_width: f32,
        viewport_width: f32,
        scroll_x: f32,
    },
}

/// Scroll positions closer than this to the stored offset are treated as
/// echoes of our own `scroll_to`.
const SCROLL_ECHO_EPSILON: f32 = 0.5;

/// Runtime state of one mounted marquee.
#[derive(Debug)]
pub struct Marquee {
    name: &'static str,
    scroll_id: scrollable::Id,
    item_count: usize,
    speed: f32,
    offset: f32,
    hovered: bool,
    focused: bool,
    drag: Option<DragGesture>,
    clock: FrameClock,
    geometry: Geometry,
    resize: ResizeDebounce,
}

impl Marquee {
    pub fn new(
        name: &'static str,
        scroll_id: scrollable::Id,
        item_count: usize,
        settings: MarqueeSettings,
    ) -> Self {
        let speed = if settings.speed.is_finite() {
            settings.speed.max(0.0)
        } else {
            0.0
        };
        debug!(marquee = name, item_count, speed, "Mounted marquee");
        Self {
            name,
            scroll_id,
            item_count,
            speed,
            offset: 0.0,
            hovered: false,
            focused: false,
            drag: None,
            clock: FrameClock::new(settings.max_frame_delta),
            geometry: Geometry::default(),
            resize: ResizeDebounce::new(settings.resize_debounce),
        }
    }

    pub fn scroll_id(&self) -> &scrollable::Id {
        &self.scroll_id
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn half(&self) -> f32 {
        self.geometry.half()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.focused || self.is_dragging()
    }

    /// Whether the frame pump needs to keep running for this instance.
    pub fn wants_frames(&self) -> bool {
        !self.is_empty() && (self.speed > 0.0 || self.resize.is_armed())
    }

    /// Runs one animation frame and returns the offset to push to the scroll
    /// container, if it changed.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let delta = self.clock.advance(now);
        let resized = self
            .resize
            .poll(now)
            .and_then(|geometry| self.apply_geometry(geometry));

        if self.is_empty() || self.is_paused() || self.speed <= 0.0 {
            return resized;
        }
        let Some(delta) = delta else {
            return resized;
        };

        self.offset = wrap_offset(
            self.offset + self.speed * delta.as_secs_f32(),
            self.geometry.half(),
        );
        trace!(marquee = self.name, offset = self.offset, "Advanced marquee");
        Some(self.offset)
    }

    pub fn pointer_entered(&mut self) {
        self.update_pause_inputs(|m| m.hovered = true);
    }

    pub fn pointer_exited(&mut self) {
        self.update_pause_inputs(|m| m.hovered = false);
    }

    pub fn focus_gained(&mut self) {
        self.update_pause_inputs(|m| m.focused = true);
    }

    pub fn focus_lost(&mut self) {
        self.update_pause_inputs(|m| m.focused = false);
    }

    /// Starts a drag at pointer position `x`.
    pub fn press(&mut self, x: f32) {
        if self.is_empty() || !x.is_finite() {
            return;
        }
        let baseline = self.offset;
        self.update_pause_inputs(|m| m.drag = Some(DragGesture::begin(x, baseline)));
        debug!(marquee = self.name, x, baseline, "Drag started");
    }

    /// Moves an active drag to pointer position `x`.
    pub fn drag_to(&mut self, x: f32) -> Option<f32> {
        let drag = self.drag?;
        if !x.is_finite() {
            return None;
        }
        let offset = wrap_offset(drag.offset_at(x), self.geometry.half());
        if offset == self.offset {
            return None;
        }
        self.offset = offset;
        Some(offset)
    }

    /// Ends the drag normally. Returns `true` if one was active.
    pub fn release(&mut self) -> bool {
        self.end_drag("released")
    }

    /// Ends the drag because the pointer was lost. Returns `true` if one was
    /// active.
    pub fn cancel(&mut self) -> bool {
        self.end_drag("cancelled")
    }

    pub fn viewport_resized(&mut self, now: Instant) {
        if !self.resize.is_armed() {
            debug!(marquee = self.name, "Deferring geometry updates until resize settles");
        }
        self.resize.arm(now);
    }

    /// Accepts a fresh measurement of the scroll container.
    pub fn measured(&mut self, content_width: f32, viewport_width: f32) -> Option<f32> {
        let geometry = self.resize.offer(Geometry::new(content_width, viewport_width))?;
        self.apply_geometry(geometry)
    }

    /// Takes over a scroll position the container reached on its own (wheel
    /// or trackpad) so that resuming continues from what is on screen.
    ///
    /// Only honoured while hover or focus pauses the strip: during autoplay
    /// and drags the container merely echoes offsets we pushed.
    pub fn scrolled(&mut self, scroll_x: f32) -> bool {
        if self.is_dragging() || !(self.hovered || self.focused) || !scroll_x.is_finite() {
            return false;
        }
        if (scroll_x - self.offset).abs() < SCROLL_ECHO_EPSILON {
            return false;
        }
        self.offset = wrap_offset(scroll_x, self.geometry.half());
        debug!(
            marquee = self.name,
            scroll_x,
            offset = self.offset,
            "Adopted external scroll position"
        );
        true
    }

    /// Drops the elapsed time since the last frame, e.g. after the window
    /// was hidden.
    pub fn resync(&mut self) {
        self.clock.resync();
    }

    fn apply_geometry(&mut self, geometry: Geometry) -> Option<f32> {
        if geometry == self.geometry {
            return None;
        }
        self.geometry = geometry;
        let previous = self.offset;
        self.offset = wrap_offset(self.offset, geometry.half());
        debug!(
            marquee = self.name,
            content_width = geometry.content_width,
            viewport_width = geometry.viewport_width,
            half = geometry.half(),
            seamless = geometry.loops_seamlessly(),
            offset = self.offset,
            "Applied marquee geometry"
        );
        (self.offset != previous).then_some(self.offset)
    }

    fn end_drag(&mut self, reason: &'static str) -> bool {
        if self.drag.is_none() {
            return false;
        }
        self.update_pause_inputs(|m| m.drag = None);
        debug!(marquee = self.name, offset = self.offset, reason, "Drag ended");
        true
    }

    fn update_pause_inputs(&mut self, apply: impl FnOnce(&mut Self)) {
        let was_paused = self.is_paused();
        apply(self);
        if was_paused != self.is_paused() {
            // Whatever time passed across the transition must not turn into
            // movement on the next frame.
            self.clock.resync();
            trace!(marquee = self.name, paused = !was_paused, "Pause state changed");
        }
    }
}
