use crate::time::TimeOfDay;

pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 5.0;

/// Width of one hour at zoom 1.0.
pub const BASE_HOUR_WIDTH: f32 = 200.0;

const WHEEL_ZOOM_IN: f32 = 1.1;
const WHEEL_ZOOM_OUT: f32 = 0.9;

/// Owns the timeline's zoom level and horizontal scroll offset and turns
/// wheel and two-finger pinch gestures into anchor-preserving rescales.
///
/// Zoom changes are applied in two phases: `apply_zoom` updates the scale
/// and stages the compensating scroll write, and `commit_pending` applies it
/// on the next frame, before geometry is read at the new scale. The
/// controller is the single owner of this state; gesture handlers must go
/// through the one instance the application holds so every event observes
/// the latest zoom, never a captured copy.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    zoom: f32,
    scroll_offset: f32,
    pending_scroll: Option<f32>,
    pinch_baseline: Option<f32>,
    centered: bool,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            scroll_offset: 0.0,
            pending_scroll: None,
            pinch_baseline: None,
            centered: false,
        }
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// The committed scroll offset, as read by the renderer.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn pixels_per_minute(&self) -> f32 {
        BASE_HOUR_WIDTH * self.zoom / 60.0
    }

    /// Anchor-preserving zoom. `anchor_x` is the screen X of the cursor or
    /// pinch midpoint, relative to the viewport's left edge.
    ///
    /// The requested zoom is clamped into `[ZOOM_MIN, ZOOM_MAX]`; a request
    /// that clamps to the current zoom is a no-op and leaves the scroll
    /// offset untouched. Otherwise the scroll correction keeping the content
    /// point under `anchor_x` fixed is staged for the next frame.
    pub fn apply_zoom(&mut self, requested: f32, anchor_x: f32) {
        let clamped = requested.clamp(ZOOM_MIN, ZOOM_MAX);
        if clamped == self.zoom {
            return;
        }
        if requested != clamped {
            log::debug!("zoom request {requested} clamped to {clamped}");
        }

        // Base on the staged offset so two zooms within one frame compound
        // correctly instead of both reading the stale committed value.
        let anchor_content = anchor_x + self.effective_scroll();
        let ratio = clamped / self.zoom;
        self.zoom = clamped;
        self.pending_scroll = Some((anchor_content * ratio - anchor_x).max(0.0));
    }

    /// Wheel gesture: the vertical delta's sign maps to a fixed
    /// multiplicative factor so repeated ticks compound proportionally to
    /// the current zoom. Callers gate this on the accelerator modifier.
    pub fn wheel_zoom(&mut self, delta_y: f32, anchor_x: f32) {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_IN
        } else {
            WHEEL_ZOOM_OUT
        };
        self.apply_zoom(self.zoom * factor, anchor_x);
    }

    /// Record the inter-finger distance when a second finger lands.
    /// Non-positive distances are rejected so a degenerate touch can never
    /// produce a divide-by-zero zoom jump.
    pub fn pinch_begin(&mut self, distance: f32) {
        self.pinch_baseline = (distance > 0.0).then_some(distance);
    }

    /// Two-finger move: the zoom factor is the new distance over the latest
    /// baseline, and the baseline is refreshed after every move so the
    /// gesture tracks continuously instead of drifting from a stale start.
    pub fn pinch_move(&mut self, distance: f32, midpoint_x: f32) {
        if distance <= 0.0 {
            return;
        }
        let Some(baseline) = self.pinch_baseline else {
            self.pinch_begin(distance);
            return;
        };
        self.apply_zoom(self.zoom * (distance / baseline), midpoint_x);
        self.pinch_baseline = Some(distance);
    }

    pub fn pinch_end(&mut self) {
        self.pinch_baseline = None;
    }

    /// Plain scroll: shift the viewport by `delta` pixels, clamped at zero.
    pub fn pan(&mut self, delta: f32) {
        self.commit_pending();
        self.scroll_offset = (self.scroll_offset + delta).max(0.0);
    }

    /// Apply the staged scroll write. The host's frame callback calls this
    /// once per paint, before geometry is read.
    pub fn commit_pending(&mut self) {
        if let Some(offset) = self.pending_scroll.take() {
            self.scroll_offset = offset;
        }
    }

    /// Center the viewport on the current time. Runs exactly once per
    /// mount; later zoom or data changes never re-center.
    pub fn center_on(&mut self, now: TimeOfDay, viewport_width: f32) {
        if self.centered {
            return;
        }
        self.centered = true;
        let target = f32::from(now.minutes()) * self.pixels_per_minute() - viewport_width / 2.0;
        self.scroll_offset = target.max(0.0);
    }

    fn effective_scroll(&self) -> f32 {
        self.pending_scroll.unwrap_or(self.scroll_offset)
    }
}
