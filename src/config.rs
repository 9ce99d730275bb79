/// Row height used when neither the caller nor the measured geometry provides a usable one.
pub const DEFAULT_ROW_HEIGHT: f32 = 56.0;

/// Fraction of a row the pointer has to travel past before a swap sticks.
pub const DEFAULT_SWAP_THRESHOLD: f32 = 0.6;

/// Pointer travel in points that abandons a press still waiting out its start delay.
pub const DEFAULT_HOLD_CANCEL_DISTANCE: f32 = 8.0;

/// Press-and-hold time used by [`ReorderConfig::touch`].
pub const TOUCH_START_DELAY_MS: u64 = 180;

/// Height of the band along the viewport edges in which a drag scrolls the list.
pub const DEFAULT_AUTOSCROLL_EDGE: f32 = 80.0;

/// Scroll distance per frame with the pointer at (or past) the viewport edge.
pub const DEFAULT_AUTOSCROLL_SPEED: f32 = 8.0;

/// Tuning for how pointer input is turned into a drag and into list positions.
///
/// Out of range values are never rejected. The accessors fall back to the defaults instead, so a
/// bad config degrades to the stock behaviour rather than to a division by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderConfig {
    /// Pitch of one list row in logical pixels.
    pub row_height: f32,
    /// Hysteresis band as a fraction of `row_height`.
    pub swap_threshold: f32,
    /// Whether handles start drags at all (default: true).
    pub enabled: bool,
    /// How long a handle has to be held before the press becomes a drag (default: 0).
    pub start_delay_ms: u64,
    /// Movement that abandons a press while it waits out `start_delay_ms` (default: 8).
    pub hold_cancel_distance: f32,
    /// Edge band of the viewport that scrolls while dragging; 0 turns autoscroll off.
    pub autoscroll_edge: f32,
    /// Maximum scroll per frame inside the edge band.
    pub autoscroll_speed: f32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            swap_threshold: DEFAULT_SWAP_THRESHOLD,
            enabled: true,
            start_delay_ms: 0,
            hold_cancel_distance: DEFAULT_HOLD_CANCEL_DISTANCE,
            autoscroll_edge: DEFAULT_AUTOSCROLL_EDGE,
            autoscroll_speed: DEFAULT_AUTOSCROLL_SPEED,
        }
    }
}

impl ReorderConfig {
    /// Defaults for touch screens: a press has to be held briefly so that swiping over a handle
    /// still scrolls.
    pub fn touch() -> Self {
        Self::default().with_delay(TOUCH_START_DELAY_MS)
    }

    #[must_use]
    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    #[must_use]
    pub fn with_swap_threshold(mut self, swap_threshold: f32) -> Self {
        self.swap_threshold = swap_threshold;
        self
    }

    /// Create a config with a press-and-hold delay before a drag starts.
    #[must_use]
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.start_delay_ms = ms;
        self
    }

    /// Create a config with a custom movement threshold for pending presses.
    #[must_use]
    pub fn with_threshold(mut self, distance: f32) -> Self {
        self.hold_cancel_distance = distance;
        self
    }

    #[must_use]
    pub fn with_autoscroll(mut self, edge: f32, speed: f32) -> Self {
        self.autoscroll_edge = edge;
        self.autoscroll_speed = speed;
        self
    }

    /// Create a config where dragging never scrolls the surrounding `ScrollArea`.
    #[must_use]
    pub fn no_autoscroll(mut self) -> Self {
        self.autoscroll_edge = 0.0;
        self
    }

    /// Create a config where handles are inert and any running drag is cancelled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Picks the row height for a drag session: the measured `hint` if it is usable, then the
    /// configured height, then [`DEFAULT_ROW_HEIGHT`].
    pub fn effective_row_height(&self, hint: Option<f32>) -> f32 {
        hint.filter(|h| is_positive(*h))
            .or_else(|| Some(self.row_height).filter(|h| is_positive(*h)))
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Swap threshold clamped to `0.0..=1.0`.
    pub fn swap_threshold(&self) -> f32 {
        if self.swap_threshold.is_finite() {
            self.swap_threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_SWAP_THRESHOLD
        }
    }

    /// Start delay in seconds, the unit egui measures input time in.
    pub fn start_delay_secs(&self) -> f64 {
        self.start_delay_ms as f64 / 1000.0
    }

    /// Movement threshold for pending presses; negative or non-finite values use the default.
    pub fn hold_cancel_distance(&self) -> f32 {
        if self.hold_cancel_distance.is_finite() && self.hold_cancel_distance >= 0.0 {
            self.hold_cancel_distance
        } else {
            DEFAULT_HOLD_CANCEL_DISTANCE
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
