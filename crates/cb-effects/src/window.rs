use cb_host::{AttributeMap, Player};

/// Attribute key holding the warmth window expiry (world seconds).
pub const WARMTH_UNTIL: &str = "coffeeWarmthUntil";
/// Attribute key holding the warmth boost rate (degrees per second).
pub const WARMTH_BOOST_PER_SEC: &str = "coffeeBoostPerSec";
/// Attribute key holding the hunger window expiry (world seconds).
pub const HUNGER_UNTIL: &str = "coffeeHungerUntil";
/// Attribute key holding the hunger-drain multiplier.
pub const HUNGER_DRAIN_MUL: &str = "coffeeHungerMul";
/// Attribute key holding the baseline satiation loss per hour.
pub const HUNGER_BASE_SAT_PER_HR: &str = "coffeeHungerBaseSatPerHr";

/// Lower bound of plausible body temperature in the host's world model.
pub const BODY_TEMP_MIN: f32 = -20.0;
/// Upper bound of plausible body temperature in the host's world model.
pub const BODY_TEMP_MAX: f32 = 40.0;

/// Lowest accepted hunger-drain multiplier.
pub const DRAIN_MUL_MIN: f32 = 0.1;
/// Highest accepted hunger-drain multiplier.
pub const DRAIN_MUL_MAX: f32 = 2.0;
/// Multiplier assumed when the granting logic stored none.
pub const DEFAULT_DRAIN_MUL: f32 = 0.9;
/// Baseline satiation loss per hour assumed when none is stored.
pub const DEFAULT_BASE_SAT_PER_HR: f32 = 60.0;

const SECONDS_PER_HOUR: f32 = 3600.0;

/// Warmth window parameters read from a player's attributes.
///
/// No start time is stored; the window is open iff the expiry lies in the
/// future, and the boost is a flat per-second rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarmthWindow {
    /// World-seconds timestamp at which the window closes.
    pub until: f64,
    /// Degrees of body temperature added per second. Non-positive rates
    /// leave the window inert even before expiry.
    pub boost_per_sec: f32,
}

impl WarmthWindow {
    /// Read the window parameters from `attrs`, absent values defaulting to
    /// an inert window.
    pub fn from_attributes(attrs: &AttributeMap) -> Self {
        Self {
            until: attrs.get_double(WARMTH_UNTIL, 0.0),
            boost_per_sec: attrs.get_float(WARMTH_BOOST_PER_SEC, 0.0),
        }
    }

    /// Whether the window is open at world time `now`.
    pub fn is_active(&self, now: f64) -> bool {
        self.until > now
    }

    /// Temperature after one tick of `dt` seconds on top of `current`,
    /// confined to the plausible body-temperature range.
    pub fn boosted(&self, current: f32, dt: f32) -> f32 {
        (current + self.boost_per_sec * dt).clamp(BODY_TEMP_MIN, BODY_TEMP_MAX)
    }
}

/// Hunger window parameters read from a player's attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HungerWindow {
    /// World-seconds timestamp at which the window closes.
    pub until: f64,
    /// Multiplier on the normal hunger-drain rate, clamped to
    /// [`DRAIN_MUL_MIN`]..=[`DRAIN_MUL_MAX`] on read.
    pub drain_multiplier: f32,
    /// Baseline satiation points lost per hour absent this effect.
    pub base_sat_per_hour: f32,
}

impl HungerWindow {
    /// Read the window parameters from `attrs`. A stored multiplier outside
    /// the accepted range is corrected by clamping, never rejected.
    pub fn from_attributes(attrs: &AttributeMap) -> Self {
        Self {
            until: attrs.get_double(HUNGER_UNTIL, 0.0),
            drain_multiplier: attrs
                .get_float(HUNGER_DRAIN_MUL, DEFAULT_DRAIN_MUL)
                .clamp(DRAIN_MUL_MIN, DRAIN_MUL_MAX),
            base_sat_per_hour: attrs.get_float(HUNGER_BASE_SAT_PER_HR, DEFAULT_BASE_SAT_PER_HR),
        }
    }

    /// Whether the window is open at world time `now`.
    pub fn is_active(&self, now: f64) -> bool {
        self.until > now
    }

    /// Satiation points restored per second by the reduced drain.
    ///
    /// A multiplier of 1.0 or above yields a non-positive rate: the effect
    /// is a deliberate no-op then, not an error.
    pub fn restore_per_second(&self) -> f32 {
        (1.0 - self.drain_multiplier) * self.base_sat_per_hour / SECONDS_PER_HOUR
    }
}

/// Whether any of `players` has either window open at world time `now`.
///
/// The idle fast path: touches only the two expiry attributes, never a
/// capability handle.
pub fn any_window_active<'a>(players: impl IntoIterator<Item = &'a Player>, now: f64) -> bool {
    players.into_iter().any(|p| {
        p.attributes.get_double(WARMTH_UNTIL, 0.0) > now
            || p.attributes.get_double(HUNGER_UNTIL, 0.0) > now
    })
}
