use crate::player::Player;

/// The slice of the host a tick callback may observe.
///
/// The host owns the world; listeners receive a `&dyn Session` for the
/// duration of one tick and must not retain it. The clock is monotonic
/// world time in seconds, the same unit space as the expiry timestamps
/// stored in player attributes.
pub trait Session {
    /// Whether the world is loaded and running. Ticks delivered while this
    /// is false are transition noise and should be ignored.
    fn is_live(&self) -> bool;

    /// Seconds of world time elapsed since the session epoch.
    fn now_seconds(&self) -> f64;

    /// Snapshot of currently online players. May legitimately be empty
    /// during login/logout transitions.
    fn online_players(&self) -> Vec<&Player>;
}
