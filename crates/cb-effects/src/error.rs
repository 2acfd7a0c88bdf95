use cb_host::HostError;

/// Convenience alias for results carrying an [`EffectError`].
pub type EffectResult<T> = Result<T, EffectError>;

/// Errors surfaced by the effect core's lifecycle glue.
///
/// Nothing in the tick path ever returns one of these: per-tick failure
/// handling is purely local (skip the player, clamp the value, return
/// early). Errors only arise from the registration handshake with the host
/// scheduler.
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    /// The host scheduler rejected a registration operation.
    #[error(transparent)]
    Host(#[from] HostError),
}
