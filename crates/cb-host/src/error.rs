use crate::scheduler::ListenerId;

/// Convenience alias for results carrying a [`HostError`].
pub type HostResult<T> = Result<T, HostError>;

/// Errors surfaced by the host collaboration layer.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A tick registration token did not match any live listener.
    #[error("no tick listener registered under {0}")]
    UnknownListener(ListenerId),
}
