use std::fmt;
use std::time::Duration;

use crate::error::{HostError, HostResult};
use crate::session::Session;

/// Opaque token identifying one tick registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// A tick callback: receives the session view and the elapsed seconds since
/// its previous invocation.
pub type TickFn = Box<dyn FnMut(&dyn Session, f32)>;

struct Listener {
    id: ListenerId,
    interval: Duration,
    accumulated: f32,
    callback: TickFn,
}

/// Dispatches registered tick callbacks on the host's simulation thread.
///
/// Listeners fire in registration order, each at most once per [`drive`]
/// call, once their requested interval has elapsed. The callback receives
/// the real elapsed time since its previous firing, which is not guaranteed
/// to equal the nominal interval. Delivery is serialized: a callback is
/// never invoked concurrently with another or with itself.
///
/// [`drive`]: TickScheduler::drive
#[derive(Default)]
pub struct TickScheduler {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl fmt::Debug for TickScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickScheduler")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TickScheduler {
    /// Create a scheduler with no registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to fire every `interval`. Returns the token used
    /// to tear the registration down.
    pub fn register(&mut self, interval: Duration, callback: TickFn) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(Listener {
            id,
            interval,
            accumulated: 0.0,
            callback,
        });
        id
    }

    /// Remove the registration behind `id`. No further invocations occur
    /// after this returns.
    pub fn unregister(&mut self, id: ListenerId) -> HostResult<()> {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        if self.listeners.len() == before {
            return Err(HostError::UnknownListener(id));
        }
        Ok(())
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Advance all listeners by `dt` seconds, invoking those whose interval
    /// has elapsed with the time accumulated since their previous firing.
    ///
    /// The threshold is exact: a listener fires on the `drive` call in which
    /// its accumulated time reaches or exceeds its interval, with no
    /// tolerance applied. A delta that falls short by any amount waits for
    /// the next call.
    pub fn drive(&mut self, session: &dyn Session, dt: f32) {
        for listener in &mut self.listeners {
            listener.accumulated += dt;
            if listener.accumulated >= listener.interval.as_secs_f32() {
                let elapsed = listener.accumulated;
                listener.accumulated = 0.0;
                (listener.callback)(session, elapsed);
            }
        }
    }
}
