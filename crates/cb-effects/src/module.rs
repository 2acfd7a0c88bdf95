use std::rc::Rc;
use std::time::Duration;

use cb_host::{ListenerId, TickScheduler};

use crate::error::EffectResult;
use crate::resolver::{CapabilityResolver, ResolutionEvent};
use crate::system::CoffeeBuffSystem;

/// Nominal interval between effect ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Lifecycle glue between the effect core and the host.
///
/// The host fires its world-data-loaded signal into [`on_world_loaded`],
/// which resolves capabilities (the registry and session are fully
/// initialized by then) and registers the tick listener. [`dispose`] tears
/// the registration down at module shutdown; disposal without a prior
/// registration is a no-op.
///
/// [`on_world_loaded`]: CoffeeBuffModule::on_world_loaded
/// [`dispose`]: CoffeeBuffModule::dispose
#[derive(Debug)]
pub struct CoffeeBuffModule {
    interval: Duration,
    registration: Option<ListenerId>,
    system: Option<Rc<CoffeeBuffSystem>>,
}

impl Default for CoffeeBuffModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CoffeeBuffModule {
    /// Create a module ticking at the nominal one-second interval.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL)
    }

    /// Create a module with a custom tick interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            registration: None,
            system: None,
        }
    }

    /// Whether a tick listener is currently registered.
    pub fn is_registered(&self) -> bool {
        self.registration.is_some()
    }

    /// The resolution trail of the currently registered system, empty while
    /// unregistered.
    pub fn resolution_log(&self) -> &[ResolutionEvent] {
        self.system
            .as_ref()
            .map(|s| s.capabilities().resolution_log())
            .unwrap_or_default()
    }

    /// Handle the host's world-data-loaded signal: resolve capabilities and
    /// register the tick listener.
    ///
    /// A re-fired signal replaces the previous registration with equivalent
    /// bindings, so repeated delivery is safe.
    pub fn on_world_loaded(
        &mut self,
        scheduler: &mut TickScheduler,
        resolver: CapabilityResolver,
    ) -> EffectResult<()> {
        if let Some(id) = self.registration.take() {
            scheduler.unregister(id)?;
        }

        let system = Rc::new(CoffeeBuffSystem::new(resolver.resolve()));
        let ticker = Rc::clone(&system);
        self.registration = Some(scheduler.register(
            self.interval,
            Box::new(move |session, dt| ticker.on_tick(session, dt)),
        ));
        self.system = Some(system);
        Ok(())
    }

    /// Tear down the tick registration. No further ticks occur after this
    /// returns; calling it again (or without a registration) is a no-op.
    pub fn dispose(&mut self, scheduler: &mut TickScheduler) -> EffectResult<()> {
        self.system = None;
        if let Some(id) = self.registration.take() {
            scheduler.unregister(id)?;
        }
        Ok(())
    }
}
