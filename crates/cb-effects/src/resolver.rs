use std::fmt;

use cb_host::{RestoreForm, SatiationCapability, ThermalCapability};

/// Constructor for a thermal adapter. Returns `None` when the candidate
/// subsystem is absent from the current host build.
pub type ThermalProvider = Box<dyn FnOnce() -> Option<Box<dyn ThermalCapability>>>;

/// Constructor for a satiation adapter.
pub type SatiationProvider = Box<dyn FnOnce() -> Option<Box<dyn SatiationCapability>>>;

/// One step of the resolution trail.
///
/// Resolution failures are structural (this host build lacks the subsystem)
/// and never abort startup; the trail records what bound and what was
/// silently disabled, in the spirit of an event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionEvent {
    /// The host lacks the generic fetch-behavior accessor; both effect
    /// classes are disabled and no provider was consulted.
    BehaviorAccessUnavailable,
    /// A thermal candidate bound.
    ThermalBound {
        /// The deployment name that resolved.
        candidate: String,
    },
    /// A thermal candidate was absent; the next one was tried.
    ThermalCandidateAbsent {
        /// The deployment name that failed to resolve.
        candidate: String,
    },
    /// No thermal candidate bound; the warmth effect is disabled.
    ThermalUnavailable,
    /// A satiation candidate bound.
    SatiationBound {
        /// The deployment name that resolved.
        candidate: String,
        /// The restore call shape the binding exposes.
        form: RestoreForm,
    },
    /// A satiation candidate was absent; the next one was tried.
    SatiationCandidateAbsent {
        /// The deployment name that failed to resolve.
        candidate: String,
    },
    /// No satiation candidate bound; the hunger effect is disabled.
    SatiationUnavailable,
}

/// A resolved satiation handle together with its call shape.
///
/// The shape is queried exactly once at bind time; the tick loop dispatches
/// on the stored form and never re-asks the adapter.
#[derive(Debug)]
pub struct SatiationBinding {
    /// The resolved adapter.
    pub handle: Box<dyn SatiationCapability>,
    /// Which restore method to invoke on it.
    pub form: RestoreForm,
}

impl SatiationBinding {
    fn new(handle: Box<dyn SatiationCapability>) -> Self {
        let form = handle.form();
        Self { handle, form }
    }
}

/// Process-wide capability bindings, immutable after resolution.
///
/// A `None` field means the corresponding effect class is disabled for the
/// process lifetime; the tick loop checks the field before every use and
/// otherwise proceeds as if the effect did not exist.
#[derive(Debug)]
pub struct Capabilities {
    /// Thermal read/write surface, if the host build exposes one.
    pub thermal: Option<Box<dyn ThermalCapability>>,
    /// Satiation restore surface, if the host build exposes one.
    pub satiation: Option<SatiationBinding>,
    log: Vec<ResolutionEvent>,
}

impl Capabilities {
    /// Bindings with both effect classes disabled.
    pub fn disabled() -> Self {
        Self {
            thermal: None,
            satiation: None,
            log: Vec::new(),
        }
    }

    /// The trail recorded while resolving these bindings.
    pub fn resolution_log(&self) -> &[ResolutionEvent] {
        &self.log
    }
}

/// One-time binder of the effect core to the current host build.
///
/// Providers are named after the deployment identity they probe and are
/// tried in registration order; the first that constructs an adapter wins
/// and later candidates are never consulted. A provider returning `None` is
/// treated as permanently absent — there are no retries, because absence is
/// a property of the host build, not a transient fault.
pub struct CapabilityResolver {
    behavior_access: bool,
    thermal: Vec<(String, ThermalProvider)>,
    satiation: Vec<(String, SatiationProvider)>,
}

impl fmt::Debug for CapabilityResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityResolver")
            .field("behavior_access", &self.behavior_access)
            .field("thermal_candidates", &self.thermal.len())
            .field("satiation_candidates", &self.satiation.len())
            .finish()
    }
}

impl Default for CapabilityResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityResolver {
    /// Create a resolver with no candidates registered.
    pub fn new() -> Self {
        Self {
            behavior_access: true,
            thermal: Vec::new(),
            satiation: Vec::new(),
        }
    }

    /// Mark the host as lacking the generic fetch-behavior accessor.
    ///
    /// Resolution then disables both effect classes without consulting any
    /// provider.
    pub fn without_behavior_access(mut self) -> Self {
        self.behavior_access = false;
        self
    }

    /// Append a thermal candidate under its deployment name.
    pub fn thermal_provider(
        mut self,
        candidate: impl Into<String>,
        provider: impl FnOnce() -> Option<Box<dyn ThermalCapability>> + 'static,
    ) -> Self {
        self.thermal.push((candidate.into(), Box::new(provider)));
        self
    }

    /// Append a satiation candidate under its deployment name.
    pub fn satiation_provider(
        mut self,
        candidate: impl Into<String>,
        provider: impl FnOnce() -> Option<Box<dyn SatiationCapability>> + 'static,
    ) -> Self {
        self.satiation.push((candidate.into(), Box::new(provider)));
        self
    }

    /// Run the candidate search and produce the process-wide bindings.
    ///
    /// Intended to run once, from the host's world-data-loaded signal.
    /// Building a fresh resolver and resolving again is safe (it yields
    /// equivalent bindings) but never required.
    pub fn resolve(self) -> Capabilities {
        let mut log = Vec::new();

        if !self.behavior_access {
            log.push(ResolutionEvent::BehaviorAccessUnavailable);
            return Capabilities {
                thermal: None,
                satiation: None,
                log,
            };
        }

        let mut thermal = None;
        for (candidate, provider) in self.thermal {
            match provider() {
                Some(handle) => {
                    log.push(ResolutionEvent::ThermalBound { candidate });
                    thermal = Some(handle);
                    break;
                }
                None => log.push(ResolutionEvent::ThermalCandidateAbsent { candidate }),
            }
        }
        if thermal.is_none() {
            log.push(ResolutionEvent::ThermalUnavailable);
        }

        let mut satiation = None;
        for (candidate, provider) in self.satiation {
            match provider() {
                Some(handle) => {
                    let binding = SatiationBinding::new(handle);
                    log.push(ResolutionEvent::SatiationBound {
                        candidate,
                        form: binding.form,
                    });
                    satiation = Some(binding);
                    break;
                }
                None => log.push(ResolutionEvent::SatiationCandidateAbsent { candidate }),
            }
        }
        if satiation.is_none() {
            log.push(ResolutionEvent::SatiationUnavailable);
        }

        Capabilities {
            thermal,
            satiation,
            log,
        }
    }
}
