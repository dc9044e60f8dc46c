//! Fluent builder for constructing a [`Sim`].

use ed_core::{Minute, SimClock, SimConfig, SimRng};
use ed_queue::{PatientLedger, WaitingQueue};
use ed_resources::{ResourceKind, ResourcePool};
use ed_stochastic::Generators;

use crate::{Metrics, Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                  |
/// |----------------------------|------------------------------------------|
/// | `.rng(r)`                  | `SimRng` from `config.seed`, else the OS |
/// | `.generators(g)`           | `Generators::from_config(&config)`       |
/// | `.allow_empty_pools(true)` | `false`: zero doctors or beds rejected  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:            SimConfig,
    rng:               Option<SimRng>,
    generators:        Option<Generators>,
    allow_empty_pools: bool,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            rng:               None,
            generators:        None,
            allow_empty_pools: false,
        }
    }

    /// Supply the run's RNG directly (overrides `config.seed`).
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Supply custom generators instead of building them from the config.
    pub fn generators(mut self, generators: Generators) -> Self {
        self.generators = Some(generators);
        self
    }

    /// Accept a doctor or bed pool of size zero, e.g. to model a department
    /// with nobody on shift.  Such a run admits patients but treats none and
    /// ends at the horizon.
    pub fn allow_empty_pools(mut self, allow: bool) -> Self {
        self.allow_empty_pools = allow;
        self
    }

    /// Validate the configuration, seed the RNG, draw the first arrival, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;

        // ── Validate before touching the RNG ──────────────────────────────
        if self.allow_empty_pools {
            config.validate_demand()?;
        } else {
            config.validate()?;
        }

        let generators = match self.generators {
            Some(g) => g,
            None => Generators::from_config(&config)?,
        };
        let mut rng = self
            .rng
            .unwrap_or_else(|| SimRng::from_seed_or_os(config.seed));

        let next_arrival = generators.first_arrival(&mut rng)?;
        let horizon = Minute(config.horizon_minutes);

        Ok(Sim {
            clock:        SimClock::new(horizon),
            doctors:      ResourcePool::new(ResourceKind::Doctor, config.doctors),
            beds:         ResourcePool::new(ResourceKind::Bed, config.beds),
            queue:        WaitingQueue::new(),
            ledger:       PatientLedger::new(),
            metrics:      Metrics::new(horizon),
            config,
            rng,
            generators,
            next_arrival,
            finished:     false,
            stalled:      false,
        })
    }
}
