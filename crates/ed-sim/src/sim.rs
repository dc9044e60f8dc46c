//! The `Sim` struct and its event loop.

use tracing::{debug, info, warn};

use ed_core::{AdvancePolicy, Minute, SimClock, SimConfig, SimRng};
use ed_queue::{PatientLedger, WaitingQueue};
use ed_resources::ResourcePool;
use ed_stochastic::Generators;

use crate::{assign_head, Metrics, SimObserver, SimResult, SimSummary, TickSnapshot};

/// The main simulation runner.
///
/// `Sim` owns every piece of mutable state in a run: the clock, the single
/// RNG, both resource pools, the waiting queue, and the patient ledger.
/// Nothing is shared, so each tick's reclaim → admit → assign sequence is
/// never interleaved with another tick's.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated configuration.
    pub config: SimConfig,

    pub clock: SimClock,

    /// The run's only random generator.
    pub rng: SimRng,

    pub generators: Generators,

    pub doctors: ResourcePool,
    pub beds:    ResourcePool,

    /// Arrived, unassigned patients (handles into `ledger`).
    pub queue: WaitingQueue,

    /// Every patient generated so far.
    pub ledger: PatientLedger,

    pub metrics: Metrics,

    /// Arrival minute of the next patient not yet admitted.
    pub(crate) next_arrival: Minute,

    pub(crate) finished: bool,

    /// Set when the run ended with patients that could never be served.
    pub(crate) stalled: bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the horizon has passed and the waiting room is empty.
    ///
    /// Calls observer hooks throughout.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimSummary> {
        info!(
            seed     = self.rng.seed(),
            horizon  = self.clock.horizon.0,
            doctors  = self.doctors.capacity(),
            beds     = self.beds.capacity(),
            "starting emergency department run"
        );
        while self.step(observer)? {}

        let summary = self.summary();
        info!(
            clock        = %self.clock,
            final_minute = summary.final_minute,
            arrivals     = summary.total_patients,
            treated      = summary.patients_treated,
            avg_wait     = summary.average_wait_minutes,
            "run complete"
        );
        Ok(summary)
    }

    /// Process the tick at the current clock minute, then advance the clock.
    ///
    /// Returns `false` once the run has ended; further calls are no-ops.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        if self.finished {
            return Ok(false);
        }
        let now = self.clock.now;

        // ── ① Reclaim ─────────────────────────────────────────────────────
        for pool in [&mut self.doctors, &mut self.beds] {
            let freed = pool.reclaim_expired(now);
            if freed > 0 {
                debug!(kind = %pool.kind(), freed, minute = now.0, "resources released");
            }
        }

        // ── ② Admit ───────────────────────────────────────────────────────
        let admitted = self.admit_arrivals(now, observer)?;

        // ── ③ Assign ──────────────────────────────────────────────────────
        let assignment = assign_head(
            now,
            &mut self.queue,
            &mut self.ledger,
            &mut self.doctors,
            &mut self.beds,
            &mut self.metrics,
        );
        if let Some(a) = assignment {
            debug!(patient = a.patient.0, at = a.at.0, wait = a.wait, "treatment started");
            if let Some(patient) = self.ledger.get(a.patient) {
                observer.on_assignment(patient, a.doctor, a.bed);
            }
        }

        self.metrics.observe_queue_len(self.queue.len());
        observer.on_tick_end(&TickSnapshot {
            minute:       now,
            admitted,
            assigned:     assignment.map(|a| a.patient),
            queue_len:    self.queue.len(),
            doctors_busy: self.doctors.busy_count(),
            beds_busy:    self.beds.busy_count(),
        });

        // ── ④ Stop ────────────────────────────────────────────────────────
        if self.clock.past_horizon() && self.queue.is_empty() {
            self.finish(observer);
            return Ok(false);
        }

        // ── ⑤ Advance ─────────────────────────────────────────────────────
        match self.next_event_after(now, assignment.is_some()) {
            Some(next) => match self.config.advance {
                AdvancePolicy::Step => self.clock.step(),
                AdvancePolicy::Jump => self.clock.advance_to(next),
            },
            None => {
                // Past the horizon with patients waiting and nothing busy:
                // only an empty pool gets here, and no later tick can differ.
                warn!(
                    clock   = %self.clock,
                    waiting = self.queue.len(),
                    "no resource can ever free up; ending run with patients untreated"
                );
                self.stalled = true;
                self.finish(observer);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `true` once [`step`][Self::step] has returned `false`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// `true` if the run ended with patients no resource could ever serve.
    pub fn stalled(&self) -> bool {
        self.stalled
    }

    /// Arrival minute of the next patient not yet admitted.
    pub fn next_arrival(&self) -> Minute {
        self.next_arrival
    }

    /// Final report built from the current metrics.
    pub fn summary(&self) -> SimSummary {
        SimSummary::new(
            &self.metrics,
            self.rng.seed(),
            self.clock.now,
            self.doctors.capacity(),
            self.beds.capacity(),
            self.stalled,
        )
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn admit_arrivals<O: SimObserver>(&mut self, now: Minute, observer: &mut O) -> SimResult<usize> {
        let horizon = self.clock.horizon;
        let mut admitted = 0;

        while self.next_arrival <= now && self.next_arrival < horizon {
            let id = self.ledger.next_id();
            let patient = self.generators.draw_patient(id, self.next_arrival, &mut self.rng);
            debug!(
                patient  = id.0,
                arrival  = patient.arrival.0,
                severity = patient.severity.level(),
                minutes  = patient.treatment_minutes,
                "patient arrived"
            );

            self.queue.push(&patient);
            self.metrics.record_arrival(patient.severity);
            observer.on_arrival(&patient);
            self.ledger.record(patient);

            self.next_arrival = self.generators.next_arrival(self.next_arrival, now, &mut self.rng)?;
            admitted += 1;
        }
        Ok(admitted)
    }

    /// Earliest minute strictly after `now` at which the state can change.
    ///
    /// Candidates: the horizon (until reached), the next arrival (if before
    /// the horizon), the head's arrival, every busy resource's release, and
    /// `now + 1` right after an assignment while patients still wait (one
    /// assignment per tick).  `None` means nothing can ever change again.
    fn next_event_after(&self, now: Minute, just_assigned: bool) -> Option<Minute> {
        let horizon = self.clock.horizon;
        let arrival = (self.next_arrival < horizon).then_some(self.next_arrival);
        let retry = (just_assigned && !self.queue.is_empty()).then(|| now + 1);

        [
            Some(horizon),
            arrival,
            self.queue.head_arrival(),
            self.doctors.next_release_after(now),
            self.beds.next_release_after(now),
            retry,
        ]
        .into_iter()
        .flatten()
        .filter(|&t| t > now)
        .min()
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        self.finished = true;
        observer.on_sim_end(self.clock.now, &self.ledger);
    }
}
