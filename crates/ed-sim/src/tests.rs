//! Integration tests for ed-sim.

use ed_core::{AdvancePolicy, Minute, Patient, PatientId, ResourceId, Severity, SimConfig, SimRng};
use ed_queue::PatientLedger;

use crate::{NoopObserver, Sim, SimBuilder, SimObserver, TickSnapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn seeded(seed: u64) -> SimConfig {
    SimConfig { seed: Some(seed), ..SimConfig::default() }
}

/// A small, lightly loaded department with a flat demand curve.
fn quiet_config(seed: u64, per_hour: f64, horizon: u64) -> SimConfig {
    SimConfig {
        horizon_minutes:        horizon,
        doctors:                1,
        beds:                   1,
        base_arrivals_per_hour: per_hour,
        hourly_multipliers:     [1.0; 24],
        seed:                   Some(seed),
        ..SimConfig::default()
    }
}

/// A sim with no random arrivals; `patients` are queued at minute 0.
fn scripted(doctors: u32, beds: u32, horizon: u64, patients: &[(u64, u8, u32)]) -> Sim {
    let config = SimConfig {
        horizon_minutes: horizon,
        doctors,
        beds,
        seed: Some(1),
        ..SimConfig::default()
    };
    let mut sim = SimBuilder::new(config).build().unwrap();
    sim.next_arrival = Minute::NEVER;
    for &(arrival, level, minutes) in patients {
        let p = Patient::new(
            sim.ledger.next_id(),
            Minute(arrival),
            Severity::new(level).unwrap(),
            minutes,
        );
        sim.queue.push(&p);
        sim.metrics.record_arrival(p.severity);
        sim.ledger.record(p);
    }
    sim
}

/// Observer that records everything it is shown.
#[derive(Default)]
struct Recorder {
    tick_minutes: Vec<Minute>,
    arrivals:     Vec<PatientId>,
    /// (patient, doctor, bed, start, end)
    assignments:  Vec<(PatientId, ResourceId, ResourceId, Minute, Minute)>,
    ends:         usize,
    final_ledger: usize,
}

impl SimObserver for Recorder {
    fn on_arrival(&mut self, patient: &Patient) {
        self.arrivals.push(patient.id);
    }

    fn on_assignment(&mut self, patient: &Patient, doctor: ResourceId, bed: ResourceId) {
        let start = patient.treatment_start.unwrap();
        self.assignments
            .push((patient.id, doctor, bed, start, patient.treatment_end().unwrap()));
    }

    fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
        self.tick_minutes.push(snapshot.minute);
    }

    fn on_sim_end(&mut self, _final_minute: Minute, ledger: &PatientLedger) {
        self.ends += 1;
        self.final_ledger = ledger.len();
    }
}

/// Intervals held by the same resource never overlap.
fn assert_exclusive(intervals: &mut [(ResourceId, Minute, Minute)]) {
    intervals.sort();
    for pair in intervals.windows(2) {
        let (a, _, a_end) = pair[0];
        let (b, b_start, _) = pair[1];
        if a == b {
            assert!(b_start >= a_end, "{a} double-booked: {pair:?}");
        }
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_reference_department() {
        let sim = SimBuilder::new(seeded(42)).build().unwrap();
        assert_eq!(sim.doctors.capacity(), 5);
        assert_eq!(sim.beds.capacity(), 10);
        assert_eq!(sim.clock.now, Minute::ZERO);
        assert_eq!(sim.rng.seed(), 42);
        assert!(sim.ledger.is_empty());
    }

    #[test]
    fn zero_rate_rejected_at_startup() {
        let config = SimConfig { base_arrivals_per_hour: 0.0, ..seeded(1) };
        assert!(SimBuilder::new(config).build().is_err());
    }

    #[test]
    fn zero_horizon_rejected() {
        let config = SimConfig { horizon_minutes: 0, ..seeded(1) };
        assert!(SimBuilder::new(config).build().is_err());
    }

    #[test]
    fn empty_pool_rejected_unless_allowed() {
        let config = SimConfig { doctors: 0, ..seeded(1) };
        assert!(SimBuilder::new(config.clone()).build().is_err());
        assert!(SimBuilder::new(config).allow_empty_pools(true).build().is_ok());
    }

    #[test]
    fn explicit_rng_overrides_config_seed() {
        let sim = SimBuilder::new(seeded(1))
            .rng(ed_core::SimRng::new(99))
            .build()
            .unwrap();
        assert_eq!(sim.rng.seed(), 99);
    }

    #[test]
    fn os_seed_when_unset() {
        let config = SimConfig { seed: None, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.seed, sim.rng.seed());
    }
}

// ── Run-level invariants ──────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn clock_never_decreases_and_run_ends() {
        let mut sim = SimBuilder::new(seeded(3)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert!(sim.is_finished());
        assert!(rec.tick_minutes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(rec.ends, 1);
        assert!(!sim.step(&mut rec).unwrap(), "finished sim must not step");
        assert_eq!(rec.ends, 1);
    }

    #[test]
    fn final_minute_is_horizon_or_last_start() {
        for seed in 0..10 {
            let mut sim = SimBuilder::new(seeded(seed)).build().unwrap();
            let summary = sim.run(&mut NoopObserver).unwrap();
            let last_start = sim
                .ledger
                .treated()
                .filter_map(|p| p.treatment_start)
                .max()
                .unwrap_or(Minute::ZERO);
            assert_eq!(summary.final_minute, sim.config.horizon_minutes.max(last_start.0));
        }
    }

    #[test]
    fn quiet_run_ends_within_horizon_plus_ceiling() {
        for seed in 0..20 {
            let mut sim = SimBuilder::new(quiet_config(seed, 1.0, 600)).build().unwrap();
            sim.run(&mut NoopObserver).unwrap();
            for p in sim.ledger.iter() {
                assert!(p.treatment_end().unwrap() <= Minute(600 + 120 * sim.ledger.len() as u64));
            }
        }
    }

    #[test]
    fn every_treated_patient_is_consistent() {
        let mut sim = SimBuilder::new(seeded(11)).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.queue.is_empty());
        for p in sim.ledger.iter() {
            let start = p.treatment_start.expect("all patients treated once queue drains");
            assert!(start >= p.arrival);
            assert_eq!(p.wait_minutes(), Some(start - p.arrival));
        }
    }

    #[test]
    fn conservation_of_patients() {
        let mut sim = SimBuilder::new(seeded(5)).build().unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();

        assert_eq!(summary.total_patients as usize, sim.ledger.len());
        assert_eq!(rec.arrivals.len(), sim.ledger.len());
        assert_eq!(rec.final_ledger, sim.ledger.len());
        assert!(summary.patients_treated <= summary.total_patients);
        assert_eq!(summary.patients_treated as usize, sim.ledger.treated().count());
        assert_eq!(rec.assignments.len() as u64, summary.patients_treated);

        let mut seen: Vec<PatientId> = rec.assignments.iter().map(|a| a.0).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), rec.assignments.len(), "a patient was assigned twice");
    }

    #[test]
    fn no_resource_is_double_booked() {
        let mut sim = SimBuilder::new(seeded(8)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let mut doctors: Vec<_> = rec.assignments.iter().map(|&(_, d, _, s, e)| (d, s, e)).collect();
        let mut beds: Vec<_> = rec.assignments.iter().map(|&(_, _, b, s, e)| (b, s, e)).collect();
        assert_exclusive(&mut doctors);
        assert_exclusive(&mut beds);
    }

    #[test]
    fn arrivals_stop_at_horizon() {
        let mut sim = SimBuilder::new(seeded(21)).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.ledger.iter().all(|p| p.arrival < sim.clock.horizon));
        assert!(sim.next_arrival() >= sim.clock.horizon);
    }

    #[test]
    fn utilization_within_unit_interval() {
        let configs = [
            seeded(1),
            SimConfig { doctors: 1, beds: 1, ..seeded(2) },
            SimConfig { doctors: 50, beds: 50, ..seeded(3) },
            quiet_config(4, 0.5, 240),
        ];
        for config in configs {
            let summary = SimBuilder::new(config).build().unwrap().run(&mut NoopObserver).unwrap();
            for u in [summary.doctor_utilization, summary.bed_utilization] {
                assert!((0.0..=1.0).contains(&u), "utilization {u}");
            }
        }
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let mut sim = SimBuilder::new(seeded(seed)).build().unwrap();
            let summary = sim.run(&mut NoopObserver).unwrap();
            (sim.ledger.as_slice().to_vec(), summary)
        };
        assert_eq!(run(77), run(77));
    }

    #[test]
    fn step_and_jump_agree() {
        for seed in [1, 2, 3] {
            let run = |advance| {
                let config = SimConfig { advance, doctors: 2, beds: 3, ..seeded(seed) };
                let mut sim = SimBuilder::new(config).build().unwrap();
                let summary = sim.run(&mut NoopObserver).unwrap();
                (sim.ledger.as_slice().to_vec(), summary)
            };
            assert_eq!(run(AdvancePolicy::Step), run(AdvancePolicy::Jump), "seed {seed}");
        }
    }

    #[test]
    fn jump_visits_fewer_minutes_than_step() {
        let ticks = |advance| {
            let config = SimConfig { advance, ..quiet_config(9, 1.0, 1_440) };
            let mut sim = SimBuilder::new(config).build().unwrap();
            let mut rec = Recorder::default();
            sim.run(&mut rec).unwrap();
            rec.tick_minutes.len()
        };
        assert!(ticks(AdvancePolicy::Jump) < ticks(AdvancePolicy::Step));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn low_rate_fixed_seed_replays_and_first_patient_waits_zero() {
        let mut runs_with_arrivals = 0;
        for seed in 0..20 {
            let record = || {
                let mut sim = SimBuilder::new(quiet_config(seed, 1.0, 120)).build().unwrap();
                sim.run(&mut NoopObserver).unwrap();
                sim.ledger
                    .iter()
                    .map(|p| (p.id, p.severity, p.arrival, p.treatment_start))
                    .collect::<Vec<_>>()
            };
            let first = record();
            assert_eq!(first, record(), "seed {seed} did not replay");

            if let Some(&(id, _, arrival, start)) = first.first() {
                runs_with_arrivals += 1;
                assert_eq!(id, PatientId(0));
                assert_eq!(start, Some(arrival), "resources start free");
            }
        }
        assert!(runs_with_arrivals > 0);
    }

    /// Recorded generated sequence for seed 7 at 6 patients/hour.
    ///
    /// Tied to rand 0.8 `SmallRng` (xoshiro256++) on 64-bit targets and to
    /// rand_distr 0.4's ziggurat `Exp`.  The draw order it pins is: first gap
    /// at build, then per admission severity, duration, next gap.
    #[test]
    fn seed_7_generates_recorded_sequence() {
        // (id, severity, arrival minute, treatment minutes)
        const RECORDED: [(u32, u8, u64, u32); 10] = [
            (0, 3, 5, 87),
            (1, 4, 13, 109),
            (2, 2, 25, 98),
            (3, 3, 30, 87),
            (4, 3, 38, 112),
            (5, 4, 38, 108),
            (6, 3, 42, 80),
            (7, 2, 51, 59),
            (8, 4, 96, 113),
            (9, 5, 107, 93),
        ];

        let mut sim = SimBuilder::new(quiet_config(7, 6.0, 120))
            .rng(SimRng::new(7))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let generated: Vec<(u32, u8, u64, u32)> = sim
            .ledger
            .iter()
            .map(|p| (p.id.0, p.severity.level(), p.arrival.0, p.treatment_minutes))
            .collect();
        assert_eq!(generated, RECORDED);

        let first = sim.ledger.get(PatientId(0)).unwrap();
        assert_eq!(first.treatment_start, Some(Minute(5)));
        assert_eq!(first.wait_minutes(), Some(0));
    }

    #[test]
    fn vanishing_off_peak_rate_stops_admissions() {
        // Busy first hour, then effectively closed doors.
        let mut hourly_multipliers = [1e-30; 24];
        hourly_multipliers[0] = 1.0;
        for advance in [AdvancePolicy::Step, AdvancePolicy::Jump] {
            let config = SimConfig {
                horizon_minutes: 240,
                base_arrivals_per_hour: 60.0,
                hourly_multipliers,
                advance,
                seed: Some(3),
                ..SimConfig::default()
            };
            let mut sim = SimBuilder::new(config).build().unwrap();
            let summary = sim.run(&mut NoopObserver).unwrap();

            let arrivals: Vec<Minute> = sim.ledger.iter().map(|p| p.arrival).collect();
            assert!(!arrivals.is_empty());
            assert!(arrivals.windows(2).all(|w| w[0] <= w[1]), "arrivals went backwards");
            // Only the patient admitted first in hour 1 draws at the tiny rate.
            assert_eq!(arrivals.iter().filter(|a| a.0 >= 60).count(), 1);
            assert!(arrivals.iter().all(|a| a.0 < 240));
            assert_eq!(sim.next_arrival(), Minute::NEVER);
            assert_eq!(summary.total_patients as usize, arrivals.len());
        }
    }

    #[test]
    fn more_urgent_patient_served_first() {
        // Same minute, severity 2 generated before severity 5; one doctor+bed.
        let mut sim = scripted(1, 1, 60, &[(0, 2, 50), (0, 5, 40)]);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.assignments[0].0, PatientId(1));
        let urgent = sim.ledger.get(PatientId(1)).unwrap();
        let routine = sim.ledger.get(PatientId(0)).unwrap();
        assert_eq!(urgent.treatment_start, Some(Minute(0)));
        assert_eq!(routine.treatment_start, Some(Minute(40)));
        assert_eq!(routine.wait_minutes(), Some(40));
    }

    #[test]
    fn head_waits_for_both_doctor_and_bed() {
        // Two doctors but one bed: the second patient waits for the bed.
        let mut sim = scripted(2, 1, 10, &[(0, 5, 30), (0, 4, 30)]);
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.ledger.get(PatientId(1)).unwrap().treatment_start, Some(Minute(30)));
        assert_eq!(sim.doctors.busy_count() + sim.beds.busy_count(), 2);
    }

    #[test]
    fn one_assignment_per_tick() {
        let mut sim = scripted(3, 3, 10, &[(0, 3, 20), (0, 3, 20), (0, 3, 20)]);
        sim.run(&mut NoopObserver).unwrap();
        let starts: Vec<_> = sim.ledger.iter().map(|p| p.treatment_start.unwrap().0).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn future_head_is_assigned_at_its_arrival() {
        let mut sim = scripted(1, 1, 5, &[(30, 5, 10)]);
        sim.run(&mut NoopObserver).unwrap();
        let p = sim.ledger.get(PatientId(0)).unwrap();
        assert_eq!(p.treatment_start, Some(Minute(30)));
        assert_eq!(p.wait_minutes(), Some(0));
    }

    #[test]
    fn no_doctors_treats_nobody_and_terminates() {
        let config = SimConfig { doctors: 0, ..seeded(4) };
        let mut sim = SimBuilder::new(config).allow_empty_pools(true).build().unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();

        assert!(summary.total_patients > 0);
        assert_eq!(summary.patients_treated, 0);
        assert_eq!(summary.average_wait_minutes, 0.0);
        assert_eq!(summary.doctor_utilization, 0.0);
        assert!(summary.stalled);
        assert_eq!(summary.final_minute, 1_440);
        assert!(sim.ledger.iter().all(|p| p.treatment_start.is_none()));
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn report_has_two_decimal_metrics() {
        let mut sim = scripted(1, 1, 60, &[(0, 2, 50), (0, 5, 40)]);
        let summary = sim.run(&mut NoopObserver).unwrap();
        let text = summary.to_string();
        assert!(text.contains("Total Patients Arrived: 2"), "{text}");
        assert!(text.contains("Patients Treated: 2"), "{text}");
        assert!(text.contains("Average Wait Time (minutes): 20.00"), "{text}");
        // 60-minute window, one doctor busy for all of it.
        assert!(text.contains("Doctor Utilization: 100.00%"), "{text}");
    }

    #[test]
    fn busy_minutes_clipped_to_horizon() {
        let mut sim = scripted(1, 2, 60, &[(0, 5, 100)]);
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.doctor_utilization, 1.0);
        assert_eq!(summary.bed_utilization, 0.5);
        assert_eq!(summary.treatment_minutes, 100);
    }

    #[test]
    fn metric_map_matches_fields() {
        let mut sim = SimBuilder::new(seeded(6)).build().unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        let map = summary.metrics();
        assert_eq!(map["total_patients"], summary.total_patients as f64);
        assert_eq!(map["patients_treated"], summary.patients_treated as f64);
        assert_eq!(map["average_wait_minutes"], summary.average_wait_minutes);
        assert_eq!(map["doctor_utilization"], summary.doctor_utilization);
        assert_eq!(map["bed_utilization"], summary.bed_utilization);
    }

    #[test]
    fn severity_breakdown_sums_to_totals() {
        let mut sim = SimBuilder::new(seeded(12)).build().unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.by_severity.len(), 5);
        let arrivals: u64 = summary.by_severity.iter().map(|s| s.arrivals).sum();
        let treated: u64 = summary.by_severity.iter().map(|s| s.treated).sum();
        assert_eq!(arrivals, summary.total_patients);
        assert_eq!(treated, summary.patients_treated);
    }
}
