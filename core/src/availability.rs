//! Worker pool simulation: randomized per-date availability for a fixed
//! number of candidate workers.

use crate::{
    clock::{ReferenceClock, Timestamp},
    config::GeneratorConfig,
    error::GenResult,
    identity::{IdentityRegistry, WorkerNameGenerator},
    rng::RandomSource,
    types::WorkerId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One contiguous availability window. `start <= end`, same calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    pub start: Timestamp,
    pub end: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: WorkerId,
    /// Never empty. Ordered by date as processed.
    pub availability: Vec<Shift>,
}

/// Draws the shifts of a single candidate. Each date is an independent
/// Bernoulli trial; included dates get two hour draws, swapped into order.
pub fn draw_shifts(
    dates: &[NaiveDate],
    config: &GeneratorConfig,
    clock: &ReferenceClock,
    rng: &mut dyn RandomSource,
) -> GenResult<Vec<Shift>> {
    let mut shifts = Vec::new();
    for &date in dates {
        if rng.chance(config.skip_probability) {
            continue;
        }
        let mut start_hour = rng.range_inclusive(config.earliest_hour, config.latest_hour);
        let mut end_hour = rng.range_inclusive(config.earliest_hour, config.latest_hour);
        if start_hour > end_hour {
            std::mem::swap(&mut start_hour, &mut end_hour);
        }
        shifts.push(Shift {
            start: clock.at_hm(date, start_hour, 0)?,
            end: clock.at_hm(date, end_hour, 59)?,
        });
    }
    Ok(shifts)
}

/// The simulated candidate pool over `dates`.
///
/// Runs `config.trial_count` trials. Candidates left without any shift are
/// dropped before an id is drawn, so ids are only spent on emitted workers.
pub struct WorkerPool<'a> {
    pub config: &'a GeneratorConfig,
    pub clock: &'a ReferenceClock,
    pub names: &'a WorkerNameGenerator,
}

impl WorkerPool<'_> {
    pub fn simulate(
        &self,
        dates: &[NaiveDate],
        availability_rng: &mut dyn RandomSource,
        identity_rng: &mut dyn RandomSource,
        registry: &mut IdentityRegistry,
    ) -> GenResult<Vec<Worker>> {
        let mut workers = Vec::new();
        let mut discarded = 0usize;

        for _ in 0..self.config.trial_count {
            let availability = draw_shifts(dates, self.config, self.clock, availability_rng)?;
            if availability.is_empty() {
                discarded += 1;
                continue;
            }
            let id = self.names.allocate(identity_rng, registry)?;
            log::debug!("worker {id}: {} shifts", availability.len());
            workers.push(Worker { id, availability });
        }

        log::info!(
            "worker pool: {} emitted, {discarded} without availability over {} dates",
            workers.len(),
            dates.len()
        );
        Ok(workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;
    use chrono::Timelike;
    use chrono_tz::America::New_York;

    /// Replays a fixed list of raw draws, cycling when exhausted.
    struct Scripted(Vec<u64>, usize);

    impl RandomSource for Scripted {
        fn next_u64(&mut self) -> u64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    /// Raw draw for which `next_f64` lands near `x`.
    fn f64_draw(x: f64) -> u64 {
        ((x * (1u64 << 53) as f64) as u64) << 11
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, d).unwrap()
    }

    #[test]
    fn swaps_hours_into_order() {
        let config = GeneratorConfig::default();
        let clock = ReferenceClock::new(New_York);
        // include (0.9 >= 0.25), start draw 16 -> 23h, end draw 2 -> 9h
        let mut rng = Scripted(vec![f64_draw(0.9), 16, 2], 0);

        let shifts = draw_shifts(&[day(15)], &config, &clock, &mut rng).unwrap();
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].start.to_rfc3339(), "2023-11-15T09:00:00-05:00");
        assert_eq!(shifts[0].end.to_rfc3339(), "2023-11-15T23:59:00-05:00");
    }

    #[test]
    fn skip_draw_consumes_no_hours() {
        let config = GeneratorConfig::default();
        let clock = ReferenceClock::new(New_York);
        // date 1 skipped (0.1 < 0.25), date 2 included with 10h..12h
        let mut rng = Scripted(vec![f64_draw(0.1), f64_draw(0.5), 3, 5], 0);

        let shifts = draw_shifts(&[day(15), day(16)], &config, &clock, &mut rng).unwrap();
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].start.to_rfc3339(), "2023-11-16T10:00:00-05:00");
        assert_eq!(shifts[0].end.to_rfc3339(), "2023-11-16T12:59:00-05:00");
        assert_eq!(rng.1, 4);
    }

    #[test]
    fn equal_hours_give_one_hour_shift() {
        let config = GeneratorConfig::default();
        let clock = ReferenceClock::new(New_York);
        let mut rng = Scripted(vec![f64_draw(0.8), 0, 0], 0);

        let shifts = draw_shifts(&[day(15)], &config, &clock, &mut rng).unwrap();
        assert_eq!(shifts[0].start.hour(), 7);
        assert_eq!(shifts[0].end.hour(), 7);
        assert_eq!(shifts[0].end.minute(), 59);
    }

    #[test]
    fn always_skipping_emits_nobody() {
        let config = GeneratorConfig {
            skip_probability: 1.0,
            ..GeneratorConfig::default()
        };
        let clock = ReferenceClock::new(New_York);
        let names = WorkerNameGenerator::new().unwrap();
        let pool = WorkerPool {
            config: &config,
            clock: &clock,
            names: &names,
        };
        let mut registry = IdentityRegistry::new();

        let workers = pool
            .simulate(&[day(15)], &mut SeededRng::new(1), &mut SeededRng::new(2), &mut registry)
            .unwrap();
        assert!(workers.is_empty());
        assert!(registry.is_empty(), "no ids are spent on discarded candidates");
    }

    #[test]
    fn never_skipping_emits_every_trial() {
        let config = GeneratorConfig {
            skip_probability: 0.0,
            ..GeneratorConfig::default()
        };
        let clock = ReferenceClock::new(New_York);
        let names = WorkerNameGenerator::new().unwrap();
        let pool = WorkerPool {
            config: &config,
            clock: &clock,
            names: &names,
        };
        let mut registry = IdentityRegistry::new();

        let mut availability_rng = SeededRng::new(1);
        let mut identity_rng = SeededRng::new(2);
        let workers = pool
            .simulate(&[day(15), day(16)], &mut availability_rng, &mut identity_rng, &mut registry)
            .unwrap();
        assert_eq!(workers.len(), 100);
        assert!(workers.iter().all(|w| w.availability.len() == 2));
        assert_eq!(workers[0].availability[0].start.date_naive(), day(15));
        assert_eq!(workers[0].availability[1].start.date_naive(), day(16));
    }

    #[test]
    fn empty_date_domain_emits_nobody() {
        let config = GeneratorConfig::default();
        let clock = ReferenceClock::new(New_York);
        let names = WorkerNameGenerator::new().unwrap();
        let pool = WorkerPool {
            config: &config,
            clock: &clock,
            names: &names,
        };

        let mut registry = IdentityRegistry::new();
        let workers = pool
            .simulate(&[], &mut SeededRng::new(1), &mut SeededRng::new(2), &mut registry)
            .unwrap();
        assert!(workers.is_empty());
    }
}
