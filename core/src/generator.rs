//! The generator run: loads the forecast, builds staffing windows, simulates
//! the worker pool and assembles the output document.
//!
//! PIPELINE (fixed order):
//!   1. Input loader        forecast document -> blocks of the target date
//!   2. Window builder      blocks -> required worker windows + date domain
//!   3. Pool simulator      date domain -> candidate workers
//!   4. Id allocator        one unique id per emitted worker
//!   5. Output assembly     windows + workers, no cross-validation
//!
//! RULES:
//!   - A context is one run. Its registry and random streams are never shared.
//!   - Ids stay unique across repeated `generate` calls on one context; once
//!     every id is taken, further calls fail with `IdSpaceExhausted`.
//!   - Any error aborts the run; nothing partial is returned.

use crate::{
    availability::{Worker, WorkerPool},
    clock::ReferenceClock,
    config::GeneratorConfig,
    error::GenResult,
    forecast::ForecastDocument,
    identity::{IdentityRegistry, WorkerNameGenerator},
    rng::{RandomSource, RngBank, StreamSlot},
    staffing::{build_windows, RequiredWorkerWindow},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorOutput {
    pub workers: Vec<Worker>,
    pub required_workers: Vec<RequiredWorkerWindow>,
}

impl GeneratorOutput {
    pub fn to_json_pretty(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct GeneratorContext {
    pub config: GeneratorConfig,
    clock: ReferenceClock,
    names: WorkerNameGenerator,
    availability_rng: Box<dyn RandomSource>,
    identity_rng: Box<dyn RandomSource>,
    registry: IdentityRegistry,
}

impl GeneratorContext {
    /// Build a context around caller-supplied random sources.
    pub fn new(
        config: GeneratorConfig,
        availability_rng: Box<dyn RandomSource>,
        identity_rng: Box<dyn RandomSource>,
    ) -> GenResult<Self> {
        config.validate()?;
        Ok(Self {
            clock: ReferenceClock::new(config.zone()?),
            names: WorkerNameGenerator::new()?,
            availability_rng,
            identity_rng,
            registry: IdentityRegistry::new(),
            config,
        })
    }

    /// Build a context whose streams all derive from `seed`.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> GenResult<Self> {
        let bank = RngBank::new(seed);
        Self::new(
            config,
            Box::new(bank.for_slot(StreamSlot::Availability)),
            Box::new(bank.for_slot(StreamSlot::Identity)),
        )
    }

    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }

    pub fn generate(
        &mut self,
        document: &ForecastDocument,
        target_date: &str,
    ) -> GenResult<GeneratorOutput> {
        let blocks = document.blocks_for_date(target_date)?;
        let plan = build_windows(&blocks, &self.clock)?;

        let pool = WorkerPool {
            config: &self.config,
            clock: &self.clock,
            names: &self.names,
        };
        let workers = pool.simulate(
            &plan.dates,
            self.availability_rng.as_mut(),
            self.identity_rng.as_mut(),
            &mut self.registry,
        )?;

        log::info!(
            "date {target_date}: {} required windows, {} workers",
            plan.windows.len(),
            workers.len()
        );
        Ok(GeneratorOutput {
            workers,
            required_workers: plan.windows,
        })
    }

    /// Decode `input` and generate in one step.
    pub fn generate_from_json(
        &mut self,
        input: &str,
        target_date: &str,
    ) -> GenResult<GeneratorOutput> {
        let document = ForecastDocument::from_json(input)?;
        self.generate(&document, target_date)
    }
}
