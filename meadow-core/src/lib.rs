use meadow_types::{AnimalId, AnimalState, MetricsSnapshot, OccupancyCell, StepDelta, WorldConfig, WorldSnapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

mod animal;
mod field;
mod fox;
mod rabbit;
mod snake;
mod spawn;
mod step;

#[cfg(test)]
mod tests;

use animal::Animal;
use field::Field;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid world config: {0}")]
    InvalidConfig(String),
}

/// A closed ecosystem of rabbits, foxes, and snakes on a discrete 2D field,
/// advanced in discrete steps. All randomness flows through one seeded
/// stream, so equal config and seed give equal runs.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: WorldConfig,
    step: u64,
    seed: u64,
    rng: ChaCha8Rng,
    next_animal_id: u64,
    animals: Vec<Animal>,
    field: Field,
    metrics: MetricsSnapshot,
}

impl Simulation {
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, SimError> {
        validate_config(&config)?;

        let mut sim = Self {
            field: Field::new(config.width, config.depth),
            config,
            step: 0,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_animal_id: 0,
            animals: Vec::new(),
            metrics: MetricsSnapshot::default(),
        };

        sim.populate();
        sim.refresh_population_metrics();
        Ok(sim)
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn metrics(&self) -> &MetricsSnapshot {
        &self.metrics
    }

    pub fn step_n(&mut self, count: u32) -> Vec<StepDelta> {
        let mut deltas = Vec::with_capacity(count as usize);
        for _ in 0..count {
            deltas.push(self.tick());
        }
        deltas
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let mut animals: Vec<AnimalState> = self.animals.iter().map(step::animal_state).collect();
        animals.sort_by_key(|animal| animal.id);

        let mut occupancy: Vec<OccupancyCell> = self
            .field
            .occupied_cells()
            .map(|(location, id)| OccupancyCell {
                location,
                animal_id: id,
            })
            .collect();
        occupancy.sort_by_key(|cell| cell.location);

        WorldSnapshot {
            step: self.step,
            rng_seed: self.seed,
            config: self.config.clone(),
            animals,
            occupancy,
            metrics: self.metrics.clone(),
        }
    }

    pub fn reset(&mut self, seed: Option<u64>) {
        self.seed = seed.unwrap_or(self.seed);
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.step = 0;
        self.next_animal_id = 0;
        self.animals.clear();
        self.field.reset();
        self.metrics = MetricsSnapshot::default();
        self.populate();
        self.refresh_population_metrics();
    }

    pub fn export_trace_jsonl(&mut self, steps: u32) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(
            serde_json::to_string(&self.snapshot())
                .expect("serialize initial snapshot for trace export"),
        );

        for _ in 0..steps {
            self.tick();
            lines.push(
                serde_json::to_string(&self.snapshot())
                    .expect("serialize step snapshot for trace export"),
            );
        }
        lines
    }

    pub(crate) fn alloc_animal_id(&mut self) -> AnimalId {
        let id = AnimalId(self.next_animal_id);
        self.next_animal_id += 1;
        id
    }

    /// Population index for an animal id. Ids are allocated in increasing
    /// order and the population never reorders, so the vector stays sorted.
    pub(crate) fn animal_index(&self, id: AnimalId) -> Option<usize> {
        self.animals
            .binary_search_by_key(&id, |animal| animal.id)
            .ok()
    }

    pub(crate) fn debug_assert_consistent_state(&self) {
        if cfg!(debug_assertions) {
            let live = self.animals.iter().filter(|a| a.is_alive()).count();
            debug_assert_eq!(
                live,
                self.field.occupied_count(),
                "occupied cell count should match live animal count",
            );
            for animal in &self.animals {
                if !animal.is_alive() {
                    continue;
                }
                let location = animal.location().expect("live animals occupy a cell");
                debug_assert_eq!(
                    self.field.occupant_at(location),
                    Some(animal.id),
                    "occupancy must point back at the animal holding that cell",
                );
            }
        }
    }
}

fn validate_config(config: &WorldConfig) -> Result<(), SimError> {
    if config.width == 0 {
        return Err(SimError::InvalidConfig(
            "width must be greater than zero".to_owned(),
        ));
    }
    if config.depth == 0 {
        return Err(SimError::InvalidConfig(
            "depth must be greater than zero".to_owned(),
        ));
    }
    for (name, value) in [
        ("rabbit_seed_probability", config.rabbit_seed_probability),
        ("fox_seed_probability", config.fox_seed_probability),
        ("snake_seed_probability", config.snake_seed_probability),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(SimError::InvalidConfig(format!(
                "{name} must be within [0, 1]"
            )));
        }
    }
    let total = config.rabbit_seed_probability
        + config.fox_seed_probability
        + config.snake_seed_probability;
    if total > 1.0 {
        return Err(SimError::InvalidConfig(
            "seed probabilities must sum to at most 1".to_owned(),
        ));
    }
    Ok(())
}
