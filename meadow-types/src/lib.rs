use serde::{Deserialize, Serialize};

/// Identifier of one animal for the lifetime of a simulation. Ids are
/// allocated densely in creation order and never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimalId(pub u64);

/// The closed set of animal kinds in the ecosystem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Species {
    Rabbit,
    Fox,
    Snake,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Rabbit, Species::Fox, Species::Snake];
}

/// A cell coordinate on the field, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

/// Why an animal left the simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeathCause {
    OldAge,
    Starvation,
    Predation,
    Overcrowding,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldConfig {
    pub width: u32,
    pub depth: u32,
    #[serde(default = "default_rabbit_seed_probability")]
    pub rabbit_seed_probability: f64,
    #[serde(default = "default_fox_seed_probability")]
    pub fox_seed_probability: f64,
    #[serde(default = "default_snake_seed_probability")]
    pub snake_seed_probability: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 120,
            depth: 80,
            rabbit_seed_probability: default_rabbit_seed_probability(),
            fox_seed_probability: default_fox_seed_probability(),
            snake_seed_probability: default_snake_seed_probability(),
        }
    }
}

fn default_rabbit_seed_probability() -> f64 {
    0.08
}

fn default_fox_seed_probability() -> f64 {
    0.02
}

fn default_snake_seed_probability() -> f64 {
    0.01
}

/// One live animal as reported in snapshots and step deltas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnimalState {
    pub id: AnimalId,
    pub species: Species,
    pub age: u32,
    pub location: Location,
    pub food_level: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OccupancyCell {
    pub location: Location,
    pub animal_id: AnimalId,
}

/// An animal removed from the population at the end of a step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemovedAnimal {
    pub id: AnimalId,
    pub species: Species,
    pub cause: DeathCause,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsSnapshot {
    pub steps: u64,
    pub animals: u32,
    pub rabbits: u32,
    pub foxes: u32,
    pub snakes: u32,
    pub births_last_step: u32,
    pub deaths_last_step: u32,
    pub starvations_last_step: u32,
    pub predations_last_step: u32,
    pub old_age_deaths_last_step: u32,
    pub overcrowding_deaths_last_step: u32,
    pub total_births: u64,
    pub total_deaths: u64,
}

/// Everything that changed in one step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepDelta {
    pub step: u64,
    pub spawned: Vec<AnimalState>,
    pub removed: Vec<RemovedAnimal>,
    pub metrics: MetricsSnapshot,
}

/// Full world state at a step boundary. Animals and occupancy are sorted so
/// serialized snapshots compare byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldSnapshot {
    pub step: u64,
    pub rng_seed: u64,
    pub config: WorldConfig,
    pub animals: Vec<AnimalState>,
    pub occupancy: Vec<OccupancyCell>,
    pub metrics: MetricsSnapshot,
}
