pub(super) use super::*;
pub(super) use crate::animal::Animal;
pub(super) use meadow_types::{
    AnimalId, DeathCause, Location, RemovedAnimal, Species, StepDelta, WorldConfig,
};
pub(super) use std::collections::HashSet;

mod breeding_and_spawn;
mod lifecycle_and_invariants;
mod support;
