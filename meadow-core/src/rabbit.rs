use crate::animal::{Animal, SpeciesBehavior, SpeciesProfile};
use crate::Simulation;

static PROFILE: SpeciesProfile = SpeciesProfile {
    breeding_age: 5,
    max_age: 40,
    breeding_probability: 0.12,
    max_litter_size: 4,
    newborn_food_level: 0,
};

/// Herbivore baseline: ages, breeds, and wanders. Prey for foxes and
/// snakes; no hunger of its own.
pub(crate) struct Rabbit;

impl SpeciesBehavior for Rabbit {
    fn profile(&self) -> &'static SpeciesProfile {
        &PROFILE
    }

    fn act(&self, sim: &mut Simulation, idx: usize, newborns: &mut Vec<Animal>) {
        sim.age_animal(idx);
        if !sim.animals[idx].is_alive() {
            return;
        }

        sim.give_birth(idx, newborns);

        let origin = sim.animals[idx]
            .location()
            .expect("live animals occupy a cell");
        let destination = sim.field.free_adjacent_location(origin);
        sim.move_or_perish(idx, destination);
    }
}
