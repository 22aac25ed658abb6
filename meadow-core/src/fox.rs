use crate::animal::{Animal, SpeciesBehavior, SpeciesProfile};
use crate::Simulation;
use meadow_types::{DeathCause, Location, Species};

/// Steps a fox can go after a rabbit meal before it must eat again.
const RABBIT_FOOD_VALUE: u32 = 9;

static PROFILE: SpeciesProfile = SpeciesProfile {
    breeding_age: 15,
    max_age: 150,
    breeding_probability: 0.08,
    max_litter_size: 2,
    newborn_food_level: RABBIT_FOOD_VALUE,
};

/// Predator of rabbits. Any adjacent live rabbit is taken on sight.
pub(crate) struct Fox;

impl SpeciesBehavior for Fox {
    fn profile(&self) -> &'static SpeciesProfile {
        &PROFILE
    }

    fn act(&self, sim: &mut Simulation, idx: usize, newborns: &mut Vec<Animal>) {
        sim.age_animal(idx);
        if !sim.animals[idx].is_alive() {
            return;
        }
        sim.starve_animal(idx);
        if !sim.animals[idx].is_alive() {
            return;
        }

        sim.give_birth(idx, newborns);

        let origin = sim.animals[idx]
            .location()
            .expect("live animals occupy a cell");
        let destination =
            find_food(sim, idx).or_else(|| sim.field.free_adjacent_location(origin));
        sim.move_or_perish(idx, destination);
    }
}

/// Scan the adjacent cells in enumeration order and eat the first live
/// rabbit found, returning its cell as the movement destination.
fn find_food(sim: &mut Simulation, idx: usize) -> Option<Location> {
    let origin = sim.animals[idx]
        .location()
        .expect("live animals occupy a cell");
    let adjacent: Vec<Location> = sim.field.adjacent_locations(origin).collect();

    for location in adjacent {
        let Some(occupant) = sim.field.occupant_at(location) else {
            continue;
        };
        let Some(prey_idx) = sim.animal_index(occupant) else {
            continue;
        };
        if sim.animals[prey_idx].species == Species::Rabbit && sim.animals[prey_idx].is_alive() {
            let Simulation { animals, field, .. } = sim;
            animals[prey_idx].set_dead(field, DeathCause::Predation);
            animals[idx].eat(RABBIT_FOOD_VALUE);
            return Some(location);
        }
    }
    None
}
