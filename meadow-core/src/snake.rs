use crate::animal::{Animal, SpeciesBehavior, SpeciesProfile};
use crate::Simulation;
use meadow_types::{DeathCause, Location, Species};
use rand::Rng;

/// Steps a snake can go after a rabbit meal before it must eat again.
const RABBIT_FOOD_VALUE: u32 = 13;
/// Food value of the larger fox meal.
const FOX_FOOD_VALUE: u32 = 14;
/// Chance that an adjacent fox is captured rather than passed over.
const FOX_EAT_CHANCE: f64 = 0.15;

static PROFILE: SpeciesProfile = SpeciesProfile {
    breeding_age: 5,
    max_age: 120,
    breeding_probability: 0.02,
    max_litter_size: 2,
    newborn_food_level: RABBIT_FOOD_VALUE,
};

/// Predator of rabbits and foxes. Rabbits are taken on sight; a fox is
/// taken only when the capture roll succeeds, and a failed roll leaves the
/// scan running.
pub(crate) struct Snake;

impl SpeciesBehavior for Snake {
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

/// Scan the adjacent cells in enumeration order for something to eat and
/// return the matched cell as the movement destination. The food reset
/// value follows the prey type that matched.
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
        match sim.animals[prey_idx].species {
            Species::Rabbit if sim.animals[prey_idx].is_alive() => {
                let Simulation { animals, field, .. } = sim;
                animals[prey_idx].set_dead(field, DeathCause::Predation);
                animals[idx].eat(RABBIT_FOOD_VALUE);
                return Some(location);
            }
            Species::Fox => {
                // A failed capture roll does not stop the scan: a rabbit or
                // fox later in the enumeration may still be taken.
                if sim.rng.random::<f64>() <= FOX_EAT_CHANCE && sim.animals[prey_idx].is_alive() {
                    let Simulation { animals, field, .. } = sim;
                    animals[prey_idx].set_dead(field, DeathCause::Predation);
                    animals[idx].eat(FOX_FOOD_VALUE);
                    return Some(location);
                }
            }
            _ => {}
        }
    }
    None
}
