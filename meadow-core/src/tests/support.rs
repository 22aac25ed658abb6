use super::*;

/// Empty-world config: all seed probabilities are zero so tests hand-place
/// every animal.
pub(super) fn test_config(width: u32, depth: u32) -> WorldConfig {
    WorldConfig {
        width,
        depth,
        rabbit_seed_probability: 0.0,
        fox_seed_probability: 0.0,
        snake_seed_probability: 0.0,
    }
}

pub(super) fn empty_sim(width: u32, depth: u32, seed: u64) -> Simulation {
    Simulation::new(test_config(width, depth), seed).expect("simulation should initialize")
}

/// Hand-place an animal with explicit age and food reserve. Animals must be
/// placed in call order so the population stays sorted by id.
pub(super) fn place_animal(
    sim: &mut Simulation,
    species: Species,
    age: u32,
    food_level: u32,
    row: i32,
    col: i32,
) -> AnimalId {
    let id = sim.alloc_animal_id();
    let location = Location { row, col };
    let Simulation { animals, field, .. } = sim;
    animals.push(Animal::aged(id, species, field, location, age, food_level));
    id
}

pub(super) fn tick_once(sim: &mut Simulation) -> StepDelta {
    sim.tick()
}

pub(super) fn find_animal(sim: &Simulation, id: AnimalId) -> &Animal {
    sim.animals
        .iter()
        .find(|animal| animal.id == id)
        .expect("animal should be present")
}

pub(super) fn assert_registry_consistent(sim: &Simulation) {
    let mut seen = HashSet::new();
    for animal in &sim.animals {
        assert!(animal.is_alive(), "swept populations hold only live animals");
        let location = animal.location().expect("live animals occupy a cell");
        assert!(seen.insert(location), "two animals share a cell");
        assert_eq!(
            sim.field.occupant_at(location),
            Some(animal.id),
            "occupancy must point back at the animal holding that cell",
        );
    }
    assert_eq!(sim.field.occupied_count(), sim.animals.len());
}
