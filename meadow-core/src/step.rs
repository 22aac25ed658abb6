use crate::animal::{behavior, Animal};
use crate::Simulation;
use meadow_types::{AnimalState, DeathCause, Location, RemovedAnimal, Species, StepDelta};

impl Simulation {
    /// One simulation step: every living animal acts once, in population
    /// (insertion) order, to completion before the next animal starts.
    /// Newborns are buffered and merged only after the full pass.
    pub(crate) fn tick(&mut self) -> StepDelta {
        let mut newborns = Vec::new();
        for idx in 0..self.animals.len() {
            // An animal killed earlier in this same step must not act.
            if !self.animals[idx].is_alive() {
                continue;
            }
            behavior(self.animals[idx].species).act(self, idx, &mut newborns);
        }

        let removed = self.sweep_dead();
        let spawned: Vec<AnimalState> = newborns.iter().map(animal_state).collect();
        self.animals.extend(newborns);

        self.step = self.step.saturating_add(1);
        self.metrics.steps = self.step;
        self.metrics.births_last_step = spawned.len() as u32;
        self.metrics.deaths_last_step = removed.len() as u32;
        self.metrics.starvations_last_step = count_cause(&removed, DeathCause::Starvation);
        self.metrics.predations_last_step = count_cause(&removed, DeathCause::Predation);
        self.metrics.old_age_deaths_last_step = count_cause(&removed, DeathCause::OldAge);
        self.metrics.overcrowding_deaths_last_step =
            count_cause(&removed, DeathCause::Overcrowding);
        self.metrics.total_births += spawned.len() as u64;
        self.metrics.total_deaths += removed.len() as u64;
        self.refresh_population_metrics();
        self.debug_assert_consistent_state();

        StepDelta {
            step: self.step,
            spawned,
            removed,
            metrics: self.metrics.clone(),
        }
    }

    fn sweep_dead(&mut self) -> Vec<RemovedAnimal> {
        let mut removed = Vec::new();
        self.animals.retain(|animal| {
            if animal.is_alive() {
                return true;
            }
            removed.push(RemovedAnimal {
                id: animal.id,
                species: animal.species,
                cause: animal
                    .died_of()
                    .expect("a dead animal records its cause of death"),
            });
            false
        });
        removed
    }

    /// Decide whether the animal at `idx` breeds this step and place any
    /// newborns into the currently-free adjacent cells, one per birth in
    /// enumeration order. The breeding draw happens even when no cell is
    /// free, so randomness consumption does not depend on local crowding.
    pub(crate) fn give_birth(&mut self, idx: usize, newborns: &mut Vec<Animal>) {
        let Some(origin) = self.animals[idx].location() else {
            return;
        };
        let free = self.field.free_adjacent_locations(origin);
        let births = self.animals[idx].breed(&mut self.rng);
        let species = self.animals[idx].species;
        for location in free.into_iter().take(births as usize) {
            let id = self.alloc_animal_id();
            newborns.push(Animal::newborn(id, species, &mut self.field, location));
        }
    }

    /// Move the animal at `idx` to `destination` when one was found; no
    /// destination means overcrowding, which is fatal.
    pub(crate) fn move_or_perish(&mut self, idx: usize, destination: Option<Location>) {
        let Simulation { animals, field, .. } = self;
        match destination {
            Some(location) => animals[idx].set_location(field, location),
            None => animals[idx].set_dead(field, DeathCause::Overcrowding),
        }
    }

    pub(crate) fn age_animal(&mut self, idx: usize) {
        let Simulation { animals, field, .. } = self;
        animals[idx].increment_age(field);
    }

    pub(crate) fn starve_animal(&mut self, idx: usize) {
        let Simulation { animals, field, .. } = self;
        animals[idx].increment_hunger(field);
    }

    pub(crate) fn refresh_population_metrics(&mut self) {
        self.metrics.animals = self.animals.len() as u32;
        self.metrics.rabbits = self.count_species(Species::Rabbit);
        self.metrics.foxes = self.count_species(Species::Fox);
        self.metrics.snakes = self.count_species(Species::Snake);
    }

    fn count_species(&self, species: Species) -> u32 {
        self.animals
            .iter()
            .filter(|animal| animal.species == species)
            .count() as u32
    }
}

pub(crate) fn animal_state(animal: &Animal) -> AnimalState {
    AnimalState {
        id: animal.id,
        species: animal.species,
        age: animal.age(),
        location: animal.location().expect("live animals occupy a cell"),
        food_level: animal.food_level(),
    }
}

fn count_cause(removed: &[RemovedAnimal], cause: DeathCause) -> u32 {
    removed.iter().filter(|entry| entry.cause == cause).count() as u32
}
