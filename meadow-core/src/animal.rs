use crate::field::Field;
use crate::{fox, rabbit, snake, Simulation};
use meadow_types::{AnimalId, DeathCause, Location, Species};
use rand::Rng;

/// Per-species immutable constants.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpeciesProfile {
    pub(crate) breeding_age: u32,
    pub(crate) max_age: u32,
    pub(crate) breeding_probability: f64,
    pub(crate) max_litter_size: u32,
    /// Food reserve a newborn starts with, and the exclusive upper bound for
    /// a randomized seed animal's reserve. Zero for species without hunger.
    pub(crate) newborn_food_level: u32,
}

/// Stateless per-species capability: every species supplies its constant
/// profile plus its own per-step decision logic, dispatched over the closed
/// `Species` set.
pub(crate) trait SpeciesBehavior {
    fn profile(&self) -> &'static SpeciesProfile;

    /// Run one step for the animal at `idx`. Newborns go into `newborns`
    /// and are merged into the population only after the full pass, so they
    /// never act in their birth step.
    fn act(&self, sim: &mut Simulation, idx: usize, newborns: &mut Vec<Animal>);
}

pub(crate) fn behavior(species: Species) -> &'static dyn SpeciesBehavior {
    match species {
        Species::Rabbit => &rabbit::Rabbit,
        Species::Fox => &fox::Fox,
        Species::Snake => &snake::Snake,
    }
}

/// Shared lifecycle state. Mutated only by the owning species' `act` and by
/// predation from another animal's step.
#[derive(Debug, Clone)]
pub(crate) struct Animal {
    pub(crate) id: AnimalId,
    pub(crate) species: Species,
    alive: bool,
    age: u32,
    location: Option<Location>,
    food_level: u32,
    died_of: Option<DeathCause>,
}

impl Animal {
    /// A newborn: age zero, standard food reserve, placed at `location`.
    /// The destination cell must be vacant.
    pub(crate) fn newborn(
        id: AnimalId,
        species: Species,
        field: &mut Field,
        location: Location,
    ) -> Self {
        let profile = behavior(species).profile();
        let mut animal = Self {
            id,
            species,
            alive: true,
            age: 0,
            location: None,
            food_level: profile.newborn_food_level,
            died_of: None,
        };
        animal.set_location(field, location);
        animal
    }

    /// An animal created mid-life, with explicit age and food reserve.
    pub(crate) fn aged(
        id: AnimalId,
        species: Species,
        field: &mut Field,
        location: Location,
        age: u32,
        food_level: u32,
    ) -> Self {
        let mut animal = Self::newborn(id, species, field, location);
        animal.age = age;
        animal.food_level = food_level;
        animal
    }

    /// A seed animal for the initial population: randomized age in
    /// `[0, max_age)` and, where the species has a food reserve, a
    /// randomized reserve in `[0, newborn_food_level)`.
    pub(crate) fn seeded<R: Rng + ?Sized>(
        id: AnimalId,
        species: Species,
        field: &mut Field,
        location: Location,
        rng: &mut R,
    ) -> Self {
        let profile = behavior(species).profile();
        let age = rng.random_range(0..profile.max_age);
        let food_level = if profile.newborn_food_level > 0 {
            rng.random_range(0..profile.newborn_food_level)
        } else {
            0
        };
        Self::aged(id, species, field, location, age, food_level)
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn age(&self) -> u32 {
        self.age
    }

    pub(crate) fn location(&self) -> Option<Location> {
        self.location
    }

    pub(crate) fn food_level(&self) -> u32 {
        self.food_level
    }

    pub(crate) fn died_of(&self) -> Option<DeathCause> {
        self.died_of
    }

    pub(crate) fn profile(&self) -> &'static SpeciesProfile {
        behavior(self.species).profile()
    }

    /// Transition to dead and vacate the occupied cell. Dead is terminal:
    /// calling this on an already-dead animal changes nothing, and the cell
    /// is never vacated twice because the location is taken on the first
    /// call.
    pub(crate) fn set_dead(&mut self, field: &mut Field, cause: DeathCause) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.died_of = Some(cause);
        if let Some(location) = self.location.take() {
            field.clear(location);
        }
    }

    /// Move to `new_location`, vacating the old cell first. Callers verify
    /// the destination is vacant.
    pub(crate) fn set_location(&mut self, field: &mut Field, new_location: Location) {
        if let Some(old) = self.location.take() {
            field.clear(old);
        }
        self.location = Some(new_location);
        field.place(self.id, new_location);
    }

    /// Age by one step. Exceeding the species maximum is death, not an
    /// error.
    pub(crate) fn increment_age(&mut self, field: &mut Field) {
        self.age += 1;
        if self.age > self.profile().max_age {
            self.set_dead(field, DeathCause::OldAge);
        }
    }

    /// Consume one step of food reserve; an exhausted reserve is fatal.
    pub(crate) fn increment_hunger(&mut self, field: &mut Field) {
        self.food_level = self.food_level.saturating_sub(1);
        if self.food_level == 0 {
            self.set_dead(field, DeathCause::Starvation);
        }
    }

    /// Reset the food reserve to the matched prey's food value.
    pub(crate) fn eat(&mut self, food_value: u32) {
        self.food_level = food_value;
    }

    pub(crate) fn can_breed(&self) -> bool {
        self.age >= self.profile().breeding_age
    }

    /// Litter size for this step: zero unless the animal is of breeding age
    /// and the breeding draw succeeds, otherwise uniform in
    /// `[1, max_litter_size]`. Consumes exactly one `f64` draw when
    /// eligible and one integer draw on success, and no randomness at all
    /// when ineligible.
    pub(crate) fn breed<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let profile = self.profile();
        if self.can_breed() && rng.random::<f64>() <= profile.breeding_probability {
            rng.random_range(0..profile.max_litter_size) + 1
        } else {
            0
        }
    }
}
