use crate::animal::Animal;
use crate::Simulation;
use meadow_types::{Location, Species};
use rand::Rng;

/// Per-cell seeding order; the first successful draw claims the cell.
const SEED_ORDER: [Species; 3] = [Species::Fox, Species::Snake, Species::Rabbit];

impl Simulation {
    /// Fill the empty field with randomized-age animals: cells are walked
    /// in row-major order and each species gets one draw per cell against
    /// its seed probability, so a seed fully determines the initial world.
    pub(crate) fn populate(&mut self) {
        for row in 0..self.field.depth() {
            for col in 0..self.field.width() {
                let location = Location { row, col };
                for species in SEED_ORDER {
                    if self.rng.random::<f64>() <= self.seed_probability(species) {
                        let id = self.alloc_animal_id();
                        let Simulation {
                            animals,
                            field,
                            rng,
                            ..
                        } = self;
                        animals.push(Animal::seeded(id, species, field, location, rng));
                        break;
                    }
                }
            }
        }
    }

    fn seed_probability(&self, species: Species) -> f64 {
        match species {
            Species::Rabbit => self.config.rabbit_seed_probability,
            Species::Fox => self.config.fox_seed_probability,
            Species::Snake => self.config.snake_seed_probability,
        }
    }
}
