//! Owner and pet fixtures backed by a shared fake data source.

use std::sync::Arc;

use blueprint::{Blueprint, BlueprintFactory, BlueprintResult, Fields};
use serde::Deserialize;
use test_helpers::Faker;

/// Pet whose `kind` is addressed as `type` in map overrides.
#[derive(Clone, Debug, PartialEq, Deserialize, Fields)]
pub struct Pet {
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[blueprint(rename = "type")]
    pub kind: Option<String>,
}

/// Person owning a list of pets.
#[derive(Clone, Debug, PartialEq, Deserialize, Fields)]
pub struct Person {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub pets: Option<Vec<Pet>>,
}

/// Produces pets with fake names and species.
pub struct PetBlueprint {
    faker: Arc<Faker>,
}

impl Blueprint for PetBlueprint {
    type Product = Pet;

    fn blueprint(&self) -> BlueprintResult<Pet> {
        Ok(Pet {
            name: Some(self.faker.first_name()),
            kind: Some(self.faker.animal()),
        })
    }
}

/// Produces people who already own two pets.
pub struct PersonBlueprint {
    faker: Arc<Faker>,
    pets: BlueprintFactory<Pet>,
}

impl Blueprint for PersonBlueprint {
    type Product = Person;

    fn blueprint(&self) -> BlueprintResult<Person> {
        Ok(Person {
            name: Some(self.faker.first_name()),
            age: Some(self.faker.int_in(18..=99)),
            pets: Some(self.pets.create_many(2)?),
        })
    }
}

/// Factory producing pets from `faker`.
pub fn pet_factory(faker: &Arc<Faker>) -> BlueprintFactory<Pet> {
    BlueprintFactory::new(PetBlueprint {
        faker: Arc::clone(faker),
    })
}

/// Factory producing pet owners from `faker` and `pets`.
pub fn person_factory(faker: &Arc<Faker>, pets: &BlueprintFactory<Pet>) -> BlueprintFactory<Person> {
    BlueprintFactory::new(PersonBlueprint {
        faker: Arc::clone(faker),
        pets: pets.clone(),
    })
}
