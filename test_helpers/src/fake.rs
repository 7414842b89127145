//! Fake data for production capabilities.
//!
//! A [`Faker`] hands out names without repetition until its pool is
//! exhausted, after which the pool is reshuffled. Small batches built from
//! one faker are therefore distinct.
//!
//! # Examples
//!
//! ```
//! use blueprint_test_helpers::Faker;
//!
//! let faker = Faker::seeded(7);
//! let first = faker.first_name();
//! let second = faker.first_name();
//! assert_ne!(first, second);
//! ```

use std::ops::RangeInclusive;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Edsger", "Frances", "Grace", "Hedy", "John",
    "Katherine", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Robin", "Sophie", "Tony",
    "Whitfield",
];

const ANIMALS: &[&str] = &[
    "badger", "cat", "dog", "ferret", "frog", "gecko", "hamster", "heron", "lizard", "newt",
    "otter", "parrot", "rabbit", "salamander", "toad", "tortoise",
];

const WORDS: &[&str] = &[
    "amber", "basin", "cobalt", "delta", "ember", "fjord", "granite", "harbour", "iris",
    "juniper", "kestrel", "lantern", "meadow", "nimbus", "orchard", "pebble", "quartz", "ripple",
    "saffron", "thistle",
];

/// Shuffled draw pile over a fixed pool.
struct Deck {
    pool: &'static [&'static str],
    pile: Vec<&'static str>,
}

impl Deck {
    const fn new(pool: &'static [&'static str]) -> Self {
        Self {
            pool,
            pile: Vec::new(),
        }
    }

    fn draw(&mut self, rng: &mut StdRng) -> &'static str {
        if self.pile.is_empty() {
            self.pile.extend_from_slice(self.pool);
            self.pile.shuffle(rng);
        }
        self.pile.pop().unwrap_or_default()
    }
}

struct State {
    rng: StdRng,
    first_names: Deck,
    animals: Deck,
    words: Deck,
}

/// Thread-safe source of fake values.
pub struct Faker {
    state: Mutex<State>,
}

impl Faker {
    /// Create a faker seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a faker whose output is reproducible for `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(State {
                rng,
                first_names: Deck::new(FIRST_NAMES),
                animals: Deck::new(ANIMALS),
                words: Deck::new(WORDS),
            }),
        }
    }

    /// A person's first name.
    #[must_use]
    pub fn first_name(&self) -> String {
        let mut guard = self.state.lock();
        let State {
            rng, first_names, ..
        } = &mut *guard;
        first_names.draw(rng).to_owned()
    }

    /// A common animal name.
    #[must_use]
    pub fn animal(&self) -> String {
        let mut guard = self.state.lock();
        let State { rng, animals, .. } = &mut *guard;
        animals.draw(rng).to_owned()
    }

    /// A lower-case dictionary word.
    #[must_use]
    pub fn word(&self) -> String {
        let mut guard = self.state.lock();
        let State { rng, words, .. } = &mut *guard;
        words.draw(rng).to_owned()
    }

    /// A uniformly chosen integer within `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    #[must_use]
    pub fn int_in(&self, range: RangeInclusive<u32>) -> u32 {
        self.state.lock().rng.gen_range(range)
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the fake data source.

    use std::collections::HashSet;

    use anyhow::{Result, ensure};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn names_do_not_repeat_within_a_pool() -> Result<()> {
        let faker = Faker::seeded(1);
        let names: HashSet<String> = (0..FIRST_NAMES.len()).map(|_| faker.first_name()).collect();
        ensure!(names.len() == FIRST_NAMES.len(), "repeated names: {names:?}");
        Ok(())
    }

    #[rstest]
    fn exhausted_pool_is_refilled() -> Result<()> {
        let faker = Faker::seeded(2);
        let drawn: Vec<String> = (0..=ANIMALS.len()).map(|_| faker.animal()).collect();
        ensure!(drawn.len() == ANIMALS.len() + 1, "draws stopped early");
        ensure!(
            drawn.iter().all(|name| ANIMALS.contains(&name.as_str())),
            "animal outside the pool: {drawn:?}"
        );
        Ok(())
    }

    #[rstest]
    fn equal_seeds_produce_equal_sequences() -> Result<()> {
        let left = Faker::seeded(42);
        let right = Faker::seeded(42);
        let left_words: Vec<String> = (0..5).map(|_| left.word()).collect();
        let right_words: Vec<String> = (0..5).map(|_| right.word()).collect();
        ensure!(left_words == right_words, "{left_words:?} != {right_words:?}");
        Ok(())
    }

    #[rstest]
    #[case(1..=1)]
    #[case(10..=20)]
    fn integers_stay_in_range(#[case] range: RangeInclusive<u32>) -> Result<()> {
        let faker = Faker::seeded(3);
        for _ in 0..50 {
            let value = faker.int_in(range.clone());
            ensure!(range.contains(&value), "{value} outside {range:?}");
        }
        Ok(())
    }
}
