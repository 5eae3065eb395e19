//! Worker identifier allocation using curated word lists.
//!
//! Ids are "adjective animal" pairs, slugified, and unique within one run.
//! Generation is deterministic given the random source.

use crate::{
    error::{GenError, GenResult},
    rng::RandomSource,
    types::WorkerId,
};
use regex::Regex;
use std::collections::HashSet;

/// Ids handed out so far in the current run. Create one per run and pass it
/// to every allocation; it is never shared across runs.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    seen: HashSet<WorkerId>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Returns false if the id was already taken.
    pub fn insert(&mut self, id: WorkerId) -> bool {
        self.seen.insert(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

pub struct WorkerNameGenerator {
    disallowed: Regex,
}

impl WorkerNameGenerator {
    pub fn new() -> GenResult<Self> {
        Ok(Self {
            disallowed: Regex::new("[^a-z0-9-]+")?,
        })
    }

    /// Number of distinct ids the word lists can produce.
    pub fn name_space() -> usize {
        ADJECTIVES.len() * ANIMALS.len()
    }

    /// Lower-case, collapse every run of characters outside `[a-z0-9-]` into
    /// one hyphen, then trim hyphens from both ends.
    pub fn slugify(&self, s: &str) -> String {
        let lower = s.to_lowercase();
        self.disallowed
            .replace_all(&lower, "-")
            .trim_matches('-')
            .to_string()
    }

    /// One random "adjective animal" slug. May collide with earlier ids.
    pub fn candidate(&self, rng: &mut dyn RandomSource) -> WorkerId {
        let adjective = ADJECTIVES[rng.next_below(ADJECTIVES.len() as u64) as usize];
        let animal = ANIMALS[rng.next_below(ANIMALS.len() as u64) as usize];
        self.slugify(&format!("{adjective} {animal}"))
    }

    /// Resample until the slug is unseen, then record it in `registry`.
    /// Fails once the registry holds every id the word lists can produce.
    pub fn allocate(
        &self,
        rng: &mut dyn RandomSource,
        registry: &mut IdentityRegistry,
    ) -> GenResult<WorkerId> {
        let capacity = Self::name_space();
        if registry.len() >= capacity {
            return Err(GenError::IdSpaceExhausted { capacity });
        }
        loop {
            let id = self.candidate(rng);
            if registry.insert(id.clone()) {
                return Ok(id);
            }
            log::trace!("worker id collision on {id}, resampling");
        }
    }
}

const ADJECTIVES: &[&str] = &[
    "Recalcitrant", "Beneficent", "Flabbergasted", "Loquacious", "Mellifluous", "Cantankerous",
    "Effervescent", "Quixotic", "Gregarious", "Lugubrious", "Obstreperous", "Perspicacious",
    "Rambunctious", "Sesquipedalian", "Vivacious", "Whimsical", "Zany", "Astonishing",
    "Bombastic", "Cacophonous", "Dapper", "Ebullient", "Farcical", "Gibbous", "Hapless",
    "Ineffable", "Jocular", "Kaleidoscopic", "Lachrymose", "Munificent", "Nebulous",
    "Omnipotent", "Pernicious", "Querulous", "Rapscallion", "Supercilious", "Turbulent",
    "Ubiquitous", "Vainglorious", "Wanderlust", "Xenophilic", "Yawning", "Zealous", "Aberrant",
    "Bucolic", "Cryptic", "Delirious", "Enigmatic", "Frivolous", "Ghastly",
];

const ANIMALS: &[&str] = &[
    "Lemur", "Hippopotamus", "Platypus", "Sloth", "Armadillo", "Kangaroo", "Penguin", "Otter",
    "Meerkat", "Wombat", "Koala", "Chameleon", "Pangolin", "Ostrich", "Flamingo", "Narwhal",
    "Toucan", "Aardvark", "Porcupine", "Walrus", "Capuchin Monkey", "Bush Baby", "Giraffe",
    "Okapi", "Red Panda", "Fennec Fox", "Axolotl", "Tarsier", "Sugar Glider", "Quokka",
    "Blobfish", "Peacock", "Mandrill", "Proboscis Monkey", "Dik-dik", "Jerboa", "Alpaca",
    "Flying Squirrel", "Sea Otter", "Manatee", "Kakapo", "Binturong", "Tapir", "Guinea Pig",
    "Hedgehog", "Star-Nosed Mole", "Turtle", "Chinchilla", "Naked Mole Rat",
];
