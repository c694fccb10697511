//! REPL session state
//!
//! Everything a command may read or change between prompts: the location
//! pagination cursor, the caught Pokemon and the catch RNG. Handlers receive
//! it by `&mut` instead of reaching for globals.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Pokemon;

#[derive(Debug)]
pub struct Session {
    /// URL of the next location-area page; `None` after the last page
    pub next: Option<String>,
    /// URL of the previous location-area page; `None` on the first page
    pub previous: Option<String>,
    /// Caught Pokemon keyed by name
    pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    /// Starts a session whose first `map` fetches `first_page`.
    pub fn new(first_page: impl Into<String>) -> Self {
        Self::with_rng(first_page, StdRng::from_entropy())
    }

    /// Like [`Session::new`] with a caller-supplied RNG, for reproducible
    /// catch rolls.
    pub fn with_rng(first_page: impl Into<String>, rng: StdRng) -> Self {
        Self {
            next: Some(first_page.into()),
            previous: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    /// Moves the pagination cursor to the links of the page just shown.
    pub fn set_page_links(&mut self, next: Option<String>, previous: Option<String>) {
        self.next = next;
        self.previous = previous;
    }

    /// Adds a caught Pokemon, replacing an earlier catch of the same name.
    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.pokedex.insert(pokemon.name.clone(), pokemon);
    }

    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(name)
    }

    /// Caught Pokemon in name order
    pub fn pokedex(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokedex.values()
    }

    /// Rolls uniformly in `0..upper`; always 0 when `upper` is 0.
    pub fn roll(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            0
        } else {
            self.rng.gen_range(0..upper)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience: Some(50),
            height: 1,
            weight: 1,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_new_session_starts_on_first_page() {
        let session = Session::new("http://api/location-area/");
        assert_eq!(session.next.as_deref(), Some("http://api/location-area/"));
        assert!(session.previous.is_none());
        assert_eq!(session.pokedex().count(), 0);
    }

    #[test]
    fn test_pokedex_is_sorted_and_deduplicated() {
        let mut session = Session::new("u");
        session.record_catch(pokemon("pidgey"));
        session.record_catch(pokemon("abra"));
        session.record_catch(pokemon("pidgey"));

        let names: Vec<_> = session.pokedex().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["abra", "pidgey"]);
        assert!(session.caught("abra").is_some());
        assert!(session.caught("mew").is_none());
    }

    #[test]
    fn test_roll_bounds() {
        let mut session = Session::with_rng("u", StdRng::seed_from_u64(7));
        assert_eq!(session.roll(0), 0);
        assert_eq!(session.roll(1), 0);
        for _ in 0..100 {
            assert!(session.roll(10) < 10);
        }
    }
}
