//! Immutable, id-indexed player pool.

use std::collections::HashMap;

use super::player::Player;
use crate::cli::types::{PlayerId, Position};

#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
    index: HashMap<PlayerId, usize>,
}

impl PlayerPool {
    /// Build a pool; when two players share an id the first one wins.
    pub fn new(players: Vec<Player>) -> Self {
        let mut kept = Vec::with_capacity(players.len());
        let mut index = HashMap::with_capacity(players.len());
        for player in players {
            if index.contains_key(&player.id) {
                continue;
            }
            index.insert(player.id.clone(), kept.len());
            kept.push(player);
        }
        Self {
            players: kept,
            index,
        }
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.index.get(id).map(|i| &self.players[*i])
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players passing an optional position filter, in pool order.
    pub fn filter(&self, position: Option<Position>) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(move |p| position.map_or(true, |pos| pos.matches(p.position)))
    }

    /// Look up every id; on failure returns all ids that did not resolve,
    /// deduplicated, in first-seen order.
    pub fn resolve<'a, I>(&self, ids: I) -> Result<Vec<&Player>, Vec<PlayerId>>
    where
        I: IntoIterator<Item = &'a PlayerId>,
    {
        let mut found = Vec::new();
        let mut missing: Vec<PlayerId> = Vec::new();
        for id in ids {
            match self.get(id) {
                Some(player) => found.push(player),
                None if !missing.contains(id) => missing.push(id.clone()),
                None => {}
            }
        }
        if missing.is_empty() {
            Ok(found)
        } else {
            Err(missing)
        }
    }
}
