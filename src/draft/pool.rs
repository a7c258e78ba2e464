//! The shared pool of undrafted players for one instance.

use std::collections::BTreeSet;

use crate::cli::types::PlayerId;

/// Players still available, in draft-class order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPool {
    remaining: Vec<PlayerId>,
}

impl DraftPool {
    /// Build a pool from a draft class. Repeated ids are kept once.
    pub fn new(draft_class: &[PlayerId]) -> Self {
        let mut seen = BTreeSet::new();
        let remaining = draft_class
            .iter()
            .copied()
            .filter(|pid| seen.insert(*pid))
            .collect();
        Self { remaining }
    }

    pub fn remaining(&self) -> &[PlayerId] {
        &self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remove `player` from the pool. Returns false if it was not available.
    pub fn take(&mut self, player: PlayerId) -> bool {
        match self.remaining.iter().position(|pid| *pid == player) {
            Some(at) => {
                self.remaining.remove(at);
                true
            }
            None => false,
        }
    }
}
