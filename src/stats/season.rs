//! Typed season records.
//!
//! A season is a list of game rows, one per player per game. The raw table
//! format lives in `storage::table`; nothing here knows about it.

use std::collections::{BTreeMap, BTreeSet};

use crate::cli::types::PlayerId;

/// One player's line in one game.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameRow {
    pub person_id: PlayerId,
    pub game_id: Option<String>,
    /// Numeric columns only. A column whose value was null is absent here
    /// but still listed in the owning record's column set.
    pub stats: BTreeMap<String, f64>,
}

impl GameRow {
    pub fn new(person_id: PlayerId) -> Self {
        Self {
            person_id,
            game_id: None,
            stats: BTreeMap::new(),
        }
    }

    pub fn with_game(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    pub fn with_stat(mut self, name: impl Into<String>, value: f64) -> Self {
        self.stats.insert(name.into(), value);
        self
    }

    /// Value of a column in this row, 0 when null.
    pub fn stat(&self, name: &str) -> f64 {
        self.stats.get(name).copied().unwrap_or(0.0)
    }
}

/// All game rows of one season plus the numeric columns the table declared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonRecord {
    columns: BTreeSet<String>,
    rows: Vec<GameRow>,
}

impl SeasonRecord {
    pub fn new(columns: BTreeSet<String>, rows: Vec<GameRow>) -> Self {
        Self { columns, rows }
    }

    /// Build a record whose column set is the union of the rows' stat names.
    pub fn from_rows(rows: Vec<GameRow>) -> Self {
        let columns = rows
            .iter()
            .flat_map(|row| row.stats.keys().cloned())
            .collect();
        Self { columns, rows }
    }

    pub fn rows(&self) -> &[GameRow] {
        &self.rows
    }

    pub fn columns(&self) -> &BTreeSet<String> {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every player with at least one game row.
    pub fn players(&self) -> BTreeSet<PlayerId> {
        self.rows.iter().map(|row| row.person_id).collect()
    }
}
