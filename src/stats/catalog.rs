//! Scoring categories shared by the draft allocator and the team scorer.

/// A named box-score column and its weight in the team score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub weight: f64,
}

impl Category {
    pub const fn new(name: &'static str, weight: f64) -> Self {
        Self { name, weight }
    }
}

/// Weighted categories. Attempts carry negative weight so volume without
/// efficiency is penalised.
pub const CATEGORIES: [Category; 10] = [
    Category::new("fieldGoalsAttempted", -1.0),
    Category::new("fieldGoalsMade", 2.0),
    Category::new("threePointersAttempted", -0.5),
    Category::new("threePointersMade", 3.0),
    Category::new("freeThrowsAttempted", -0.5),
    Category::new("freeThrowsMade", 1.0),
    Category::new("reboundsDefensive", 1.0),
    Category::new("reboundsOffensive", 1.5),
    Category::new("turnovers", -2.0),
    Category::new("win", 1.0),
];

/// Synthetic category: number of games a player appeared in. Unweighted.
pub const GAMES_STARTED: &str = "gamesStarted";

/// Player identifier column in season tables.
pub const PERSON_ID: &str = "personId";

/// Game identifier column in season tables (optional).
pub const GAME_ID: &str = "gameId";

/// Players drafted per roster: one per weighted category.
pub const ROSTER_SIZE: usize = CATEGORIES.len();
