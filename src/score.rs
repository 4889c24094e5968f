//! Score, high score and lives bookkeeping.

use crate::config::INITIAL_LIVES;

/// Invariant: `high_score >= current_score` after every mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreState {
    current_score: u32,
    high_score: u32,
    bricks_destroyed: u32,
    lives: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            current_score: 0,
            high_score: 0,
            bricks_destroyed: 0,
            lives: INITIAL_LIVES,
        }
    }

    /// Credit one destroyed brick worth `points`.
    pub fn add_points(&mut self, points: u32) {
        self.current_score = self.current_score.saturating_add(points);
        self.bricks_destroyed += 1;
        self.high_score = self.high_score.max(self.current_score);
    }

    /// Spend a life.  Returns `false` once none are left, which ends the round.
    pub fn decrement_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives > 0
    }

    /// Start a new round.  The high score survives.
    pub fn reset(&mut self) {
        self.current_score = 0;
        self.bricks_destroyed = 0;
        self.lives = INITIAL_LIVES;
    }

    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn bricks_destroyed(&self) -> u32 {
        self.bricks_destroyed
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn summary(&self) -> String {
        format!(
            "Score: {} | Bricks: {} | High: {}",
            self.current_score, self.bricks_destroyed, self.high_score
        )
    }

    /// One heart per remaining life.
    pub fn lives_display(&self) -> String {
        "♥".repeat(self.lives as usize)
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}
