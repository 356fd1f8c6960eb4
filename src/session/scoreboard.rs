//! Running tally across games in a session.

use serde::{Deserialize, Serialize};

use crate::core::{Mark, MarkMap};
use crate::rules::Outcome;

/// Results so far, from the human's point of view plus per-mark wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
    /// Wins by mark, regardless of who held it.
    pub wins_by_mark: MarkMap<u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game.
    pub fn record(&mut self, outcome: Outcome, human: Mark) {
        match outcome {
            Outcome::Winner(mark) => {
                self.wins_by_mark[mark] += 1;
                if mark == human {
                    self.human_wins += 1;
                } else {
                    self.ai_wins += 1;
                }
            }
            Outcome::Draw => self.draws += 1,
        }
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.human_wins + self.ai_wins + self.draws
    }
}
