//! Human-vs-AI game session and self-play.
//!
//! `Session` is plain state: a front end reads it after each call and
//! decides how to present it. Nothing here blocks, sleeps, or notifies.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{Board, BoardError, Mark};
use crate::rules::Outcome;
use crate::search::{Difficulty, Engine, MovePolicy};

use super::config::SessionConfig;
use super::scoreboard::Scoreboard;

/// A move that the session refuses.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("it is {turn}'s turn")]
    NotYourTurn { turn: Mark },

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// One human against the engine, over any number of games.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    engine: Engine,
    board: Board,
    human: Mark,
    history: SmallVec<[usize; 9]>,
    scoreboard: Scoreboard,
    recorded: bool,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        info!(
            difficulty = %config.difficulty,
            human = %config.human_mark,
            "starting session"
        );
        Self {
            engine: Engine::new(config.search.clone()),
            board: Board::new(),
            human: config.human_mark,
            history: SmallVec::new(),
            scoreboard: Scoreboard::new(),
            recorded: false,
            config,
        }
    }

    /// Apply the human's move. Returns the outcome if it ended the game.
    pub fn play_human(&mut self, location: usize) -> Result<Option<Outcome>, SessionError> {
        self.check_turn(self.human)?;
        self.apply(location)?;
        Ok(self.board.outcome())
    }

    /// Let the engine move. Returns the chosen location, or `None` when
    /// it had nothing to play.
    pub fn play_ai(&mut self) -> Result<Option<usize>, SessionError> {
        self.check_turn(self.ai_mark())?;

        let Some(location) = self.engine.best_move(&self.board, self.config.difficulty) else {
            return Ok(None);
        };
        self.apply(location)?;
        Ok(Some(location))
    }

    /// Start the next game, keeping the scoreboard.
    ///
    /// With `alternate_first`, the human's mark swaps.
    pub fn reset(&mut self) {
        if self.config.alternate_first {
            self.human = self.human.opponent();
        }
        self.board = Board::new();
        self.history.clear();
        self.recorded = false;
        debug!(human = %self.human, "new game");
    }

    /// Change the AI strength; takes effect on the next AI move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// True when the engine should be asked for a move.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.board.turn() == self.ai_mark()
    }

    #[must_use]
    pub fn human_mark(&self) -> Mark {
        self.human
    }

    #[must_use]
    pub fn ai_mark(&self) -> Mark {
        self.human.opponent()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Moves played in the current game, in order.
    #[must_use]
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    fn check_turn(&self, mover: Mark) -> Result<(), SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.board.turn() != mover {
            return Err(SessionError::NotYourTurn {
                turn: self.board.turn(),
            });
        }
        Ok(())
    }

    fn apply(&mut self, location: usize) -> Result<(), SessionError> {
        self.board = self.board.play(location)?;
        self.history.push(location);

        if let Some(outcome) = self.board.outcome() {
            if !self.recorded {
                self.scoreboard.record(outcome, self.human);
                self.recorded = true;
                debug!(?outcome, moves = ?self.history, "game over");
            }
        }
        Ok(())
    }
}

/// Play `board` to the end with one policy per mark.
///
/// Returns the final board. Both sides share `engine`'s RNG and
/// searcher.
pub fn play_out(
    board: Board,
    x: &dyn MovePolicy,
    o: &dyn MovePolicy,
    engine: &mut Engine,
) -> Result<Board, BoardError> {
    let mut board = board;

    while !board.is_terminal() {
        let policy = match board.turn() {
            Mark::X => x,
            Mark::O => o,
        };
        let Some(location) = engine.best_move_with(&board, policy) else {
            break;
        };
        board = board.play(location)?;
    }

    Ok(board)
}
