//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Board, Side, lines::board_winner};
use crate::{Error, Result, config::GameConfig, ports::Strategy, types::Position};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub side: Side,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Side),
    Draw,
}

impl GameOutcome {
    /// The winning side, or `None` for a draw
    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::Win(side) => Some(side),
            GameOutcome::Draw => None,
        }
    }

    /// Numeric outcome: 1 if player one won, -1 if player two won, 0 for a draw
    pub fn value(self) -> i8 {
        self.winner().map_or(0, Side::value)
    }
}

/// Whether a game can still accept moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Terminal(GameOutcome),
}

/// A game in progress with its move history.
///
/// Player one moves first. Once the game is terminal no further moves are
/// accepted.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    to_move: Side,
    moves: Vec<Move>,
    status: GameStatus,
}

impl Game {
    /// Start a game on an empty board
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.size);
        let status = status_of(&board, config.winning_length);
        Game {
            config,
            board,
            to_move: Side::PlayerOne,
            moves: Vec::new(),
            status,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::Terminal(_))
    }

    /// Outcome once the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::Terminal(outcome) => Some(outcome),
            GameStatus::InProgress => None,
        }
    }

    /// Play a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the game is terminal, and the board's
    /// legality errors for an occupied or off-board position. A rejected move
    /// leaves the game unchanged.
    pub fn play(&mut self, position: Position) -> Result<GameStatus> {
        if self.is_terminal() {
            return Err(Error::GameOver);
        }

        let side = self.to_move;
        self.board.apply_move_in_place(position, side)?;
        self.moves.push(Move { position, side });
        self.to_move = side.opponent();
        self.status = status_of(&self.board, self.config.winning_length);

        debug!(%position, %side, ply = self.moves.len(), "move played");
        if let GameStatus::Terminal(outcome) = self.status {
            debug!(?outcome, plies = self.moves.len(), "game finished");
        }

        Ok(self.status)
    }
}

fn status_of(board: &Board, winning_length: usize) -> GameStatus {
    if let Some(winner) = board_winner(board, winning_length) {
        GameStatus::Terminal(GameOutcome::Win(winner))
    } else if board.is_full() {
        GameStatus::Terminal(GameOutcome::Draw)
    } else {
        GameStatus::InProgress
    }
}

/// Drive a game to completion between two strategies.
///
/// Player one moves first. Any strategy error, including an illegal move
/// choice, ends the game and is returned to the caller.
pub fn run_game<A, B>(config: GameConfig, player_one: &mut A, player_two: &mut B) -> Result<Game>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    let mut game = Game::new(config);

    while !game.is_terminal() {
        let side = game.to_move();
        let position = match side {
            Side::PlayerOne => player_one.select_move(game.board(), side)?,
            Side::PlayerTwo => player_two.select_move(game.board(), side)?,
        };
        game.play(position)?;
    }

    Ok(game)
}

/// Play a full game and return the winner, or `None` for a draw.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] for an unplayable size and winning
/// length, otherwise whatever a strategy or an illegal move produces.
pub fn play_game<A, B>(
    size: usize,
    winning_length: usize,
    player_one: &mut A,
    player_two: &mut B,
) -> Result<Option<Side>>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    let config = GameConfig::new(size, winning_length)?;
    let game = run_game(config, player_one, player_two)?;
    Ok(game.outcome().and_then(GameOutcome::winner))
}
