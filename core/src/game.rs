use std::fmt::Write;

use crate::equation::{generate_equation, Equation, EQUATION_LEN};
use crate::expr::{evaluate, EXPR_CHARSET};

pub const ROWS_PER_PLAYER: usize = 6;
pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 3;

/// Characters every player's board accepts. All players share the same
/// set, so a single keystroke can feed several boards at once.
pub const PLAYER_KEYS: &str = "1234567890+-*/=";

pub const STATUS_PROMPT: &str = "Guess the equation! (e.g. 10+5=15)";
pub const STATUS_STARTED: &str = "Game started! Type your guess and press Enter.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
}

impl Key {
    /// Maps a DOM `KeyboardEvent::key()` name to a game key. Names outside
    /// the recognized set (modifiers, arrows, letters) map to `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Key::Enter),
            "Backspace" => Some(Key::Backspace),
            _ => {
                let mut chars = name.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                PLAYER_KEYS.contains(ch).then_some(Key::Char(ch))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerBoard {
    /// Accepted guesses in attempt order, at most [`ROWS_PER_PLAYER`].
    pub guesses: Vec<String>,
    /// In-progress input, 0..=[`EQUATION_LEN`] characters.
    pub current: String,
    pub row: usize,
    /// Every accepted (valid) equation scores, not only the solution.
    pub score: u32,
    pub active: bool,
}

impl PlayerBoard {
    pub fn new() -> Self {
        Self {
            guesses: Vec::new(),
            current: String::new(),
            row: 0,
            score: 0,
            active: true,
        }
    }
}

impl Default for PlayerBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player_count: usize,
    pub solution: Equation,
    pub running: bool,
    pub players: Vec<PlayerBoard>,
    pub status: String,
}

impl GameState {
    pub fn new(player_count: usize, solution: Equation) -> Self {
        let player_count = player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        Self {
            player_count,
            solution,
            running: false,
            players: vec![PlayerBoard::new(); player_count],
            status: STATUS_PROMPT.to_string(),
        }
    }

    /// Regenerates the solution and clears every board unconditionally,
    /// inactive players included. The only way a new solution appears.
    pub fn reset(&mut self, player_count: usize, seed: u32) {
        *self = Self::new(player_count, generate_equation(seed));
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.status = STATUS_STARTED.to_string();
    }

    /// Shared-keyboard dispatch: one keystroke is offered to every player
    /// in index order, then the overall-completion check runs once.
    pub fn handle_key(&mut self, key: Key) {
        if !self.running {
            return;
        }
        for player in 0..self.player_count {
            self.apply_key(player, key);
        }
        self.check_game_over();
    }

    pub fn apply_key(&mut self, player: usize, key: Key) {
        if !self.running {
            return;
        }
        let Some(board) = self.players.get_mut(player) else {
            return;
        };
        if !board.active {
            return;
        }
        let submit = match key {
            Key::Char(ch) => {
                if board.current.len() < EQUATION_LEN {
                    board.current.push(ch);
                }
                false
            }
            Key::Backspace => {
                board.current.pop();
                false
            }
            Key::Enter => board.current.len() == EQUATION_LEN,
        };
        if submit {
            self.submit(player);
        }
    }

    /// Validation pipeline for a full-length candidate. Charset and split
    /// failures are silent; evaluation failures and unequal sides surface
    /// a status message. Rejection never mutates the board, so the input
    /// stays put for editing.
    fn submit(&mut self, player: usize) {
        let guess = self.players[player].current.clone();
        if !guess.chars().all(|ch| EXPR_CHARSET.contains(ch)) {
            return;
        }
        let parts: Vec<&str> = guess.split('=').collect();
        if parts.len() != 2 {
            return;
        }
        let sides =
            evaluate(parts[0]).and_then(|left| evaluate(parts[1]).map(|right| (left, right)));
        match sides {
            Ok((left, right)) if left == right => {}
            _ => {
                self.status = format!("Player {}: Invalid equation!", player + 1);
                return;
            }
        }
        let solution = self.solution.as_str().to_string();
        let board = &mut self.players[player];
        board.guesses.push(guess.clone());
        board.score += 1;
        if guess == solution {
            board.active = false;
            self.status = format!("Player {} solved it!", player + 1);
        } else if board.row == ROWS_PER_PLAYER - 1 {
            board.active = false;
            self.status = format!(
                "Player {} ran out of guesses! Solution: {}",
                player + 1,
                solution
            );
        }
        let board = &mut self.players[player];
        board.row += 1;
        board.current.clear();
    }

    /// All player labels whose score equals the maximum, ascending index.
    pub fn winner_labels(&self) -> String {
        let top = self
            .players
            .iter()
            .map(|board| board.score)
            .max()
            .unwrap_or(0);
        let mut labels = String::new();
        for (index, board) in self.players.iter().enumerate() {
            if board.score != top {
                continue;
            }
            if !labels.is_empty() {
                labels.push_str(", ");
            }
            let _ = write!(labels, "Player {}", index + 1);
        }
        labels
    }

    fn check_game_over(&mut self) {
        if self.players.iter().any(|board| board.active) {
            return;
        }
        self.running = false;
        let winners = self.winner_labels();
        let _ = write!(self.status, " Game Over! Winner(s): {winners}");
    }
}
