pub mod board;
pub mod countdown;
pub mod equation;
pub mod expr;
pub mod game;

pub use board::{classify_guess, player_rows, BoardCell, CellFeedback};
pub use countdown::{format_mmss, parse_custom_minutes, CountdownState, TICK_INTERVAL_MS};
pub use equation::{generate_equation, splitmix32, Equation, EquationError, EQUATION_LEN, OPERATORS};
pub use expr::{evaluate, ExprError, Rational, EXPR_CHARSET};
pub use game::{
    GameState, Key, PlayerBoard, MAX_PLAYERS, MIN_PLAYERS, PLAYER_KEYS, ROWS_PER_PLAYER,
    STATUS_PROMPT, STATUS_STARTED,
};
