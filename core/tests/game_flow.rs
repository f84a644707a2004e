use kazudoru_core::{
    generate_equation, Equation, GameState, Key, EQUATION_LEN, ROWS_PER_PLAYER, STATUS_PROMPT,
    STATUS_STARTED,
};

const SOLUTION: &str = "10+5=15";

// Valid identities of the right length that are not the solution.
const WRONG_GUESSES: [&str; 6] = [
    "11+4=15", "12+3=15", "13+2=15", "14+1=15", "20-5=15", "30/2=15",
];

fn started(player_count: usize) -> GameState {
    let mut game = GameState::new(player_count, Equation::parse(SOLUTION).expect("solution"));
    game.start();
    game
}

fn type_guess(game: &mut GameState, text: &str) {
    for ch in text.chars() {
        game.handle_key(Key::Char(ch));
    }
    game.handle_key(Key::Enter);
}

#[test]
fn keys_are_ignored_before_start() {
    let mut game = GameState::new(1, Equation::parse(SOLUTION).unwrap());
    assert_eq!(game.status, STATUS_PROMPT);
    game.handle_key(Key::Char('1'));
    assert!(game.players[0].current.is_empty());
}

#[test]
fn start_is_idempotent_and_does_not_reset() {
    let mut game = started(1);
    game.handle_key(Key::Char('1'));
    game.start();
    assert_eq!(game.players[0].current, "1");
    assert_eq!(game.status, STATUS_STARTED);
}

#[test]
fn typing_fills_and_backspace_edits_current() {
    let mut game = started(1);
    for ch in "10+5=15".chars() {
        game.handle_key(Key::Char(ch));
    }
    assert_eq!(game.players[0].current, "10+5=15");
    // Full board swallows further characters.
    game.handle_key(Key::Char('9'));
    assert_eq!(game.players[0].current.len(), EQUATION_LEN);
    game.handle_key(Key::Backspace);
    game.handle_key(Key::Backspace);
    assert_eq!(game.players[0].current, "10+5=");
    // Backspace on an empty board is a no-op.
    let mut fresh = started(1);
    fresh.handle_key(Key::Backspace);
    assert!(fresh.players[0].current.is_empty());
}

#[test]
fn enter_does_nothing_until_the_row_is_full() {
    let mut game = started(1);
    for ch in "10+5=1".chars() {
        game.handle_key(Key::Char(ch));
    }
    game.handle_key(Key::Enter);
    assert!(game.players[0].guesses.is_empty());
    assert_eq!(game.players[0].current, "10+5=1");
    assert_eq!(game.status, STATUS_STARTED);
}

#[test]
fn unequal_sides_do_not_mutate_state() {
    let mut game = started(1);
    type_guess(&mut game, "10+5=16");
    let board = &game.players[0];
    assert!(board.guesses.is_empty());
    assert_eq!(board.row, 0);
    assert_eq!(board.score, 0);
    assert!(board.active);
    // Input is preserved for editing.
    assert_eq!(board.current, "10+5=16");
    assert_eq!(game.status, "Player 1: Invalid equation!");
}

#[test]
fn malformed_guess_does_not_mutate_state() {
    let mut game = started(1);
    type_guess(&mut game, "1++2=33");
    let board = &game.players[0];
    assert!(board.guesses.is_empty());
    assert_eq!(board.row, 0);
    assert_eq!(board.score, 0);
    assert_eq!(board.current, "1++2=33");
    assert_eq!(game.status, "Player 1: Invalid equation!");
}

#[test]
fn any_true_identity_scores_without_ending_the_round() {
    let mut game = started(1);
    type_guess(&mut game, "11+4=15");
    let board = &game.players[0];
    assert_eq!(board.guesses, vec!["11+4=15".to_string()]);
    assert_eq!(board.score, 1);
    assert_eq!(board.row, 1);
    assert!(board.active);
    assert!(board.current.is_empty());
}

#[test]
fn matching_the_solution_solves_the_round() {
    let mut game = started(1);
    type_guess(&mut game, "11+4=15");
    type_guess(&mut game, SOLUTION);
    let board = &game.players[0];
    assert!(!board.active);
    assert_eq!(board.score, 2);
    assert_eq!(board.row, 2);
    assert!(game.status.starts_with("Player 1 solved it!"));
    // Sole player inactive: the round closed and named the winner.
    assert!(!game.running);
    assert!(game
        .status
        .ends_with(" Game Over! Winner(s): Player 1"));
}

#[test]
fn six_valid_misses_exhaust_the_board() {
    let mut game = started(1);
    // A rejected guess must not consume a row; clearing it takes backspaces
    // because rejection leaves the input in place.
    type_guess(&mut game, "10+5=16");
    assert_eq!(game.players[0].row, 0);
    for _ in 0..EQUATION_LEN {
        game.handle_key(Key::Backspace);
    }
    for (attempt, guess) in WRONG_GUESSES.iter().enumerate() {
        assert!(game.players[0].active, "attempt {attempt}");
        type_guess(&mut game, guess);
    }
    let board = &game.players[0];
    assert!(!board.active);
    assert_eq!(board.row, ROWS_PER_PLAYER);
    assert_eq!(board.score, ROWS_PER_PLAYER as u32);
    assert!(game.status.starts_with(&format!(
        "Player 1 ran out of guesses! Solution: {SOLUTION}"
    )));
    assert!(!game.running);
    assert!(game.status.ends_with(" Game Over! Winner(s): Player 1"));
}

#[test]
fn one_keystroke_feeds_every_active_player() {
    let mut game = started(2);
    game.handle_key(Key::Char('1'));
    assert_eq!(game.players[0].current, "1");
    assert_eq!(game.players[1].current, "1");
}

#[test]
fn solved_players_stop_receiving_keys() {
    let mut game = started(2);
    // Feed the solution to player 0 only, bypassing the shared dispatch.
    for ch in SOLUTION.chars() {
        game.apply_key(0, Key::Char(ch));
    }
    game.apply_key(0, Key::Enter);
    assert!(!game.players[0].active);
    assert!(game.players[1].active);
    assert!(game.running);
    game.handle_key(Key::Char('7'));
    assert!(game.players[0].current.is_empty());
    assert_eq!(game.players[1].current, "7");
}

#[test]
fn tied_top_scores_share_the_win() {
    let mut game = started(3);
    game.players[0].score = 3;
    game.players[1].score = 5;
    game.players[2].score = 5;
    assert_eq!(game.winner_labels(), "Player 2, Player 3");
}

#[test]
fn game_over_closes_input() {
    let mut game = started(1);
    type_guess(&mut game, SOLUTION);
    assert!(!game.running);
    let snapshot = game.clone();
    game.handle_key(Key::Char('1'));
    game.handle_key(Key::Enter);
    assert_eq!(game, snapshot);
}

#[test]
fn reset_clears_boards_and_regenerates_the_solution() {
    let seed = (0u32..)
        .find(|seed| generate_equation(*seed).as_str() != SOLUTION)
        .expect("a differing seed exists");
    let mut game = started(2);
    type_guess(&mut game, "11+4=15");
    game.players[1].active = false;
    game.reset(2, seed);
    assert!(!game.running);
    assert_eq!(game.players.len(), 2);
    for board in &game.players {
        assert!(board.guesses.is_empty());
        assert!(board.current.is_empty());
        assert_eq!(board.row, 0);
        assert_eq!(board.score, 0);
        assert!(board.active);
    }
    assert_eq!(game.solution, generate_equation(seed));
    assert_ne!(game.solution.as_str(), SOLUTION);
    assert_eq!(game.status, STATUS_PROMPT);
}

#[test]
fn reset_can_change_the_player_count() {
    let mut game = started(1);
    game.reset(3, 11);
    assert_eq!(game.player_count, 3);
    assert_eq!(game.players.len(), 3);
    game.reset(2, 12);
    assert_eq!(game.players.len(), 2);
}

#[test]
fn key_names_map_to_game_keys() {
    assert_eq!(Key::from_key_name("Enter"), Some(Key::Enter));
    assert_eq!(Key::from_key_name("Backspace"), Some(Key::Backspace));
    assert_eq!(Key::from_key_name("5"), Some(Key::Char('5')));
    assert_eq!(Key::from_key_name("0"), Some(Key::Char('0')));
    assert_eq!(Key::from_key_name("+"), Some(Key::Char('+')));
    assert_eq!(Key::from_key_name("/"), Some(Key::Char('/')));
    assert_eq!(Key::from_key_name("="), Some(Key::Char('=')));
    assert_eq!(Key::from_key_name("a"), None);
    assert_eq!(Key::from_key_name("Shift"), None);
    assert_eq!(Key::from_key_name("ArrowLeft"), None);
    assert_eq!(Key::from_key_name(""), None);
}
