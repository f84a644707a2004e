use crate::equation::EQUATION_LEN;
use crate::game::{PlayerBoard, ROWS_PER_PLAYER};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFeedback {
    Correct,
    Present,
    Absent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell {
    pub ch: Option<char>,
    pub feedback: Option<CellFeedback>,
}

const BLANK_CELL: BoardCell = BoardCell {
    ch: None,
    feedback: None,
};

/// Position-wise feedback against the solution: exact match, present
/// elsewhere, or absent. Repeated characters are not discounted.
pub fn classify_guess(guess: &str, solution: &str) -> Vec<CellFeedback> {
    let solution_chars: Vec<char> = solution.chars().collect();
    guess
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            if solution_chars.get(index) == Some(&ch) {
                CellFeedback::Correct
            } else if solution_chars.contains(&ch) {
                CellFeedback::Present
            } else {
                CellFeedback::Absent
            }
        })
        .collect()
}

/// Pure projection of one player's board onto a 6x7 cell grid: the current
/// row shows in-progress input without feedback, earlier rows show stored
/// guesses with feedback, later rows are blank. Idempotent by construction.
pub fn player_rows(board: &PlayerBoard, solution: &str) -> Vec<Vec<BoardCell>> {
    (0..ROWS_PER_PLAYER)
        .map(|row| {
            if row == board.row {
                let chars: Vec<char> = board.current.chars().collect();
                (0..EQUATION_LEN)
                    .map(|index| BoardCell {
                        ch: chars.get(index).copied(),
                        feedback: None,
                    })
                    .collect()
            } else if row < board.row {
                let guess = board.guesses.get(row).map(String::as_str).unwrap_or("");
                let feedback = classify_guess(guess, solution);
                let chars: Vec<char> = guess.chars().collect();
                (0..EQUATION_LEN)
                    .map(|index| BoardCell {
                        ch: chars.get(index).copied(),
                        feedback: feedback.get(index).copied(),
                    })
                    .collect()
            } else {
                vec![BLANK_CELL; EQUATION_LEN]
            }
        })
        .collect()
}
