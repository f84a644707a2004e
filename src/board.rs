use yew::prelude::*;

use kazudoru_core::{player_rows, BoardCell, CellFeedback, PlayerBoard};

pub(crate) fn cell_class(cell: &BoardCell) -> &'static str {
    match cell.feedback {
        Some(CellFeedback::Correct) => "cell correct",
        Some(CellFeedback::Present) => "cell present",
        Some(CellFeedback::Absent) => "cell absent",
        None => "cell",
    }
}

pub(crate) fn player_panel(index: usize, board: &PlayerBoard, solution: &str) -> Html {
    let rows: Html = player_rows(board, solution)
        .iter()
        .map(|cells| {
            let cells: Html = cells
                .iter()
                .map(|cell| {
                    let value = cell.ch.map(String::from).unwrap_or_default();
                    html! { <div class={cell_class(cell)}>{value}</div> }
                })
                .collect();
            html! { <div class="board-row">{cells}</div> }
        })
        .collect();
    html! {
        <div class="player-panel">
            <b class="player-label">{ format!("Player {}:", index + 1) }</b>
            {rows}
            <div class="player-score">{ format!("Score: {}", board.score) }</div>
        </div>
    }
}
