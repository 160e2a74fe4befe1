//! End-to-end tests for the engine surface: key play scenarios plus
//! the state-machine properties.

use tictactoe_core::{
    apply_move, evaluate, new_game, select_computer_move, status_label, Board, Cell, GameState,
    Mark, Mode, MoveError, Outcome, Position,
};

const X: Option<Mark> = Some(Mark::X);
const O: Option<Mark> = Some(Mark::O);
const E: Option<Mark> = None;

/// Builds a board directly, bypassing the dispatcher, so evaluation
/// can be probed on arbitrary configurations.
fn board_of(marks: [Option<Mark>; 9]) -> Board {
    let mut board = Board::new();
    for (index, mark) in marks.iter().enumerate() {
        if let Some(mark) = mark {
            let position = Position::from_index(index).expect("index in range");
            board.set(position, Cell::Marked(*mark));
        }
    }
    board
}

/// Swaps every X for an O and vice versa.
fn relabeled(board: &Board) -> Board {
    let mut swapped = Board::new();
    for (index, cell) in board.cells().iter().enumerate() {
        let position = Position::from_index(index).expect("index in range");
        if let Some(mark) = cell.mark() {
            swapped.set(position, Cell::Marked(mark.other()));
        }
    }
    swapped
}

fn mark_counts(state: &GameState) -> (usize, usize) {
    (state.board().count(Mark::X), state.board().count(Mark::O))
}

#[test]
fn center_opening() {
    let state = new_game(Mode::HumanVsHuman);
    let applied = apply_move(&state, 4, None).expect("center is open");

    assert_eq!(
        applied.state.board().get(Position::Center),
        Cell::Marked(Mark::X)
    );
    assert_eq!(applied.state.next_mark(), Mark::O);
    assert_eq!(applied.outcome, Outcome::InProgress);
}

#[test]
fn top_row_win() {
    let board = board_of([X, X, X, E, E, E, E, E, E]);
    match evaluate(&board) {
        Outcome::Won { mark, line } => {
            assert_eq!(mark, Mark::X);
            assert_eq!(line.indices(), [0, 1, 2]);
            assert!(line.contains(Position::TopCenter));
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

#[test]
fn full_board_without_line_is_a_draw() {
    // Evaluation accepts unreachable configurations too; this one has
    // more O's than X's.
    let board = board_of([X, O, X, O, X, O, O, X, O]);
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn full_board_with_line_reports_the_win() {
    let board = board_of([X, X, X, O, O, X, O, X, O]);
    assert_eq!(evaluate(&board).winner(), Some(Mark::X));
}

#[test]
fn human_input_cannot_fill_the_computer_slot() {
    let state = new_game(Mode::HumanVsComputer);
    let applied = apply_move(&state, 0, None).expect("opening move");
    assert!(applied.schedule_computer_move);

    // It is now O's (the computer's) turn; bare human input is refused
    // and the state the caller holds is untouched.
    let before = applied.state.clone();
    assert_eq!(
        apply_move(&applied.state, 1, None),
        Err(MoveError::ComputerTurn)
    );
    assert_eq!(applied.state, before);
}

#[test]
fn forced_last_cell() {
    let board = board_of([X, O, X, O, X, E, O, X, O]);
    assert_eq!(select_computer_move(&board), Some(Position::MiddleRight));
}

#[test]
fn relabeling_swaps_the_winner_but_not_the_line() {
    let boards = [
        board_of([X, X, X, O, O, E, E, E, E]),
        board_of([O, E, X, E, O, X, E, E, O]),
        board_of([X, O, O, E, X, E, E, E, X]),
    ];

    for board in &boards {
        let Outcome::Won { mark, line } = evaluate(board) else {
            panic!("test boards all contain a win");
        };
        let Outcome::Won {
            mark: swapped_mark,
            line: swapped_line,
        } = evaluate(&relabeled(board))
        else {
            panic!("relabeling preserves the win");
        };

        assert_eq!(swapped_mark, mark.other());
        assert_eq!(swapped_line, line);
    }
}

#[test]
fn occupied_cell_rejection_leaves_state_unchanged() {
    let state = new_game(Mode::HumanVsHuman);
    let applied = apply_move(&state, 4, None).expect("center is open");
    let before = applied.state.clone();

    assert_eq!(
        apply_move(&applied.state, 4, None),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(applied.state, before);
}

#[test]
fn nine_moves_without_a_line_end_in_a_draw() {
    // X: 0, 2, 3, 7, 8 / O: 1, 4, 5, 6.
    let script = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    let mut state = new_game(Mode::HumanVsHuman);
    let mut outcome = Outcome::InProgress;
    for (turn, index) in script.into_iter().enumerate() {
        assert_eq!(outcome, Outcome::InProgress, "game ended early at {turn}");

        let applied = apply_move(&state, index, None).expect("scripted moves are legal");
        state = applied.state;
        outcome = applied.outcome;

        // Mark balance holds at every reachable state.
        let (x, o) = mark_counts(&state);
        assert!(x == o || x == o + 1, "balance broken: {x} X vs {o} O");
    }

    assert_eq!(outcome, Outcome::Draw);
}

#[test]
fn out_of_bounds_index_is_signaled() {
    let state = new_game(Mode::HumanVsHuman);
    assert_eq!(
        apply_move(&state, 9, None),
        Err(MoveError::OutOfBounds(9))
    );
    assert_eq!(
        apply_move(&state, usize::MAX, None),
        Err(MoveError::OutOfBounds(usize::MAX))
    );
}

#[test]
fn status_labels_cover_all_outcomes() {
    let state = new_game(Mode::HumanVsHuman);
    assert_eq!(status_label(&state, &evaluate(state.board())), "Current: X");

    let applied = apply_move(&state, 0, None).expect("corner is open");
    assert_eq!(
        status_label(&applied.state, &applied.outcome),
        "Current: O"
    );

    let won = board_of([X, X, X, O, O, E, E, E, E]);
    assert_eq!(status_label(&state, &evaluate(&won)), "Winner: X");
    assert_eq!(
        status_label(&state, &evaluate(&relabeled(&won))),
        "Winner: O"
    );

    let drawn = board_of([X, O, X, O, X, O, O, X, O]);
    assert_eq!(status_label(&state, &evaluate(&drawn)), "It's a Draw!");
}

#[test]
fn state_snapshot_round_trips_through_json() {
    let mut state = new_game(Mode::HumanVsComputer);
    for (index, mark) in [(0, None), (4, Some(Mark::O)), (8, None)] {
        state = apply_move(&state, index, mark)
            .expect("scripted moves are legal")
            .state;
    }

    let json = serde_json::to_string(&state).expect("state serializes");
    let restored: GameState = serde_json::from_str(&json).expect("state deserializes");
    assert_eq!(restored, state);
}

#[test]
fn mode_is_preserved_across_new_games() {
    assert_eq!(new_game(Mode::HumanVsHuman).mode(), Mode::HumanVsHuman);
    assert_eq!(
        new_game(Mode::HumanVsComputer).mode(),
        Mode::HumanVsComputer
    );
    assert_eq!(new_game(Mode::HumanVsComputer).next_mark(), Mark::X);
}
