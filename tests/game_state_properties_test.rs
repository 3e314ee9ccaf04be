//! Properties that hold for every reachable game state.

use tac_toe::invariants::{GameInvariants, InvariantSet};
use tac_toe::{CELL_COUNT, GameState, MoveError, Token};

/// Every game reachable by playing open cells in order, following a fixed
/// set of move orders that cover wins, draws, and partial games.
fn orders() -> Vec<Vec<u8>> {
    vec![
        vec![],
        vec![5],
        vec![5, 1, 9, 3, 7, 2],
        vec![1, 4, 2, 5, 3],
        vec![1, 2, 3, 5, 4, 6, 8, 7, 9],
        vec![9, 8, 7, 6, 5, 4, 3],
        vec![2, 1, 4, 3, 6, 5, 8, 9, 7],
    ]
}

fn prefixes() -> impl Iterator<Item = GameState> {
    orders().into_iter().flat_map(|order| {
        (0..=order.len())
            .filter_map(move |n| GameState::replay(&order[..n]).ok())
            .collect::<Vec<_>>()
    })
}

#[test]
fn test_token_counts_balanced() {
    for state in prefixes() {
        let x = state.board().count(Token::X);
        let o = state.board().count(Token::O);
        assert!(x == o || x == o + 1, "x={} o={}", x, o);
    }
}

#[test]
fn test_turn_token_follows_open_cell_parity() {
    for state in prefixes() {
        let expected = if state.open_cell_count() % 2 == 1 {
            Token::X
        } else {
            Token::O
        };
        assert_eq!(state.current_turn_token(), expected);
    }
}

#[test]
fn test_open_cells_match_empty_cells() {
    for state in prefixes() {
        let open = state.open_cells();
        let mut expected = Vec::new();
        for (index, coord) in state.cells().iter() {
            if state.board().get(coord).is_none() {
                expected.push(index);
            }
        }
        assert_eq!(open, expected);
        assert_eq!(open.len() + state.play_order().len(), CELL_COUNT);
    }
}

#[test]
fn test_played_cells_never_change() {
    for order in orders() {
        let mut state = GameState::new();
        for cell in &order {
            if state.is_game_over() {
                break;
            }
            let before = state.board().clone();
            let coord = state.apply_move(*cell).unwrap();
            state.check_for_win();

            for (_, other) in state.cells().iter() {
                if let Some(token) = before.get(other) {
                    assert_eq!(state.board().get(other), Some(token));
                }
            }
            assert!(state.board().get(coord).is_some());
        }

        for cell in state.play_order().to_vec() {
            assert!(matches!(
                state.apply_move(cell),
                Err(MoveError::CellOccupied(..)) | Err(MoveError::GameOver)
            ));
        }
    }
}

#[test]
fn test_invariants_hold_everywhere() {
    for state in prefixes() {
        assert!(GameInvariants::check_all(&state).is_ok());
    }
}

#[test]
fn test_winnable_boundary() {
    let state = GameState::replay(&[1, 2, 3]).unwrap();
    assert_eq!(state.open_cell_count(), 6);
    assert!(!state.is_winnable());

    let state = GameState::replay(&[1, 2, 3, 5]).unwrap();
    assert_eq!(state.open_cell_count(), 5);
    assert!(state.is_winnable());
}
