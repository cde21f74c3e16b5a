//! End-to-end scenarios through the public API.

use tictac_ledger::{
    InvalidMove, Ledger, PlayerNames, Position, Symbol, active_player, project, restart,
    set_player_name, status, submit_move,
};

fn play(cells: &[(usize, usize)]) -> Ledger {
    cells.iter().fold(restart(), |ledger, &(row, col)| {
        submit_move(&ledger, Position::new(row, col)).expect("Legal move")
    })
}

#[test]
fn test_top_row_win() {
    let names = PlayerNames::default();
    let ledger = play(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    let status = status(&ledger, &names);
    assert_eq!(status.winner().as_deref(), Some("Player 1"));
    assert_eq!(*status.winner_symbol(), Some(Symbol::X));
    assert!(!*status.is_draw());
}

#[test]
fn test_winner_follows_renamed_player() {
    let ledger = play(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let names = set_player_name(&PlayerNames::default(), Symbol::X, "Ada");

    assert_eq!(status(&ledger, &names).winner().as_deref(), Some("Ada"));
}

#[test]
fn test_row_major_fill_is_draw() {
    // Symbols row-major: X O X / X O O / O X X.
    // Play order assigns X, O alternately, so interleave the cells.
    let ledger = play(&[
        (0, 0), // X
        (0, 1), // O
        (0, 2), // X
        (1, 1), // O
        (1, 0), // X
        (1, 2), // O
        (2, 1), // X
        (2, 0), // O
        (2, 2), // X
    ]);

    let board = project(&ledger);
    let rendered: Vec<_> = Position::ALL
        .iter()
        .map(|p| board.get(*p).expect("Full board"))
        .collect();
    use Symbol::{O, X};
    assert_eq!(rendered, vec![X, O, X, X, O, O, O, X, X]);

    let status = status(&ledger, &PlayerNames::default());
    assert!(*status.is_draw());
    assert_eq!(status.winner(), &None);
    assert!(status.is_over());
}

#[test]
fn test_ninth_move_can_still_win() {
    // X completes the main diagonal on the last cell.
    let ledger = play(&[
        (0, 0),
        (0, 1),
        (1, 1),
        (0, 2),
        (1, 2),
        (1, 0),
        (2, 0),
        (2, 1),
        (2, 2),
    ]);

    let status = status(&ledger, &PlayerNames::default());
    assert_eq!(*status.winner_symbol(), Some(Symbol::X));
    assert!(!*status.is_draw());
}

#[test]
fn test_off_board_move_rejected() {
    assert_eq!(
        submit_move(&restart(), Position::new(3, 0)),
        Err(InvalidMove::OutOfBounds { row: 3, col: 0 })
    );
}

#[test]
fn test_game_over_after_nine() {
    let ledger = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(
        submit_move(&ledger, Position::new(0, 0)),
        Err(InvalidMove::GameAlreadyOver)
    );
}

#[test]
fn test_active_player_flips() {
    let mut ledger = restart();
    assert_eq!(active_player(&ledger), Symbol::X);

    for cell in [(1, 1), (0, 0), (2, 2)] {
        let before = active_player(&ledger);
        ledger = submit_move(&ledger, Position::new(cell.0, cell.1)).unwrap();
        assert_eq!(active_player(&ledger), before.opponent());
    }
}

#[test]
fn test_rejected_move_leaves_ledger_usable() {
    let ledger = play(&[(1, 1)]);
    assert!(submit_move(&ledger, Position::new(1, 1)).is_err());

    // O is still to move on the unchanged ledger.
    let next = submit_move(&ledger, Position::new(0, 0)).unwrap();
    assert_eq!(next.last().map(|m| m.symbol), Some(Symbol::O));
}

#[test]
fn test_old_snapshots_stay_valid() {
    let first = play(&[(0, 0)]);
    let second = submit_move(&first, Position::new(1, 1)).unwrap();
    let _third = submit_move(&second, Position::new(2, 2)).unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(project(&first).occupied(), 1);
    assert_eq!(second.log().map(ToString::to_string).collect::<Vec<_>>(), vec![
        "O selected 1, 1".to_string(),
        "X selected 0, 0".to_string(),
    ]);
}

#[test]
fn test_status_is_deterministic() {
    let ledger = play(&[(0, 0), (1, 1), (2, 1)]);
    let names = PlayerNames::new("Ada", "Grace");
    assert_eq!(status(&ledger, &names), status(&ledger, &names));
}

#[test]
fn test_restart_discards_nothing_it_was_not_given() {
    let ledger = play(&[(0, 0), (1, 1)]);
    let fresh = restart();
    assert!(fresh.is_empty());
    assert_eq!(ledger.len(), 2);
}

/// Visits every ledger reachable from `ledger` in up to `depth` more moves.
fn walk(ledger: &Ledger, depth: usize, visit: &mut impl FnMut(&Ledger)) {
    visit(ledger);
    if depth == 0 {
        return;
    }
    for pos in Position::ALL {
        if let Ok(next) = submit_move(ledger, pos) {
            walk(&next, depth - 1, visit);
        }
    }
}

#[test]
fn test_projection_matches_every_short_game() {
    let mut visited = 0;
    walk(&restart(), 4, &mut |ledger| {
        let board = project(ledger);
        assert_eq!(board.occupied(), ledger.len());
        for mov in ledger {
            assert_eq!(board.get(mov.position), Some(mov.symbol));
        }
        visited += 1;
    });
    // 1 + 9 + 9*8 + 9*8*7 + 9*8*7*6
    assert_eq!(visited, 3610);
}

#[test]
fn test_projection_matches_every_prefix_of_full_games() {
    let games: [[(usize, usize); 9]; 2] = [
        [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 0)],
    ];

    for game in games {
        for len in 0..=game.len() {
            let ledger = play(&game[..len]);
            let board = project(&ledger);
            assert_eq!(board.occupied(), len);
            for mov in &ledger {
                assert_eq!(board.get(mov.position), Some(mov.symbol));
            }
        }
    }
}
