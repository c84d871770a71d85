//! Time travel and branching tests.
//!
//! Jumping only moves the cursor; making a move from a past step discards
//! everything after it.

use tic_tac_toe::core::{BoardSnapshot, GameRng, GameState, Player};
use tic_tac_toe::error::JumpError;
use tic_tac_toe::playout::random_playout;
use tic_tac_toe::rules::{apply_move, describe, jump_to, new_game, try_jump_to, Status};

fn play(moves: &[usize]) -> GameState {
    moves
        .iter()
        .try_fold(new_game(), |state, &cell| apply_move(&state, cell))
        .unwrap()
}

/// Rewind to step 2, then X plays 3 instead of 1: history is cut to 4.
#[test]
fn test_branch_discards_future() {
    let finished = play(&[0, 4, 1, 3, 2]);
    assert_eq!(describe(&finished), Status::Won { winner: Player::X });

    let rewound = jump_to(&finished, 2);
    assert_eq!(rewound.history().len(), 6);

    let branched = apply_move(&rewound, 3).unwrap();
    assert_eq!(branched.history().len(), 4);
    assert_eq!(branched.step_number(), 3);
    assert_eq!(describe(&branched), Status::InProgress { active_player: Player::O });

    // The earlier states still see the full history.
    assert_eq!(finished.history().len(), 6);
    assert_eq!(rewound.history().len(), 6);
}

/// The shared prefix of a branch is the same snapshots as before.
#[test]
fn test_branch_keeps_prefix() {
    let finished = play(&[0, 4, 1, 3, 2]);
    let branched = apply_move(&jump_to(&finished, 2), 8).unwrap();

    for step in 0..=2 {
        assert_eq!(branched.history().get(step), finished.history().get(step));
    }
    assert_eq!(branched.history().move_at(3), Some(8));
}

/// A jump reproduces the status seen when the step was first reached.
#[test]
fn test_jump_reproduces_status() {
    let mut state = new_game();
    let mut seen = vec![describe(&state)];

    for cell in [0, 4, 1, 3, 2] {
        state = apply_move(&state, cell).unwrap();
        seen.push(describe(&state));
    }

    for (step, status) in seen.iter().enumerate() {
        assert_eq!(describe(&jump_to(&state, step)), *status);
    }
}

/// After a successful move the cursor is one past where it was.
#[test]
fn test_step_advances_by_one_after_rewind() {
    let finished = play(&[0, 4, 1, 3]);

    for step in 0..finished.history().len() {
        let rewound = jump_to(&finished, step);
        let legal = rewound.current_board().empty_cells();
        let next = apply_move(&rewound, legal[0]).unwrap();

        assert_eq!(next.step_number(), step + 1);
        assert_eq!(next.history().len(), step + 2);
        assert!(next.is_at_latest());
    }
}

/// Jumping to step 0 shows the empty board with X to move.
#[test]
fn test_jump_to_start() {
    let state = jump_to(&play(&[4, 0, 8]), 0);

    assert_eq!(*state.current_board(), BoardSnapshot::empty());
    assert_eq!(describe(&state), Status::InProgress { active_player: Player::X });
}

/// Moves on a rewound board check the viewed snapshot, not the latest.
#[test]
fn test_rewound_board_accepts_later_cells() {
    let finished = play(&[0, 4, 1, 3, 2]);
    let rewound = jump_to(&finished, 1);

    // Cell 4 is taken on the latest board but free at step 1.
    let next = apply_move(&rewound, 4).unwrap();
    assert_eq!(next.current_board()[4], Player::O.cell());
}

/// Jumps past the end are reported, not applied.
#[test]
fn test_try_jump_past_end() {
    let state = play(&[0, 4]);
    assert_eq!(
        try_jump_to(&state, 3),
        Err(JumpError::StepOutOfRange { step: 3, len: 3 })
    );
}

/// Random games always keep one changed cell per history step.
#[test]
fn test_random_games_keep_history_invariant() {
    let mut rng = GameRng::new(2024);

    for _ in 0..200 {
        let mut game_rng = rng.next_game();
        let state = random_playout(&new_game(), &mut game_rng, 0);
        let history = state.history();

        for step in 1..history.len() {
            assert!(history.move_at(step).is_some());
        }

        // No move was made after a win.
        for step in 0..history.len() - 1 {
            assert_eq!(
                describe(&jump_to(&state, step)).winner(),
                None,
                "winner before final step"
            );
        }
    }
}
