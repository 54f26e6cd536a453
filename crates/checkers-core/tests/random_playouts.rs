use checkers_core::error::RulesError;
use checkers_core::game_state::{GameState, GameStatus};
use checkers_core::move_list::MoveList;
use checkers_core::rules::{MoveOutcome, Rules};
use checkers_core::square::Square;
use rand::seq::IteratorRandom;

const GAMES: usize = 200;
const MAX_HOPS: usize = 400;

/// Checks the per-position properties that hold in every reachable state.
fn check_position(rules: &Rules) {
    let side = rules.current_turn();
    let pieces: Vec<Square> = rules.board().pieces(side).map(|(sq, _)| sq).collect();

    let any_jump = pieces
        .iter()
        .any(|&sq| !rules.legal_jumps(sq).unwrap().is_empty());
    assert_eq!(any_jump, rules.must_capture());

    for &sq in &pieces {
        let piece = rules.piece_at(sq).unwrap().unwrap();
        let simple = rules.legal_simple_moves(sq).unwrap();
        let jumps = rules.legal_jumps(sq).unwrap();
        let moves = rules.legal_moves(sq).unwrap();

        if !piece.is_king() {
            for dest in simple.iter().chain(jumps.iter()) {
                let dr = dest.rank() - sq.rank();
                assert_eq!(dr.signum(), side.forward(), "man on {sq} moves backward to {dest}");
            }
        }

        for dest in &jumps {
            let victim = rules.piece_at(sq.midpoint(*dest)).unwrap().unwrap();
            assert_ne!(victim.side(), side);
        }

        if any_jump {
            assert_eq!(moves, jumps, "simple moves offered on {sq} while a capture exists");
        }

        // Queries do not depend on call order or count.
        assert_eq!(rules.legal_moves(sq).unwrap(), moves);
    }

    if let Some(selected) = rules.selected() {
        for &sq in pieces.iter().filter(|&&sq| sq != selected) {
            assert!(rules.legal_moves(sq).unwrap().is_empty());
            let mut copy = rules.clone();
            assert_eq!(
                copy.apply_move(sq, selected),
                Err(RulesError::IllegalMove { from: sq, to: selected })
            );
            assert_eq!(&copy, rules);
        }
    }

    assert_eq!(rules.is_game_over(), rules.movable_pieces().is_empty());
}

#[test]
fn test_random_hops_keep_invariants() {
    let mut rng = rand::rng();

    for _ in 0..GAMES {
        let mut rules = Rules::new();

        for _ in 0..MAX_HOPS {
            check_position(&rules);
            if rules.is_game_over() {
                assert_eq!(rules.winner(), Some(rules.current_turn().opposite()));
                break;
            }

            let from = rules.movable_pieces().into_iter().choose(&mut rng).unwrap();
            let to = rules.legal_moves(from).unwrap().into_iter().choose(&mut rng).unwrap();

            let before = rules.clone();
            let moving = before.piece_at(from).unwrap().unwrap();
            let is_jump = (to.rank() - from.rank()).abs() == 2;

            let record = rules.apply_move(from, to).unwrap();
            let landed = rules.piece_at(to).unwrap().unwrap();

            assert_eq!(rules.piece_at(from).unwrap(), None);
            assert_eq!(landed.side(), moving.side());
            if moving.is_king() {
                assert!(landed.is_king());
                assert!(!record.promoted);
            }
            assert_eq!(record.promoted, landed.is_king() && !moving.is_king());

            if is_jump {
                let mid = from.midpoint(to);
                assert_eq!(record.captured, Some(mid));
                assert!(before.piece_at(mid).unwrap().is_some());
                assert_eq!(rules.piece_at(mid).unwrap(), None);
                assert_eq!(
                    rules.board().count(moving.side().opposite()) + 1,
                    before.board().count(moving.side().opposite())
                );
            } else {
                assert_eq!(record.captured, None);
            }

            match record.outcome {
                MoveOutcome::ChainContinues => {
                    assert!(is_jump);
                    assert_eq!(rules.current_turn(), before.current_turn());
                    assert_eq!(rules.selected(), Some(to));
                }
                MoveOutcome::TurnComplete => {
                    assert_eq!(rules.current_turn(), before.current_turn().opposite());
                    assert!(!rules.in_chain());
                }
            }
        }
    }
}

#[test]
fn test_random_turns_undo_to_start() {
    let mut rng = rand::rng();

    for _ in 0..GAMES / 4 {
        let mut game = GameState::new();
        let mut turns = 0;

        while game.status() == GameStatus::InProgress && turns < MAX_HOPS {
            let move_list = MoveList::new(game.rules());
            let turn = move_list.iter().choose(&mut rng).unwrap().clone();
            let side = game.side_to_move();

            game.play_turn(&turn).unwrap();
            turns += 1;

            assert!(!game.rules().in_chain());
            if !game.rules().is_game_over() {
                assert_eq!(game.side_to_move(), side.opposite());
            }
            for captured in &turn.captures {
                assert_eq!(game.board().get(*captured).unwrap(), None);
            }
        }

        while game.undo_turn() {
            turns -= 1;
        }
        assert_eq!(turns, 0);
        assert_eq!(game.rules(), &Rules::new());
        assert!(game.move_history().is_empty());
    }
}
