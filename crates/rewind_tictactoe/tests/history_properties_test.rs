//! Property tests over random click and jump sequences.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{GameInvariants, InvariantSet};
use rewind_tictactoe::{Game, Placement, Player, Position, Square};

#[derive(Debug, Clone, Copy)]
enum Action {
    Click(usize),
    Jump(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..9).prop_map(Action::Click),
        1 => (0usize..10).prop_map(Action::Jump),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(actions in prop::collection::vec(action(), 0..40)) {
        let mut game = Game::new();

        for action in actions {
            let before = game.clone();
            match action {
                Action::Click(index) => {
                    let pos = Position::from_index(index).unwrap();
                    match game.accept_move(pos) {
                        Placement::Placed { player, position, step } => {
                            prop_assert_eq!(step, before.step() + 1);
                            prop_assert_eq!(game.history().len(), before.step() + 2);
                            prop_assert_eq!(player, before.to_move());
                            prop_assert_eq!(game.current().get(position), Square::Occupied(player));
                            prop_assert_eq!(&game.history()[..=before.step()], &before.history()[..=before.step()]);
                        }
                        Placement::Ignored(_) => prop_assert_eq!(&game, &before),
                    }
                }
                Action::Jump(step) => {
                    if game.jump_to(step).is_ok() {
                        prop_assert_eq!(game.step(), step);
                        prop_assert_eq!(game.history(), before.history());
                    } else {
                        prop_assert!(step >= before.history().len());
                        prop_assert_eq!(&game, &before);
                    }
                }
            }

            prop_assert!(GameInvariants::check_all(&game).is_ok());
            let expected = if game.step() % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(game.to_move(), expected);
        }
    }

    #[test]
    fn filled_square_is_always_a_noop(prefix in prop::collection::vec(0usize..9, 1..9)) {
        let mut game = Game::new();
        for index in prefix {
            game.accept_move(Position::from_index(index).unwrap());
        }

        for pos in Position::ALL {
            if !game.current().is_empty(pos) {
                let before = game.clone();
                prop_assert!(!game.accept_move(pos).is_placed());
                prop_assert_eq!(&game, &before);
            }
        }
    }
}
