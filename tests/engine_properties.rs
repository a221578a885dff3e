//! Rule invariants of the game engine, checked over every reachable position

use std::collections::HashSet;

use tictactoe_td::{
    Error,
    tictactoe::{Game, GameOutcome, Player, State},
};

/// Visit every position reachable from the empty board, once per distinct state
fn for_each_reachable(mut visit: impl FnMut(&Game)) -> usize {
    let mut seen = HashSet::new();
    let mut stack = vec![Game::new()];

    while let Some(game) = stack.pop() {
        if !seen.insert(game.state()) {
            continue;
        }
        visit(&game);
        if game.is_terminal() {
            continue;
        }
        for action in game.available_actions() {
            let mut child = game.clone();
            assert!(child.apply_move(action).unwrap());
            stack.push(child);
        }
    }

    seen.len()
}

fn play(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for &pos in moves {
        assert!(game.apply_move(pos).unwrap(), "move {pos} should apply");
    }
    game
}

mod invariants {
    use super::*;

    #[test]
    fn reachable_position_count() {
        // Well-known count of legal tic-tac-toe positions including the empty board
        assert_eq!(for_each_reachable(|_| {}), 5478);
    }

    #[test]
    fn never_two_winners() {
        for_each_reachable(|game| {
            assert!(
                !(game.is_winner(Player::X) && game.is_winner(Player::O)),
                "both marks win on\n{}",
                game.board()
            );
        });
    }

    #[test]
    fn terminal_non_draw_has_exactly_one_winner() {
        for_each_reachable(|game| {
            if game.is_terminal() && !game.is_draw() {
                let winners = [Player::X, Player::O]
                    .into_iter()
                    .filter(|&p| game.is_winner(p))
                    .count();
                assert_eq!(winners, 1, "board:\n{}", game.board());
            }
        });
    }

    #[test]
    fn reward_is_bounded_and_antisymmetric() {
        for_each_reachable(|game| {
            for player in [Player::X, Player::O] {
                let reward = game.reward(player);
                assert!([-1.0, 0.0, 1.0].contains(&reward));
                assert_eq!(reward, -game.reward(player.opponent()));
            }
            if !game.is_terminal() || game.is_draw() {
                assert_eq!(game.reward(Player::X), 0.0);
            }
        });
    }

    #[test]
    fn available_actions_is_idempotent() {
        for_each_reachable(|game| {
            let first = game.available_actions();
            let second = game.available_actions();
            assert_eq!(first, second);
            assert!(first.windows(2).all(|w| w[0] < w[1]));
        });
    }

    #[test]
    fn terminal_states_reject_moves() {
        for_each_reachable(|game| {
            if game.is_terminal() {
                let mut copy = game.clone();
                for action in 0..9 {
                    assert!(matches!(copy.apply_move(action), Err(Error::GameOver)));
                }
                assert_eq!(copy.state(), game.state());
            }
        });
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn reset_round_trip() {
        let mut game = play(&[4, 0, 8]);
        let state = game.reset();

        assert_eq!(state, State::empty());
        assert_eq!(game.available_actions(), (0..9).collect::<Vec<_>>());
        assert!(!game.is_winner(Player::X));
        assert!(!game.is_winner(Player::O));
        assert!(!game.is_draw());
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn top_row_win_for_x() {
        let game = play(&[0, 4, 1, 3, 2]);

        assert!(game.is_winner(Player::X));
        assert!(game.is_terminal());
        assert_eq!(game.reward(Player::X), 1.0);
        assert_eq!(game.reward(Player::O), -1.0);
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn full_board_draw() {
        // X: 0, 1, 5, 6, 8   O: 2, 3, 4, 7
        let game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);

        assert!(game.is_draw());
        assert!(game.is_terminal());
        assert!(game.available_actions().is_empty());
        assert_eq!(game.reward(Player::X), 0.0);
        assert_eq!(game.reward(Player::O), 0.0);
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn win_on_last_cell_is_not_a_draw() {
        // X: 0, 1, 5, 6, 2 fills the board and completes the top row
        let game = play(&[0, 3, 1, 4, 5, 7, 6, 8, 2]);

        assert!(game.is_winner(Player::X));
        assert!(!game.is_draw());
        assert!(game.available_actions().is_empty());
    }

    #[test]
    fn occupied_cell_can_be_retried() {
        let mut game = play(&[4]);

        assert!(!game.apply_move(4).unwrap());
        assert_eq!(game.current_player(), Player::O);
        assert!(game.apply_move(0).unwrap());
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn out_of_range_is_a_distinct_error() {
        let mut game = Game::new();
        assert!(matches!(
            game.apply_move(42),
            Err(Error::InvalidPosition { position: 42 })
        ));
    }
}
