//! Property tests for bot-mode sessions over arbitrary human play.

use std::time::{Duration, Instant};

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe::{BOT, GameMode, GameSession, HUMAN};
use tictactoe_core::{Board, Position, Square};

const DELAY: Duration = Duration::from_millis(250);

/// Marks only ever appear on empty squares, and the counts stay balanced.
fn assert_extends(before: &Board, after: &Board) -> Result<(), TestCaseError> {
    for pos in Position::ALL {
        if before.get(pos) != Square::Empty {
            prop_assert_eq!(after.get(pos), before.get(pos));
        }
    }
    let (x, o) = (after.count(HUMAN), after.count(BOT));
    prop_assert!(x == o || x == o + 1, "X={} O={}", x, o);
    Ok(())
}

proptest! {
    #[test]
    fn bot_replies_once_per_human_move(
        choices in proptest::collection::vec(0usize..9, 1..6),
        seed in any::<u64>(),
    ) {
        let mut session = GameSession::new(DELAY, ChaCha8Rng::seed_from_u64(seed));
        session.choose_mode(GameMode::Bot);
        let t0 = Instant::now();

        for index in choices {
            if session.game().is_over() {
                break;
            }
            prop_assert_eq!(session.to_move(), HUMAN);

            let before = session.board().clone();
            let empties = before.empty_positions();
            let pos = empties[index % empties.len()];
            prop_assert!(session.click_at(pos, t0).is_ok());
            assert_extends(&before, session.board())?;

            let after_human = session.board().clone();
            let reply = session.play_bot(t0 + DELAY);
            prop_assert!(!session.is_bot_thinking());
            match reply {
                Some(choice) => {
                    prop_assert!(after_human.is_empty(choice.position));
                    prop_assert_eq!(session.board().get(choice.position), Square::Occupied(BOT));
                }
                None => prop_assert!(session.game().is_over()),
            }
            assert_extends(&after_human, session.board())?;
        }
    }
}
