//! Tests for the game session: turns, rejections, bot replies and resets.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe::{BOT, GameMode, GameSession, HUMAN};
use tictactoe_core::{Board, BotReason, MoveError, Player, Position};

const DELAY: Duration = Duration::from_millis(1000);

fn new_session(mode: GameMode) -> GameSession {
    let mut session = GameSession::new(DELAY, ChaCha8Rng::seed_from_u64(11));
    session.choose_mode(mode);
    session
}

/// Clicks `pos` and lets the bot reply once its delay has passed.
fn human_then_bot(session: &mut GameSession, pos: Position, now: Instant) -> Option<Position> {
    session.click_at(pos, now).unwrap();
    session.play_bot(now + DELAY).map(|choice| choice.position)
}

#[test]
fn test_human_is_x_and_bot_is_o() {
    assert_eq!(HUMAN, Player::X);
    assert_eq!(BOT, Player::O);
}

#[test]
fn test_new_session_waits_for_mode() {
    let session = GameSession::new(DELAY, ChaCha8Rng::seed_from_u64(0));
    assert_eq!(session.mode(), None);
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn test_click_on_occupied_square_rejected() {
    let mut session = new_session(GameMode::Friend);
    session.click(Position::Center).unwrap();
    assert_eq!(
        session.click(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(session.to_move(), Player::O);
}

#[test]
fn test_winning_line_reported_for_highlight() {
    let mut session = new_session(GameMode::Friend);
    // X down the left column, O in the middle column.
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ] {
        session.click(pos).unwrap();
    }
    let win = session.winning_line().unwrap();
    assert_eq!(win.winner, Player::X);
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
    assert_eq!(session.click(Position::BottomRight), Err(MoveError::GameOver));
}

#[test]
fn test_bot_blocks_then_wins() {
    let mut session = new_session(GameMode::Bot);
    let t0 = Instant::now();

    // X corner, bot takes the center.
    assert_eq!(
        human_then_bot(&mut session, Position::TopLeft, t0),
        Some(Position::Center)
    );
    // X threatens the top row, bot blocks.
    assert_eq!(
        human_then_bot(&mut session, Position::TopCenter, t0),
        Some(Position::TopRight)
    );
    // Bot holds the anti-diagonal pair and completes it.
    assert_eq!(
        human_then_bot(&mut session, Position::MiddleLeft, t0),
        Some(Position::BottomLeft)
    );
    assert_eq!(session.status(), "Winner: O");
    assert!(!session.is_bot_thinking());
}

#[test]
fn test_bot_reason_on_empty_reply() {
    let mut session = new_session(GameMode::Bot);
    let t0 = Instant::now();
    session.click_at(Position::BottomRight, t0).unwrap();
    let choice = session.play_bot(t0 + DELAY).unwrap();
    assert_eq!(choice.reason, BotReason::Center);
}

#[test]
fn test_fork_beats_bot_and_no_reply_is_scheduled() {
    let mut session = new_session(GameMode::Bot);
    let t0 = Instant::now();

    assert_eq!(
        human_then_bot(&mut session, Position::TopLeft, t0),
        Some(Position::Center)
    );
    assert_eq!(
        human_then_bot(&mut session, Position::BottomRight, t0),
        Some(Position::TopRight)
    );
    // X forks the left column and the bottom row; the bot blocks the row.
    assert_eq!(
        human_then_bot(&mut session, Position::BottomLeft, t0),
        Some(Position::BottomCenter)
    );

    session.click_at(Position::MiddleLeft, t0).unwrap();
    assert_eq!(session.status(), "Winner: X");
    assert!(!session.is_bot_thinking());
    assert_eq!(session.play_bot(t0 + DELAY), None);
}

#[test]
fn test_reset_keeps_mode_and_returns_turn_to_x() {
    let mut session = new_session(GameMode::Bot);
    let t0 = Instant::now();
    human_then_bot(&mut session, Position::TopLeft, t0);
    session.click_at(Position::BottomRight, t0).unwrap();

    session.reset();
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.mode(), Some(GameMode::Bot));
    assert_eq!(session.status(), "Player: X's Turn");
    assert!(session.play_bot(t0 + DELAY * 10).is_none());
}

#[test]
fn test_return_to_mode_selection_cancels_bot() {
    let mut session = new_session(GameMode::Bot);
    let t0 = Instant::now();
    session.click_at(Position::TopLeft, t0).unwrap();
    session.return_to_mode_selection();

    assert_eq!(session.mode(), None);
    assert!(!session.is_bot_thinking());
    assert_eq!(session.play_bot(t0 + DELAY), None);
    assert_eq!(
        session.click(Position::Center),
        Err(MoveError::NoModeSelected)
    );
}

#[test]
fn test_zero_delay_bot_is_due_immediately() {
    let mut session = GameSession::new(Duration::ZERO, ChaCha8Rng::seed_from_u64(0));
    session.choose_mode(GameMode::Bot);
    let t0 = Instant::now();
    session.click_at(Position::Center, t0).unwrap();
    assert!(session.bot_due(t0));
    assert_eq!(session.time_until_bot(t0), Some(Duration::ZERO));
    assert_eq!(session.play_bot(t0).unwrap().position, Position::TopLeft);
}

#[test]
fn test_click_while_bot_thinks_names_the_human() {
    let mut session = new_session(GameMode::Bot);
    let t0 = Instant::now();
    session.click_at(Position::TopLeft, t0).unwrap();

    let err = session.click_at(Position::TopCenter, t0).unwrap_err();
    assert_eq!(err, MoveError::NotYourTurn(HUMAN));
    assert_eq!(err.to_string(), "It's not X's turn");
    assert_eq!(session.to_move(), BOT);
}
