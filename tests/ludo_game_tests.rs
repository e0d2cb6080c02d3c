//! Ludo turn engine tests.
//!
//! A size-9 board has start areas of side 3: each arm carries 7 track
//! tiles, and a token walks 29 steps from its entry tile to its goal.

use tile_race::{
    Board, BoardInfo, Color, EventLog, GameConfig, GameEvent, LudoGame, LudoPlayer, PlayerId,
    PlayerProfile, TileId, TokenId, TokenStatus,
};

const ARM_COLORS: [Color; 4] = [
    Color::rgb(220, 40, 40),
    Color::rgb(40, 40, 220),
    Color::rgb(40, 170, 40),
    Color::rgb(230, 200, 30),
];

fn board(size: u32) -> Board {
    Board::cross(BoardInfo::new("Ludo", "Four arms").unwrap(), size, &ARM_COLORS).unwrap()
}

fn players(n: usize) -> Vec<LudoPlayer> {
    (0..n)
        .map(|i| {
            let name = format!("Seat {}", i + 1);
            LudoPlayer::new(PlayerProfile::new(name, ARM_COLORS[i], i > 0).unwrap())
        })
        .collect()
}

fn game(n: usize, dice: usize) -> LudoGame {
    let config = GameConfig::new().with_dice_count(dice).with_seed(21);
    LudoGame::new(board(9), players(n), config).unwrap()
}

fn token(game: &LudoGame, seat: u8, id: u8) -> (TokenStatus, TileId) {
    let token = game.players()[PlayerId::new(seat)].token(TokenId::new(id)).unwrap();
    (token.status(), token.current_tile())
}

fn names(events: &[GameEvent]) -> Vec<&'static str> {
    events.iter().map(GameEvent::name).collect()
}

/// Without a released token, anything but a six forfeits the turn.
#[test]
fn test_non_six_skips() {
    let mut game = game(2, 1);
    for roll in 1..=5 {
        let before = game.players().clone();
        let report = game.perform_turn_with_roll(roll).unwrap();
        assert_eq!(
            names(&report.events)[..2],
            ["dice-rolled", "turn-skipped"]
        );
        assert_eq!(game.players(), &before);
    }
}

/// A six releases the lowest waiting token onto the entry tile.
#[test]
fn test_six_releases_onto_entry() {
    let mut game = game(2, 1);
    let entry = game.board().cross_layout().unwrap().arms()[0].entry;

    let report = game.perform_turn_with_roll(6).unwrap();
    assert!(report.events.contains(&GameEvent::TokenReleased {
        player: PlayerId::new(0),
        token: TokenId::new(1),
        tile: entry,
    }));
    assert_eq!(token(&game, 0, 1), (TokenStatus::Released, entry));
    assert_eq!(token(&game, 0, 2).0, TokenStatus::NotReleased);
}

/// With a token out, a six moves it instead of releasing another.
#[test]
fn test_six_moves_released_token() {
    let mut game = game(2, 1);
    game.perform_turn_with_roll(6).unwrap();
    game.perform_turn_with_roll(2).unwrap();

    let report = game.perform_turn_with_roll(6).unwrap();
    assert_eq!(names(&report.events)[1], "token-moved");
    assert_eq!(token(&game, 0, 2).0, TokenStatus::NotReleased);
    let (status, tile) = token(&game, 0, 1);
    assert_eq!(status, TokenStatus::Released);
    assert_ne!(tile, game.board().cross_layout().unwrap().arms()[0].entry);
}

/// Landing on an opponent sends it back to its start slot; the capturer stays.
#[test]
fn test_capture_on_landing() {
    let mut game = game(2, 2);
    let layout = game.board().cross_layout().unwrap().clone();
    let (red, blue) = (&layout.arms()[0], &layout.arms()[1]);

    game.perform_turn_with_roll(6).unwrap();
    game.perform_turn_with_roll(6).unwrap();
    assert_eq!(token(&game, 1, 1), (TokenStatus::Released, blue.entry));

    // one arm's worth of track separates the two entries
    let report = game.perform_turn_with_roll(7).unwrap();
    assert_eq!(
        names(&report.events),
        vec!["dice-rolled", "token-moved", "token-captured", "current-player-changed"]
    );
    assert!(report.events.contains(&GameEvent::TokenCaptured {
        owner: PlayerId::new(1),
        token: TokenId::new(1),
        by: PlayerId::new(0),
        tile: blue.entry,
        returned_to: blue.token_slots[0],
    }));
    assert_eq!(token(&game, 0, 1), (TokenStatus::Released, blue.entry));
    assert_eq!(token(&game, 1, 1), (TokenStatus::NotReleased, blue.token_slots[0]));
    assert_ne!(red.entry, blue.entry);
}

/// Releasing onto an occupied entry captures the occupant.
#[test]
fn test_capture_on_release() {
    let mut game = game(2, 2);
    let layout = game.board().cross_layout().unwrap().clone();
    let (red, blue) = (&layout.arms()[0], &layout.arms()[1]);

    game.perform_turn_with_roll(6).unwrap();
    game.perform_turn_with_roll(6).unwrap();
    game.perform_turn_with_roll(7).unwrap();

    let report = game.perform_turn_with_roll(6).unwrap();
    assert_eq!(
        names(&report.events),
        vec![
            "dice-rolled",
            "token-released",
            "token-captured",
            "round-incremented",
            "current-player-changed"
        ]
    );
    assert_eq!(token(&game, 1, 1), (TokenStatus::Released, blue.entry));
    assert_eq!(token(&game, 0, 1), (TokenStatus::NotReleased, red.token_slots[0]));
}

/// Finished tokens rest on the goal; all four finished wins.
#[test]
fn test_all_tokens_home_wins() {
    let mut game = game(2, 1);
    let log = EventLog::new();
    game.subscribe(log.clone());
    let goal = game.board().cross_layout().unwrap().arms()[0].goal;

    let mut last = None;
    for id in 1..=4u8 {
        for roll in [6, 6, 6, 6, 6, 6] {
            last = Some(game.perform_turn_with_roll(roll).unwrap());
            if game.is_finished() {
                break;
            }
            game.perform_turn_with_roll(1).unwrap();
        }
        assert_eq!(token(&game, 0, id), (TokenStatus::Finished, goal));
    }

    let last = last.unwrap();
    assert_eq!(game.winner(), Some(PlayerId::new(0)));
    assert_eq!(
        names(&last.events),
        vec![
            "dice-rolled",
            "token-moved",
            "token-finished",
            "current-player-changed",
            "game-finished"
        ]
    );
    let finished = log
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::TokenFinished { .. }))
        .count();
    assert_eq!(finished, 4);

    let waiting = game.players()[PlayerId::new(1)]
        .tokens()
        .iter()
        .all(|t| t.status() == TokenStatus::NotReleased);
    assert!(waiting);
}

/// Seat `i` plays arm `i`.
#[test]
fn test_seats_use_their_own_arm() {
    let mut game = LudoGame::new(board(13), players(4), GameConfig::new().with_seed(2)).unwrap();
    let layout = game.board().cross_layout().unwrap().clone();
    for seat in 0..4u8 {
        game.perform_turn_with_roll(6).unwrap();
        assert_eq!(token(&game, seat, 1).1, layout.arms()[seat as usize].entry);
    }
    assert_eq!(game.round_number(), 2);
}

/// Restart puts every token back on its slot.
#[test]
fn test_restart_resets_tokens() {
    let mut game = game(3, 1);
    game.perform_turn_with_roll(6).unwrap();
    let game = game.restart().unwrap();
    let slots = game.board().cross_layout().unwrap().arms()[0].token_slots;
    assert_eq!(token(&game, 0, 1), (TokenStatus::NotReleased, slots[0]));
}

/// Ludo needs a cross board and at most four players.
#[test]
fn test_setup_validation() {
    let linear = Board::linear(BoardInfo::new("Line", "Zigzag").unwrap(), 6, 6).unwrap();
    assert!(LudoGame::new(linear, players(2), GameConfig::new()).is_err());
    let mut five = players(4);
    five.push(five[0].clone());
    assert!(LudoGame::new(board(9), five, GameConfig::new()).is_err());
    assert!(LudoGame::new(board(9), players(1), GameConfig::new()).is_err());
}

/// Random play keeps every token on a tile its status allows.
#[test]
fn test_random_play_invariants() {
    let mut game = LudoGame::new(board(11), players(4), GameConfig::new().with_seed(99)).unwrap();
    let layout = game.board().cross_layout().unwrap().clone();
    for _ in 0..400 {
        game.perform_turn().unwrap();
        for (seat, player) in game.players().iter() {
            let arm = &layout.arms()[seat.index()];
            for token in player.tokens() {
                match token.status() {
                    TokenStatus::NotReleased => {
                        assert_eq!(token.current_tile(), arm.token_slots[token.id().index()]);
                    }
                    TokenStatus::Finished => assert_eq!(token.current_tile(), arm.goal),
                    TokenStatus::Released => assert!(!arm.contains_start(token.current_tile())),
                }
            }
        }
    }
}
