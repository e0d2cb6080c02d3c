//! Variant-independent turn skeleton.

use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use crate::board::Board;
use crate::core::{GameConfig, GameRng, GameRngState, PlayerId, PlayerMap, Result, ValidationError};
use crate::dice::Dice;
use crate::events::{GameEvent, GameObserver};

/// Variant rules plugged into [`BoardGame`].
///
/// The engine calls these during setup and once per turn.
///
/// ## Implementation Notes
///
/// - `validate_setup`: reject boards of the wrong variant and player counts
///   outside the variant's limits
/// - `reset`: put a participant on its starting tile(s)
/// - `resolve_move`: movement, captures and tile actions for one roll, in
///   emission order
/// - `has_won`: pure check, evaluated right after `resolve_move`
pub trait Rules {
    /// Per-seat participant type.
    type Participant: Clone + fmt::Debug;

    /// Check the board and player count before a match starts.
    fn validate_setup(&self, board: &Board, player_count: usize) -> Result<()>;

    /// Return a participant to its starting position.
    fn reset(
        &self,
        board: &Board,
        seat: PlayerId,
        participant: &mut Self::Participant,
    ) -> Result<()>;

    /// Apply `roll` for `seat`, pushing the movement events to `events`.
    fn resolve_move(
        &self,
        board: &Board,
        players: &mut PlayerMap<Self::Participant>,
        seat: PlayerId,
        roll: u32,
        events: &mut Vec<GameEvent>,
    ) -> Result<()>;

    /// Whether the participant meets the winning condition.
    fn has_won(&self, board: &Board, participant: &Self::Participant) -> bool;
}

/// Outcome of one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Who played the turn.
    pub player: PlayerId,
    /// Dice total used.
    pub roll: u32,
    /// Events of the turn, in emission order.
    pub events: Vec<GameEvent>,
    /// The match winner after this turn, if any.
    pub winner: Option<PlayerId>,
}

impl TurnReport {
    /// Whether this turn produced the first winner.
    #[must_use]
    pub fn finished_game(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GameEvent::GameFinished { .. }))
    }

    /// Whether the roll was forfeited.
    #[must_use]
    pub fn skipped(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GameEvent::TurnSkipped { .. }))
    }
}

/// A match: board, players, dice and turn state.
///
/// Every turn takes `&mut self`, so at most one turn is ever in flight.
pub struct BoardGame<R: Rules> {
    rules: R,
    board: Board,
    players: PlayerMap<R::Participant>,
    config: GameConfig,
    dice: Dice,
    rng: GameRng,
    current: PlayerId,
    round: u32,
    winner: Option<PlayerId>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<R: Rules + Default> BoardGame<R> {
    /// Start a match with the variant's default rules.
    pub fn new(board: Board, players: Vec<R::Participant>, config: GameConfig) -> Result<Self> {
        Self::with_rules(R::default(), board, players, config)
    }
}

impl<R: Rules> BoardGame<R> {
    /// Start a match.
    ///
    /// Validates the configuration, the board variant and the player count,
    /// then puts every participant on its starting position. The first
    /// player is seat 0 and the round number starts at 1.
    pub fn with_rules(
        rules: R,
        board: Board,
        players: Vec<R::Participant>,
        config: GameConfig,
    ) -> Result<Self> {
        config.validate()?;
        rules.validate_setup(&board, players.len())?;

        let dice = Dice::new(config.dice_count)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut players = PlayerMap::from_vec(players);
        for (seat, participant) in players.iter_mut() {
            rules.reset(&board, seat, participant)?;
        }

        info!(
            board = board.name(),
            players = players.player_count(),
            dice = config.dice_count,
            seed = rng.seed(),
            "match started"
        );

        Ok(Self {
            rules,
            board,
            players,
            config,
            dice,
            rng,
            current: PlayerId::new(0),
            round: 1,
            winner: None,
            observers: Vec::new(),
        })
    }

    /// Register an observer for all future events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Roll the dice and play the current player's turn.
    #[instrument(skip(self), fields(player = %self.current, round = self.round))]
    pub fn perform_turn(&mut self) -> Result<TurnReport> {
        let roll = self.dice.roll(&mut self.rng);
        let faces = self.dice.values();
        self.play_turn(roll, faces)
    }

    /// Play the current player's turn with a known dice total.
    ///
    /// Used after the dice were thrown through [`roll_dice`] or
    /// [`roll_single_die`]. The total must be reachable with the configured
    /// dice. `DiceRolled` carries the faces showing when they add up to
    /// `roll`, and no faces otherwise.
    ///
    /// [`roll_dice`]: BoardGame::roll_dice
    /// [`roll_single_die`]: BoardGame::roll_single_die
    #[instrument(skip(self), fields(player = %self.current, round = self.round))]
    pub fn perform_turn_with_roll(&mut self, roll: u32) -> Result<TurnReport> {
        let (min, max) = self.dice.total_range();
        if !(min..=max).contains(&roll) {
            let expected = format!("a total in [{}, {}]", min, max);
            return Err(ValidationError::new("roll", roll, expected).into());
        }
        let faces = if self.dice.total() == roll {
            self.dice.values()
        } else {
            SmallVec::new()
        };
        self.play_turn(roll, faces)
    }

    /// Throw every die without playing a turn; returns the total.
    pub fn roll_dice(&mut self) -> u32 {
        self.dice.roll(&mut self.rng)
    }

    /// Throw one die without playing a turn.
    pub fn roll_single_die(&mut self, index: usize) -> Result<u8> {
        self.dice.roll_single(index, &mut self.rng)
    }

    /// Play turns until control returns to the first player or someone wins.
    pub fn play_round(&mut self) -> Result<Vec<TurnReport>> {
        let mut reports = Vec::new();
        loop {
            let report = self.perform_turn()?;
            let done = report.finished_game() || self.current.index() == 0;
            reports.push(report);
            if done {
                return Ok(reports);
            }
        }
    }

    /// A fresh match on the same board with the same players and observers.
    ///
    /// A seeded configuration replays the same dice sequence.
    pub fn restart(self) -> Result<Self> {
        let observers = self.observers;
        let players: Vec<R::Participant> = self.players.values().cloned().collect();
        let mut game = Self::with_rules(self.rules, self.board, players, self.config)?;
        game.observers = observers;
        Ok(game)
    }

    /// Swap in a regenerated board and start over on it.
    ///
    /// Positions, the current player, the round and the winner are reset.
    /// On error the match is left untouched.
    pub fn replace_board(&mut self, board: Board) -> Result<()> {
        self.rules.validate_setup(&board, self.players.player_count())?;
        let mut players = self.players.clone();
        for (seat, participant) in players.iter_mut() {
            self.rules.reset(&board, seat, participant)?;
        }

        info!(board = board.name(), dimensions = ?board.dimensions(), "board replaced");
        self.board = board;
        self.players = players;
        self.current = PlayerId::new(0);
        self.round = 1;
        self.winner = None;
        Ok(())
    }

    /// RNG position, for saving and replaying a match.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue the dice stream from a saved [`rng_state`].
    ///
    /// Board and players are untouched; later rolls and portal draws follow
    /// the saved stream.
    ///
    /// [`rng_state`]: BoardGame::rng_state
    pub fn resume_rng(&mut self, state: &GameRngState) {
        debug!(seed = state.seed, word_pos = state.word_pos, "rng resumed");
        self.rng = GameRng::from_state(state);
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<R::Participant> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&R::Participant> {
        self.players.get(seat)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    fn play_turn(&mut self, roll: u32, faces: SmallVec<[u8; 4]>) -> Result<TurnReport> {
        if let Some(winner) = self.winner {
            warn!(%winner, "turn requested after the match finished");
        }

        let player = self.current;
        let mut events = vec![GameEvent::DiceRolled {
            player,
            values: faces,
            total: roll,
        }];

        self.rules
            .resolve_move(&self.board, &mut self.players, player, roll, &mut events)?;

        let won = self
            .players
            .get(player)
            .is_some_and(|p| self.rules.has_won(&self.board, p));

        let next = player.next(self.players.player_count());
        if next.index() == 0 {
            self.round += 1;
            events.push(GameEvent::RoundIncremented { round: self.round });
        }
        self.current = next;
        events.push(GameEvent::CurrentPlayerChanged {
            previous: player,
            current: next,
        });

        if won && self.winner.is_none() {
            self.winner = Some(player);
            info!(winner = %player, round = self.round, "match finished");
            events.push(GameEvent::GameFinished { winner: player });
        }

        debug!(roll, events = events.len(), "turn resolved");
        self.publish(&events);

        Ok(TurnReport {
            player,
            roll,
            events,
            winner: self.winner,
        })
    }

    fn publish(&mut self, events: &[GameEvent]) {
        for event in events {
            for observer in &mut self.observers {
                observer.on_event(event);
            }
        }
    }
}

impl<R: Rules + fmt::Debug> fmt::Debug for BoardGame<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardGame")
            .field("rules", &self.rules)
            .field("board", &self.board.name())
            .field("players", &self.players)
            .field("current", &self.current)
            .field("round", &self.round)
            .field("winner", &self.winner)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
