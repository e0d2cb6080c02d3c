//! Ludo participant and tokens.

use serde::{Deserialize, Serialize};

use crate::board::ArmLayout;
use crate::core::config::TOKENS_PER_PLAYER;
use crate::core::ValidationError;
use crate::tiles::TileId;

use super::profile::PlayerProfile;
use super::Piece;

/// Token number within its owner's set, 1-based.
///
/// Deserialized ids must lie in `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TokenId(u8);

impl TokenId {
    /// An id to look a token up by. Ids outside `1..=4` match no token.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// 0-based index into the owner's token array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }
}

impl TryFrom<u8> for TokenId {
    type Error = ValidationError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (1..=TOKENS_PER_PLAYER).contains(&usize::from(id)) {
            Ok(Self(id))
        } else {
            let expected = format!("an id in [1, {}]", TOKENS_PER_PLAYER);
            Err(ValidationError::new("token.id", id, expected))
        }
    }
}

impl From<TokenId> for u8 {
    fn from(id: TokenId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.0)
    }
}

/// Where a token is in its life cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenStatus {
    /// Waiting in the start area.
    #[default]
    NotReleased,
    /// On the shared or finish track.
    Released,
    /// Reached its goal.
    Finished,
}

/// One of a Ludo player's four pieces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    status: TokenStatus,
    tile: TileId,
}

impl Token {
    fn new(id: TokenId) -> Self {
        Self {
            id,
            status: TokenStatus::NotReleased,
            tile: TileId::HOME,
        }
    }

    #[must_use]
    pub fn id(&self) -> TokenId {
        self.id
    }

    #[must_use]
    pub fn status(&self) -> TokenStatus {
        self.status
    }

    #[must_use]
    pub fn current_tile(&self) -> TileId {
        self.tile
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.status == TokenStatus::Released
    }

    pub(crate) fn set_status(&mut self, status: TokenStatus) {
        self.status = status;
    }

    /// Back to the start area, unreleased.
    pub(crate) fn send_home(&mut self, arm: &ArmLayout) {
        self.status = TokenStatus::NotReleased;
        self.tile = arm.token_slots[self.id.index()];
    }
}

impl Piece for Token {
    fn tile(&self) -> TileId {
        self.tile
    }

    fn relocate(&mut self, tile: TileId) {
        self.tile = tile;
    }
}

/// A Ludo player: a profile and exactly four tokens.
///
/// The piece shape is fixed for Ludo, so there is no token type. A
/// deserialized player must hold tokens 1 to 4 in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LudoPlayerState")]
pub struct LudoPlayer {
    profile: PlayerProfile,
    tokens: [Token; TOKENS_PER_PLAYER],
}

impl LudoPlayer {
    /// A player whose tokens are not yet placed on a board.
    ///
    /// The engine pins the tokens to the seat's start area when the match
    /// begins.
    pub fn new(profile: PlayerProfile) -> Self {
        Self {
            profile,
            tokens: std::array::from_fn(|i| Token::new(TokenId(i as u8 + 1))),
        }
    }

    #[must_use]
    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.profile.name()
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token; TOKENS_PER_PLAYER] {
        &self.tokens
    }

    /// Get a token by id.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.iter_mut().find(|t| t.id == id)
    }

    pub(crate) fn tokens_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.tokens.iter_mut()
    }

    /// Lowest-numbered token on the board.
    #[must_use]
    pub fn first_released(&self) -> Option<TokenId> {
        self.tokens.iter().find(|t| t.is_released()).map(Token::id)
    }

    /// Lowest-numbered token still in the start area.
    #[must_use]
    pub fn first_waiting(&self) -> Option<TokenId> {
        self.tokens
            .iter()
            .find(|t| t.status == TokenStatus::NotReleased)
            .map(Token::id)
    }

    #[must_use]
    pub fn has_released(&self) -> bool {
        self.first_released().is_some()
    }

    /// Whether every token has reached the goal.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.tokens.iter().all(|t| t.status == TokenStatus::Finished)
    }

    /// Pin every token to its slot in `arm`'s start area.
    pub fn reset(&mut self, arm: &ArmLayout) {
        for token in &mut self.tokens {
            token.send_home(arm);
        }
    }
}

#[derive(Deserialize)]
struct LudoPlayerState {
    profile: PlayerProfile,
    tokens: [Token; TOKENS_PER_PLAYER],
}

impl TryFrom<LudoPlayerState> for LudoPlayer {
    type Error = ValidationError;

    fn try_from(state: LudoPlayerState) -> Result<Self, Self::Error> {
        for (i, token) in state.tokens.iter().enumerate() {
            if token.id.index() != i {
                let expected = format!("token {} at position {}", i + 1, i + 1);
                return Err(ValidationError::new("tokens", token.id, expected));
            }
        }
        Ok(Self {
            profile: state.profile,
            tokens: state.tokens,
        })
    }
}
