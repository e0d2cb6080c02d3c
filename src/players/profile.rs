//! Who is playing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::require_text;
use crate::core::{Color, Result, ValidationError};

/// Identity shared by both game variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    name: String,
    color: Color,
    is_bot: bool,
}

impl PlayerProfile {
    /// Create a profile; the name must not be blank.
    pub fn new(name: impl Into<String>, color: Color, is_bot: bool) -> Result<Self> {
        let name = name.into();
        require_text("player.name", &name)?;
        Ok(Self { name, color, is_bot })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }
}

/// Shape of a ladder-game player's piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    #[default]
    Circle,
    Square,
    Triangle,
    Star,
    Diamond,
}

impl TokenType {
    /// All token types, in display order.
    pub const ALL: [TokenType; 5] = [
        TokenType::Circle,
        TokenType::Square,
        TokenType::Triangle,
        TokenType::Star,
        TokenType::Diamond,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Circle => "circle",
            TokenType::Square => "square",
            TokenType::Triangle => "triangle",
            TokenType::Star => "star",
            TokenType::Diamond => "diamond",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TokenType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ValidationError::new("token_type", s, "circle, square, triangle, star or diamond")
            })
    }
}
