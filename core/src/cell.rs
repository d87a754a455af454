use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Longest answer a cell accepts.
pub const MAX_ANSWER_DIGITS: usize = 3;

/// Text typed into a fillable cell: zero to three ASCII digits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    digits: [u8; MAX_ANSWER_DIGITS],
    len: u8,
}

impl Answer {
    pub const EMPTY: Self = Self {
        digits: [0; MAX_ANSWER_DIGITS],
        len: 0,
    };

    /// Accepts exactly what `^\d{0,3}$` accepts.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() > MAX_ANSWER_DIGITS || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(GameError::InvalidAnswer);
        }

        let mut digits = [0; MAX_ANSWER_DIGITS];
        digits[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            digits,
            len: bytes.len() as u8,
        })
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.digits[..self.len as usize]).unwrap_or_default()
    }

    /// Decimal value, leading zeros ignored; `None` for an empty answer.
    pub fn value(&self) -> Option<u16> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.digits[..self.len as usize]
                .iter()
                .fold(0, |acc, digit| acc * 10 + u16::from(digit - b'0')),
        )
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical state of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    /// Read-only multiplier label.
    Header(u16),
    Answer(Answer),
}

impl BoardCell {
    pub const fn is_header(self) -> bool {
        matches!(self, Self::Header(_))
    }

    /// True for an answer cell holding no text.
    pub const fn is_blank(self) -> bool {
        match self {
            Self::Header(_) => false,
            Self::Answer(answer) => answer.is_empty(),
        }
    }
}

impl Default for BoardCell {
    fn default() -> Self {
        Self::Answer(Answer::EMPTY)
    }
}

impl fmt::Display for BoardCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(label) => write!(f, "{label}"),
            Self::Answer(answer) => answer.fmt(f),
        }
    }
}
