use std::fmt;

/// A move on the wire is 1, 2 or 3. Each move beats the next one
/// cyclically: rock beats scissors, scissors beat paper, paper beats rock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Rock = 1,
    Scissors = 2,
    Paper = 3,
}

impl Move {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Move::Rock),
            2 => Some(Move::Scissors),
            3 => Some(Move::Paper),
            _ => None,
        }
    }

    /// `(self - other) mod 3`
    pub fn diff(self, other: Move) -> u8 {
        (self.value() + 3 - other.value()) % 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Scissors => "scissors",
            Move::Paper => "paper",
        };
        f.write_str(name)
    }
}

/// Outcome of reading a move out of free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Valid(Move),
    Invalid,
}

impl MoveInput {
    pub fn parse(text: &str) -> Self {
        text.trim()
            .parse::<u8>()
            .ok()
            .and_then(Move::from_value)
            .map_or(MoveInput::Invalid, MoveInput::Valid)
    }
}
