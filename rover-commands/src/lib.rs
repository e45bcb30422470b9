#![no_std]

/// Enum represents what motion command the rover should execute.
///
/// Every command is a single unit step: one grid cell of travel or one
/// quarter-turn of rotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move forward by one grid cell in the current heading.
    Forward,

    /// Move backward by one grid cell, opposite the current heading.
    Backward,

    /// Turn left by one quarter-turn.
    TurnLeft,

    /// Turn right by one quarter-turn.
    TurnRight,
}

impl Command {
    /// Decode a single-character command token. Returns `None` for any
    /// character outside the `F`/`B`/`R`/`L` vocabulary.
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'F' => Some(Command::Forward),
            'B' => Some(Command::Backward),
            'R' => Some(Command::TurnRight),
            'L' => Some(Command::TurnLeft),
            _ => None,
        }
    }

    /// The token this command is written as on the wire.
    pub const fn token(&self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Backward => 'B',
            Command::TurnRight => 'R',
            Command::TurnLeft => 'L',
        }
    }
}
