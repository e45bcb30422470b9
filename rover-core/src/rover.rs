use getset::CopyGetters;
use log::warn;
use rover_commands::Command;

use crate::heading::Heading;
use crate::position::Position;

/// The rover's state on the grid: where it sits and which way it faces.
/// Mutated only through [`Rover::execute`] / [`Rover::apply`].
#[derive(Debug, CopyGetters)]
pub struct Rover {
    /// The grid cell the rover currently occupies.
    #[getset(get_copy = "pub")]
    location: Position,

    /// The heading the rover currently faces.
    #[getset(get_copy = "pub")]
    direction: Heading,
}

impl Rover {
    pub fn new(location: Position, direction: Heading) -> Self {
        Rover {
            location,
            direction,
        }
    }

    /// Apply one command to the current state.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Forward => {
                self.location = self.location + self.direction.unit_step();
            }
            Command::Backward => {
                self.location = self.location - self.direction.unit_step();
            }
            Command::TurnLeft => {
                self.direction = self.direction.one_left();
            }
            Command::TurnRight => {
                self.direction = self.direction.one_right();
            }
        }
    }

    /// Execute a batch of command tokens, left to right; later tokens observe
    /// the state left behind by earlier ones. A token outside the command
    /// vocabulary is skipped with a diagnostic and the batch continues.
    pub fn execute(&mut self, tokens: &[char]) {
        for &token in tokens {
            match Command::from_token(token) {
                Some(command) => self.apply(command),
                None => warn!("unrecognised command: {:?}", token),
            }
        }
    }
}
