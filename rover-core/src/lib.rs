#![cfg_attr(not(test), no_std)]

mod heading;
mod position;
mod rover;

pub use heading::Heading;
pub use position::Position;
pub use rover::Rover;

pub use rover_commands::Command;
