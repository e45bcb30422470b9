use crate::position::Position;

/// The cardinal direction the rover currently faces.
///
/// Variants are declared in clockwise rotation order; `CLOCKWISE` is that
/// order as data, and all rotation is index arithmetic over it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// The rotation cycle. A right turn advances one step, a left turn
    /// retreats one, both wrapping modulo 4.
    pub const CLOCKWISE: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    fn index(&self) -> i32 {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Rotate clockwise by `count` quarter-turns; negative counts rotate
    /// counter-clockwise.
    pub fn plus_quarter_turns(&self, count: i32) -> Self {
        let index = (self.index() + count).rem_euclid(4);
        Self::CLOCKWISE[index as usize]
    }

    pub fn one_right(&self) -> Self {
        self.plus_quarter_turns(1)
    }

    pub fn one_left(&self) -> Self {
        self.plus_quarter_turns(-1)
    }

    pub fn opposite(&self) -> Self {
        self.plus_quarter_turns(2)
    }

    /// The grid delta of one forward step in this heading. A backward step
    /// is the subtraction of the same vector.
    pub fn unit_step(&self) -> Position {
        match self {
            Heading::North => Position::new(0, 1),
            Heading::East => Position::new(1, 0),
            Heading::South => Position::new(0, -1),
            Heading::West => Position::new(-1, 0),
        }
    }
}
