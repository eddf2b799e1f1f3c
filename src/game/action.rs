/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns true if other lies on the other axis.
    ///
    /// This is the turn rule applied at each tick: a queued direction only
    /// takes effect when it is perpendicular to the current motion, so both
    /// reversals and repeats of the current direction are dropped.
    pub fn is_perpendicular(&self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Delta scaled by the board's cell size
    pub fn scaled_delta(&self, cell_size: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (dx * cell_size, dy * cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
    }

    #[test]
    fn test_perpendicular_turns() {
        assert!(Direction::Right.is_perpendicular(Direction::Up));
        assert!(Direction::Right.is_perpendicular(Direction::Down));
        assert!(Direction::Up.is_perpendicular(Direction::Left));

        // Same axis: reversal and repeat are both rejected
        assert!(!Direction::Right.is_perpendicular(Direction::Left));
        assert!(!Direction::Right.is_perpendicular(Direction::Right));
        assert!(!Direction::Down.is_perpendicular(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_scaled_delta() {
        assert_eq!(Direction::Right.scaled_delta(20), (20, 0));
        assert_eq!(Direction::Up.scaled_delta(20), (0, -20));
    }
}
