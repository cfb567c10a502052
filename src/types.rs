use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

// Coordinates are always in 0..grid_size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub fn new(x: u16, y: u16) -> Self {
        Pos { x, y }
    }

    pub fn wrapped_add(&self, delta: PosDelta, grid_size: u16) -> Pos {
        let size = grid_size as i32;
        let new_x = (self.x as i32 + delta.x).rem_euclid(size) as u16;
        let new_y = (self.y as i32 + delta.y).rem_euclid(size) as u16;
        Pos { x: new_x, y: new_y }
    }

    pub fn stepped(&self, direction: Direction, grid_size: u16) -> Pos {
        self.wrapped_add(direction.into(), grid_size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
            Direction::Right => PosDelta { x: 1, y: 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(!dir.is_opposite(dir));
        }

        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Up));
    }

    #[test]
    fn test_zero_delta() {
        let delta = PosDelta { x: 0, y: 0 };

        for pos in [Pos::new(5, 5), Pos::new(0, 0), Pos::new(9, 9)] {
            assert_eq!(pos.wrapped_add(delta, 10), pos);
        }
    }

    #[test]
    fn test_full_board_deltas() {
        let pos = Pos::new(5, 5);

        // One full lap in either direction lands on the same cell
        assert_eq!(pos.wrapped_add(PosDelta { x: 10, y: 10 }, 10), pos);
        assert_eq!(pos.wrapped_add(PosDelta { x: -10, y: -10 }, 10), pos);
        assert_eq!(
            pos.wrapped_add(PosDelta { x: 25, y: -15 }, 10),
            Pos::new(0, 0)
        );
    }

    #[test]
    fn test_all_directions() {
        let pos = Pos::new(5, 5);

        assert_eq!(pos.stepped(Direction::Up, 10), Pos::new(5, 4));
        assert_eq!(pos.stepped(Direction::Down, 10), Pos::new(5, 6));
        assert_eq!(pos.stepped(Direction::Left, 10), Pos::new(4, 5));
        assert_eq!(pos.stepped(Direction::Right, 10), Pos::new(6, 5));
    }

    #[test]
    fn test_wrap_underflow() {
        assert_eq!(Pos::new(0, 0).stepped(Direction::Up, 10), Pos::new(0, 9));
        assert_eq!(Pos::new(0, 5).stepped(Direction::Left, 10), Pos::new(9, 5));
    }

    #[test]
    fn test_wrap_overflow() {
        assert_eq!(Pos::new(9, 9).stepped(Direction::Down, 10), Pos::new(9, 0));
        assert_eq!(Pos::new(9, 5).stepped(Direction::Right, 10), Pos::new(0, 5));
    }

    #[test]
    fn test_wrap_near_u16_limit() {
        let edge = u16::MAX - 1;
        let pos = Pos::new(edge, 0);
        assert_eq!(pos.stepped(Direction::Right, u16::MAX), Pos::new(0, 0));
        assert_eq!(pos.stepped(Direction::Up, u16::MAX), Pos::new(edge, edge));
    }
}
