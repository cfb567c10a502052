use serde::{Deserialize, Serialize};

use crate::types::{Direction, Pos};

#[derive(Clone, Debug, PartialEq)]
pub struct MoveResult {
    pub ate_food: bool,
    pub has_collision: bool,
    pub updated_snake: Snake,
}

// Head first, never empty
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pos>", into = "Vec<Pos>")]
pub struct Snake {
    segments: Vec<Pos>,
}

impl Snake {
    pub fn new(segments: Vec<Pos>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Snake { segments })
        }
    }

    pub fn at(head: Pos) -> Self {
        Snake {
            segments: vec![head],
        }
    }

    pub fn head(&self) -> Pos {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Pos] {
        &self.segments
    }

    // Never zero, so there is no is_empty
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn has_collision(&self) -> bool {
        let head = self.head();
        self.segments[1..].contains(&head)
    }

    pub fn has_segment(&self, pos: Pos) -> bool {
        self.segments.contains(&pos)
    }

    pub fn eats_food(&self, food: Pos) -> bool {
        self.has_segment(food)
    }

    pub fn move_in_direction(&self, direction: Direction, food: Pos, grid_size: u16) -> MoveResult {
        let new_head = self.head().stepped(direction, grid_size);

        // Checked against the old body, tail included, before it shifts
        let has_collision = self.has_segment(new_head);
        let ate_food = new_head == food;

        let kept = if ate_food {
            &self.segments[..]
        } else {
            &self.segments[..self.segments.len() - 1]
        };

        let mut segments = Vec::with_capacity(kept.len() + 1);
        segments.push(new_head);
        segments.extend_from_slice(kept);

        MoveResult {
            ate_food,
            has_collision,
            updated_snake: Snake { segments },
        }
    }
}

impl TryFrom<Vec<Pos>> for Snake {
    type Error = &'static str;

    fn try_from(segments: Vec<Pos>) -> Result<Self, Self::Error> {
        Snake::new(segments).ok_or("snake needs at least one segment")
    }
}

impl From<Snake> for Vec<Pos> {
    fn from(snake: Snake) -> Self {
        snake.segments
    }
}
