use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical tile coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the adjacent position one tile in `direction`.
    #[must_use]
    pub fn shifted(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Mutable snake state: the head, its trailing segments, and the growth
/// bulge marker.
///
/// `body` holds only the segments behind the head, ordered head-to-tail
/// (front = just behind the head). `bulge` indexes into `body` while a
/// growth bulge is travelling toward the tail.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Position,
    body: VecDeque<Position>,
    bulge: Option<usize>,
    direction: Direction,
}

impl Snake {
    /// Creates a head-only snake at `head` with the provided heading.
    #[must_use]
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            head,
            body: VecDeque::new(),
            bulge: None,
            direction,
        }
    }

    /// Creates a snake from an explicit head and trailing segments.
    #[must_use]
    pub fn from_parts(head: Position, segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            head,
            body: VecDeque::from(segments),
            bulge: None,
            direction,
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    /// Returns the most recently accepted heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the bulge's index into the trailing segments, when present.
    #[must_use]
    pub fn bulge_index(&self) -> Option<usize> {
        self.bulge
    }

    /// Returns the number of trailing segments (the head is not counted).
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Iterates over trailing segments from head side to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Returns true if any trailing segment occupies `position`.
    #[must_use]
    pub fn body_contains(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head or any trailing segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.head == position || self.body_contains(position)
    }

    /// Resolves a requested heading against the current one.
    ///
    /// An exact 180° reversal is silently replaced by the current heading,
    /// so the snake continues straight instead of folding into itself.
    #[must_use]
    pub fn resolve_direction(&self, requested: Direction) -> Direction {
        if requested == self.direction.opposite() {
            self.direction
        } else {
            requested
        }
    }

    /// Returns the head position one tile ahead in `direction`.
    #[must_use]
    pub fn next_head(&self, direction: Direction) -> Position {
        self.head.shifted(direction)
    }

    /// Commits one movement step: the previous head becomes the first
    /// trailing segment and an in-flight bulge travels two segments tailward.
    ///
    /// The tail is left in place; callers decide between growing and plain
    /// movement via [`Snake::retract_tail`].
    pub fn advance(&mut self, direction: Direction) {
        let next_head = self.head.shifted(direction);
        self.direction = direction;
        self.body.push_front(self.head);
        self.head = next_head;

        if let Some(bulge) = self.bulge.as_mut() {
            *bulge += 2;
        }
    }

    /// Restarts the growth bulge at the head end of the body.
    pub fn begin_bulge(&mut self) {
        self.bulge = Some(0);
    }

    /// Drops the tail segment (the moving-without-growing case).
    pub fn retract_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Ends the bulge animation once it has travelled past the tail.
    pub fn expire_bulge(&mut self) {
        if self.bulge.is_some_and(|index| index >= self.body.len()) {
            self.bulge = None;
        }
    }
}
