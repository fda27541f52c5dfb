use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A placement cursor: a position plus a heading in degrees, counter-clockwise
/// with 0 along +X.
///
/// Cursors are plain `Copy` values. Saving and restoring goes through an
/// explicit [`CursorStack`], so two saved states can never alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub position: Point,
    pub heading: f64,
}

impl Cursor {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            heading: 0.0,
        }
    }

    #[must_use]
    pub fn with_heading(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Point::new(x, y),
            heading,
        }
    }

    /// The board-frame point at local offset `(dx, dy)`: `dx` along the
    /// heading, `dy` to the heading's left. The cursor itself is unchanged.
    #[must_use]
    pub fn local_point(&self, dx: f64, dy: f64) -> Point {
        let (s, c) = self.heading.to_radians().sin_cos();
        Point::new(
            self.position.x + dx * c - dy * s,
            self.position.y + dx * s + dy * c,
        )
    }

    /// Advance by a vector expressed in the cursor's local frame.
    pub fn move_to(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.position = self.local_point(dx, dy);
        self
    }

    /// Advance along the current heading.
    pub fn forward(&mut self, distance: f64) -> &mut Self {
        self.move_to(distance, 0.0)
    }

    pub fn turn_left(&mut self, degrees: f64) -> &mut Self {
        self.heading += degrees;
        self
    }

    pub fn turn_right(&mut self, degrees: f64) -> &mut Self {
        self.heading -= degrees;
        self
    }
}

/// Caller-owned stack of saved cursor states.
///
/// Placement routines bracket each sibling branch with a push/pop pair so the
/// branches never observe each other's displacement.
#[derive(Debug, Clone, Default)]
pub struct CursorStack {
    saved: Vec<Cursor>,
}

impl CursorStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cursor: Cursor) {
        self.saved.push(cursor);
    }

    /// Restore the most recent unpopped save.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty; an unbalanced push/pop pair is a bug in
    /// the placement routine.
    pub fn pop(&mut self) -> Cursor {
        match self.saved.pop() {
            Some(cursor) => cursor,
            None => panic!("cursor stack underflow: pop without a matching push"),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}
