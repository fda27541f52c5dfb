//! Incremental trace stubs walked out from a pad.

use std::f64::consts::SQRT_2;

use fanout_core::{Cursor, Point};

/// Which way to turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bend {
    Left,
    Right,
}

impl Bend {
    fn apply(self, cursor: &mut Cursor, degrees: f64) {
        match self {
            Bend::Left => cursor.turn_left(degrees),
            Bend::Right => cursor.turn_right(degrees),
        };
    }
}

/// A partial escape path: the waypoints laid so far plus the heading to
/// continue along.
#[derive(Debug, Clone)]
pub struct TraceStub {
    waypoints: Vec<Point>,
    cursor: Cursor,
}

impl TraceStub {
    /// Begin a stub at a cursor; its position is the first waypoint.
    #[must_use]
    pub fn start(cursor: Cursor) -> Self {
        Self {
            waypoints: vec![cursor.position],
            cursor,
        }
    }

    /// Advance along the heading, laying a waypoint at the new position.
    pub fn forward(&mut self, distance: f64) -> &mut Self {
        self.cursor.forward(distance);
        self.waypoints.push(self.cursor.position);
        self
    }

    pub fn bend(&mut self, bend: Bend, degrees: f64) -> &mut Self {
        bend.apply(&mut self.cursor, degrees);
        self
    }

    /// Turn back on the exit direction, to cross over the part body.
    pub fn flip(&mut self) -> &mut Self {
        self.cursor.turn_left(180.0);
        self
    }

    /// Diagonal fan out of a dense row: 45 degrees over, a diagonal of
    /// `pitch / sqrt(2)`, 45 degrees back, then a straight run clear of the
    /// body. The diagonal length lands the stub exactly half a pitch over
    /// from where it started, threading between the neighboring row's pads.
    pub fn fan(&mut self, first: Bend, second: Bend, pitch: f64, clearance: f64) -> &mut Self {
        self.bend(first, 45.0);
        self.forward(pitch / SQRT_2);
        self.bend(second, 45.0);
        self.forward(clearance)
    }

    /// Short exit for a row already facing its escape line: an optional
    /// square turn, then straight out.
    pub fn hop(&mut self, bend: Option<Bend>, clearance: f64) -> &mut Self {
        if let Some(bend) = bend {
            self.bend(bend, 90.0);
        }
        self.forward(clearance)
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Where the stub currently ends.
    #[must_use]
    pub fn end(&self) -> Point {
        self.cursor.position
    }

    #[must_use]
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_lays_waypoints() {
        let mut stub = TraceStub::start(Cursor::with_heading(1.0, 1.0, 0.0));
        stub.forward(2.0).bend(Bend::Left, 90.0).forward(3.0);
        assert_eq!(stub.waypoints().len(), 3);
        assert_relative_eq!(stub.end().x, 3.0);
        assert_relative_eq!(stub.end().y, 4.0);
    }

    #[test]
    fn fan_shifts_half_a_pitch_sideways() {
        // A pad facing along 180 fans down onto a line half a pitch over.
        let mut stub = TraceStub::start(Cursor::with_heading(0.0, 0.0, 180.0));
        stub.fan(Bend::Left, Bend::Left, 2.54, 1.0);

        assert_relative_eq!(stub.end().x, -1.27, epsilon = 1e-9);
        assert_relative_eq!(stub.end().y, -2.27, epsilon = 1e-9);
        assert_relative_eq!(stub.cursor().heading.rem_euclid(360.0), 270.0);
        assert_eq!(stub.waypoints().len(), 3);

        // The diagonal waypoint sits at the half-pitch crossover.
        assert_relative_eq!(stub.waypoints()[1].x, -1.27, epsilon = 1e-9);
        assert_relative_eq!(stub.waypoints()[1].y, -1.27, epsilon = 1e-9);
    }

    #[test]
    fn hop_turns_square_and_exits() {
        let mut stub = TraceStub::start(Cursor::with_heading(0.0, 0.0, 0.0));
        stub.hop(Some(Bend::Right), 1.0);
        assert_relative_eq!(stub.end().x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(stub.end().y, -1.0, epsilon = 1e-9);
        assert_eq!(stub.waypoints().len(), 2);
    }

    #[test]
    fn hop_without_a_bend_goes_straight() {
        let mut stub = TraceStub::start(Cursor::with_heading(0.0, 1.0, 90.0));
        stub.hop(None, 0.2);
        assert_relative_eq!(stub.end().y, 1.2, epsilon = 1e-9);
    }

    #[test]
    fn flip_then_fan_crosses_the_body() {
        // A pad facing away at 270 flips and fans out the opposite side.
        let mut stub = TraceStub::start(Cursor::with_heading(0.0, -1.0, 270.0));
        stub.flip().fan(Bend::Right, Bend::Left, 1.27, 1.0);

        assert_relative_eq!(stub.end().x, 0.635, epsilon = 1e-9);
        assert_relative_eq!(stub.end().y, 0.635, epsilon = 1e-9);
        assert_relative_eq!(stub.cursor().heading.rem_euclid(360.0), 90.0);
    }
}
