//! Through-hole part with two mirrored pad rows.

use fanout_board::Board;
use fanout_core::{Cursor, CursorStack, Layer, NetRole, Pad, PadSet};
use fanout_route::{Bend, Escape, MismatchPolicy, River};

use crate::train::train;
use crate::{Part, PartError};

/// Dual in-line package: two drilled pad rows facing each other across the
/// body, counted pin 1 first along the top row and back along the bottom.
#[derive(Debug, Clone)]
pub struct DualInline {
    pub pads_per_row: usize,
    pub pitch: f64,
    pub row_span: f64,
    pub drill: f64,
    pub pad_radius: f64,
    /// Clearance past the body edge before the river starts.
    pub clearance: f64,
    pub copper: Layer,
    pub family: char,
    pub policy: MismatchPolicy,
}

impl Default for DualInline {
    fn default() -> Self {
        Self {
            pads_per_row: 4,
            pitch: fanout_core::units::inches(0.1),
            row_span: fanout_core::units::inches(0.3),
            drill: 0.8,
            pad_radius: 0.8,
            clearance: 1.0,
            copper: Layer::TopCopper,
            family: 'U',
            policy: MismatchPolicy::default(),
        }
    }
}

impl Part for DualInline {
    fn family(&self) -> char {
        self.family
    }

    fn place(&self, anchor: Cursor, board: &mut Board) -> Result<PadSet, PartError> {
        let owner = board.allocate(self.family);
        let mut pads = PadSet::new(owner);
        let half_len = (self.pads_per_row - 1) as f64 * self.pitch / 2.0;

        let mut stack = CursorStack::new();
        let mut cursor = anchor;
        for _ in 0..2 {
            stack.push(cursor);
            cursor.move_to(half_len, self.row_span / 2.0);
            cursor.turn_left(180.0);
            train(cursor, self.pads_per_row, self.pitch, |site| {
                board.register_hole(site.position, self.drill);
                let pad = Pad {
                    cursor: site,
                    outline: site.stamp_polygon(self.pad_radius, 60),
                    name: (pads.len() + 1).to_string(),
                    owner,
                    role: NetRole::Contact,
                    layer: self.copper,
                };
                board.register_contact(&pad);
                pads.append(pad)?;
                Ok(())
            })?;
            // Mirror the second row by flipping the parent cursor.
            cursor = stack.pop();
            cursor.turn_right(180.0);
        }
        Ok(pads)
    }

    fn escape(&self, pads: &PadSet, board: &mut Board) -> Result<River, PartError> {
        let contacts: Vec<&Pad> = pads.contacts().collect();
        let (far, near) = contacts.split_at(contacts.len() / 2);

        // The far row dives diagonally under the body; the near row only has
        // to clear its own pads.
        let mut fanned = Vec::with_capacity(far.len());
        for &pad in far {
            let mut escape = Escape::new(pad);
            escape
                .stub
                .fan(Bend::Left, Bend::Left, self.pitch, self.clearance);
            fanned.push(escape);
        }
        let mut hopped = Vec::with_capacity(near.len());
        for &pad in near {
            let mut escape = Escape::new(pad);
            escape.stub.hop(Some(Bend::Right), self.clearance);
            hopped.push(escape);
        }

        let mut river = River::interleave(hopped, fanned, self.policy)?;
        river.align_ends();
        river.commit(board);
        Ok(river)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fanout_core::PlineSource;

    #[test]
    fn rows_mirror_about_the_anchor() {
        let part = DualInline::default();
        let mut board = Board::default();
        let pads = part.place(Cursor::new(0.0, 0.0), &mut board).unwrap();

        assert_eq!(pads.owner().to_string(), "U1");
        let names: Vec<&str> = pads.pads().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["1", "2", "3", "4", "5", "6", "7", "8"]);

        let one = pads.get("1").unwrap();
        assert_relative_eq!(one.cursor.position.x, 3.81, epsilon = 1e-9);
        assert_relative_eq!(one.cursor.position.y, 3.81, epsilon = 1e-9);
        assert_relative_eq!(one.cursor.heading, 180.0);
        assert_eq!(one.outline.vertex_count(), 60);

        let five = pads.get("5").unwrap();
        assert_relative_eq!(five.cursor.position.x, -3.81, epsilon = 1e-9);
        assert_relative_eq!(five.cursor.position.y, -3.81, epsilon = 1e-9);
        assert_relative_eq!(five.cursor.heading, 0.0);

        let eight = pads.get("8").unwrap();
        assert_relative_eq!(eight.cursor.position.x, 3.81, epsilon = 1e-9);
        assert_relative_eq!(eight.cursor.position.y, -3.81, epsilon = 1e-9);

        assert_eq!(board.drills().len(), 8);
        assert_relative_eq!(board.drills()[0].diameter, 0.8);
        assert_eq!(board.contacts().len(), 8);
    }

    #[test]
    fn escape_weaves_the_near_row_between_the_far_row() {
        let part = DualInline::default();
        let mut board = Board::default();
        let pads = part.place(Cursor::new(0.0, 0.0), &mut board).unwrap();
        let river = part.escape(&pads, &mut board).unwrap();

        let names: Vec<&str> = river.iter().map(|e| e.pad.name.as_str()).collect();
        assert_eq!(names, ["5", "1", "6", "2", "7", "3", "8", "4"]);

        // Everything leaves south on one line below the near row.
        for escape in river.iter() {
            assert_relative_eq!(escape.stub.cursor().heading.rem_euclid(360.0), 270.0);
            assert_relative_eq!(escape.stub.end().y, -4.81, epsilon = 1e-9);
        }

        assert_eq!(board.tracks().len(), 8);
        for track in board.tracks() {
            assert_eq!(track.layer, Layer::TopCopper);
            assert_relative_eq!(track.width, board.config().trace);
        }
    }

    #[test]
    fn anchor_rotation_swings_the_river_east() {
        let part = DualInline::default();
        let mut board = Board::default();
        let anchor = Cursor::with_heading(6.0, 6.0, 90.0);
        let pads = part.place(anchor, &mut board).unwrap();

        let one = pads.get("1").unwrap();
        assert_relative_eq!(one.cursor.position.x, 6.0 - 3.81, epsilon = 1e-9);
        assert_relative_eq!(one.cursor.position.y, 6.0 + 3.81, epsilon = 1e-9);
        assert_relative_eq!(one.cursor.heading, 270.0);

        let river = part.escape(&pads, &mut board).unwrap();
        for escape in river.iter() {
            assert_relative_eq!(escape.stub.cursor().heading.rem_euclid(360.0), 0.0);
            assert_relative_eq!(escape.stub.end().x, 6.0 + 4.81, epsilon = 1e-9);
        }
    }

    #[test]
    fn copper_layer_is_configurable() {
        let part = DualInline {
            copper: Layer::BottomCopper,
            ..DualInline::default()
        };
        let mut board = Board::default();
        let pads = part.place(Cursor::new(0.0, 0.0), &mut board).unwrap();
        part.escape(&pads, &mut board).unwrap();

        assert_eq!(pads.get("1").unwrap().layer, Layer::BottomCopper);
        assert!(board
            .tracks()
            .iter()
            .all(|t| t.layer == Layer::BottomCopper));
        assert_eq!(board.shapes(Layer::BottomCopper).len(), 8);
    }
}
