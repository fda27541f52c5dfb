//! No-lead SMD part with two mirrored rows of wrap-around pads.

use fanout_board::Board;
use fanout_core::stroke::stroke;
use fanout_core::{Cursor, CursorStack, Layer, NetRole, Pad, PadSet, PlineVertex, Polyline};
use fanout_route::{Bend, Escape, MismatchPolicy, River};

use crate::train::train;
use crate::{Part, PartError};

/// Flat no-lead package: rectangular pads along two opposite edges, drawn
/// with a chamfered silkscreen body whose cut corner marks pin 1.
#[derive(Debug, Clone)]
pub struct FlatNoLead {
    pub pads_per_row: usize,
    pub pitch: f64,
    pub row_span: f64,
    pub pad_width: f64,
    /// Pad extent away from the body edge.
    pub pad_length: f64,
    /// Silkscreen loops as [width across the rows, length along them].
    pub courtyard: [f64; 2],
    pub body: [f64; 2],
    pub chamfer: f64,
    /// Short clearance for the row already facing the exit.
    pub hop: f64,
    pub clearance: f64,
    pub copper: Layer,
    pub family: char,
    pub policy: MismatchPolicy,
}

impl Default for FlatNoLead {
    fn default() -> Self {
        Self {
            pads_per_row: 4,
            pitch: 1.27,
            row_span: 6.75,
            pad_width: 0.5,
            pad_length: 2.0,
            courtyard: [8.0, 6.0],
            body: [6.0, 5.0],
            chamfer: 0.4,
            hop: 0.2,
            clearance: 1.0,
            copper: Layer::TopCopper,
            family: 'U',
            policy: MismatchPolicy::default(),
        }
    }
}

/// Closed body outline with the corner nearest pin 1 cut off.
fn chamfered_loop(anchor: Cursor, across: f64, along: f64, chamfer: f64) -> Polyline<f64> {
    let a = along / 2.0;
    let c = across / 2.0;
    let corners = [
        (a, -c),
        (a, c - chamfer),
        (a - chamfer, c),
        (-a, c),
        (-a, -c),
    ];
    let mut outline = Polyline::new_closed();
    for (dx, dy) in corners {
        let p = anchor.local_point(dx, dy);
        outline.vertex_data.push(PlineVertex::new(p.x, p.y, 0.0));
    }
    outline
}

impl Part for FlatNoLead {
    fn family(&self) -> char {
        self.family
    }

    fn place(&self, anchor: Cursor, board: &mut Board) -> Result<PadSet, PartError> {
        let owner = board.allocate(self.family);
        let mut pads = PadSet::new(owner);

        let silk = board.config().silk;
        for outline in [
            chamfered_loop(anchor, self.courtyard[0], self.courtyard[1], self.chamfer),
            chamfered_loop(anchor, self.body[0], self.body[1], self.chamfer),
        ] {
            for shape in stroke(&outline, silk) {
                board.register_shape(Layer::TopSilk, shape);
            }
        }
        board.register_annotation(
            anchor.local_point(0.0, self.courtyard[0] / 2.0 + 0.5),
            owner.to_string(),
        );

        let half_len = (self.pads_per_row - 1) as f64 * self.pitch / 2.0;
        let mut stack = CursorStack::new();
        let mut cursor = anchor;
        for _ in 0..2 {
            stack.push(cursor);
            cursor.move_to(half_len, self.row_span / 2.0);
            cursor.turn_left(180.0);
            train(cursor, self.pads_per_row, self.pitch, |mut site| {
                // Pads wrap the body edge, so each one faces outward.
                site.turn_right(90.0);
                let pad = Pad {
                    cursor: site,
                    outline: site.stamp_rectangle(self.pad_length, self.pad_width),
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
        let (near, far) = contacts.split_at(contacts.len() / 2);

        // The far row faces the wrong way; cross back over the body first.
        let mut fanned = Vec::with_capacity(far.len());
        for &pad in far {
            let mut escape = Escape::new(pad);
            escape.stub.flip();
            escape
                .stub
                .fan(Bend::Right, Bend::Left, self.pitch, self.clearance);
            fanned.push(escape);
        }
        let mut hopped = Vec::with_capacity(near.len());
        for &pad in near {
            let mut escape = Escape::new(pad);
            escape.stub.hop(None, self.hop);
            hopped.push(escape);
        }

        let mut river = River::interleave(fanned, hopped, self.policy)?;
        river.align_ends();
        river.commit(board);
        Ok(river)
    }
}
