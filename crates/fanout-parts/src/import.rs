//! Turns package drawing primitives into board artifacts.
//!
//! Primitives are walked in file order through the anchor cursor's frame.
//! Pads, holes and annotations are registered as they are met; outline and
//! silkscreen wires are collected first and merged into connected polylines
//! once the whole package has been seen.

use fanout_board::Board;
use fanout_core::merge::{merge_segments, MERGE_TOLERANCE};
use fanout_core::stroke::stroke;
use fanout_core::{Cursor, Layer, NetRole, Pad, PadSet, Point, Polyline};
use fanout_library::{Package, PackageLayer, Primitive};
use tracing::debug;

use crate::PartError;

/// Import switches; both default on.
#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// Draw the package's silkscreen wires.
    pub silk_outline: bool,
    /// Annotate through pads with their pad name.
    pub pad_labels: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            silk_outline: true,
            pad_labels: true,
        }
    }
}

/// Import every primitive of `package` at `anchor`, registering geometry on
/// the board and returning the pads owned by `owner`.
pub fn import_package(
    package: &Package,
    anchor: Cursor,
    owner: fanout_core::Designator,
    options: ImportOptions,
    board: &mut Board,
) -> Result<PadSet, PartError> {
    let mut pads = PadSet::new(owner);
    let mut outline: Vec<(Point, Point)> = Vec::new();
    let mut silk: Vec<(Point, Point)> = Vec::new();

    for primitive in &package.primitives {
        match primitive {
            Primitive::Wire { layer, from, to } => {
                if from.distance(*to) < 1e-9 {
                    debug!(?layer, "skipping zero length wire");
                    continue;
                }
                let segment = (
                    anchor.local_point(from.x, from.y),
                    anchor.local_point(to.x, to.y),
                );
                match layer {
                    PackageLayer::Outline => outline.push(segment),
                    PackageLayer::Silk => silk.push(segment),
                    other => debug!(layer = ?other, "skipping wire on unhandled layer"),
                }
            }
            Primitive::Hole { at, drill } => {
                board.register_hole(anchor.local_point(at.x, at.y), *drill);
            }
            Primitive::Circle { at, radius, layer } => match layer {
                // A filled documentation circle stands for a round hole.
                PackageLayer::Docu => {
                    board.register_hole(anchor.local_point(at.x, at.y), 2.0 * radius);
                }
                other => debug!(layer = ?other, "skipping circle on unhandled layer"),
            },
            Primitive::Smd {
                at,
                width,
                height,
                name,
            } => {
                let mut cursor = anchor;
                cursor.move_to(at.x, at.y);
                let pad = contact(cursor, cursor.stamp_rectangle(*width, *height), name, &pads);
                board.register_contact(&pad);
                pads.append(pad)?;
            }
            Primitive::ThroughPad {
                at,
                diameter,
                drill,
                shape,
                name,
            } => {
                let mut cursor = anchor;
                cursor.move_to(at.x, at.y);
                board.register_hole(cursor.position, *drill);
                let pad = contact(
                    cursor,
                    cursor.stamp_polygon(diameter / 2.0, shape.sides()),
                    name,
                    &pads,
                );
                board.register_contact(&pad);
                if options.pad_labels && pad.role == NetRole::Contact {
                    board.register_annotation(cursor.position, pad.name.as_str());
                }
                pads.append(pad)?;
            }
        }
    }

    for chain in merge_segments(&outline, MERGE_TOLERANCE) {
        board.register_shape(Layer::Outline, chain);
    }
    if options.silk_outline {
        for chain in merge_segments(&silk, MERGE_TOLERANCE) {
            for shape in stroke(&chain, board.config().silk) {
                board.register_shape(Layer::TopSilk, shape);
            }
        }
    }

    Ok(pads)
}

fn contact(cursor: Cursor, outline: Polyline<f64>, name: &str, pads: &PadSet) -> Pad {
    Pad {
        cursor,
        outline,
        name: name.to_string(),
        owner: pads.owner(),
        role: NetRole::from_name(name),
        layer: Layer::TopCopper,
    }
}
